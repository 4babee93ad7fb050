//! Student - row of the student table

use serde::{Deserialize, Serialize};

/// A student, persisted as one `id,name,major` row.
///
/// The id is fixed at creation; only name and major change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    id: String,
    name: String,
    major: String,
}

impl Student {
    /// Create a new student record.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier (e.g., "E001")
    /// * `name` - Full name
    /// * `major` - Program of study
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, major: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            major: major.into(),
        }
    }

    /// Get the student ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the student name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the student major.
    #[must_use]
    pub fn major(&self) -> &str {
        &self.major
    }

    pub(crate) fn rename(&mut self, name: impl Into<String>, major: impl Into<String>) {
        self.name = name.into();
        self.major = major.into();
    }
}

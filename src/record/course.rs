//! Course - row of the course table

use serde::{Deserialize, Deserializer, Serialize};

/// A course, persisted as one `id,name,credits` row.
///
/// Credits are stored as decimal text and must parse back as a
/// non-negative integer; see [`crate::storage::load_table`]. Padding around
/// the number is ignored, unlike the text fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    id: String,
    name: String,
    #[serde(deserialize_with = "credits_from_text")]
    credits: u32,
}

fn credits_from_text<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    text.trim().parse().map_err(serde::de::Error::custom)
}

impl Course {
    /// Create a new course record.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier (e.g., "C101")
    /// * `name` - Course title
    /// * `credits` - Credit value counted towards a period's load
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, credits: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            credits,
        }
    }

    /// Get the course ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the course name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the credit value.
    #[must_use]
    pub const fn credits(&self) -> u32 {
        self.credits
    }

    pub(crate) fn revise(&mut self, name: impl Into<String>, credits: u32) {
        self.name = name.into();
        self.credits = credits;
    }
}

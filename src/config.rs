//! Backing-file configuration.
//!
//! Every store is constructed from an explicit [`StoreConfig`]; there are no
//! process-wide paths. Tests point a config at a temporary directory.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Environment variable consulted by [`StoreConfig::from_env`].
pub const DATA_DIR_ENV: &str = "REGISTRAR_DATA_DIR";

/// Data directory used when [`DATA_DIR_ENV`] is unset.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default student table file name.
pub const DEFAULT_STUDENTS_FILE: &str = "students.csv";

/// Default course table file name.
pub const DEFAULT_COURSES_FILE: &str = "courses.csv";

/// Default enrollment document file name.
pub const DEFAULT_ENROLLMENTS_FILE: &str = "enrollments.json";

/// Locations of the three backing files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    data_dir: PathBuf,
    students_file: String,
    courses_file: String,
    enrollments_file: String,
}

impl StoreConfig {
    /// Create a config rooted at `data_dir` with the default file names.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            students_file: DEFAULT_STUDENTS_FILE.to_string(),
            courses_file: DEFAULT_COURSES_FILE.to_string(),
            enrollments_file: DEFAULT_ENROLLMENTS_FILE.to_string(),
        }
    }

    /// Create a config from `REGISTRAR_DATA_DIR`, falling back to `./data`.
    #[must_use]
    pub fn from_env() -> Self {
        let dir = std::env::var_os(DATA_DIR_ENV)
            .filter(|value| !value.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        Self::new(dir)
    }

    /// Override the student table file name.
    #[must_use]
    pub fn students_file(mut self, name: impl Into<String>) -> Self {
        self.students_file = name.into();
        self
    }

    /// Override the course table file name.
    #[must_use]
    pub fn courses_file(mut self, name: impl Into<String>) -> Self {
        self.courses_file = name.into();
        self
    }

    /// Override the enrollment document file name.
    #[must_use]
    pub fn enrollments_file(mut self, name: impl Into<String>) -> Self {
        self.enrollments_file = name.into();
        self
    }

    /// Directory holding the backing files.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of the student table.
    #[must_use]
    pub fn students_path(&self) -> PathBuf {
        self.data_dir.join(&self.students_file)
    }

    /// Full path of the course table.
    #[must_use]
    pub fn courses_path(&self) -> PathBuf {
        self.data_dir.join(&self.courses_file)
    }

    /// Full path of the enrollment document.
    #[must_use]
    pub fn enrollments_path(&self) -> PathBuf {
        self.data_dir.join(&self.enrollments_file)
    }

    /// Check that every record set has its own, non-empty file name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if a file name is empty or two
    /// record sets would share one file.
    pub fn validate(&self) -> Result<()> {
        let names = [
            ("students", &self.students_file),
            ("courses", &self.courses_file),
            ("enrollments", &self.enrollments_file),
        ];

        for (label, name) in &names {
            if name.trim().is_empty() {
                return Err(Error::InvalidInput(format!("{label} file name is empty")));
            }
        }

        for (i, (left_label, left)) in names.iter().enumerate() {
            for (right_label, right) in &names[i + 1..] {
                if left == right {
                    return Err(Error::InvalidInput(format!(
                        "{left_label} and {right_label} share the file '{left}'"
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

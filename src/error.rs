//! Error types for Registrar-DB
//!
//! Toyota Way: Clear error messages with actionable guidance (Respect for People)

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// The record set an error (or warning) refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Student record (`students.csv`)
    Student,
    /// Course record (`courses.csv`)
    Course,
    /// Enrollment record (`enrollments.json`)
    Enrollment,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Student => "student",
            Self::Course => "course",
            Self::Enrollment => "enrollment",
        };
        f.write_str(name)
    }
}

/// Registrar-DB error types
#[derive(Error, Debug)]
pub enum Error {
    /// A record with the same id already exists (no state change)
    #[error("Duplicate id: {kind} '{id}' already exists")]
    DuplicateId {
        /// Record set that rejected the id
        kind: RecordKind,
        /// Offending id
        id: String,
    },

    /// The referenced id is absent from its record set (no state change)
    #[error("Not found: {kind} '{id}' does not exist")]
    NotFound {
        /// Record set that was searched
        kind: RecordKind,
        /// Missing id
        id: String,
    },

    /// Delete blocked by a live reference from an enrollment (no state change)
    #[error(
        "Referential integrity violation: cannot delete {kind} '{id}', referenced by enrollment(s) {}",
        .referenced_by.join(", ")
    )]
    ReferentialIntegrityViolation {
        /// Record set of the record that could not be deleted
        kind: RecordKind,
        /// Id of the record that could not be deleted
        id: String,
        /// Ids of the enrollments holding the reference
        referenced_by: Vec<String>,
    },

    /// Writing a backing file failed.
    ///
    /// The in-memory collection may now diverge from what is on disk.
    #[error("Persistence failure writing {}: {source}", .path.display())]
    PersistenceFailure {
        /// Backing file that could not be written
        path: PathBuf,
        /// Underlying I/O error (CSV/JSON encoder errors are converted)
        #[source]
        source: std::io::Error,
    },

    /// A write depends on a backing file that could not be read in full.
    ///
    /// Raised instead of overwriting the file or trusting a partial view of
    /// it (no state change).
    #[error("Damaged data in {}: {reason}", .path.display())]
    DamagedData {
        /// Backing file that failed to load cleanly
        path: PathBuf,
        /// The load warning that marked it damaged
        reason: String,
    },

    /// Invalid configuration or argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    pub(crate) fn not_found(kind: RecordKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub(crate) fn duplicate(kind: RecordKind, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            kind,
            id: id.into(),
        }
    }

    pub(crate) fn persistence(path: impl Into<PathBuf>, source: impl Into<std::io::Error>) -> Self {
        Self::PersistenceFailure {
            path: path.into(),
            source: source.into(),
        }
    }
}

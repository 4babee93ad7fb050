//! # Registrar-DB: Flat-File Student Records
//!
//! **Version**: 0.1.0
//!
//! Registrar-DB keeps three record sets (students, courses, enrollments) in
//! plain files and enforces referential integrity between them:
//!
//! - `students.csv`: `id,name,major`
//! - `courses.csv`: `id,name,credits`
//! - `enrollments.json`: array of `{id, student_id, period, course_ids}`
//!
//! ## Design Principles (Toyota Way Aligned)
//!
//! - **Genchi Genbutsu**: The file is the only source of truth; every
//!   operation reloads it, there is no cache to go stale
//! - **Poka-Yoke**: Validation runs before any write, so a rejected
//!   operation never leaves a partial record behind
//! - **Jidoka**: Deletes stop at the first live reference instead of
//!   orphaning enrollments
//!
//! ## Example Usage
//!
//! ```rust
//! use registrar_db::Registrar;
//!
//! # fn main() -> registrar_db::Result<()> {
//! # let dir = std::env::temp_dir().join(format!("registrar-lib-doc-{}", std::process::id()));
//! let registrar = Registrar::builder().data_dir(&dir).build()?;
//!
//! registrar.students().create("E100", "Test Student", "Test Major")?;
//! registrar.courses().create("C100", "Test Course", 3)?;
//! registrar.enrollments().create("E100", ["C100"], "2025-T1")?;
//!
//! assert_eq!(registrar.integrity().credits_for_student("E100", "2025-T1"), 3);
//! assert!(registrar.courses().delete("C100").is_err());
//! # std::fs::remove_dir_all(&dir).ok();
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod error;
pub mod integrity;
pub mod record;
pub mod storage;
pub mod store;

use std::path::PathBuf;

pub use config::StoreConfig;
pub use error::{Error, RecordKind, Result};
pub use integrity::{CourseRoster, Integrity, PeriodSummary};
pub use storage::{LoadWarning, Loaded};
pub use store::{CourseStore, EnrollmentStore, StudentStore};

/// Registrar instance: the three stores and the integrity layer over one
/// [`StoreConfig`].
#[derive(Debug, Clone)]
pub struct Registrar {
    config: StoreConfig,
    students: StudentStore,
    courses: CourseStore,
    enrollments: EnrollmentStore,
    integrity: Integrity,
}

impl Registrar {
    /// Create a new registrar builder
    #[must_use]
    pub fn builder() -> RegistrarBuilder {
        RegistrarBuilder::default()
    }

    /// Open a registrar over `config`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the config fails
    /// [`StoreConfig::validate`]
    pub fn open(config: StoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            students: StudentStore::new(&config),
            courses: CourseStore::new(&config),
            enrollments: EnrollmentStore::new(&config),
            integrity: Integrity::new(&config),
            config,
        })
    }

    /// Backing-file configuration
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Student store
    #[must_use]
    pub const fn students(&self) -> &StudentStore {
        &self.students
    }

    /// Course store
    #[must_use]
    pub const fn courses(&self) -> &CourseStore {
        &self.courses
    }

    /// Enrollment store
    #[must_use]
    pub const fn enrollments(&self) -> &EnrollmentStore {
        &self.enrollments
    }

    /// Integrity & reporting queries
    #[must_use]
    pub const fn integrity(&self) -> &Integrity {
        &self.integrity
    }
}

/// Registrar builder
#[derive(Debug, Default)]
pub struct RegistrarBuilder {
    config: Option<StoreConfig>,
    data_dir: Option<PathBuf>,
}

impl RegistrarBuilder {
    /// Use a complete backing-file configuration
    #[must_use]
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Root the default file names at `data_dir` (ignored if
    /// [`Self::config`] is set)
    #[must_use]
    pub fn data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    /// Build the registrar
    ///
    /// Without a config or data directory the location comes from
    /// [`StoreConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the resulting config is invalid
    pub fn build(self) -> Result<Registrar> {
        let config = match (self.config, self.data_dir) {
            (Some(config), _) => config,
            (None, Some(dir)) => StoreConfig::new(dir),
            (None, None) => StoreConfig::from_env(),
        };
        Registrar::open(config)
    }
}

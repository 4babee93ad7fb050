//! Record stores - one per backing file
//!
//! Each store holds only the location of its file. Every call loads the
//! full collection, applies the change and writes it back.
//!
//! # Example
//!
//! ```rust
//! use registrar_db::config::StoreConfig;
//! use registrar_db::store::{CourseStore, EnrollmentStore, StudentStore};
//!
//! # fn main() -> registrar_db::Result<()> {
//! let dir = std::env::temp_dir().join(format!("registrar-doc-{}", std::process::id()));
//! let config = StoreConfig::new(&dir);
//!
//! StudentStore::new(&config).create("E001", "Ada", "Mathematics")?;
//! CourseStore::new(&config).create("C101", "Engines", 4)?;
//! let enrollment = EnrollmentStore::new(&config).create("E001", ["C101"], "2025-T1")?;
//!
//! assert_eq!(enrollment.id(), "M001");
//! # std::fs::remove_dir_all(&dir).ok();
//! # Ok(())
//! # }
//! ```

mod course;
mod enrollment;
mod student;

pub use course::{CourseStore, COURSE_HEADERS};
pub use enrollment::EnrollmentStore;
pub use student::{StudentStore, STUDENT_HEADERS};

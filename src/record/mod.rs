//! Record Schema
//!
//! The three record types persisted by the stores.
//!
//! ## Schema Overview
//!
//! ```text
//! Student (1) ──< Enrollment (N) >── (N) Course
//!                  │
//!                  └── course_ids: ordered, may repeat, may be empty
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use registrar_db::record::{Course, Enrollment, Student};
//!
//! let student = Student::new("E001", "Ada Lovelace", "Mathematics");
//! let course = Course::new("C101", "Analytical Engines", 4);
//! let enrollment = Enrollment::new("M001", student.id(), "2025-T1", vec![course.id().to_string()]);
//!
//! assert_eq!(enrollment.student_id(), "E001");
//! assert!(enrollment.contains_course("C101"));
//! ```

mod course;
mod enrollment;
mod student;

pub use course::Course;
pub use enrollment::{Enrollment, ENROLLMENT_ID_PREFIX};
pub use student::Student;

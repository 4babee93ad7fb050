//! Student Store - CRUD over `students.csv`

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::StoreConfig;
use crate::error::RecordKind;
use crate::integrity;
use crate::record::{Enrollment, Student};
use crate::storage::{self, Loaded};
use crate::{Error, Result};

/// Column order of the student table.
pub const STUDENT_HEADERS: &[&str] = &["id", "name", "major"];

/// CRUD operations over the student table.
///
/// Deletion consults the enrollment document and is refused while any
/// enrollment references the student.
#[derive(Debug, Clone)]
pub struct StudentStore {
    path: PathBuf,
    enrollments_path: PathBuf,
}

impl StudentStore {
    /// Create a store over the student table named by `config`.
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            path: config.students_path(),
            enrollments_path: config.enrollments_path(),
        }
    }

    /// Path of the backing table.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all students together with any load warnings.
    #[must_use]
    pub fn load(&self) -> Loaded<Student> {
        storage::load_table(&self.path)
    }

    /// All students in persisted order.
    ///
    /// Never fails: a missing or unreadable table yields an empty list
    /// (the warning is logged).
    #[must_use]
    pub fn list(&self) -> Vec<Student> {
        self.load().into_records()
    }

    /// Number of persisted students.
    #[must_use]
    pub fn count(&self) -> usize {
        self.list().len()
    }

    /// Find a student by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Student> {
        self.list().into_iter().find(|student| student.id() == id)
    }

    /// Append a new student and persist the table.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateId`] if a student with `id` already exists
    /// - [`Error::PersistenceFailure`] if the table cannot be written
    pub fn create(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
        major: impl Into<String>,
    ) -> Result<Student> {
        let id = id.into();
        let mut students = self.list();
        if students.iter().any(|student| student.id() == id) {
            return Err(Error::duplicate(RecordKind::Student, id));
        }

        let student = Student::new(id, name, major);
        students.push(student.clone());
        self.save(&students)?;

        info!(kind = %RecordKind::Student, id = student.id(), "created");
        Ok(student)
    }

    /// Overwrite name and major of an existing student.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if no student has `id`
    /// - [`Error::PersistenceFailure`] if the table cannot be written
    pub fn update(
        &self,
        id: &str,
        name: impl Into<String>,
        major: impl Into<String>,
    ) -> Result<Student> {
        let mut students = self.list();
        let student = students
            .iter_mut()
            .find(|student| student.id() == id)
            .ok_or_else(|| Error::not_found(RecordKind::Student, id))?;

        student.rename(name, major);
        let updated = student.clone();
        self.save(&students)?;

        info!(kind = %RecordKind::Student, id, "updated");
        Ok(updated)
    }

    /// Remove a student that no enrollment references.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if no student has `id`
    /// - [`Error::ReferentialIntegrityViolation`] if any enrollment
    ///   references the student; the error lists those enrollments
    /// - [`Error::DamagedData`] if the enrollment document cannot be read
    ///   in full, so references cannot be ruled out
    /// - [`Error::PersistenceFailure`] if the table cannot be written
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut students = self.list();
        let position = students
            .iter()
            .position(|student| student.id() == id)
            .ok_or_else(|| Error::not_found(RecordKind::Student, id))?;

        let enrollments: Vec<Enrollment> = storage::load_intact_document(&self.enrollments_path)?;
        let referenced_by = integrity::enrollment_ids_for_student(&enrollments, id);
        if !referenced_by.is_empty() {
            return Err(Error::ReferentialIntegrityViolation {
                kind: RecordKind::Student,
                id: id.to_string(),
                referenced_by,
            });
        }

        students.remove(position);
        self.save(&students)?;

        info!(kind = %RecordKind::Student, id, "deleted");
        Ok(())
    }

    fn save(&self, students: &[Student]) -> Result<()> {
        storage::save_table(&self.path, STUDENT_HEADERS, students)
    }
}

//! Enrollment Store - create/read over `enrollments.json`

use std::path::{Path, PathBuf};

use tracing::info;

use super::{CourseStore, StudentStore};
use crate::config::StoreConfig;
use crate::error::RecordKind;
use crate::record::Enrollment;
use crate::storage::{self, Loaded};
use crate::{Error, Result};

/// Create and read operations over the enrollment document.
///
/// Enrollments are immutable: there is no update or delete. Creation
/// validates the student and every course id against their stores before
/// anything is written.
#[derive(Debug, Clone)]
pub struct EnrollmentStore {
    path: PathBuf,
    students: StudentStore,
    courses: CourseStore,
}

impl EnrollmentStore {
    /// Create a store over the enrollment document named by `config`.
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            path: config.enrollments_path(),
            students: StudentStore::new(config),
            courses: CourseStore::new(config),
        }
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all enrollments together with any load warnings.
    #[must_use]
    pub fn load(&self) -> Loaded<Enrollment> {
        storage::load_document(&self.path)
    }

    /// All enrollments in persisted (creation) order.
    #[must_use]
    pub fn list(&self) -> Vec<Enrollment> {
        self.load().into_records()
    }

    /// Number of persisted enrollments.
    #[must_use]
    pub fn count(&self) -> usize {
        self.list().len()
    }

    /// Find an enrollment by its generated id (e.g. "M001").
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Enrollment> {
        self.list().into_iter().find(|enrollment| enrollment.id() == id)
    }

    /// Enroll a student in `course_ids` for `period`.
    ///
    /// The new id is [`Enrollment::sequence_id`] of the current count plus
    /// one. Course ids keep the given order; duplicates and an empty list
    /// are accepted. A second enrollment for the same student and period is
    /// accepted as well; reports use the first one.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] (student) if `student_id` does not resolve
    /// - [`Error::NotFound`] (course) for the first course id that does not
    ///   resolve; later ids are not checked and nothing is written
    /// - [`Error::DamagedData`] if the existing document cannot be read in
    ///   full; it is left untouched so no id is handed out twice
    /// - [`Error::PersistenceFailure`] if the document cannot be written
    pub fn create<I, S>(&self, student_id: &str, course_ids: I, period: &str) -> Result<Enrollment>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let course_ids: Vec<String> = course_ids.into_iter().map(Into::into).collect();

        if self.students.get(student_id).is_none() {
            return Err(Error::not_found(RecordKind::Student, student_id));
        }

        let courses = self.courses.list();
        if let Some(missing) = course_ids
            .iter()
            .find(|id| !courses.iter().any(|course| course.id() == id.as_str()))
        {
            return Err(Error::not_found(RecordKind::Course, missing.as_str()));
        }

        let mut enrollments: Vec<Enrollment> = storage::load_intact_document(&self.path)?;
        let enrollment = Enrollment::new(
            Enrollment::sequence_id(enrollments.len() + 1),
            student_id,
            period,
            course_ids,
        );
        enrollments.push(enrollment.clone());
        storage::save_document(&self.path, &enrollments)?;

        info!(
            kind = %RecordKind::Enrollment,
            id = enrollment.id(),
            student_id,
            period,
            courses = enrollment.course_ids().len(),
            "created"
        );
        Ok(enrollment)
    }
}

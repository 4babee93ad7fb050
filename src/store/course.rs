//! Course Store - CRUD over `courses.csv`

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::StoreConfig;
use crate::error::RecordKind;
use crate::integrity;
use crate::record::{Course, Enrollment};
use crate::storage::{self, Loaded};
use crate::{Error, Result};

/// Column order of the course table.
pub const COURSE_HEADERS: &[&str] = &["id", "name", "credits"];

/// CRUD operations over the course table.
///
/// Rows whose credit value is not a non-negative integer are skipped on
/// load (lossy, see [`storage::load_table`]). A later save rewrites the
/// table without them.
#[derive(Debug, Clone)]
pub struct CourseStore {
    path: PathBuf,
    enrollments_path: PathBuf,
}

impl CourseStore {
    /// Create a store over the course table named by `config`.
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            path: config.courses_path(),
            enrollments_path: config.enrollments_path(),
        }
    }

    /// Path of the backing table.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all courses together with any load warnings.
    #[must_use]
    pub fn load(&self) -> Loaded<Course> {
        storage::load_table(&self.path)
    }

    /// All courses in persisted order.
    #[must_use]
    pub fn list(&self) -> Vec<Course> {
        self.load().into_records()
    }

    /// Number of persisted courses.
    #[must_use]
    pub fn count(&self) -> usize {
        self.list().len()
    }

    /// Find a course by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Course> {
        self.list().into_iter().find(|course| course.id() == id)
    }

    /// Append a new course and persist the table.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateId`] if a course with `id` already exists
    /// - [`Error::PersistenceFailure`] if the table cannot be written
    pub fn create(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
        credits: u32,
    ) -> Result<Course> {
        let id = id.into();
        let mut courses = self.list();
        if courses.iter().any(|course| course.id() == id) {
            return Err(Error::duplicate(RecordKind::Course, id));
        }

        let course = Course::new(id, name, credits);
        courses.push(course.clone());
        self.save(&courses)?;

        info!(kind = %RecordKind::Course, id = course.id(), credits, "created");
        Ok(course)
    }

    /// Overwrite name and credits of an existing course.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if no course has `id`
    /// - [`Error::PersistenceFailure`] if the table cannot be written
    pub fn update(&self, id: &str, name: impl Into<String>, credits: u32) -> Result<Course> {
        let mut courses = self.list();
        let course = courses
            .iter_mut()
            .find(|course| course.id() == id)
            .ok_or_else(|| Error::not_found(RecordKind::Course, id))?;

        course.revise(name, credits);
        let updated = course.clone();
        self.save(&courses)?;

        info!(kind = %RecordKind::Course, id, credits, "updated");
        Ok(updated)
    }

    /// Remove a course that no enrollment lists.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if no course has `id`
    /// - [`Error::ReferentialIntegrityViolation`] if any enrollment's
    ///   course list contains `id`; the first referencing enrollment is
    ///   listed first
    /// - [`Error::DamagedData`] if the enrollment document cannot be read
    ///   in full, so references cannot be ruled out
    /// - [`Error::PersistenceFailure`] if the table cannot be written
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut courses = self.list();
        let position = courses
            .iter()
            .position(|course| course.id() == id)
            .ok_or_else(|| Error::not_found(RecordKind::Course, id))?;

        let enrollments: Vec<Enrollment> = storage::load_intact_document(&self.enrollments_path)?;
        let referenced_by = integrity::enrollment_ids_for_course(&enrollments, id);
        if !referenced_by.is_empty() {
            return Err(Error::ReferentialIntegrityViolation {
                kind: RecordKind::Course,
                id: id.to_string(),
                referenced_by,
            });
        }

        courses.remove(position);
        self.save(&courses)?;

        info!(kind = %RecordKind::Course, id, "deleted");
        Ok(())
    }

    fn save(&self, courses: &[Course]) -> Result<()> {
        storage::save_table(&self.path, COURSE_HEADERS, courses)
    }
}

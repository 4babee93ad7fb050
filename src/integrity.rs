//! Integrity & Reporting - cross-store queries
//!
//! Answers the questions that span more than one record set: who references
//! a student or course, which students sit in a course, and how many credits
//! a student carries in a period.
//!
//! ## Ordering
//!
//! - [`Integrity::enrollments_for_student`] keeps enrollment (creation) order
//! - [`Integrity::students_for_course`] is sorted by student id
//!
//! ## First Match Wins
//!
//! Nothing prevents two enrollments for the same student and period. Every
//! per-period query here uses the first such enrollment in creation order.

use std::collections::BTreeSet;

use crate::config::StoreConfig;
use crate::error::RecordKind;
use crate::record::{Course, Enrollment, Student};
use crate::store::{CourseStore, EnrollmentStore, StudentStore};
use crate::{Error, Result};

/// Ids of the enrollments held by `student_id`, in order.
pub(crate) fn enrollment_ids_for_student(enrollments: &[Enrollment], student_id: &str) -> Vec<String> {
    enrollments
        .iter()
        .filter(|enrollment| enrollment.student_id() == student_id)
        .map(|enrollment| enrollment.id().to_string())
        .collect()
}

/// Ids of the enrollments whose course list contains `course_id`, in order.
pub(crate) fn enrollment_ids_for_course(enrollments: &[Enrollment], course_id: &str) -> Vec<String> {
    enrollments
        .iter()
        .filter(|enrollment| enrollment.contains_course(course_id))
        .map(|enrollment| enrollment.id().to_string())
        .collect()
}

/// Courses of `enrollment` that still resolve, in enrollment order.
fn resolve_courses(enrollment: &Enrollment, catalog: &[Course]) -> Vec<Course> {
    enrollment
        .course_ids()
        .iter()
        .filter_map(|id| catalog.iter().find(|course| course.id() == id.as_str()))
        .cloned()
        .collect()
}

fn total_credits(courses: &[Course]) -> u32 {
    courses
        .iter()
        .fold(0, |total, course| total.saturating_add(course.credits()))
}

/// One student's enrollment for one period, with courses resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSummary {
    student: Student,
    period: String,
    enrollment: Option<Enrollment>,
    courses: Vec<Course>,
    total_credits: u32,
}

impl PeriodSummary {
    /// The student the summary is about.
    #[must_use]
    pub const fn student(&self) -> &Student {
        &self.student
    }

    /// The requested period label.
    #[must_use]
    pub fn period(&self) -> &str {
        &self.period
    }

    /// The first enrollment of the student in the period, if any.
    #[must_use]
    pub const fn enrollment(&self) -> Option<&Enrollment> {
        self.enrollment.as_ref()
    }

    /// Enrolled courses that still exist, in enrollment order.
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Sum of the credits of [`Self::courses`].
    #[must_use]
    pub const fn total_credits(&self) -> u32 {
        self.total_credits
    }
}

/// A course together with the students enrolled in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRoster {
    course: Course,
    students: Vec<Student>,
}

impl CourseRoster {
    /// The course.
    #[must_use]
    pub const fn course(&self) -> &Course {
        &self.course
    }

    /// Enrolled students sorted by id.
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }
}

/// Read-only queries across the student, course and enrollment stores.
#[derive(Debug, Clone)]
pub struct Integrity {
    students: StudentStore,
    courses: CourseStore,
    enrollments: EnrollmentStore,
}

impl Integrity {
    /// Create the query layer over the stores named by `config`.
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            students: StudentStore::new(config),
            courses: CourseStore::new(config),
            enrollments: EnrollmentStore::new(config),
        }
    }

    /// Enrollments of `student_id` in creation order.
    #[must_use]
    pub fn enrollments_for_student(&self, student_id: &str) -> Vec<Enrollment> {
        self.enrollments
            .list()
            .into_iter()
            .filter(|enrollment| enrollment.student_id() == student_id)
            .collect()
    }

    /// First enrollment of `student_id` whose period equals `period`.
    #[must_use]
    pub fn enrollment_for_period(&self, student_id: &str, period: &str) -> Option<Enrollment> {
        self.enrollments_for_student(student_id)
            .into_iter()
            .find(|enrollment| enrollment.period() == period)
    }

    /// Distinct students enrolled in `course_id`, sorted by student id.
    ///
    /// Students that no longer exist are skipped. An unused or unknown
    /// course yields an empty list.
    #[must_use]
    pub fn students_for_course(&self, course_id: &str) -> Vec<Student> {
        let student_ids: BTreeSet<String> = self
            .enrollments
            .list()
            .into_iter()
            .filter(|enrollment| enrollment.contains_course(course_id))
            .map(|enrollment| enrollment.student_id().to_string())
            .collect();

        if student_ids.is_empty() {
            return Vec::new();
        }

        let students = self.students.list();
        student_ids
            .iter()
            .filter_map(|id| students.iter().find(|student| student.id() == id.as_str()))
            .cloned()
            .collect()
    }

    /// Credits carried by `student_id` in `period`.
    ///
    /// Uses the first enrollment for the period; 0 when there is none.
    /// Course ids that no longer resolve count as 0 credits.
    #[must_use]
    pub fn credits_for_student(&self, student_id: &str, period: &str) -> u32 {
        self.enrollment_for_period(student_id, period)
            .map_or(0, |enrollment| {
                total_credits(&resolve_courses(&enrollment, &self.courses.list()))
            })
    }

    /// True iff no enrollment references `student_id`.
    #[must_use]
    pub fn can_delete_student(&self, student_id: &str) -> bool {
        enrollment_ids_for_student(&self.enrollments.list(), student_id).is_empty()
    }

    /// True iff no enrollment's course list contains `course_id`.
    #[must_use]
    pub fn can_delete_course(&self, course_id: &str) -> bool {
        enrollment_ids_for_course(&self.enrollments.list(), course_id).is_empty()
    }

    /// A student's enrollment for `period` with the courses resolved.
    ///
    /// A student without an enrollment in the period gets an empty summary
    /// with 0 credits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `student_id` does not exist.
    pub fn period_summary(&self, student_id: &str, period: &str) -> Result<PeriodSummary> {
        let student = self
            .students
            .get(student_id)
            .ok_or_else(|| Error::not_found(RecordKind::Student, student_id))?;

        let enrollment = self.enrollment_for_period(student_id, period);
        let courses = enrollment
            .as_ref()
            .map(|enrollment| resolve_courses(enrollment, &self.courses.list()))
            .unwrap_or_default();
        let total_credits = total_credits(&courses);

        Ok(PeriodSummary {
            student,
            period: period.to_string(),
            enrollment,
            courses,
            total_credits,
        })
    }

    /// A course with the students enrolled in it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `course_id` does not exist.
    pub fn course_roster(&self, course_id: &str) -> Result<CourseRoster> {
        let course = self
            .courses
            .get(course_id)
            .ok_or_else(|| Error::not_found(RecordKind::Course, course_id))?;

        Ok(CourseRoster {
            students: self.students_for_course(course_id),
            course,
        })
    }
}

//! Enrollment - a student's course list for one academic period

use serde::{Deserialize, Serialize};

/// Prefix of system-generated enrollment ids.
pub const ENROLLMENT_ID_PREFIX: char = 'M';

/// Enrollment Record ties a student to an ordered list of courses for one period.
///
/// Enrollments are immutable once created. The `course_ids` keep the
/// caller's order; duplicates and empty lists are allowed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Enrollment {
    id: String,
    student_id: String,
    period: String,
    #[serde(default)]
    course_ids: Vec<String>,
}

impl Enrollment {
    /// Create a new enrollment record.
    ///
    /// # Arguments
    ///
    /// * `id` - Enrollment id (normally from [`Enrollment::sequence_id`])
    /// * `student_id` - ID of the enrolled student
    /// * `period` - Free-form academic period label (e.g., "2025-T1")
    /// * `course_ids` - Course ids in enrollment order
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        student_id: impl Into<String>,
        period: impl Into<String>,
        course_ids: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            student_id: student_id.into(),
            period: period.into(),
            course_ids,
        }
    }

    /// Id for the `ordinal`-th enrollment: `M` followed by the number
    /// zero-padded to three digits.
    ///
    /// Padding is a minimum width, so `1000` yields `"M1000"`.
    ///
    /// ```rust
    /// use registrar_db::record::Enrollment;
    ///
    /// assert_eq!(Enrollment::sequence_id(7), "M007");
    /// assert_eq!(Enrollment::sequence_id(1000), "M1000");
    /// ```
    #[must_use]
    pub fn sequence_id(ordinal: usize) -> String {
        format!("{ENROLLMENT_ID_PREFIX}{ordinal:03}")
    }

    /// Get the enrollment ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the enrolled student's ID.
    #[must_use]
    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// Get the academic period label.
    #[must_use]
    pub fn period(&self) -> &str {
        &self.period
    }

    /// Get the course ids in enrollment order.
    #[must_use]
    pub fn course_ids(&self) -> &[String] {
        &self.course_ids
    }

    /// Whether `course_id` appears in this enrollment.
    #[must_use]
    pub fn contains_course(&self, course_id: &str) -> bool {
        self.course_ids.iter().any(|id| id == course_id)
    }
}

//! Integrity & Reporting Tests
//!
//! Cross-store queries: enrollments per student, students per course,
//! credits per period and the delete guards.

use std::fs;

use registrar_db::{Error, RecordKind, Registrar, StoreConfig};
use tempfile::TempDir;

fn setup() -> (TempDir, Registrar) {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = StoreConfig::new(dir.path());
    fs::write(
        config.students_path(),
        "id,name,major\nE100,Test Student,Test Major\n",
    )
    .unwrap();
    fs::write(config.courses_path(), "id,name,credits\nC100,Test Course,3\n").unwrap();
    fs::write(config.enrollments_path(), "[]").unwrap();

    let registrar = Registrar::builder().config(config).build().unwrap();
    (dir, registrar)
}

// =============================================================================
// Enrollments per student
// =============================================================================

#[test]
fn test_enrollments_for_student_keeps_order() {
    let (_dir, registrar) = setup();
    registrar.students().create("E200", "Other", "Major").unwrap();
    registrar.enrollments().create("E100", ["C100"], "2025-T2").unwrap();
    registrar.enrollments().create("E200", ["C100"], "2025-T1").unwrap();
    registrar.enrollments().create("E100", ["C100"], "2025-T1").unwrap();

    let ids: Vec<String> = registrar
        .integrity()
        .enrollments_for_student("E100")
        .iter()
        .map(|e| e.id().to_string())
        .collect();

    assert_eq!(ids, vec!["M001", "M003"]);
    assert!(registrar.integrity().enrollments_for_student("E999").is_empty());
}

// =============================================================================
// Students per course
// =============================================================================

#[test]
fn test_students_for_course() {
    let (_dir, registrar) = setup();
    registrar.enrollments().create("E100", ["C100"], "2025-T1").unwrap();

    let students = registrar.integrity().students_for_course("C100");

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id(), "E100");
}

#[test]
fn test_students_for_unused_course_is_empty() {
    let (_dir, registrar) = setup();
    registrar.courses().create("C200", "Unused", 2).unwrap();
    registrar.enrollments().create("E100", ["C100"], "2025-T1").unwrap();

    assert!(registrar.integrity().students_for_course("C200").is_empty());
    assert!(registrar.integrity().students_for_course("C999").is_empty());
}

#[test]
fn test_students_for_course_distinct_and_sorted() {
    let (_dir, registrar) = setup();
    registrar.students().create("E300", "Zed", "Art").unwrap();
    registrar.students().create("E050", "Amy", "Art").unwrap();
    registrar.enrollments().create("E300", ["C100"], "2025-T1").unwrap();
    registrar.enrollments().create("E100", ["C100"], "2025-T1").unwrap();
    registrar.enrollments().create("E300", ["C100"], "2025-T2").unwrap();
    registrar.enrollments().create("E050", ["C100", "C100"], "2025-T1").unwrap();

    let ids: Vec<String> = registrar
        .integrity()
        .students_for_course("C100")
        .iter()
        .map(|s| s.id().to_string())
        .collect();

    assert_eq!(ids, vec!["E050", "E100", "E300"]);
}

#[test]
fn test_students_for_course_skips_vanished_students() {
    let (_dir, registrar) = setup();
    registrar.enrollments().create("E100", ["C100"], "2025-T1").unwrap();
    // Remove the student behind the store's back.
    fs::write(registrar.students().path(), "id,name,major\n").unwrap();

    assert!(registrar.integrity().students_for_course("C100").is_empty());
}

// =============================================================================
// Credits
// =============================================================================

#[test]
fn test_credits_without_enrollment_is_zero() {
    let (_dir, registrar) = setup();
    assert_eq!(registrar.integrity().credits_for_student("E100", "2025-T1"), 0);
    assert_eq!(registrar.integrity().credits_for_student("E999", "2025-T1"), 0);
}

#[test]
fn test_credits_sum_all_courses() {
    let (_dir, registrar) = setup();
    registrar.courses().create("C101", "Advanced", 5).unwrap();
    registrar
        .enrollments()
        .create("E100", ["C100", "C101"], "2025-T1")
        .unwrap();

    assert_eq!(registrar.integrity().credits_for_student("E100", "2025-T1"), 8);
}

#[test]
fn test_credits_use_first_enrollment_of_period() {
    let (_dir, registrar) = setup();
    registrar.courses().create("C101", "Advanced", 5).unwrap();
    registrar.enrollments().create("E100", ["C100"], "2025-T1").unwrap();
    registrar.enrollments().create("E100", ["C101"], "2025-T1").unwrap();

    assert_eq!(registrar.integrity().credits_for_student("E100", "2025-T1"), 3);
}

#[test]
fn test_credits_ignore_unresolvable_courses() {
    let (_dir, registrar) = setup();
    registrar.courses().create("C101", "Advanced", 5).unwrap();
    registrar
        .enrollments()
        .create("E100", ["C100", "C101"], "2025-T1")
        .unwrap();
    // Drop C101 behind the store's back; the delete guard would refuse.
    fs::write(
        registrar.courses().path(),
        "id,name,credits\nC100,Test Course,3\n",
    )
    .unwrap();

    assert_eq!(registrar.integrity().credits_for_student("E100", "2025-T1"), 3);
}

// =============================================================================
// Delete guards
// =============================================================================

#[test]
fn test_can_delete_flags() {
    let (_dir, registrar) = setup();
    assert!(registrar.integrity().can_delete_student("E100"));
    assert!(registrar.integrity().can_delete_course("C100"));

    registrar.enrollments().create("E100", ["C100"], "2025-T1").unwrap();

    assert!(!registrar.integrity().can_delete_student("E100"));
    assert!(!registrar.integrity().can_delete_course("C100"));
}

#[test]
fn test_empty_enrollment_blocks_only_student() {
    let (_dir, registrar) = setup();
    registrar
        .enrollments()
        .create("E100", Vec::<String>::new(), "2025-T1")
        .unwrap();

    assert!(!registrar.integrity().can_delete_student("E100"));
    assert!(registrar.integrity().can_delete_course("C100"));
    registrar.courses().delete("C100").unwrap();
}

// =============================================================================
// Summaries
// =============================================================================

#[test]
fn test_period_summary() {
    let (_dir, registrar) = setup();
    registrar.courses().create("C101", "Advanced", 5).unwrap();
    registrar
        .enrollments()
        .create("E100", ["C101", "C100"], "2025-T1")
        .unwrap();

    let summary = registrar.integrity().period_summary("E100", "2025-T1").unwrap();

    assert_eq!(summary.student().id(), "E100");
    assert_eq!(summary.period(), "2025-T1");
    assert_eq!(summary.enrollment().map(|e| e.id()), Some("M001"));
    let ids: Vec<&str> = summary.courses().iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec!["C101", "C100"]);
    assert_eq!(summary.total_credits(), 8);
}

#[test]
fn test_period_summary_without_enrollment() {
    let (_dir, registrar) = setup();

    let summary = registrar.integrity().period_summary("E100", "2030-T9").unwrap();

    assert!(summary.enrollment().is_none());
    assert!(summary.courses().is_empty());
    assert_eq!(summary.total_credits(), 0);
}

#[test]
fn test_period_summary_unknown_student() {
    let (_dir, registrar) = setup();

    let err = registrar
        .integrity()
        .period_summary("E999", "2025-T1")
        .unwrap_err();

    assert!(matches!(err, Error::NotFound { kind: RecordKind::Student, .. }));
}

#[test]
fn test_course_roster() {
    let (_dir, registrar) = setup();
    registrar.enrollments().create("E100", ["C100"], "2025-T1").unwrap();

    let roster = registrar.integrity().course_roster("C100").unwrap();

    assert_eq!(roster.course().name(), "Test Course");
    assert_eq!(roster.students().len(), 1);
    assert!(matches!(
        registrar.integrity().course_roster("C999"),
        Err(Error::NotFound { kind: RecordKind::Course, .. })
    ));
}

#[test]
fn test_enrollment_for_period_first_match_wins() {
    let (_dir, registrar) = setup();
    registrar.enrollments().create("E100", ["C100"], "2025-T1").unwrap();
    registrar
        .enrollments()
        .create("E100", Vec::<String>::new(), "2025-T1")
        .unwrap();

    let found = registrar
        .integrity()
        .enrollment_for_period("E100", "2025-T1")
        .unwrap();

    assert_eq!(found.id(), "M001");
    assert!(registrar
        .integrity()
        .enrollment_for_period("E100", "2025-T9")
        .is_none());
}

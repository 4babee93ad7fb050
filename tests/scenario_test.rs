//! End-to-end scenarios
//!
//! Full workflows starting from an empty data directory, the way the
//! interactive shell drives the core.

use registrar_db::{Error, RecordKind, Registrar};
use tempfile::TempDir;

fn fresh() -> (TempDir, Registrar) {
    let dir = tempfile::tempdir().expect("tempdir");
    let registrar = Registrar::builder().data_dir(dir.path()).build().unwrap();
    registrar
        .students()
        .create("E100", "Test Student", "Test Major")
        .unwrap();
    registrar.courses().create("C100", "Test Course", 3).unwrap();
    (dir, registrar)
}

#[test]
fn test_enrolled_course_cannot_be_deleted() {
    let (_dir, registrar) = fresh();

    let enrollment = registrar
        .enrollments()
        .create("E100", ["C100"], "2025-T1")
        .unwrap();
    assert_eq!(enrollment.id(), "M001");

    let err = registrar.courses().delete("C100").unwrap_err();

    assert!(matches!(
        err,
        Error::ReferentialIntegrityViolation { kind: RecordKind::Course, .. }
    ));
    assert!(err.to_string().contains("M001"));
    assert!(registrar.courses().get("C100").is_some());
}

#[test]
fn test_credits_per_period() {
    let (_dir, registrar) = fresh();

    registrar.enrollments().create("E100", ["C100"], "2025-T1").unwrap();
    registrar.courses().create("C101", "Advanced Course", 5).unwrap();
    registrar.enrollments().create("E100", ["C101"], "2025-T2").unwrap();

    let integrity = registrar.integrity();
    assert_eq!(integrity.credits_for_student("E100", "2025-T1"), 3);
    assert_eq!(integrity.credits_for_student("E100", "2025-T2"), 5);
    assert_eq!(integrity.credits_for_student("E100", "2025-T3"), 0);
}

#[test]
fn test_failed_enrollment_writes_nothing() {
    let (_dir, registrar) = fresh();

    let err = registrar
        .enrollments()
        .create("E100", ["C100", "C999"], "2025-T1")
        .unwrap_err();

    assert!(matches!(err, Error::NotFound { kind: RecordKind::Course, .. }));
    assert_eq!(registrar.enrollments().count(), 0);
    assert!(!registrar.enrollments().path().exists());
}

#[test]
fn test_student_lifecycle() {
    let (_dir, registrar) = fresh();

    registrar.students().create("E200", "Temp", "Undeclared").unwrap();
    registrar
        .students()
        .update("E200", "Temp Student", "History")
        .unwrap();
    assert_eq!(registrar.students().get("E200").unwrap().major(), "History");

    registrar.students().delete("E200").unwrap();
    assert!(registrar.students().get("E200").is_none());
    assert_eq!(registrar.students().count(), 1);
}

#[test]
fn test_state_survives_reopen() {
    let (dir, registrar) = fresh();
    registrar.enrollments().create("E100", ["C100"], "2025-T1").unwrap();
    drop(registrar);

    let reopened = Registrar::builder().data_dir(dir.path()).build().unwrap();

    assert_eq!(reopened.students().count(), 1);
    assert_eq!(reopened.courses().count(), 1);
    let next = reopened
        .enrollments()
        .create("E100", ["C100"], "2025-T2")
        .unwrap();
    assert_eq!(next.id(), "M002");
}

#[test]
fn test_builder_rejects_shared_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = registrar_db::StoreConfig::new(dir.path()).enrollments_file("courses.csv");

    let result = Registrar::builder().config(config).build();

    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

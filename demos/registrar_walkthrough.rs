//! Registrar Walkthrough Example
//!
//! Drives the record stores end to end against a scratch data directory:
//! create students and courses, enroll, report credits, and show the
//! integrity guard refusing a delete.
//!
//! Run with: cargo run --example registrar_walkthrough
//! Set `RUST_LOG=registrar_db=debug` to see every save.

use anyhow::Context;
use registrar_db::{Error, Registrar, StoreConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Registrar-DB Walkthrough ===\n");

    let data_dir = std::env::temp_dir().join(format!("registrar-walkthrough-{}", std::process::id()));
    let registrar = Registrar::open(StoreConfig::new(&data_dir))
        .context("failed to open registrar")?;
    println!("Data directory: {}\n", data_dir.display());

    // -------------------------------------------------------------------------
    // 1. Seed students and courses
    // -------------------------------------------------------------------------
    println!("1. Creating students and courses...");

    registrar.students().create("E001", "Ada Lovelace", "Mathematics")?;
    registrar.students().create("E002", "Alan Turing", "Computer Science")?;
    registrar.courses().create("C101", "Discrete Mathematics", 4)?;
    registrar.courses().create("C102", "Computability", 3)?;
    registrar.courses().create("C103", "Number Theory", 5)?;

    for student in registrar.students().list() {
        println!("   {} {} ({})", student.id(), student.name(), student.major());
    }
    for course in registrar.courses().list() {
        println!("   {} {} [{} credits]", course.id(), course.name(), course.credits());
    }

    // -------------------------------------------------------------------------
    // 2. Enroll
    // -------------------------------------------------------------------------
    println!("\n2. Enrolling...");

    let first = registrar
        .enrollments()
        .create("E001", ["C101", "C103"], "2025-T1")?;
    let second = registrar.enrollments().create("E002", ["C101", "C102"], "2025-T1")?;
    let third = registrar.enrollments().create("E001", ["C102"], "2025-T2")?;
    for enrollment in [&first, &second, &third] {
        println!(
            "   {}: {} in {} -> {:?}",
            enrollment.id(),
            enrollment.student_id(),
            enrollment.period(),
            enrollment.course_ids()
        );
    }

    match registrar.enrollments().create("E002", ["C999"], "2025-T2") {
        Err(err @ Error::NotFound { .. }) => println!("   Rejected: {err}"),
        other => anyhow::bail!("unexpected enrollment outcome: {other:?}"),
    }

    // -------------------------------------------------------------------------
    // 3. Reports
    // -------------------------------------------------------------------------
    println!("\n3. Reports...");

    for period in ["2025-T1", "2025-T2"] {
        let summary = registrar.integrity().period_summary("E001", period)?;
        let names: Vec<&str> = summary.courses().iter().map(|c| c.name()).collect();
        println!(
            "   {} in {}: {} credits {:?}",
            summary.student().name(),
            summary.period(),
            summary.total_credits(),
            names
        );
    }

    let roster = registrar.integrity().course_roster("C101")?;
    let names: Vec<&str> = roster.students().iter().map(|s| s.name()).collect();
    println!("   {} roster: {:?}", roster.course().name(), names);

    // -------------------------------------------------------------------------
    // 4. Integrity guard
    // -------------------------------------------------------------------------
    println!("\n4. Deleting referenced records...");

    for result in [
        registrar.courses().delete("C101"),
        registrar.students().delete("E002"),
    ] {
        match result {
            Err(err @ Error::ReferentialIntegrityViolation { .. }) => println!("   Blocked: {err}"),
            other => anyhow::bail!("unexpected delete outcome: {other:?}"),
        }
    }

    std::fs::remove_dir_all(&data_dir)
        .with_context(|| format!("failed to clean up {}", data_dir.display()))?;

    println!("\n=== Walkthrough Complete ===");
    Ok(())
}

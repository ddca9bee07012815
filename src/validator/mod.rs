//! # PQP Validation
//!
//! Checks that a library has the tables and columns the statistics queries
//! rely on, and that decoy flags are consistent between precursors,
//! peptides and proteins.
//!
//! ## Validation Checklist
//!
//! 1. **Tables**: every required PQP table exists
//! 2. **Columns**: every referenced column exists in its table
//! 3. **Decoy consistency**: no peptide or protein is linked to a decoy
//!    without being flagged itself (fixable with `patch_decoys`)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pqpstat::db::PqpDatabase;
//! use pqpstat::validator::validate_pqp;
//!
//! let db = PqpDatabase::open("library.pqp")?;
//! let report = validate_pqp(&db)?;
//! println!("{}", report);
//! # Ok::<(), pqpstat::db::PqpError>(())
//! ```

use crate::db::{PqpDatabase, PqpError};

pub use report::{CheckStatus, ValidationCheck, ValidationReport};

mod decoys;
mod report;
mod schema;

/// Run every check against an open library
///
/// Decoy consistency is only checked when the schema checks passed, since
/// its queries would fail on a missing table or column.
pub fn validate_pqp(db: &PqpDatabase) -> Result<ValidationReport, PqpError> {
    let mut report = ValidationReport::new(db.path().display().to_string());

    schema::check_tables(db, &mut report)?;
    schema::check_columns(db, &mut report)?;

    if !report.has_failures() {
        decoys::check_decoy_consistency(db, &mut report)?;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{empty_library, sample_library};

    #[test]
    fn test_validation_report_display() {
        let mut report = ValidationReport::new("test.pqp");
        report.add_check(ValidationCheck::ok("Test check 1"));
        report.add_check(ValidationCheck::warning("Test check 2", "This is a warning"));
        report.add_check(ValidationCheck::failed("Test check 3", "This failed"));

        let output = format!("{}", report);
        assert!(output.contains("✓"));
        assert!(output.contains("⚠"));
        assert!(output.contains("✗"));
        assert!(output.contains("1 passed, 1 warnings, 1 failed"));
        assert!(output.contains("Validation FAILED"));
    }

    #[test]
    fn test_consistent_library_passes() {
        let db = sample_library();
        let report = validate_pqp(&db).unwrap();
        assert!(!report.has_failures());
        assert!(!report.has_warnings());
        assert_eq!(report.success_count(), report.checks.len());
    }

    #[test]
    fn test_inconsistent_decoys_warn() {
        let db = sample_library();
        db.execute_query("UPDATE precursor SET decoy = 1 WHERE id = 3", [])
            .unwrap();

        let report = validate_pqp(&db).unwrap();
        assert!(!report.has_failures());
        assert_eq!(report.warning_count(), 1);
        assert!(report.to_string().contains("Validation PASSED with warnings"));
    }

    #[test]
    fn test_missing_table_fails() {
        let db = empty_library();
        db.connection()
            .execute_batch("DROP TABLE precursor_peptide_mapping")
            .unwrap();

        let report = validate_pqp(&db).unwrap();
        assert!(report.has_failures());
        // Decoy checks are skipped when the schema is incomplete.
        assert!(report
            .checks
            .iter()
            .all(|c| !c.name.starts_with("Decoy")));
    }

    #[test]
    fn test_missing_column_fails() {
        let db = PqpDatabase::from_connection(rusqlite::Connection::open_in_memory().unwrap());
        db.connection()
            .execute_batch(
                "CREATE TABLE protein (id INTEGER, protein_accession TEXT);
                 CREATE TABLE peptide (id INTEGER, modified_sequence TEXT, decoy INTEGER);
                 CREATE TABLE precursor (id INTEGER, decoy INTEGER);
                 CREATE TABLE peptide_protein_mapping (peptide_id INTEGER, protein_id INTEGER);
                 CREATE TABLE precursor_peptide_mapping (precursor_id INTEGER, peptide_id INTEGER);",
            )
            .unwrap();

        let report = validate_pqp(&db).unwrap();
        assert_eq!(report.failure_count(), 1);
        let failed = report
            .checks
            .iter()
            .find(|c| matches!(c.status, CheckStatus::Failed(_)))
            .unwrap();
        assert_eq!(
            failed.status,
            CheckStatus::Failed("missing column(s): decoy".to_string())
        );
    }
}

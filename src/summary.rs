//! Library-wide target/decoy counts

use std::fmt;

use serde::Serialize;

use crate::db::{PqpDatabase, PqpError};
use crate::stats::{Decoy, PeptideStats, ProteinStats};

/// Target and decoy counts of one entity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassCounts {
    /// Rows with `decoy = 0`
    pub target: i64,
    /// Rows with `decoy = 1`
    pub decoy: i64,
}

/// Summary statistics about a PQP library
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibrarySummary {
    /// Path of the summarized file
    pub path: String,
    /// Protein rows (protein groups)
    pub proteins: ClassCounts,
    /// Distinct target protein groups, compared by member set
    pub unique_target_protein_groups: usize,
    /// Peptide rows
    pub peptides: ClassCounts,
    /// Distinct target modified sequences
    pub unique_target_peptides: usize,
    /// Target peptides mapping to exactly one protein accession
    pub proteotypic_peptides: usize,
    /// Precursor rows
    pub precursors: ClassCounts,
}

impl LibrarySummary {
    /// Collect the summary from an open library
    pub fn collect(db: &PqpDatabase) -> Result<Self, PqpError> {
        let proteins = ProteinStats::new(db)?;
        let peptides = PeptideStats::new(db);

        Ok(Self {
            path: db.path().display().to_string(),
            proteins: ClassCounts {
                target: proteins.count_proteins(Decoy::Target)?,
                decoy: proteins.count_proteins(Decoy::Decoy)?,
            },
            unique_target_protein_groups: proteins.unique_proteins().len(),
            peptides: count_by_class(db, "peptide")?,
            unique_target_peptides: peptides.unique_peptides(Decoy::Target)?.len(),
            proteotypic_peptides: peptides.get_proteotypic_peptides()?.len(),
            precursors: count_by_class(db, "precursor")?,
        })
    }
}

fn count_by_class(db: &PqpDatabase, table: &str) -> Result<ClassCounts, PqpError> {
    let sql = format!("SELECT COUNT(*) FROM {} WHERE decoy = ?1", table);
    Ok(ClassCounts {
        target: db.query_scalar(&sql, [Decoy::Target])?,
        decoy: db.query_scalar(&sql, [Decoy::Decoy])?,
    })
}

impl fmt::Display for LibrarySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PQP Library Summary")?;
        writeln!(f, "===================")?;
        writeln!(f, "File: {}", self.path)?;
        writeln!(
            f,
            "Protein groups: {} target, {} decoy",
            self.proteins.target, self.proteins.decoy
        )?;
        writeln!(
            f,
            "  Unique target groups: {}",
            self.unique_target_protein_groups
        )?;
        writeln!(
            f,
            "Peptides: {} target, {} decoy",
            self.peptides.target, self.peptides.decoy
        )?;
        writeln!(f, "  Unique target sequences: {}", self.unique_target_peptides)?;
        writeln!(f, "  Proteotypic: {}", self.proteotypic_peptides)?;
        writeln!(
            f,
            "Precursors: {} target, {} decoy",
            self.precursors.target, self.precursors.decoy
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_library;

    #[test]
    fn test_collect_summary() {
        let db = sample_library();
        let summary = LibrarySummary::collect(&db).unwrap();

        assert_eq!(summary.proteins, ClassCounts { target: 2, decoy: 1 });
        assert_eq!(summary.unique_target_protein_groups, 2);
        assert_eq!(summary.peptides, ClassCounts { target: 4, decoy: 1 });
        assert_eq!(summary.unique_target_peptides, 4);
        assert_eq!(summary.proteotypic_peptides, 3);
        assert_eq!(summary.precursors, ClassCounts { target: 4, decoy: 1 });
    }

    #[test]
    fn test_summary_display() {
        let db = sample_library();
        let text = LibrarySummary::collect(&db).unwrap().to_string();
        assert!(text.starts_with("PQP Library Summary"));
        assert!(text.contains("Protein groups: 2 target, 1 decoy"));
        assert!(text.contains("Proteotypic: 3"));
    }
}

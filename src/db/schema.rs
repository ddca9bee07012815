//! PQP table names and schema introspection

use super::{PqpDatabase, PqpError};

/// Table names of the PQP schema read by this crate
pub mod tables {
    /// Protein groups
    pub const PROTEIN: &str = "protein";
    /// Peptides (modified sequences)
    pub const PEPTIDE: &str = "peptide";
    /// Precursors
    pub const PRECURSOR: &str = "precursor";
    /// Peptide to protein links
    pub const PEPTIDE_PROTEIN_MAPPING: &str = "peptide_protein_mapping";
    /// Precursor to peptide links
    pub const PRECURSOR_PEPTIDE_MAPPING: &str = "precursor_peptide_mapping";
}

/// Tables every PQP file must contain
pub const REQUIRED_TABLES: [&str; 5] = [
    tables::PROTEIN,
    tables::PEPTIDE,
    tables::PRECURSOR,
    tables::PEPTIDE_PROTEIN_MAPPING,
    tables::PRECURSOR_PEPTIDE_MAPPING,
];

/// Columns referenced by the statistics queries, per table
pub const REQUIRED_COLUMNS: [(&str, &[&str]); 5] = [
    (tables::PROTEIN, &["id", "protein_accession", "decoy"]),
    (tables::PEPTIDE, &["id", "modified_sequence", "decoy"]),
    (tables::PRECURSOR, &["id", "decoy"]),
    (tables::PEPTIDE_PROTEIN_MAPPING, &["peptide_id", "protein_id"]),
    (tables::PRECURSOR_PEPTIDE_MAPPING, &["precursor_id", "peptide_id"]),
];

impl PqpDatabase {
    /// Names of all tables in the database, sorted
    pub fn table_names(&self) -> Result<Vec<String>, PqpError> {
        self.query_column(
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
            [],
        )
    }

    /// Whether a table exists (SQLite identifiers are case-insensitive)
    pub fn has_table(&self, name: &str) -> Result<bool, PqpError> {
        let count: i64 = self.query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1 COLLATE NOCASE",
            [name],
        )?;
        Ok(count > 0)
    }

    /// Column names of a table, lowercased; empty if the table does not exist
    pub fn table_columns(&self, table: &str) -> Result<Vec<String>, PqpError> {
        let columns: Vec<String> =
            self.query_column("SELECT name FROM pragma_table_info(?1)", [table])?;
        Ok(columns.into_iter().map(|c| c.to_lowercase()).collect())
    }
}

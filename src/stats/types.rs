use std::fmt;

use rusqlite::types::{ToSql, ToSqlOutput};
use serde::Serialize;

/// Which half of the library a query looks at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decoy {
    /// Target entries (`decoy = 0`)
    #[default]
    Target,
    /// Decoy entries (`decoy = 1`)
    Decoy,
}

impl Decoy {
    /// Value of the `decoy` column for this class
    pub fn flag(self) -> i64 {
        match self {
            Decoy::Target => 0,
            Decoy::Decoy => 1,
        }
    }

    /// Lowercase label used in reports
    pub fn label(self) -> &'static str {
        match self {
            Decoy::Target => "target",
            Decoy::Decoy => "decoy",
        }
    }
}

impl From<bool> for Decoy {
    fn from(decoy: bool) -> Self {
        if decoy {
            Decoy::Decoy
        } else {
            Decoy::Target
        }
    }
}

impl ToSql for Decoy {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.flag()))
    }
}

impl fmt::Display for Decoy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Distinct peptide count of one protein accession
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeptidesPerProtein {
    /// Protein accession as stored (possibly compound)
    pub protein_accession: String,
    /// Number of distinct modified sequences mapped to it
    pub num_peptides: i64,
}

/// Distinct protein count of one peptide
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeptideProteinCount {
    /// Peptide row id
    pub peptide_id: i64,
    /// Modified sequence of the peptide
    pub modified_sequence: String,
    /// Number of distinct protein accessions the peptide maps to
    pub num_proteins: i64,
}

impl PeptideProteinCount {
    /// A proteotypic peptide maps to exactly one protein accession
    pub fn is_proteotypic(&self) -> bool {
        self.num_proteins == 1
    }
}

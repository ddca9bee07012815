//! # pqpstat - PQP Spectral Library Statistics
//!
//! `pqpstat` computes descriptive statistics of PQP spectral libraries, the
//! SQLite files OpenSWATH uses to describe the peptides and proteins a DIA
//! experiment is searched against.
//!
//! ## Key Features
//!
//! - **Protein groups**: splits compound accessions
//!   (`2/sp|P55011|S12A2_HUMAN/sp|P37108|SRP14_HUMAN`) into sets and reports
//!   group sizes, unique groups and peptides per protein.
//!
//! - **Peptides**: unique modified sequences, proteotypic peptides and
//!   peptide promiscuity (how many proteins a peptide maps to).
//!
//! - **Histograms as data**: distributions come back as [`histogram::Histogram`]
//!   values (edges, counts, labels) that can be printed, serialized to JSON or
//!   written as TSV.
//!
//! - **Decoy patching**: propagates decoy flags from precursors to peptides and
//!   proteins in a single transaction.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pqpstat::db::PqpDatabase;
//! use pqpstat::stats::{PeptideStats, ProteinStats};
//!
//! let db = PqpDatabase::open("library.pqp")?;
//!
//! let proteins = ProteinStats::new(&db)?;
//! println!("{:?}", proteins.proteins_per_group());
//! println!("{}", proteins.plot_peptides_per_protein()?);
//!
//! let peptides = PeptideStats::new(&db);
//! println!("{} proteotypic peptides", peptides.get_proteotypic_peptides()?.len());
//! # Ok::<(), pqpstat::db::PqpError>(())
//! ```
//!
//! ## Schema
//!
//! Only the following tables and columns are read (case-insensitively):
//!
//! | Table | Columns |
//! |-------|---------|
//! | protein | id, protein_accession, decoy |
//! | peptide | id, modified_sequence, decoy |
//! | precursor | id, decoy |
//! | peptide_protein_mapping | peptide_id, protein_id |
//! | precursor_peptide_mapping | precursor_id, peptide_id |

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod db;
pub mod histogram;
pub mod stats;
pub mod summary;
pub mod validator;

#[cfg(test)]
mod testing;

/// Result type of library operations
pub type Result<T> = std::result::Result<T, db::PqpError>;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::db::{DatabaseConfig, PatchReport, PqpDatabase, PqpError, Row};
    pub use crate::histogram::Histogram;
    pub use crate::stats::{
        split_protein_names, Decoy, PeptideProteinCount, PeptideStats, PeptidesPerProtein,
        ProteinGroup, ProteinStats,
    };
    pub use crate::summary::{ClassCounts, LibrarySummary};
    pub use crate::validator::{validate_pqp, ValidationReport};
}

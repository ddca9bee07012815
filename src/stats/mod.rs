//! # Library Statistics
//!
//! Aggregations over the protein and peptide tables of a PQP library.
//!
//! ```rust,no_run
//! use pqpstat::db::PqpDatabase;
//! use pqpstat::stats::{Decoy, PeptideStats, ProteinStats};
//!
//! let db = PqpDatabase::open("library.pqp")?;
//!
//! let proteins = ProteinStats::new(&db)?;
//! println!("{} protein groups", proteins.groups().len());
//! println!("{}", proteins.plot_proteins_per_group()?);
//!
//! let peptides = PeptideStats::new(&db);
//! println!("{} decoy peptides", peptides.unique_peptides(Decoy::Decoy)?.len());
//! # Ok::<(), pqpstat::db::PqpError>(())
//! ```

mod accession;
mod peptide;
mod protein;
mod types;


pub use accession::{split_protein_names, ProteinGroup, ACCESSION_SEPARATOR};
pub use peptide::PeptideStats;
pub use protein::ProteinStats;
pub use types::{Decoy, PeptideProteinCount, PeptidesPerProtein};

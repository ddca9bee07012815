use std::collections::BTreeSet;

use log::debug;

use super::accession::{split_protein_names, ProteinGroup};
use super::types::{Decoy, PeptidesPerProtein};
use crate::db::{PqpDatabase, PqpError};
use crate::histogram::Histogram;

const QUERY_PROTEINS: &str = "
    SELECT protein_accession FROM protein
    WHERE decoy = ?1
    ORDER BY id";

const QUERY_PEPTIDES_PER_PROTEIN: &str = "
    SELECT protein_accession, COUNT(DISTINCT pep.modified_sequence) AS num_peptides
    FROM protein AS pro
    JOIN peptide_protein_mapping AS ppm ON pro.id = ppm.protein_id
    JOIN peptide AS pep ON ppm.peptide_id = pep.id
    WHERE pro.decoy = ?1
    GROUP BY protein_accession
    ORDER BY protein_accession";

const QUERY_COUNT_PROTEINS: &str = "
    SELECT COUNT(id) FROM protein
    WHERE decoy = ?1";

/// Minimum number of bins of the proteins-per-group histogram
const MIN_GROUP_SIZE_BINS: usize = 10;

/// Protein statistics over one half (target or decoy) of a PQP library
///
/// The protein groups are loaded once at construction; distributions
/// derived from them reuse that cache.
pub struct ProteinStats<'db> {
    db: &'db PqpDatabase,
    decoy: Decoy,
    proteins: Vec<ProteinGroup>,
}

impl<'db> ProteinStats<'db> {
    /// Load target protein groups
    pub fn new(db: &'db PqpDatabase) -> Result<Self, PqpError> {
        Self::with_decoy(db, Decoy::Target)
    }

    /// Load protein groups of the given class
    pub fn with_decoy(db: &'db PqpDatabase, decoy: Decoy) -> Result<Self, PqpError> {
        let mut stats = Self {
            db,
            decoy,
            proteins: Vec::new(),
        };
        stats.proteins = stats.query_proteins(decoy)?;
        debug!("Loaded {} {} protein groups", stats.proteins.len(), decoy);
        Ok(stats)
    }

    /// Class of the cached protein groups
    pub fn decoy(&self) -> Decoy {
        self.decoy
    }

    /// Cached protein groups, in table order
    pub fn groups(&self) -> &[ProteinGroup] {
        &self.proteins
    }

    /// Query and split every protein accession of the given class
    pub fn query_proteins(&self, decoy: Decoy) -> Result<Vec<ProteinGroup>, PqpError> {
        let accessions: Vec<String> = self.db.query_column(QUERY_PROTEINS, [decoy])?;
        Ok(split_protein_names(accessions))
    }

    /// Distinct protein groups among the cached ones
    pub fn unique_proteins(&self) -> BTreeSet<ProteinGroup> {
        self.proteins.iter().cloned().collect()
    }

    /// Number of proteins in each cached group
    pub fn proteins_per_group(&self) -> Vec<usize> {
        self.proteins.iter().map(ProteinGroup::len).collect()
    }

    /// Histogram of protein group sizes
    ///
    /// Uses one bin per size up to the largest group, and never fewer than ten.
    pub fn plot_proteins_per_group(&self) -> Result<Histogram, PqpError> {
        let sizes = self.proteins_per_group();
        let largest = sizes
            .iter()
            .copied()
            .max()
            .ok_or(PqpError::EmptyDistribution("protein groups"))?;

        let values: Vec<f64> = sizes.iter().map(|&s| s as f64).collect();
        Ok(Histogram::from_values(&values, largest.max(MIN_GROUP_SIZE_BINS))?
            .with_title("Distribution of proteins per protein group")
            .with_labels("Number of proteins", "Number of protein groups"))
    }

    /// Distinct peptide count per protein accession
    pub fn peptides_per_protein(&self, decoy: Decoy) -> Result<Vec<PeptidesPerProtein>, PqpError> {
        self.db
            .query_map(QUERY_PEPTIDES_PER_PROTEIN, [decoy], |row| {
                Ok(PeptidesPerProtein {
                    protein_accession: row.get(0)?,
                    num_peptides: row.get(1)?,
                })
            })
    }

    /// Histogram of peptides per protein for the cached class
    ///
    /// Uses one bin per count up to the largest count observed.
    pub fn plot_peptides_per_protein(&self) -> Result<Histogram, PqpError> {
        let rows = self.peptides_per_protein(self.decoy)?;
        let largest = rows
            .iter()
            .map(|p| p.num_peptides)
            .max()
            .ok_or(PqpError::EmptyDistribution("proteins with peptides"))?;

        let counts: Vec<f64> = rows.iter().map(|p| p.num_peptides as f64).collect();
        Ok(Histogram::from_values(&counts, usize::try_from(largest).unwrap_or(0))?
            .with_title("Distribution of peptides per protein")
            .with_labels("Number of peptides", "Number of proteins"))
    }

    /// Number of protein rows of the given class
    pub fn count_proteins(&self, decoy: Decoy) -> Result<i64, PqpError> {
        self.db.query_scalar(QUERY_COUNT_PROTEINS, [decoy])
    }
}

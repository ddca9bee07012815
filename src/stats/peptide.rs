use log::debug;

use super::types::{Decoy, PeptideProteinCount};
use crate::db::{PqpDatabase, PqpError};
use crate::histogram::Histogram;

const QUERY_UNIQUE_PEPTIDES: &str = "
    SELECT DISTINCT modified_sequence FROM peptide
    WHERE decoy = ?1
    ORDER BY modified_sequence";

const QUERY_PEPTIDE_PROTEIN_COUNTS: &str = "
    SELECT pep.id, pep.modified_sequence, COUNT(DISTINCT pro.protein_accession) AS num_pro_with_pep
    FROM peptide AS pep
    JOIN peptide_protein_mapping AS peppro ON pep.id = peppro.peptide_id
    JOIN protein AS pro ON peppro.protein_id = pro.id
    WHERE pep.decoy = 0
    GROUP BY pep.id
    ORDER BY pep.id";

/// Default number of bins of the promiscuity histogram
const PROMISCUITY_BINS: usize = 10;

/// Peptide statistics of a PQP library
pub struct PeptideStats<'db> {
    db: &'db PqpDatabase,
}

impl<'db> PeptideStats<'db> {
    /// Create peptide statistics over `db`
    pub fn new(db: &'db PqpDatabase) -> Self {
        Self { db }
    }

    /// Distinct modified sequences of the given class, sorted
    pub fn unique_peptides(&self, decoy: Decoy) -> Result<Vec<String>, PqpError> {
        self.db.query_column(QUERY_UNIQUE_PEPTIDES, [decoy])
    }

    /// Number of distinct protein accessions each target peptide maps to
    ///
    /// Peptides without any protein mapping are not listed.
    pub fn peptide_protein_counts(&self) -> Result<Vec<PeptideProteinCount>, PqpError> {
        let counts = self.db.query_map(QUERY_PEPTIDE_PROTEIN_COUNTS, [], |row| {
            Ok(PeptideProteinCount {
                peptide_id: row.get(0)?,
                modified_sequence: row.get(1)?,
                num_proteins: row.get(2)?,
            })
        })?;
        debug!("Counted protein mappings for {} peptides", counts.len());
        Ok(counts)
    }

    /// Target peptides that map to exactly one protein accession
    pub fn get_proteotypic_peptides(&self) -> Result<Vec<PeptideProteinCount>, PqpError> {
        Ok(self
            .peptide_protein_counts()?
            .into_iter()
            .filter(PeptideProteinCount::is_proteotypic)
            .collect())
    }

    /// Protein count of every mapped target peptide, in peptide id order
    pub fn peptide_promiscuity(&self) -> Result<Vec<i64>, PqpError> {
        Ok(self
            .peptide_protein_counts()?
            .into_iter()
            .map(|c| c.num_proteins)
            .collect())
    }

    /// Histogram of peptide promiscuity with a log-scaled count axis
    pub fn plot_peptide_promiscuity(&self) -> Result<Histogram, PqpError> {
        let promiscuity: Vec<f64> = self
            .peptide_promiscuity()?
            .into_iter()
            .map(|n| n as f64)
            .collect();
        if promiscuity.is_empty() {
            return Err(PqpError::EmptyDistribution("peptides mapped to proteins"));
        }

        Ok(Histogram::from_values(&promiscuity, PROMISCUITY_BINS)?
            .with_title("Distribution of peptides per protein")
            .with_labels("Number of proteins", "log(Number of peptides)")
            .log_scale())
    }
}

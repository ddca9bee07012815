//! Decoy flag propagation from precursors to peptides and proteins

use std::fmt;

use log::info;
use serde::Serialize;

use super::{PqpDatabase, PqpError};

macro_rules! decoy_peptide_ids {
    () => {
        "SELECT pep.id FROM precursor AS pre
        JOIN precursor_peptide_mapping AS prepep ON pre.id = prepep.precursor_id
        JOIN peptide AS pep ON prepep.peptide_id = pep.id
        WHERE pre.decoy = 1"
    };
}

macro_rules! decoy_protein_ids {
    () => {
        "SELECT pro.id FROM peptide AS pep
        JOIN peptide_protein_mapping AS peppro ON pep.id = peppro.peptide_id
        JOIN protein AS pro ON peppro.protein_id = pro.id
        WHERE pep.decoy = 1"
    };
}

// `decoy IS NOT 1` keeps the change counts honest; rows already flagged are left alone.
const PATCH_PEPTIDES: &str = concat!(
    "UPDATE peptide SET decoy = 1 WHERE decoy IS NOT 1 AND id IN (",
    decoy_peptide_ids!(),
    ")"
);

const PATCH_PROTEINS: &str = concat!(
    "UPDATE protein SET decoy = 1 WHERE decoy IS NOT 1 AND id IN (",
    decoy_protein_ids!(),
    ")"
);

const PENDING_PEPTIDES: &str = concat!(
    "SELECT COUNT(*) FROM peptide WHERE decoy IS NOT 1 AND id IN (",
    decoy_peptide_ids!(),
    ")"
);

const PENDING_PROTEINS: &str = concat!(
    "SELECT COUNT(*) FROM protein WHERE decoy IS NOT 1 AND id IN (",
    decoy_protein_ids!(),
    ")"
);

/// Number of rows whose decoy flag was (or would be) changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PatchReport {
    /// Peptides linked to a decoy precursor but not flagged as decoy
    pub peptides_updated: usize,
    /// Proteins linked to a decoy peptide but not flagged as decoy
    pub proteins_updated: usize,
}

impl PatchReport {
    /// True when no flag needed to change
    pub fn is_clean(&self) -> bool {
        self.peptides_updated == 0 && self.proteins_updated == 0
    }
}

impl fmt::Display for PatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} peptides and {} proteins flagged as decoy",
            self.peptides_updated, self.proteins_updated
        )
    }
}

impl PqpDatabase {
    /// Propagate decoy status from precursors to peptides, then from peptides to proteins
    ///
    /// Both updates run in one transaction: either both are committed or
    /// neither is. Running the patch twice is a no-op the second time.
    pub fn patch_decoys(&mut self) -> Result<PatchReport, PqpError> {
        let tx = self.conn.transaction()?;
        // Peptides first: the protein update reads the freshly patched peptide flags.
        let peptides_updated = tx.execute(PATCH_PEPTIDES, [])?;
        let proteins_updated = tx.execute(PATCH_PROTEINS, [])?;
        tx.commit()?;

        let report = PatchReport {
            peptides_updated,
            proteins_updated,
        };
        info!("Patched decoys in {}: {}", self.path.display(), report);
        Ok(report)
    }

    /// Count the rows `patch_decoys` would change, without writing anything
    ///
    /// Proteins reachable only through a peptide that is itself still
    /// unpatched are not counted.
    pub fn pending_decoy_patches(&self) -> Result<PatchReport, PqpError> {
        let peptides: i64 = self.query_scalar(PENDING_PEPTIDES, [])?;
        let proteins: i64 = self.query_scalar(PENDING_PROTEINS, [])?;
        Ok(PatchReport {
            peptides_updated: peptides as usize,
            proteins_updated: proteins as usize,
        })
    }
}

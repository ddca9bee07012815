use log::warn;

use crate::db::{PqpDatabase, PqpError};

use super::{ValidationCheck, ValidationReport};

pub(super) fn check_decoy_consistency(
    db: &PqpDatabase,
    report: &mut ValidationReport,
) -> Result<(), PqpError> {
    let pending = db.pending_decoy_patches()?;
    let name = "Decoy flags consistent with precursors";

    if pending.is_clean() {
        report.add_check(ValidationCheck::ok(name));
    } else {
        warn!("Inconsistent decoy flags in {}: {:?}", db.path().display(), pending);
        report.add_check(ValidationCheck::warning(
            name,
            format!(
                "{} peptide(s) and {} protein(s) linked to decoys are not flagged; run patch-decoys",
                pending.peptides_updated, pending.proteins_updated
            ),
        ));
    }
    Ok(())
}

use anyhow::{Context, Result};
use log::info;

use pqpstat::db::PqpDatabase;

/// Patch decoy flags in place
pub fn run(mut db: PqpDatabase) -> Result<()> {
    info!("Patching decoy flags in {}", db.path().display());

    let report = db.patch_decoys().context("Failed to patch decoys")?;
    if report.is_clean() {
        println!("Decoy flags already consistent; nothing changed");
    } else {
        println!("Patched {}: {}", db.path().display(), report);
    }

    db.close().context("Failed to close PQP library")?;
    Ok(())
}

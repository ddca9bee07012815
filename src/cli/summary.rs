use anyhow::{Context, Result};
use log::info;

use pqpstat::db::PqpDatabase;
use pqpstat::summary::LibrarySummary;

use super::OutputOptions;

/// Print target/decoy counts of a PQP library
pub fn run(db: &PqpDatabase, output: OutputOptions) -> Result<()> {
    info!("Summarizing {}", db.path().display());

    let summary = LibrarySummary::collect(db).context("Failed to summarize library")?;
    if output.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary);
    }
    Ok(())
}

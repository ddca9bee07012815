use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::collections::BTreeMap;

use pqpstat::db::PqpDatabase;
use pqpstat::stats::{Decoy, PeptideProteinCount, PeptideStats};

use super::OutputOptions;

#[derive(Serialize)]
struct PeptideReport {
    decoy: Decoy,
    unique_peptides: usize,
    proteotypic_peptides: usize,
    /// Number of proteins -> number of target peptides mapping to that many
    promiscuity: BTreeMap<i64, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sequences: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    proteotypic: Option<Vec<PeptideProteinCount>>,
}

/// Print peptide statistics
pub fn run(
    db: &PqpDatabase,
    decoy: Decoy,
    proteotypic: bool,
    list: bool,
    output: OutputOptions,
) -> Result<()> {
    info!("Loading peptides from {}", db.path().display());

    let stats = PeptideStats::new(db);
    let sequences = stats
        .unique_peptides(decoy)
        .context("Failed to load unique peptides")?;
    let counts = stats
        .peptide_protein_counts()
        .context("Failed to count proteins per peptide")?;

    let mut promiscuity = BTreeMap::new();
    for count in &counts {
        *promiscuity.entry(count.num_proteins).or_insert(0) += 1;
    }
    let proteotypic_rows: Vec<PeptideProteinCount> =
        counts.into_iter().filter(|c| c.is_proteotypic()).collect();

    let report = PeptideReport {
        decoy,
        unique_peptides: sequences.len(),
        proteotypic_peptides: proteotypic_rows.len(),
        promiscuity,
        sequences: list.then_some(sequences),
        proteotypic: proteotypic.then_some(proteotypic_rows),
    };

    if output.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Unique peptides ({}): {}", decoy, report.unique_peptides);
    println!("Proteotypic target peptides: {}", report.proteotypic_peptides);
    println!("Peptide promiscuity (target):");
    for (proteins, peptides) in &report.promiscuity {
        println!("  {:>4} protein(s): {}", proteins, peptides);
    }

    if let Some(sequences) = &report.sequences {
        println!();
        for sequence in sequences {
            println!("{}", sequence);
        }
    }

    if let Some(rows) = &report.proteotypic {
        println!();
        println!("peptide_id\tmodified_sequence");
        for row in rows {
            println!("{}\t{}", row.peptide_id, row.modified_sequence);
        }
    }

    Ok(())
}

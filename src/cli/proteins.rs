use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::collections::BTreeMap;

use pqpstat::db::PqpDatabase;
use pqpstat::stats::{Decoy, PeptidesPerProtein, ProteinStats};

use super::OutputOptions;

#[derive(Serialize)]
struct ProteinReport<'a> {
    decoy: Decoy,
    protein_groups: usize,
    unique_protein_groups: usize,
    /// Group size -> number of groups with that size
    group_sizes: BTreeMap<usize, usize>,
    peptides_per_protein: &'a [PeptidesPerProtein],
}

/// Print protein group statistics
pub fn run(db: &PqpDatabase, decoy: Decoy, list: bool, output: OutputOptions) -> Result<()> {
    info!("Loading {} protein groups from {}", decoy, db.path().display());

    let stats = ProteinStats::with_decoy(db, decoy).context("Failed to load protein groups")?;
    let peptides = stats
        .peptides_per_protein(decoy)
        .context("Failed to count peptides per protein")?;

    let mut group_sizes = BTreeMap::new();
    for size in stats.proteins_per_group() {
        *group_sizes.entry(size).or_insert(0) += 1;
    }

    let report = ProteinReport {
        decoy,
        protein_groups: stats.groups().len(),
        unique_protein_groups: stats.unique_proteins().len(),
        group_sizes,
        peptides_per_protein: &peptides,
    };

    if output.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Protein groups ({}): {}", decoy, report.protein_groups);
    println!("  Unique groups: {}", report.unique_protein_groups);
    println!("  Group sizes:");
    for (size, groups) in &report.group_sizes {
        println!("    {:>4} protein(s): {}", size, groups);
    }

    println!("Proteins with peptides: {}", peptides.len());
    let counts: Vec<i64> = peptides.iter().map(|p| p.num_peptides).collect();
    if let (Some(min), Some(max)) = (counts.iter().min(), counts.iter().max()) {
        let mean = counts.iter().sum::<i64>() as f64 / counts.len() as f64;
        println!(
            "  Peptides per protein: min {}, mean {:.2}, max {}",
            min, mean, max
        );
    }

    if list {
        println!();
        println!("protein_accession\tnum_peptides");
        for row in &peptides {
            println!("{}\t{}", row.protein_accession, row.num_peptides);
        }
    }

    Ok(())
}

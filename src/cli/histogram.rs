use anyhow::{Context, Result};
use log::{info, warn};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use pqpstat::db::PqpDatabase;
use pqpstat::histogram::Histogram;
use pqpstat::stats::{Decoy, PeptideStats, ProteinStats};

use super::{HistogramKind, OutputOptions};

/// Compute and print a histogram
pub fn run(
    db: &PqpDatabase,
    kind: HistogramKind,
    decoy: Decoy,
    tsv: Option<PathBuf>,
    output: OutputOptions,
) -> Result<()> {
    info!("Computing {:?} histogram for {}", kind, db.path().display());

    let histogram = compute(db, kind, decoy).context("Failed to compute histogram")?;

    if let Some(path) = tsv {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create TSV file: {}", path.display()))?;
        histogram
            .write_tsv(BufWriter::new(file))
            .with_context(|| format!("Failed to write TSV file: {}", path.display()))?;
        info!("Wrote bin table to {}", path.display());
    }

    if output.json {
        println!("{}", serde_json::to_string_pretty(&histogram)?);
    } else {
        print!("{}", histogram.render(output.bar_width));
    }
    Ok(())
}

fn compute(db: &PqpDatabase, kind: HistogramKind, decoy: Decoy) -> pqpstat::Result<Histogram> {
    if decoy == Decoy::Decoy && !kind.honors_decoy() {
        warn!("--decoy is ignored for {:?}; it is computed over target peptides", kind);
    }
    match kind {
        HistogramKind::ProteinsPerGroup => {
            ProteinStats::with_decoy(db, decoy)?.plot_proteins_per_group()
        }
        HistogramKind::PeptidesPerProtein => {
            ProteinStats::with_decoy(db, decoy)?.plot_peptides_per_protein()
        }
        HistogramKind::PeptidePromiscuity => PeptideStats::new(db).plot_peptide_promiscuity(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoy_flag_applies_to_protein_distributions_only() {
        assert!(HistogramKind::ProteinsPerGroup.honors_decoy());
        assert!(HistogramKind::PeptidesPerProtein.honors_decoy());
        assert!(!HistogramKind::PeptidePromiscuity.honors_decoy());
    }
}

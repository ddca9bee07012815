use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use pqpstat::db::{DatabaseConfig, PqpDatabase};
use pqpstat::histogram::DEFAULT_BAR_WIDTH;
use pqpstat::stats::Decoy;

mod config;
mod histogram;
mod patch;
mod peptides;
mod proteins;
mod summary;
mod validate;

use config::Config;

/// pqpstat - Descriptive statistics for PQP spectral libraries
#[derive(Parser)]
#[command(name = "pqpstat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Distribution to compute a histogram of.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum HistogramKind {
    /// Number of proteins in each protein group
    ProteinsPerGroup,
    /// Number of distinct peptides per protein
    PeptidesPerProtein,
    /// Number of proteins each target peptide maps to
    PeptidePromiscuity,
}

impl HistogramKind {
    /// Whether `--decoy` selects the class this distribution is computed over
    pub fn honors_decoy(self) -> bool {
        !matches!(self, HistogramKind::PeptidePromiscuity)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show target/decoy counts of a PQP library
    Summary {
        /// Input PQP file path
        #[arg(value_name = "PQP")]
        file: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Protein group statistics
    Proteins {
        /// Input PQP file path
        #[arg(value_name = "PQP")]
        file: PathBuf,

        /// Look at decoy proteins instead of targets
        #[arg(long)]
        decoy: bool,

        /// List peptides per protein accession
        #[arg(long)]
        list: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Peptide statistics
    Peptides {
        /// Input PQP file path
        #[arg(value_name = "PQP")]
        file: PathBuf,

        /// Look at decoy peptides instead of targets
        #[arg(long)]
        decoy: bool,

        /// List proteotypic peptides
        #[arg(long)]
        proteotypic: bool,

        /// List unique modified sequences
        #[arg(long)]
        list: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Compute a histogram of a library distribution
    Histogram {
        /// Input PQP file path
        #[arg(value_name = "PQP")]
        file: PathBuf,

        /// Distribution to bin
        #[arg(value_name = "KIND", value_enum)]
        kind: HistogramKind,

        /// Use decoy proteins (protein distributions only)
        #[arg(long)]
        decoy: bool,

        /// Also write the bin table to a TSV file
        #[arg(long, value_name = "FILE")]
        tsv: Option<PathBuf>,

        /// Print JSON instead of a text chart
        #[arg(long)]
        json: bool,
    },

    /// Propagate decoy flags from precursors to peptides and proteins (modifies the file)
    PatchDecoys {
        /// PQP file to patch in place
        #[arg(value_name = "PQP")]
        file: PathBuf,
    },

    /// Check schema and decoy consistency of a PQP library
    Validate {
        /// Input PQP file path
        #[arg(value_name = "PQP")]
        file: PathBuf,
    },
}

/// Output settings resolved from flags and the config file
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Print JSON instead of text
    pub json: bool,
    /// Maximum bar length of text histograms
    pub bar_width: usize,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let output = |json: bool| OutputOptions {
        json: json || config.output.json.unwrap_or(false),
        bar_width: config.output.bar_width.unwrap_or(DEFAULT_BAR_WIDTH),
    };

    match cli.command {
        Commands::Summary { file, json } => {
            let db = open_library(&file, &config, true)?;
            summary::run(&db, output(json))
        }
        Commands::Proteins {
            file,
            decoy,
            list,
            json,
        } => {
            let db = open_library(&file, &config, true)?;
            proteins::run(&db, Decoy::from(decoy), list, output(json))
        }
        Commands::Peptides {
            file,
            decoy,
            proteotypic,
            list,
            json,
        } => {
            let db = open_library(&file, &config, true)?;
            peptides::run(&db, Decoy::from(decoy), proteotypic, list, output(json))
        }
        Commands::Histogram {
            file,
            kind,
            decoy,
            tsv,
            json,
        } => {
            let db = open_library(&file, &config, true)?;
            histogram::run(&db, kind, Decoy::from(decoy), tsv, output(json))
        }
        Commands::PatchDecoys { file } => {
            let db = open_library(&file, &config, false)?;
            patch::run(db)
        }
        Commands::Validate { file } => {
            let db = open_library(&file, &config, true)?;
            validate::run(&db)
        }
    }
}

fn open_library(path: &Path, config: &Config, read_only: bool) -> Result<PqpDatabase> {
    let db_config = DatabaseConfig {
        read_only,
        ..config.database_config()
    };
    PqpDatabase::open_with_config(path, db_config)
        .with_context(|| format!("Failed to open PQP library: {}", path.display()))
}

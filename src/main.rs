//! # pqpstat
//!
//! Command-line statistics for PQP spectral libraries.
//!
//! ## Usage
//!
//! ```bash
//! # Target/decoy counts
//! pqpstat summary library.pqp
//!
//! # Histogram of protein group sizes, also saved as TSV
//! pqpstat histogram library.pqp proteins-per-group --tsv groups.tsv
//!
//! # Restore decoy flags after an upstream tool dropped them
//! pqpstat patch-decoys library.pqp
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity
    cli::init_logging(cli.verbosity());

    cli::dispatch(cli)
}

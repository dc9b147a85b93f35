//! # annocheck
//!
//! Command-line front end of the annotation consistency check.
//!
//! ## Usage
//!
//! ```bash
//! # Regular library matches, positive mode, default thresholds
//! annocheck -v check feature_table.tsv
//!
//! # Analogue matches against the per-level CANOPUS columns, with exports
//! annocheck check feature_table.tsv -l analogue --class-scope per-level \
//!     -o annotated.tsv --json summary.json
//!
//! # Which modes can run on this table?
//! annocheck columns feature_table.tsv
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

/// CLI argument definitions for the `ppa` command.
///
/// Defines all subcommands, their arguments, and long help text
/// using the `clap` derive macros.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "ppa", version, about = "PPA/VPPA term sheet scorecard")]
pub struct Cli {
    /// Config file (default: ./ppa.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a term sheet from its extracted facts
    #[command(long_about = "\
Score a term sheet from its extracted facts.

FACTS is a JSON file produced by the fact extractor, or - to read stdin.
Every term gets a score from 0 to 100:

    0-24   BUYER-FAVORABLE
   25-49   AT MARKET
   50-74   SELLER-FAVORABLE
   75-100  RED FLAG

Terms whose provision was not found at all are scored conservatively and
marked missing. The verdict is DO NOT SIGN when any term is a red flag,
MINOR REVISIONS when any term is seller-favorable, else READY TO SIGN.")]
    Score {
        /// Facts JSON file, or - for stdin
        facts: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Rows in the needs-attention list (default: from config, else 10)
        #[arg(long)]
        top: Option<usize>,

        /// Hide per-term flags in the needs-attention list
        #[arg(long)]
        no_flags: bool,
    },

    /// Compare two term sheets, e.g. a first draft and a redline
    Diff {
        /// Facts JSON for the earlier version
        before: PathBuf,

        /// Facts JSON for the later version
        after: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// List every term, not only the ones that changed
        #[arg(long)]
        all: bool,
    },

    /// List the scored terms with their group and flexibility
    Terms {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

//! CLI for the docscout binary.
//!
//! Uses clap for argument parsing and owo-colors for colored terminal
//! output.

/// Colored output helpers.
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// docscout - documentation discovery for agentic assistants
#[derive(Parser, Debug)]
#[command(
    name = "docscout",
    author = "Dirmacs <build@dirmacs.com>",
    version,
    about = "Find llms.txt / llms-full.txt / openapi.yaml for a library and answer questions from it",
    after_help = "EXAMPLES:\n    \
                  docscout lookup react                     # Find react's documentation manifest\n    \
                  docscout lookup react --question hooks    # Answer a question from it\n    \
                  docscout lookup react --json              # Machine-readable output\n    \
                  docscout tools                            # List registered tool schemas"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "docscout.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a documentation manifest for a library
    Lookup {
        /// Name of the library to search for
        library: String,

        /// Question to answer from the discovered document
        #[arg(short, long)]
        question: Option<String>,

        /// Print the raw JSON result instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// List registered tools and their schemas
    Tools,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

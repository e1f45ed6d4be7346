//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can generate man pages from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Find the first win of every PLO4 starting-hand shape in your hand histories
#[derive(Debug, Parser)]
#[command(name = "plowins")]
#[command(version = crate::VERSION_STRING)]
#[command(about, long_about = None)]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan hand histories and write the first-win table
    Scan(ScanArgs),

    /// Count every distinct four-card shape a deck can produce
    Shapes,

    /// Show or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Hand-history file or directory of .txt/.log transcripts
    pub input: PathBuf,

    /// Output CSV path (`-` for stdout). Defaults to <output.dir>/<input name>.csv
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Parse files in parallel
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Log filter implied by the -v/-q flags.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

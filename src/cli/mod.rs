//! CLI argument definitions for Sextant.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sextant - distills project metrics from playground state documents.
///
/// Run `sx` (or `sx report`) against a project root to emit the metrics
/// report as JSON on stdout.
#[derive(Parser, Debug)]
#[command(name = "sx")]
#[command(author, version, about = "A CLI tool that distills project metrics from playground state documents", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Output in human-readable format instead of JSON
    #[arg(short = 'H', long = "human", global = true)]
    pub human_readable: bool,

    /// Project root holding the state documents (defaults to the current
    /// directory). Shorthand for `sx report <ROOT>`.
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Emit the aggregated metrics report (the default command)
    Report {
        /// Project root holding the state documents
        #[arg(value_name = "ROOT")]
        root: Option<PathBuf>,
    },

    /// Check a pending write against the governance directory (hook mode)
    ///
    /// Reads the target path from TOOL_INPUT_FILE_PATH or a JSON object on
    /// stdin, appends the decision to the audit log, and exits 1 to block.
    Guard {
        /// Project root containing the governance directory
        #[arg(long, env = "PROJECT_ROOT", value_name = "ROOT")]
        root: Option<PathBuf>,
    },
}

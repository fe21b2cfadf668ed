//! CLI argument parsing.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default maximum directory depth for a scan.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Global CLI arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Detection subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a project directory and report ranked platform detections
    /// as JSON.
    Scan(ScanArgs),
}

/// Arguments for the `scan` subcommand.
#[derive(clap::Args, Debug)]
pub struct ScanArgs {
    /// Path to the project directory to scan.
    pub path: PathBuf,

    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    /// Maximum directory depth to descend while scanning (>= 1).
    pub max_depth: usize,

    #[arg(long, default_value_t = 0.0)]
    /// Minimum confidence score a detection must reach (0.0 - 1.0).
    /// When nothing meets the bar, the full candidate set is still
    /// reported.
    pub min_confidence: f64,
}

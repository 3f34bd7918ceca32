//! Command-line argument definitions for the PubChem processor
//!
//! Defines the CLI interface using the clap derive API. The only
//! subcommand is `process`, which extracts chemical records from a
//! directory of downloaded PubChem JSON files.

use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the PubChem record processor
///
/// Extracts normalized chemical records (identity plus typed
/// physicochemical properties) from downloaded PubChem pug_view JSON files.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pubchem-processor",
    version,
    about = "Extract normalized chemical records from PubChem pug_view JSON",
    long_about = "Processes directories of downloaded PubChem compound JSON files into \
                  JSONL chemical records. Free-text property strings are parsed into \
                  typed quantities with measurement conditions; identity blocks are \
                  extracted and cleaned."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Process downloaded record files into JSONL output (main command)
    Process(ProcessArgs),
}

/// Arguments for the process command
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input directory containing downloaded cid_*.json record files
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input directory containing cid_*.json record files"
    )]
    pub input_dir: PathBuf,

    /// Output path for the JSONL records file
    ///
    /// Defaults to chemicals.jsonl in the current directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output path for the JSONL records file"
    )]
    pub output_path: Option<PathBuf>,

    /// Number of parallel extraction workers
    ///
    /// Each record file is independent, so extraction parallelizes freely.
    /// Defaults to the number of logical CPUs.
    #[arg(
        short = 'w',
        long = "workers",
        value_name = "N",
        help = "Number of parallel extraction workers"
    )]
    pub workers: Option<usize>,

    /// Enable verbose logging (debug level)
    #[arg(short = 'v', long = "verbose", help = "Enable verbose logging")]
    pub verbose: bool,

    /// Suppress progress output (errors only)
    #[arg(short = 'q', long = "quiet", help = "Suppress progress output")]
    pub quiet: bool,
}

impl ProcessArgs {
    /// Validate argument combinations
    pub fn validate(&self) -> Result<()> {
        if self.verbose && self.quiet {
            return Err(Error::configuration(
                "Cannot use --verbose and --quiet together".to_string(),
            ));
        }
        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err(Error::configuration(
                    "Worker count must be at least 1".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Effective log level for this invocation
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }

    /// Whether progress bars should be drawn
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_and_quiet_conflict() {
        let args = ProcessArgs {
            input_dir: PathBuf::from("."),
            output_path: None,
            workers: None,
            verbose: true,
            quiet: true,
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let args = ProcessArgs {
            input_dir: PathBuf::from("."),
            output_path: None,
            workers: Some(0),
            verbose: false,
            quiet: false,
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level_selection() {
        let mut args = ProcessArgs {
            input_dir: PathBuf::from("."),
            output_path: None,
            workers: None,
            verbose: false,
            quiet: false,
        };
        assert_eq!(args.log_level(), "info");
        args.verbose = true;
        assert_eq!(args.log_level(), "debug");
        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), "error");
        assert!(!args.show_progress());
    }
}

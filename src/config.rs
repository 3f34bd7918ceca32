//! Configuration management and validation.
//!
//! Provides configuration structures for the text normalizer and the batch
//! extraction driver. The normalizer lists default to the PubChem-specific
//! vocabulary in [`crate::constants`] but are injectable per data source.
//! All configuration is validated at pipeline construction time; a malformed
//! table is a hard failure before any record is processed.

use crate::constants::{DEFAULT_REMOVE_PHRASES, DEFAULT_SUBSTITUTIONS};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Text normalization configuration
///
/// Two ordered lists: phrases deleted outright (literal matches) and
/// `(pattern, replacement)` substitution pairs (regular expressions).
/// Order is significant and preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Noise phrases removed verbatim (citations, qualifiers)
    pub remove_phrases: Vec<String>,

    /// Ordered regex substitutions applied after phrase removal
    pub substitutions: Vec<(String, String)>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            remove_phrases: DEFAULT_REMOVE_PHRASES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            substitutions: DEFAULT_SUBSTITUTIONS
                .iter()
                .map(|(p, r)| (p.to_string(), r.to_string()))
                .collect(),
        }
    }
}

impl NormalizerConfig {
    /// Validate the configuration without building a normalizer
    ///
    /// Checks that every substitution pattern is a valid regular expression.
    pub fn validate(&self) -> Result<()> {
        for (pattern, _) in &self.substitutions {
            regex::Regex::new(pattern).map_err(|e| {
                Error::configuration(format!("Invalid substitution pattern '{}': {}", pattern, e))
            })?;
        }
        debug!(
            "Normalizer config validated: {} removals, {} substitutions",
            self.remove_phrases.len(),
            self.substitutions.len()
        );
        Ok(())
    }
}

/// Configuration for the batch extraction driver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Directory containing downloaded `cid_*.json` record files
    pub input_dir: PathBuf,

    /// Path of the JSONL output file
    pub output_path: PathBuf,

    /// Number of parallel extraction workers
    pub workers: usize,

    /// Whether to show progress bars during processing
    pub show_progress: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_path: PathBuf::from(crate::constants::DEFAULT_OUTPUT_FILE),
            workers: num_cpus::get(),
            show_progress: true,
        }
    }
}

impl ProcessingConfig {
    /// Validate paths and worker count
    pub fn validate(&self) -> Result<()> {
        if !self.input_dir.exists() {
            return Err(Error::file_not_found(self.input_dir.display().to_string()));
        }
        if !self.input_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Input path '{}' is not a directory",
                self.input_dir.display()
            )));
        }
        if self.workers == 0 {
            return Err(Error::configuration(
                "Worker count must be at least 1".to_string(),
            ));
        }
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(Error::configuration(format!(
                    "Output directory '{}' does not exist",
                    parent.display()
                )));
            }
        }
        debug!("Processing config validated: {:?}", self);
        Ok(())
    }
}

//! Extraction statistics for batch processing
//!
//! Tracks per-run counts and error messages while a directory of record
//! files is processed, and renders a one-line summary for logging.

/// Statistics for a batch extraction run
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionStats {
    /// Number of record files found
    pub files_found: usize,
    /// Number of records successfully extracted
    pub records_extracted: usize,
    /// Total properties extracted across all records
    pub properties_extracted: usize,
    /// Number of files that failed to parse or extract
    pub failures: usize,
    /// Specific failure messages for debugging
    pub failure_messages: Vec<String>,
}

impl ExtractionStats {
    /// Create new empty extraction statistics
    pub fn new() -> Self {
        Self {
            files_found: 0,
            records_extracted: 0,
            properties_extracted: 0,
            failures: 0,
            failure_messages: Vec::new(),
        }
    }

    /// Record one successful extraction
    pub fn add_record(&mut self, property_count: usize) {
        self.records_extracted += 1;
        self.properties_extracted += property_count;
    }

    /// Record one failed file
    pub fn add_failure(&mut self, message: String) {
        self.failures += 1;
        self.failure_messages.push(message);
    }

    /// Success rate as a percentage of files found
    pub fn success_rate(&self) -> f64 {
        if self.files_found == 0 {
            100.0
        } else {
            (self.records_extracted as f64 / self.files_found as f64) * 100.0
        }
    }

    /// Mean number of properties per extracted record
    pub fn properties_per_record(&self) -> f64 {
        if self.records_extracted == 0 {
            0.0
        } else {
            self.properties_extracted as f64 / self.records_extracted as f64
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Extraction Summary: {} files -> {} records ({:.1}% success) | \
             {} properties ({:.1} per record) | Failures: {}",
            self.files_found,
            self.records_extracted,
            self.success_rate(),
            self.properties_extracted,
            self.properties_per_record(),
            self.failures
        )
    }
}

impl Default for ExtractionStats {
    fn default() -> Self {
        Self::new()
    }
}

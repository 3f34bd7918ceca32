//! PubChem Processor Library
//!
//! A Rust library for extracting normalized chemical records from PubChem
//! compound JSON (pug_view records).
//!
//! This library provides tools for:
//! - Turning free-text property strings ("18 mm Hg at 68 °F") into typed
//!   quantities with measurement conditions
//! - Resolving and converting physical units through a built-in unit registry
//! - Reducing multiple independently reported measurements to one value
//! - Extracting chemical identity blocks (name, synonyms, CAS, structural
//!   identifiers) from PubChem record sections
//! - Batch processing of downloaded record files into JSONL output

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod property_assembler;
        pub mod quantity_parser;
        pub mod record_extractor;
        pub mod unit_registry;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ChemicalRecord, Condition, Identity, Property, PropertyValue};
pub use app::services::unit_registry::{Quantity, Unit, UnitRegistry};

/// Result type alias for the PubChem processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for PubChem processing operations
///
/// Soft parse failures (an unparseable fragment, an unknown unit token in
/// scraped text) are represented as `Option` values in the parsing pipeline,
/// not as errors. These variants cover hard failures (malformed
/// configuration, unreadable input files) and the unit registry's resolution
/// contract.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("JSON parsing error in '{file}': {message}")]
    JsonParsing {
        file: String,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// PubChem record format error (missing required sections)
    #[error("Record format error in '{file}': {message}")]
    RecordFormat { file: String, message: String },

    /// Unit token could not be resolved by the unit registry
    #[error("Unresolved unit: '{token}'")]
    UnresolvedUnit { token: String },

    /// Offset unit (degC/degF) used inside a compound expression
    #[error("Offset unit in compound expression: '{expression}'")]
    OffsetUnit { expression: String },

    /// Unit conversion between incompatible dimensions
    #[error("Incompatible dimensions: cannot convert '{from}' to '{to}'")]
    IncompatibleDimension { from: String, to: String },

    /// Condition key not present in the condition key registry
    #[error("Unknown condition key: '{key}'")]
    UnknownConditionKey { key: String },

    /// Condition value dimensionality does not match its key
    #[error("Dimension mismatch for condition '{key}': expected {expected}, got {found}")]
    ConditionDimensionMismatch {
        key: String,
        expected: String,
        found: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a JSON parsing error with context
    pub fn json_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<serde_json::Error>,
    ) -> Self {
        Self::JsonParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a record format error
    pub fn record_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RecordFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create an unresolved unit error
    pub fn unresolved_unit(token: impl Into<String>) -> Self {
        Self::UnresolvedUnit {
            token: token.into(),
        }
    }

    /// Create an offset unit error
    pub fn offset_unit(expression: impl Into<String>) -> Self {
        Self::OffsetUnit {
            expression: expression.into(),
        }
    }

    /// Create an incompatible dimension error
    pub fn incompatible_dimension(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::IncompatibleDimension {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create an unknown condition key error
    pub fn unknown_condition_key(key: impl Into<String>) -> Self {
        Self::UnknownConditionKey { key: key.into() }
    }

    /// Create a condition dimension mismatch error
    pub fn condition_dimension_mismatch(
        key: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::ConditionDimensionMismatch {
            key: key.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonParsing {
            file: "unknown".to_string(),
            message: "JSON parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::ProcessingInterrupted {
            reason: format!("Worker task failed: {}", error),
        }
    }
}

//! Record extraction orchestration
//!
//! Turns one downloaded PubChem pug_view JSON document into a
//! `ChemicalRecord`: identity block plus extracted properties. The
//! extractor owns a `PropertyAssembler` and is safe to share read-only
//! between workers.

use super::identity::extract_identity;
use super::properties::extract_properties;
use crate::app::models::ChemicalRecord;
use crate::app::services::property_assembler::PropertyAssembler;
use crate::app::services::unit_registry::UnitRegistry;
use crate::config::NormalizerConfig;
use crate::{Error, Result};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Extracts chemical records from PubChem pug_view documents
#[derive(Debug)]
pub struct RecordExtractor {
    assembler: PropertyAssembler,
}

impl RecordExtractor {
    /// Create an extractor over a shared unit registry
    pub fn new(units: Arc<UnitRegistry>, normalizer_config: &NormalizerConfig) -> Result<Self> {
        Ok(Self {
            assembler: PropertyAssembler::new(units, normalizer_config)?,
        })
    }

    /// Create an extractor with the default PubChem configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(Arc::new(UnitRegistry::new()), &NormalizerConfig::default())
    }

    /// Extract one record from a parsed pug_view document
    ///
    /// A document without a `Record`/`RecordNumber` block is malformed and
    /// fails; everything else degrades per-field.
    pub fn extract(&self, doc: &Value) -> Result<ChemicalRecord> {
        let identity = extract_identity(doc);
        if identity.cid.is_none() {
            return Err(Error::record_format(
                "<document>",
                "missing Record.RecordNumber",
            ));
        }

        let properties = extract_properties(doc, &self.assembler);
        debug!(
            "Extracted {} properties for CID {:?}",
            properties.len(),
            identity.cid
        );

        Ok(ChemicalRecord {
            identity,
            properties,
        })
    }

    /// Extract one record from a downloaded JSON file
    pub fn extract_file(&self, path: &Path) -> Result<ChemicalRecord> {
        let file = path.display().to_string();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read '{}'", file), e))?;
        let doc: Value = serde_json::from_str(&contents)
            .map_err(|e| Error::json_parsing(&file, "invalid JSON", Some(e)))?;

        self.extract(&doc).map_err(|e| match e {
            Error::RecordFormat { message, .. } => Error::record_format(&file, message),
            other => other,
        })
    }
}

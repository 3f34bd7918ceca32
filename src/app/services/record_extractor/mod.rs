//! PubChem record extraction service
//!
//! Turns downloaded pug_view JSON documents into normalized
//! `ChemicalRecord`s:
//!
//! - [`section_search`] walks the raw JSON tree by `TOCHeading`
//! - [`identity`] extracts and cleans the identity block
//! - [`properties`] feeds property sections through the assembler
//! - [`RecordExtractor`] orchestrates one document end to end
//! - [`ExtractionStats`] tracks a batch run

pub mod extractor;
pub mod identity;
pub mod properties;
pub mod section_search;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use extractor::RecordExtractor;
pub use stats::ExtractionStats;

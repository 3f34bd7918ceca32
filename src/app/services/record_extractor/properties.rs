//! Property extraction
//!
//! Walks the property heading table against one record, feeding each found
//! section's values through the property assembler.

use super::section_search::{find_section, section_values};
use crate::app::models::Property;
use crate::app::services::property_assembler::{PropertyAssembler, RawField};
use crate::constants::PROPERTY_MAPPINGS;
use serde_json::Value;
use tracing::trace;

/// Extract every mapped property from a pug_view document
pub fn extract_properties(doc: &Value, assembler: &PropertyAssembler) -> Vec<Property> {
    let mut properties = Vec::new();

    for mapping in PROPERTY_MAPPINGS {
        let Some(section) = find_section(doc, mapping.heading) else {
            continue;
        };
        let values = section_values(section);
        if values.is_empty() {
            continue;
        }
        trace!(
            "Found {} value(s) under heading '{}'",
            values.len(),
            mapping.heading
        );

        let field = match values.len() {
            1 => RawField::from(values.into_iter().next().unwrap_or_default()),
            _ => RawField::from(values),
        };
        properties.extend(assembler.parse_property_field(
            &field,
            mapping.key,
            mapping.expects_quantity,
        ));
    }

    properties
}

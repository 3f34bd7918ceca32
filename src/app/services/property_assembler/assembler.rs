//! Property assembly
//!
//! Orchestrates the full text-to-quantity pipeline for one property field:
//! free-text passthrough, semicolon splitting, normalization, range and
//! condition resolution, multi-value reduction, condition key matching, and
//! canonical unit conversion. Emits zero, one, or many `Property` records
//! and never fails on malformed input; every hard failure is confined to
//! construction.

use super::condition_keys::ConditionKeyRegistry;
use crate::app::models::{Property, PropertyValue};
use crate::app::services::quantity_parser::{
    MultiValueReducer, QuantityTokenizer, RangeConditionResolver, Resolved, TextNormalizer,
};
use crate::app::services::unit_registry::{Quantity, Unit, UnitRegistry};
use crate::config::NormalizerConfig;
use crate::constants::PROPERTY_MAPPINGS;
use crate::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, trace};

/// One raw property field as extracted from a source record
#[derive(Debug, Clone)]
pub enum RawField {
    /// A single property string
    Single(String),
    /// Multiple independently reported strings under one heading
    Multiple(Vec<String>),
}

impl RawField {
    fn items(&self) -> Vec<&str> {
        match self {
            RawField::Single(s) => vec![s.as_str()],
            RawField::Multiple(v) => v.iter().map(String::as_str).collect(),
        }
    }

    fn contains_digit(&self) -> bool {
        self.items()
            .iter()
            .any(|s| s.chars().any(|c| c.is_ascii_digit()))
    }
}

impl From<&str> for RawField {
    fn from(s: &str) -> Self {
        RawField::Single(s.to_string())
    }
}

impl From<String> for RawField {
    fn from(s: String) -> Self {
        RawField::Single(s)
    }
}

impl From<Vec<String>> for RawField {
    fn from(v: Vec<String>) -> Self {
        RawField::Multiple(v)
    }
}

/// Unit policy for one property key, resolved at construction
#[derive(Debug, Clone, Default)]
struct UnitPolicy {
    canonical: Option<Unit>,
    assumed: Option<Unit>,
}

/// Assembles `Property` records from raw property fields
#[derive(Debug)]
pub struct PropertyAssembler {
    normalizer: TextNormalizer,
    resolver: RangeConditionResolver,
    reducer: MultiValueReducer,
    condition_keys: ConditionKeyRegistry,
    unit_policies: HashMap<&'static str, UnitPolicy>,
}

impl PropertyAssembler {
    /// Build an assembler over a shared unit registry
    ///
    /// Resolves every canonical and assumed unit declared in the property
    /// heading table, and every condition key unit. Any malformed table
    /// entry or normalizer pattern fails here, before record processing.
    pub fn new(units: Arc<UnitRegistry>, normalizer_config: &NormalizerConfig) -> Result<Self> {
        let normalizer = TextNormalizer::new(normalizer_config)?;
        let condition_keys = ConditionKeyRegistry::new(&units)?;

        let mut unit_policies = HashMap::with_capacity(PROPERTY_MAPPINGS.len());
        for mapping in PROPERTY_MAPPINGS {
            let canonical = mapping
                .canonical_unit
                .map(|u| units.resolve(u))
                .transpose()
                .map_err(|e| {
                    crate::Error::configuration(format!(
                        "Property '{}' declares unresolvable canonical unit: {}",
                        mapping.key, e
                    ))
                })?;
            let assumed = mapping
                .assumed_unit
                .map(|u| units.resolve(u))
                .transpose()
                .map_err(|e| {
                    crate::Error::configuration(format!(
                        "Property '{}' declares unresolvable assumed unit: {}",
                        mapping.key, e
                    ))
                })?;
            unit_policies.insert(mapping.key, UnitPolicy { canonical, assumed });
        }

        let resolver = RangeConditionResolver::new(QuantityTokenizer::new(units));

        Ok(Self {
            normalizer,
            resolver,
            reducer: MultiValueReducer::new(),
            condition_keys,
            unit_policies,
        })
    }

    /// Build an assembler with the default PubChem configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(Arc::new(UnitRegistry::new()), &NormalizerConfig::default())
    }

    /// The condition key registry backing this assembler
    pub fn condition_keys(&self) -> &ConditionKeyRegistry {
        &self.condition_keys
    }

    /// Parse one raw property field into zero or more properties
    ///
    /// Free-text fields (no digit anywhere, or `expects_quantity` unset)
    /// pass through as raw strings. Numeric fields go through the full
    /// pipeline; a field that yields nothing parseable produces an empty
    /// list, never an error.
    pub fn parse_property_field(
        &self,
        raw_field: &RawField,
        property_key: &str,
        expects_quantity: bool,
    ) -> Vec<Property> {
        if !expects_quantity || !raw_field.contains_digit() {
            return self.passthrough_text(raw_field, property_key);
        }

        let mut resolved = Vec::new();
        for item in raw_field.items() {
            for segment in item.split(';') {
                let normalized = self.normalizer.normalize(segment);
                if normalized.is_empty() {
                    continue;
                }
                match self.resolver.resolve(&normalized) {
                    Some(r) => resolved.push(r),
                    None => trace!(
                        "Dropping unparseable fragment '{}' for '{}'",
                        normalized,
                        property_key
                    ),
                }
            }
        }

        if resolved.is_empty() {
            debug!("No parseable fragments for '{}'", property_key);
            return Vec::new();
        }

        let policy = self
            .unit_policies
            .get(property_key)
            .cloned()
            .unwrap_or_default();

        let any_conditioned = resolved.iter().any(|r| r.condition().is_some());
        if any_conditioned {
            // differently-conditioned measurements are all kept, one
            // property per resolved pair, never reduced
            resolved
                .into_iter()
                .filter_map(|r| self.assemble_one(r, property_key, &policy))
                .collect()
        } else {
            let values = resolved.into_iter().map(|r| r.value().clone()).collect();
            self.reducer
                .reduce(values)
                .and_then(|q| self.finalize_quantity(q, property_key, &policy))
                .map(|q| vec![Property::new(property_key, PropertyValue::Quantity(q))])
                .unwrap_or_default()
        }
    }

    fn passthrough_text(&self, raw_field: &RawField, property_key: &str) -> Vec<Property> {
        let value = match raw_field {
            RawField::Single(s) if s.trim().is_empty() => return Vec::new(),
            RawField::Single(s) => PropertyValue::Text(s.clone()),
            RawField::Multiple(v) => {
                let kept: Vec<String> =
                    v.iter().filter(|s| !s.trim().is_empty()).cloned().collect();
                match kept.len() {
                    0 => return Vec::new(),
                    1 => PropertyValue::Text(kept.into_iter().next().unwrap_or_default()),
                    _ => PropertyValue::TextList(kept),
                }
            }
        };
        vec![Property::new(property_key, value)]
    }

    fn assemble_one(
        &self,
        resolved: Resolved,
        property_key: &str,
        policy: &UnitPolicy,
    ) -> Option<Property> {
        let (value, condition_value) = match resolved {
            Resolved::Single(q) => (q, None),
            Resolved::WithCondition { value, condition } => (value, Some(condition)),
        };

        let value = self.finalize_quantity(value, property_key, policy)?;

        // losing a condition must never lose the primary measurement
        let conditions = match condition_value {
            Some(cv) => match self.condition_keys.condition_for(cv) {
                Some(c) => vec![c],
                None => {
                    debug!(
                        "No condition key matches condition dimension for '{}'",
                        property_key
                    );
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Some(Property::with_conditions(
            property_key,
            PropertyValue::Quantity(value),
            conditions,
        ))
    }

    // Canonical unit pass. Conversion failure keeps the original-unit value;
    // the only dropped case is a dimensionless value where the key requires
    // a unit and declares no assumed one.
    fn finalize_quantity(
        &self,
        quantity: Quantity,
        property_key: &str,
        policy: &UnitPolicy,
    ) -> Option<Quantity> {
        let quantity = if quantity.is_dimensionless() {
            match (&policy.assumed, &policy.canonical) {
                (Some(assumed), _) => Quantity::new(quantity.magnitude(), assumed.clone()),
                (None, Some(_)) => {
                    debug!(
                        "Dropping dimensionless value for '{}' which requires a unit",
                        property_key
                    );
                    return None;
                }
                (None, None) => quantity,
            }
        } else {
            quantity
        };

        match &policy.canonical {
            Some(canonical) => match quantity.convert(canonical) {
                Ok(converted) => Some(converted),
                Err(e) => {
                    info!(
                        "Keeping original unit for '{}': canonical conversion failed ({})",
                        property_key, e
                    );
                    Some(quantity)
                }
            },
            None => Some(quantity),
        }
    }
}

//! Data models for extracted chemical records
//!
//! Output-side types of the extraction pipeline: a `ChemicalRecord` pairs an
//! `Identity` block with a list of `Property` entries. Property values are
//! either typed quantities or retained free text; measurement conditions are
//! attached as validated `Condition` entries.

use crate::app::services::unit_registry::Quantity;
use serde::Serialize;

/// Chemical identity block extracted from a PubChem record
///
/// All fields except the CID are optional; records vary widely in which
/// identifiers depositors supply.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Identity {
    /// PubChem compound identifier
    pub cid: Option<u64>,

    /// Preferred name (the record title)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Cleaned depositor-supplied synonyms, preferred name first
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,

    /// CAS registry number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cas: Option<String>,

    /// Canonical SMILES string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smiles: Option<String>,

    /// InChI identifier (prefix stripped)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inchi: Option<String>,

    /// InChI key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inchi_key: Option<String>,

    /// Molecular formula
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chem_formula: Option<String>,
}

/// A measurement condition attached to a property value
///
/// Constructed only through
/// [`ConditionKeyRegistry`](crate::app::services::property_assembler::ConditionKeyRegistry),
/// which validates the key and its expected dimension. An invalid key or a
/// value of the wrong dimensionality never produces a `Condition`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condition {
    key: String,
    value: Quantity,
    #[serde(skip_serializing_if = "Option::is_none")]
    uncer: Option<Quantity>,
}

impl Condition {
    /// Create a condition from validated parts (registry internal)
    pub(crate) fn new(key: impl Into<String>, value: Quantity) -> Self {
        Self {
            key: key.into(),
            value,
            uncer: None,
        }
    }

    /// Attach an uncertainty quantity (registry internal)
    pub(crate) fn with_uncertainty(mut self, uncer: Quantity) -> Self {
        self.uncer = Some(uncer);
        self
    }

    /// Condition key name
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Condition value
    pub fn value(&self) -> &Quantity {
        &self.value
    }

    /// Uncertainty of the condition value, when reported
    pub fn uncertainty(&self) -> Option<&Quantity> {
        self.uncer.as_ref()
    }
}

/// Value of an extracted property
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Parsed physical quantity
    Quantity(Quantity),
    /// Retained free text (non-numeric fields, unparseable fragments)
    Text(String),
    /// Multiple retained text values
    TextList(Vec<String>),
}

impl PropertyValue {
    /// The quantity, when this value is one
    pub fn as_quantity(&self) -> Option<&Quantity> {
        match self {
            PropertyValue::Quantity(q) => Some(q),
            _ => None,
        }
    }

    /// The text, when this value is one
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// One extracted property with optional measurement conditions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    /// Property key from the heading table
    pub key: String,

    /// Parsed or retained value
    pub value: PropertyValue,

    /// Uncertainty of the value, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uncer: Option<Quantity>,

    /// Approach or source of the property data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Conditions the value was measured under
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}

impl Property {
    /// Create a property with no conditions
    pub fn new(key: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            key: key.into(),
            value,
            uncer: None,
            method: None,
            conditions: Vec::new(),
        }
    }

    /// Create a property with conditions
    pub fn with_conditions(
        key: impl Into<String>,
        value: PropertyValue,
        conditions: Vec<Condition>,
    ) -> Self {
        Self {
            key: key.into(),
            value,
            uncer: None,
            method: None,
            conditions,
        }
    }

    /// Attach an uncertainty quantity
    pub fn with_uncertainty(mut self, uncer: Quantity) -> Self {
        self.uncer = Some(uncer);
        self
    }

    /// Attach the approach or source of the data
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }
}

/// A complete extracted chemical record
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChemicalRecord {
    /// Identity block
    pub identity: Identity,

    /// Extracted properties
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
}

impl ChemicalRecord {
    /// Create an empty record for a CID
    pub fn new(cid: u64) -> Self {
        Self {
            identity: Identity {
                cid: Some(cid),
                ..Default::default()
            },
            properties: Vec::new(),
        }
    }

    /// All properties stored under a key
    pub fn properties_for(&self, key: &str) -> Vec<&Property> {
        self.properties.iter().filter(|p| p.key == key).collect()
    }
}

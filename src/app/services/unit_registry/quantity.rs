//! Units and quantities
//!
//! A `Unit` carries a dimension vector plus the affine mapping (scale and
//! offset) from the unit onto SI base units. A `Quantity` pairs a numeric
//! magnitude with a `Unit` and is immutable once constructed: conversions
//! produce new quantities. Only the unit registry constructs non-trivial
//! units; the parsing pipeline never builds them by hand.

use super::dimension::Dimension;
use crate::{Error, Result};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// A resolved physical unit
///
/// The mapping to SI base units is affine: `base = magnitude * scale + offset`.
/// Offsets are only ever non-zero for the absolute temperature units
/// (degC, degF).
#[derive(Debug, Clone)]
pub struct Unit {
    expression: String,
    dimension: Dimension,
    scale: f64,
    offset: f64,
}

impl Unit {
    /// Create a unit from its resolved parts (registry internal)
    pub(crate) fn new(
        expression: impl Into<String>,
        dimension: Dimension,
        scale: f64,
        offset: f64,
    ) -> Self {
        Self {
            expression: expression.into(),
            dimension,
            scale,
            offset,
        }
    }

    /// The dimensionless unit
    pub fn dimensionless() -> Self {
        Self::new("", Dimension::NONE, 1.0, 0.0)
    }

    /// The SI base unit for a dimension (scale 1, no offset)
    pub fn base(dimension: Dimension) -> Self {
        Self::new(dimension.to_string(), dimension, 1.0, 0.0)
    }

    /// Unit expression as resolved from the source text
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Dimension vector of this unit
    pub fn dimensionality(&self) -> Dimension {
        self.dimension
    }

    /// Multiplicative factor onto SI base units
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Additive offset onto SI base units (temperature units only)
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Check whether this unit is dimensionless
    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_dimensionless()
    }
}

// Units compare by physical meaning, not by spelling: "g/ml" and "g/cm3"
// are the same unit.
impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension
            && self.scale == other.scale
            && self.offset == other.offset
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// A numeric magnitude paired with a physical unit
///
/// Immutable once constructed. Produced by the quantity tokenizer and the
/// unit registry; downstream components only convert and compare.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    magnitude: f64,
    unit: Unit,
}

impl Quantity {
    /// Create a quantity from a magnitude and a resolved unit
    pub fn new(magnitude: f64, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    /// Create a dimensionless quantity
    pub fn dimensionless(magnitude: f64) -> Self {
        Self::new(magnitude, Unit::dimensionless())
    }

    /// Numeric magnitude in this quantity's own unit
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// The unit of this quantity
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Dimension vector of this quantity's unit
    pub fn dimensionality(&self) -> Dimension {
        self.unit.dimensionality()
    }

    /// Check whether this quantity is dimensionless
    pub fn is_dimensionless(&self) -> bool {
        self.unit.is_dimensionless()
    }

    /// Magnitude expressed in SI base units
    pub fn base_magnitude(&self) -> f64 {
        self.magnitude * self.unit.scale() + self.unit.offset()
    }

    /// Convert to SI base units of the same dimension
    pub fn to_base_units(&self) -> Quantity {
        Quantity::new(self.base_magnitude(), Unit::base(self.dimensionality()))
    }

    /// Convert to a compatible target unit
    ///
    /// Fails with `IncompatibleDimension` when the dimension vectors differ.
    pub fn convert(&self, target: &Unit) -> Result<Quantity> {
        if self.dimensionality() != target.dimensionality() {
            return Err(Error::incompatible_dimension(
                format!("{} [{}]", self.unit, self.dimensionality()),
                format!("{} [{}]", target, target.dimensionality()),
            ));
        }

        let magnitude = (self.base_magnitude() - target.offset()) / target.scale();
        Ok(Quantity::new(magnitude, target.clone()))
    }

    /// Absolute difference to another quantity, in SI base units
    ///
    /// Fails with `IncompatibleDimension` when the dimension vectors differ.
    pub fn base_difference(&self, other: &Quantity) -> Result<f64> {
        if self.dimensionality() != other.dimensionality() {
            return Err(Error::incompatible_dimension(
                self.dimensionality().to_string(),
                other.dimensionality().to_string(),
            ));
        }
        Ok((self.base_magnitude() - other.base_magnitude()).abs())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.expression().is_empty() {
            write!(f, "{}", self.magnitude)
        } else {
            write!(f, "{} {}", self.magnitude, self.unit)
        }
    }
}

// Serialized as {"value": 0.87, "unit": "g/ml"} for the JSONL output format.
impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &self.magnitude)?;
        state.serialize_field("unit", self.unit.expression())?;
        state.end()
    }
}

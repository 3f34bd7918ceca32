//! Condition key registry
//!
//! A closed vocabulary of environmental condition keys (`temp`, `pres`,
//! `time`, ...), each declaring exactly one expected physical dimension.
//! The registry is built once at pipeline construction, resolving every
//! declared unit through the unit registry; a malformed table entry fails
//! there and then. Free-form keys are allowed only with the `x_` prefix and
//! carry no dimension constraint.

use crate::app::models::Condition;
use crate::app::services::unit_registry::{Dimension, Quantity, Unit, UnitRegistry};
use crate::constants::{ConditionKeyDef, CONDITION_KEYS, CUSTOM_CONDITION_PREFIX};
use crate::{Error, Result};

/// One registered condition key with its resolved unit
#[derive(Debug, Clone)]
pub struct ConditionKey {
    name: &'static str,
    unit: Unit,
}

impl ConditionKey {
    /// Condition key name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Expected dimension of values under this key
    pub fn dimension(&self) -> Dimension {
        self.unit.dimensionality()
    }
}

/// Ordered registry of condition keys, matched by dimensionality
#[derive(Debug)]
pub struct ConditionKeyRegistry {
    keys: Vec<ConditionKey>,
}

impl ConditionKeyRegistry {
    /// Build the registry from the built-in key table
    ///
    /// Every declared unit is resolved up front; an unresolvable entry is a
    /// configuration error.
    pub fn new(units: &UnitRegistry) -> Result<Self> {
        let mut keys = Vec::with_capacity(CONDITION_KEYS.len());
        for def in CONDITION_KEYS {
            keys.push(Self::build_key(units, def)?);
        }
        Ok(Self { keys })
    }

    fn build_key(units: &UnitRegistry, def: &ConditionKeyDef) -> Result<ConditionKey> {
        let unit = units.resolve(def.unit).map_err(|e| {
            Error::configuration(format!(
                "Condition key '{}' declares unresolvable unit '{}': {}",
                def.key, def.unit, e
            ))
        })?;
        Ok(ConditionKey {
            name: def.key,
            unit,
        })
    }

    /// All registered keys, in declaration order
    pub fn keys(&self) -> &[ConditionKey] {
        &self.keys
    }

    /// Look up a key by name
    pub fn get(&self, name: &str) -> Option<&ConditionKey> {
        self.keys.iter().find(|k| k.name == name)
    }

    /// First registered key whose dimension matches, in declaration order
    pub fn match_dimension(&self, dimension: Dimension) -> Option<&ConditionKey> {
        self.keys.iter().find(|k| k.dimension() == dimension)
    }

    /// Build a condition by matching a resolved value's dimensionality
    ///
    /// Returns `None` when no registered key matches; the caller keeps the
    /// bare value and drops only the condition.
    pub fn condition_for(&self, value: Quantity) -> Option<Condition> {
        let key = self.match_dimension(value.dimensionality())?;
        Some(Condition::new(key.name, value))
    }

    /// Build a condition under an explicit key, validating its dimension
    ///
    /// Keys outside the registry are only accepted with the free-form
    /// prefix, and then carry no dimension constraint.
    pub fn condition(&self, key: &str, value: Quantity) -> Result<Condition> {
        match self.get(key) {
            Some(registered) => {
                if registered.dimension() != value.dimensionality() {
                    return Err(Error::condition_dimension_mismatch(
                        key,
                        registered.dimension().to_string(),
                        value.dimensionality().to_string(),
                    ));
                }
                Ok(Condition::new(key, value))
            }
            None if key.starts_with(CUSTOM_CONDITION_PREFIX) => Ok(Condition::new(key, value)),
            None => Err(Error::unknown_condition_key(key)),
        }
    }

    /// Build a condition carrying an uncertainty quantity
    ///
    /// The uncertainty is validated against the value's dimensionality, so
    /// a temperature spread cannot be attached to a pressure reading.
    pub fn condition_with_uncertainty(
        &self,
        key: &str,
        value: Quantity,
        uncer: Quantity,
    ) -> Result<Condition> {
        if uncer.dimensionality() != value.dimensionality() {
            return Err(Error::condition_dimension_mismatch(
                key,
                value.dimensionality().to_string(),
                uncer.dimensionality().to_string(),
            ));
        }
        Ok(self.condition(key, value)?.with_uncertainty(uncer))
    }
}

//! Tests for the condition key registry

use super::create_test_registry;
use crate::app::services::property_assembler::ConditionKeyRegistry;
use crate::app::services::unit_registry::Dimension;
use crate::Error;

#[test]
fn test_registry_builds_from_table() {
    let units = create_test_registry();
    let keys = ConditionKeyRegistry::new(&units).unwrap();
    assert!(keys.get("temp").is_some());
    assert!(keys.get("pres").is_some());
    assert!(keys.get("time").is_some());
    assert!(keys.get("nonexistent").is_none());
}

#[test]
fn test_match_by_dimension() {
    let units = create_test_registry();
    let keys = ConditionKeyRegistry::new(&units).unwrap();

    let key = keys.match_dimension(Dimension::TEMPERATURE).unwrap();
    assert_eq!(key.name(), "temp");

    let key = keys.match_dimension(Dimension::PRESSURE).unwrap();
    assert_eq!(key.name(), "pres");

    assert!(keys.match_dimension(Dimension::DENSITY).is_none());
}

#[test]
fn test_condition_for_matching_value() {
    let units = create_test_registry();
    let keys = ConditionKeyRegistry::new(&units).unwrap();

    let value = units.quantity(68.0, "degF").unwrap();
    let condition = keys.condition_for(value).unwrap();
    assert_eq!(condition.key(), "temp");
    assert_eq!(condition.value().magnitude(), 68.0);
}

#[test]
fn test_condition_for_unmatched_dimension_is_none() {
    let units = create_test_registry();
    let keys = ConditionKeyRegistry::new(&units).unwrap();

    let value = units.quantity(0.87, "g/ml").unwrap();
    assert!(keys.condition_for(value).is_none());
}

#[test]
fn test_explicit_condition_validates_dimension() {
    let units = create_test_registry();
    let keys = ConditionKeyRegistry::new(&units).unwrap();

    let temp = units.quantity(25.0, "degC").unwrap();
    assert!(keys.condition("temp", temp.clone()).is_ok());

    let err = keys.condition("pres", temp).unwrap_err();
    assert!(matches!(err, Error::ConditionDimensionMismatch { .. }));
}

#[test]
fn test_unknown_key_rejected() {
    let units = create_test_registry();
    let keys = ConditionKeyRegistry::new(&units).unwrap();

    let value = units.quantity(1.0, "V").unwrap();
    let err = keys.condition("voltage", value).unwrap_err();
    assert!(matches!(err, Error::UnknownConditionKey { .. }));
}

#[test]
fn test_free_form_prefixed_key_accepted() {
    let units = create_test_registry();
    let keys = ConditionKeyRegistry::new(&units).unwrap();

    let value = units.quantity(7.4, "").unwrap();
    let condition = keys.condition("x_ph", value).unwrap();
    assert_eq!(condition.key(), "x_ph");
}

#[test]
fn test_declaration_order_breaks_dimension_overlap() {
    let units = create_test_registry();
    let keys = ConditionKeyRegistry::new(&units).unwrap();

    // light_power and light_power_e share the power dimension; the first
    // declared wins dimension matching
    let key = keys.match_dimension(Dimension::POWER).unwrap();
    assert_eq!(key.name(), "light_power");

    let key = keys.match_dimension(Dimension::FREQUENCY).unwrap();
    assert_eq!(key.name(), "stirring");
}

#[test]
fn test_electrical_light_power_under_explicit_key() {
    let units = create_test_registry();
    let keys = ConditionKeyRegistry::new(&units).unwrap();

    let value = units.quantity(60.0, "W").unwrap();
    let condition = keys.condition("light_power_e", value).unwrap();
    assert_eq!(condition.key(), "light_power_e");
}

#[test]
fn test_condition_with_uncertainty() {
    let units = create_test_registry();
    let keys = ConditionKeyRegistry::new(&units).unwrap();

    let value = units.quantity(100.0, "degC").unwrap();
    let uncer = units.quantity(5.0, "degC").unwrap();
    let condition = keys
        .condition_with_uncertainty("temp", value, uncer)
        .unwrap();
    assert_eq!(condition.key(), "temp");
    assert_eq!(condition.uncertainty().unwrap().magnitude(), 5.0);
}

#[test]
fn test_condition_uncertainty_dimension_must_match_value() {
    let units = create_test_registry();
    let keys = ConditionKeyRegistry::new(&units).unwrap();

    let value = units.quantity(100.0, "degC").unwrap();
    let uncer = units.quantity(1.0, "atm").unwrap();
    let err = keys
        .condition_with_uncertainty("temp", value, uncer)
        .unwrap_err();
    assert!(matches!(err, Error::ConditionDimensionMismatch { .. }));
}

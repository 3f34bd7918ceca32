//! Tests for the quantity parser module

pub mod normalizer_tests;
pub mod reducer_tests;

use super::{MultiValueReducer, QuantityTokenizer, RangeConditionResolver, TextNormalizer};
use crate::app::services::unit_registry::{Quantity, UnitRegistry};
use std::sync::Arc;

/// Relative tolerance for floating point comparisons
pub const EPSILON: f64 = 1e-9;

/// Assert two floats are equal within a relative tolerance
pub fn assert_close(actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() < EPSILON * scale,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// Create a normalizer with the default PubChem configuration
pub fn create_test_normalizer() -> TextNormalizer {
    TextNormalizer::with_defaults().unwrap()
}

/// Create a tokenizer over a fresh unit registry
pub fn create_test_tokenizer() -> QuantityTokenizer {
    QuantityTokenizer::new(Arc::new(UnitRegistry::new()))
}

/// Create a resolver over a fresh tokenizer
pub fn create_test_resolver() -> RangeConditionResolver {
    RangeConditionResolver::new(create_test_tokenizer())
}

/// Create a reducer
pub fn create_test_reducer() -> MultiValueReducer {
    MultiValueReducer::new()
}

/// Create a quantity from a magnitude and unit text
pub fn create_test_quantity(magnitude: f64, unit: &str) -> Quantity {
    UnitRegistry::new().quantity(magnitude, unit).unwrap()
}

//! Tests for the property assembler module

pub mod condition_keys_tests;

use super::PropertyAssembler;
use crate::app::services::unit_registry::UnitRegistry;

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

/// Create an assembler with the default PubChem configuration
pub fn create_test_assembler() -> PropertyAssembler {
    PropertyAssembler::with_defaults().unwrap()
}

/// Create a unit registry for testing
pub fn create_test_registry() -> UnitRegistry {
    UnitRegistry::new()
}

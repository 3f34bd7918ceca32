//! Tests for the unit registry module

pub mod registry_tests;

use super::UnitRegistry;

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

/// Create a registry for testing
pub fn create_test_registry() -> UnitRegistry {
    UnitRegistry::new()
}

//! Tests for unit expression resolution

use super::{assert_close, create_test_registry};
use crate::Error;
use crate::app::services::unit_registry::dimension::Dimension;

#[test]
fn test_resolve_simple_atoms() {
    let registry = create_test_registry();

    let gram = registry.resolve("g").unwrap();
    assert_eq!(gram.dimensionality(), Dimension::MASS);
    assert_close(gram.scale(), 1e-3);

    let pascal = registry.resolve("Pa").unwrap();
    assert_eq!(pascal.dimensionality(), Dimension::PRESSURE);
    assert_close(pascal.scale(), 1.0);
}

#[test]
fn test_resolve_prefixed_atoms() {
    let registry = create_test_registry();

    let kpa = registry.resolve("kPa").unwrap();
    assert_eq!(kpa.dimensionality(), Dimension::PRESSURE);
    assert_close(kpa.scale(), 1000.0);

    let ml = registry.resolve("ml").unwrap();
    assert_eq!(ml.dimensionality(), Dimension::VOLUME);
    assert_close(ml.scale(), 1e-6);

    let nm = registry.resolve("nm").unwrap();
    assert_eq!(nm.dimensionality(), Dimension::LENGTH);
    assert_close(nm.scale(), 1e-9);
}

#[test]
fn test_direct_lookup_beats_prefix_split() {
    let registry = create_test_registry();

    // "min" is minute, not milli-inch
    let min = registry.resolve("min").unwrap();
    assert_eq!(min.dimensionality(), Dimension::TIME);
    assert_close(min.scale(), 60.0);

    // "mmHg" is the pressure unit, not a prefix chain
    let mmhg = registry.resolve("mmHg").unwrap();
    assert_eq!(mmhg.dimensionality(), Dimension::PRESSURE);
    assert_close(mmhg.scale(), 133.322387415);
}

#[test]
fn test_resolve_compound_expressions() {
    let registry = create_test_registry();

    let density = registry.resolve("g/cm3").unwrap();
    assert_eq!(density.dimensionality(), Dimension::DENSITY);
    assert_close(density.scale(), 1000.0);

    let density_caret = registry.resolve("g/cm^3").unwrap();
    assert_eq!(density_caret, density);

    let si_density = registry.resolve("kg/m3").unwrap();
    assert_eq!(si_density.dimensionality(), Dimension::DENSITY);
    assert_close(si_density.scale(), 1.0);
}

#[test]
fn test_resolve_bracketed_group() {
    let registry = create_test_registry();

    let unit = registry.resolve("g/[mol*s]").unwrap();
    assert_eq!(
        unit.dimensionality(),
        Dimension::MASS / (Dimension::AMOUNT * Dimension::TIME)
    );
    assert_close(unit.scale(), 1e-3);

    // whitespace inside the expression is ignored
    let spaced = registry.resolve("g / [mol * s]").unwrap();
    assert_eq!(spaced, unit);
}

#[test]
fn test_resolve_extreme_exponents_saturate() {
    let registry = create_test_registry();

    // nonsense input; must clamp the dimension vector rather than wrap
    let unit = registry.resolve("(m^100)^2").unwrap();
    assert_eq!(unit.dimensionality(), Dimension::LENGTH.pow(127));
}

#[test]
fn test_resolve_fused_run_segmentation() {
    let registry = create_test_registry();

    // "gcm-3" segments into g * cm^-3
    let unit = registry.resolve("gcm-3").unwrap();
    assert_eq!(unit.dimensionality(), Dimension::DENSITY);
    assert_close(unit.scale(), 1000.0);
}

#[test]
fn test_resolve_temperature_units() {
    let registry = create_test_registry();

    let celsius = registry.resolve("degC").unwrap();
    assert_eq!(celsius.dimensionality(), Dimension::TEMPERATURE);
    assert_close(celsius.offset(), 273.15);

    let fahrenheit = registry.resolve("degF").unwrap();
    assert_close(fahrenheit.scale(), 5.0 / 9.0);

    let kelvin = registry.resolve("K").unwrap();
    assert_close(kelvin.offset(), 0.0);
}

#[test]
fn test_offset_unit_in_compound_expression_fails() {
    let registry = create_test_registry();

    let result = registry.resolve("degC/s");
    assert!(matches!(result, Err(Error::OffsetUnit { .. })));

    let result = registry.resolve("degF2");
    assert!(matches!(result, Err(Error::OffsetUnit { .. })));
}

#[test]
fn test_unknown_atom_fails_as_unresolved() {
    let registry = create_test_registry();

    let result = registry.resolve("xyzzy");
    assert!(matches!(result, Err(Error::UnresolvedUnit { .. })));

    // unknown atom next to an offset unit is still an unresolved error
    let result = registry.resolve("°C/D");
    assert!(matches!(result, Err(Error::UnresolvedUnit { .. })));
}

#[test]
fn test_empty_expression_is_dimensionless() {
    let registry = create_test_registry();
    let unit = registry.resolve("").unwrap();
    assert!(unit.is_dimensionless());
    assert_close(unit.scale(), 1.0);
}

#[test]
fn test_resolve_pressure_aliases() {
    let registry = create_test_registry();

    let torr = registry.resolve("torr").unwrap();
    let mmhg = registry.resolve("mmHg").unwrap();
    assert_eq!(torr.dimensionality(), mmhg.dimensionality());
    // torr and mmHg differ only past the 7th significant figure
    assert!((torr.scale() - mmhg.scale()).abs() < 1e-4);

    let atm = registry.resolve("atm").unwrap();
    assert_close(atm.scale(), 101_325.0);
}

#[test]
fn test_quantity_shorthand() {
    let registry = create_test_registry();
    let q = registry.quantity(20.8, "mmHg").unwrap();
    assert_close(q.magnitude(), 20.8);
    assert_eq!(q.dimensionality(), Dimension::PRESSURE);
}

//! Tests for the multi-value reducer

use super::{assert_close, create_test_quantity, create_test_reducer};

#[test]
fn test_empty_list_is_none() {
    let reducer = create_test_reducer();
    assert!(reducer.reduce(vec![]).is_none());
}

#[test]
fn test_singleton_returned_unchanged() {
    let reducer = create_test_reducer();
    let q = create_test_quantity(1000.0, "kg/m3");
    let reduced = reducer.reduce(vec![q.clone()]).unwrap();
    assert_eq!(reduced, q);
}

#[test]
fn test_two_items_returns_first_unreduced() {
    let reducer = create_test_reducer();
    let first = create_test_quantity(1000.0, "kg/m3");
    let second = create_test_quantity(1050.0, "kg/m3");
    let reduced = reducer.reduce(vec![first.clone(), second]).unwrap();
    assert_eq!(reduced, first);
    assert_close(reduced.magnitude(), 1000.0);
}

#[test]
fn test_outlier_excluded_from_three_or_more() {
    let reducer = create_test_reducer();
    let items = vec![
        create_test_quantity(10.0, "kPa"),
        create_test_quantity(11.0, "kPa"),
        create_test_quantity(9.0, "kPa"),
        create_test_quantity(1000.0, "kPa"),
    ];
    let reduced = reducer.reduce(items).unwrap();
    assert!(reduced.magnitude() >= 9.0 && reduced.magnitude() <= 11.0);
}

#[test]
fn test_result_always_drawn_from_input() {
    let reducer = create_test_reducer();
    let items = vec![
        create_test_quantity(10.0, "degC"),
        create_test_quantity(12.0, "degC"),
        create_test_quantity(14.0, "degC"),
    ];
    let reduced = reducer.reduce(items).unwrap();
    assert!([10.0, 12.0, 14.0].contains(&reduced.magnitude()));
}

#[test]
fn test_mixed_units_compared_in_base_terms() {
    let reducer = create_test_reducer();
    // 1 atm and 101 kPa agree once converted; 10 Pa is the outlier
    let items = vec![
        create_test_quantity(1.0, "atm"),
        create_test_quantity(101.0, "kPa"),
        create_test_quantity(10.0, "Pa"),
    ];
    let reduced = reducer.reduce(items).unwrap();
    assert!(reduced.base_magnitude() > 100_000.0);
}

#[test]
fn test_dominant_dimension_group_wins() {
    let reducer = create_test_reducer();
    let items = vec![
        create_test_quantity(100.0, "degC"),
        create_test_quantity(1.0, "atm"),
        create_test_quantity(101.0, "degC"),
        create_test_quantity(99.0, "degC"),
    ];
    let reduced = reducer.reduce(items).unwrap();
    assert_eq!(
        reduced.dimensionality(),
        create_test_quantity(1.0, "K").dimensionality()
    );
}

#[test]
fn test_dimension_tie_goes_to_first_group() {
    let reducer = create_test_reducer();
    let items = vec![
        create_test_quantity(25.0, "degC"),
        create_test_quantity(1.0, "atm"),
        create_test_quantity(26.0, "degC"),
        create_test_quantity(1.1, "atm"),
    ];
    let reduced = reducer.reduce(items).unwrap();
    assert_eq!(
        reduced.dimensionality(),
        create_test_quantity(1.0, "K").dimensionality()
    );
}

//! Tests for the text normalizer

use super::create_test_normalizer;
use crate::config::NormalizerConfig;
use crate::app::services::quantity_parser::TextNormalizer;

#[test]
fn test_citation_phrase_removed() {
    let normalizer = create_test_normalizer();
    assert_eq!(
        normalizer.normalize("20 mm Hg at 77° F (NTP, 1992)"),
        "20 mm Hg at 77 deg F"
    );
}

#[test]
fn test_at_symbol_rewritten() {
    let normalizer = create_test_normalizer();
    assert_eq!(normalizer.normalize("0.87 g/ml @ 25 °C"), "0.87 g/ml at 25 degC");
}

#[test]
fn test_mojibake_degree_sign_repaired() {
    let normalizer = create_test_normalizer();
    assert_eq!(normalizer.normalize("115.2 Â°C"), "115.2 degC");
}

#[test]
fn test_unicode_minus_rewritten() {
    let normalizer = create_test_normalizer();
    assert_eq!(normalizer.normalize("\u{2212}15 °C"), "-15 degC");
}

#[test]
fn test_leading_label_stripped() {
    let normalizer = create_test_normalizer();
    assert_eq!(
        normalizer.normalize("Vapor pressure, kPa at 20 °C: 0.0013"),
        "20 degC: 0.0013"
    );
}

#[test]
fn test_truncated_at_equals_sign() {
    let normalizer = create_test_normalizer();
    assert_eq!(normalizer.normalize("0.9168 g/cc = 916.8 kg/m3"), "0.9168 g/cc");
}

#[test]
fn test_digitless_parenthetical_dropped() {
    let normalizer = create_test_normalizer();
    assert_eq!(normalizer.normalize("1.05 g/ml (lit.)"), "1.05 g/ml");
}

#[test]
fn test_digit_parenthetical_promoted_to_condition() {
    let normalizer = create_test_normalizer();
    assert_eq!(
        normalizer.normalize("20.8 mm Hg (25 °C)"),
        "20.8 mm Hg at 25 degC"
    );
}

#[test]
fn test_parenthetical_holding_only_number_unwrapped() {
    let normalizer = create_test_normalizer();
    assert_eq!(normalizer.normalize("(0.87 g/ml)"), "0.87 g/ml");
}

#[test]
fn test_closed_cup_qualifier_removed() {
    let normalizer = create_test_normalizer();
    assert_eq!(normalizer.normalize("52 °F (closed cup)"), "52 degF");
}

#[test]
fn test_percent_stripped() {
    let normalizer = create_test_normalizer();
    assert_eq!(normalizer.normalize("96%"), "96");
}

#[test]
fn test_normalization_is_idempotent() {
    let normalizer = create_test_normalizer();
    let inputs = [
        "18 mm Hg at 68 °F ; 20 mm Hg at 77° F (NTP, 1992)",
        "0.87 g/ml @ 25 °C",
        "Vapor pressure, kPa at 20 °C: 0.0013",
        "115.2-115.3 °C",
    ];
    for input in inputs {
        let once = normalizer.normalize(input);
        assert_eq!(normalizer.normalize(&once), once, "input: {}", input);
    }
}

#[test]
fn test_unmatched_text_passes_through() {
    let normalizer = create_test_normalizer();
    assert_eq!(normalizer.normalize("42.3 gcm-3"), "42.3 gcm-3");
}

#[test]
fn test_custom_configuration() {
    let config = NormalizerConfig {
        remove_phrases: vec!["[ref]".to_string()],
        substitutions: vec![("~".to_string(), "".to_string())],
    };
    let normalizer = TextNormalizer::new(&config).unwrap();
    assert_eq!(normalizer.normalize("~12 kPa [ref]"), "12 kPa");
}

#[test]
fn test_invalid_configuration_fails_at_construction() {
    let config = NormalizerConfig {
        remove_phrases: vec![],
        substitutions: vec![("(open".to_string(), "".to_string())],
    };
    assert!(TextNormalizer::new(&config).is_err());
}

//! Tests for identity extraction and synonym cleanup

use super::create_test_document;
use crate::app::services::record_extractor::identity::{
    clean_names, extract_identity, fix_segmented, most_repeated,
};

#[test]
fn test_extract_identity_fields() {
    let doc = create_test_document();
    let identity = extract_identity(&doc);

    assert_eq!(identity.cid, Some(962));
    assert_eq!(identity.name.as_deref(), Some("Water"));
    assert_eq!(identity.cas.as_deref(), Some("7732-18-5"));
    assert_eq!(identity.smiles.as_deref(), Some("O"));
    assert_eq!(identity.chem_formula.as_deref(), Some("H2O"));
}

#[test]
fn test_inchi_prefix_stripped() {
    let doc = create_test_document();
    let identity = extract_identity(&doc);
    assert_eq!(identity.inchi.as_deref(), Some("1S/H2O/h1H2"));
}

#[test]
fn test_synonym_cleanup_in_extracted_record() {
    let doc = create_test_document();
    let identity = extract_identity(&doc);

    // preferred name first; CAS-like and shouting-case synonyms dropped;
    // "water" deduplicates case-insensitively against "Water"
    assert_eq!(
        identity.names,
        vec!["Water", "Distilled water", "dihydrogen oxide"]
    );
}

#[test]
fn test_clean_names_drops_cas_like_entries() {
    let names = clean_names(
        vec!["benzene".to_string(), "71-43-2".to_string()],
        Some("Benzene"),
    );
    assert_eq!(names, vec!["Benzene"]);
}

#[test]
fn test_clean_names_keeps_at_most_five() {
    let raw: Vec<String> = (0..8).map(|i| format!("synonym alpha beta {}", letter(i))).collect();
    let names = clean_names(raw, None);
    assert_eq!(names.len(), 5);
}

fn letter(i: usize) -> char {
    (b'a' + i as u8) as char
}

#[test]
fn test_clean_names_trims_commas() {
    let names = clean_names(vec![" toluene, ".to_string()], None);
    assert_eq!(names, vec!["toluene"]);
}

#[test]
fn test_fix_segmented_name() {
    assert_eq!(fix_segmented("propane, 2-chloro-"), "2-chloro-propane");
    assert_eq!(fix_segmented("plain name"), "plain name");
    // second part not ending in a hyphen is left alone
    assert_eq!(fix_segmented("acid, acetic"), "acid, acetic");
}

#[test]
fn test_most_repeated_value() {
    let values = vec![
        "H2O".to_string(),
        "HOH".to_string(),
        "H2O".to_string(),
    ];
    assert_eq!(most_repeated(values), Some("H2O".to_string()));
    assert_eq!(most_repeated(vec![]), None);
}

#[test]
fn test_most_repeated_tie_takes_first() {
    let values = vec!["A".to_string(), "B".to_string()];
    assert_eq!(most_repeated(values), Some("A".to_string()));
}

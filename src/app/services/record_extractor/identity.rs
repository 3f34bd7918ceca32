//! Identity extraction and synonym cleanup
//!
//! Pulls the identity block out of a PubChem record: CID, record title,
//! depositor-supplied synonyms, and the structural identifiers declared in
//! the identity heading table. Depositor synonyms are noisy; the cleanup
//! drops CAS-number-looking and shouting-case entries, repairs segmented
//! names, deduplicates case-insensitively, and keeps a short list headed by
//! the preferred name.

use super::section_search::{find_section, record_cid, record_title, section_values};
use crate::app::models::Identity;
use crate::constants::{
    CAS_LIKE_PATTERN, IDENTITY_MAPPINGS, INCHI_PREFIX, SYNONYMS_HEADING, SYNONYM_COLLECT_LIMIT,
    SYNONYM_KEEP_LIMIT,
};
use regex::Regex;
use serde_json::Value;

/// Extract the identity block from a pug_view document
pub fn extract_identity(doc: &Value) -> Identity {
    let mut identity = Identity {
        cid: record_cid(doc),
        name: record_title(doc).map(str::to_string),
        ..Default::default()
    };

    let synonyms = find_section(doc, SYNONYMS_HEADING)
        .map(section_values)
        .unwrap_or_default();
    identity.names = clean_names(
        synonyms.into_iter().take(SYNONYM_COLLECT_LIMIT).collect(),
        identity.name.as_deref(),
    );

    for mapping in IDENTITY_MAPPINGS {
        let value = find_section(doc, mapping.heading)
            .map(section_values)
            .and_then(most_repeated);
        match mapping.key {
            "inchi" => {
                identity.inchi = value.map(|v| {
                    v.strip_prefix(INCHI_PREFIX).map(str::to_string).unwrap_or(v)
                })
            }
            "inchi_key" => identity.inchi_key = value,
            "smiles" => identity.smiles = value,
            "chem_formula" => identity.chem_formula = value,
            "cas" => identity.cas = value,
            _ => {}
        }
    }

    identity
}

/// Reduce multiple reported identifier values to the most repeated one
///
/// Depositors often restate the same identifier; the modal value is taken
/// as authoritative. Ties go to the value encountered first.
pub fn most_repeated(values: Vec<String>) -> Option<String> {
    let mut best: Option<(usize, &String)> = None;
    for value in &values {
        let count = values.iter().filter(|v| *v == value).count();
        if best.is_none_or(|(best_count, _)| count > best_count) {
            best = Some((count, value));
        }
    }
    best.map(|(_, v)| v.clone())
}

/// Clean a raw synonym list into the final `names` field
pub fn clean_names(raw: Vec<String>, preferred: Option<&str>) -> Vec<String> {
    let cas_like = Regex::new(CAS_LIKE_PATTERN).expect("CAS pattern is valid");

    let mut names: Vec<String> = raw
        .into_iter()
        .filter(|name| !cas_like.is_match(name))
        .filter(|name| !is_shouting_case(name))
        .map(|name| name.trim().trim_matches(',').to_string())
        .filter(|name| !name.is_empty())
        .map(|name| fix_segmented(&name))
        .collect();

    if let Some(preferred) = preferred {
        if !names.iter().any(|n| n.as_str() == preferred) {
            names.insert(0, preferred.to_string());
        }
    }

    let mut seen = Vec::new();
    names.retain(|name| {
        let lower = name.to_lowercase();
        if seen.contains(&lower) {
            false
        } else {
            seen.push(lower);
            true
        }
    });

    names.truncate(SYNONYM_KEEP_LIMIT);
    names
}

// A name with cased letters that are all uppercase is depositor shouting
// ("BENZENE"), not a usable synonym.
fn is_shouting_case(name: &str) -> bool {
    let mut has_alpha = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            has_alpha = true;
            if c.is_lowercase() {
                return false;
            }
        }
    }
    has_alpha
}

/// Repair a segmented name: "propane, 2-chloro-" becomes "2-chloro-propane"
///
/// Splits once at the first ", " that sits between a letter and an
/// alphanumeric, and rejoins when the second part ends in a hyphen.
pub fn fix_segmented(name: &str) -> String {
    let bytes: Vec<char> = name.chars().collect();
    for i in 1..bytes.len().saturating_sub(2) {
        if bytes[i] == ','
            && bytes[i + 1] == ' '
            && bytes[i - 1].is_ascii_alphabetic()
            && (bytes[i + 2].is_ascii_alphabetic() || ('1'..='9').contains(&bytes[i + 2]))
        {
            let first: String = bytes[..i].iter().collect();
            let second: String = bytes[i + 2..].iter().collect();
            if second.ends_with('-') {
                return format!("{}{}", second, first);
            }
            break;
        }
    }
    name.to_string()
}

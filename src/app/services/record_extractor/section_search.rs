//! Recursive search over PubChem pug_view JSON
//!
//! PubChem records nest sections arbitrarily deep, each tagged with a
//! `TOCHeading`. Values sit in `Information` entries as either markup
//! strings or `Number`/`Unit` pairs. This module walks the raw
//! `serde_json::Value` tree; nothing here validates the record.

use serde_json::Value;

/// The record object of a pug_view document
pub fn record_root(doc: &Value) -> Option<&Value> {
    doc.get("Record")
}

/// The compound identifier of a record
pub fn record_cid(doc: &Value) -> Option<u64> {
    record_root(doc)?.get("RecordNumber")?.as_u64()
}

/// The record title (the preferred chemical name)
pub fn record_title(doc: &Value) -> Option<&str> {
    record_root(doc)?.get("RecordTitle")?.as_str()
}

/// First section anywhere in the tree with the given `TOCHeading`
pub fn find_section<'a>(doc: &'a Value, heading: &str) -> Option<&'a Value> {
    match doc {
        Value::Object(map) => {
            if map.get("TOCHeading").and_then(Value::as_str) == Some(heading) {
                return Some(doc);
            }
            map.values().find_map(|v| find_section(v, heading))
        }
        Value::Array(items) => items.iter().find_map(|v| find_section(v, heading)),
        _ => None,
    }
}

/// All value strings below a section, in document order
///
/// Collects every `String` leaf and renders `Number` entries as
/// `"<number> <unit>"` composites when a sibling `Unit` is present, so
/// numeric values feed the same text pipeline as markup strings.
pub fn section_values(section: &Value) -> Vec<String> {
    let mut values = Vec::new();
    collect_values(section, &mut values);
    values
}

fn collect_values(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            if let Some(s) = map.get("String").and_then(Value::as_str) {
                out.push(s.to_string());
            }
            if let Some(numbers) = map.get("Number").and_then(Value::as_array) {
                if let Some(first) = numbers.first().and_then(Value::as_f64) {
                    match map.get("Unit").and_then(Value::as_str) {
                        Some(unit) => out.push(format!("{} {}", first, unit)),
                        None => out.push(first.to_string()),
                    }
                }
            }
            for (key, child) in map {
                // String/Number leaves were consumed above
                if key != "String" && key != "Number" {
                    collect_values(child, out);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_values(item, out);
            }
        }
        _ => {}
    }
}

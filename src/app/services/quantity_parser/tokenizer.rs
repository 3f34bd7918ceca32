//! Quantity tokenization
//!
//! Extracts exactly one leading numeric literal plus a trailing unit string
//! from a normalized text fragment and resolves it through the unit registry.
//! Standard exponential notation (`1.5e-3`) is supported; multiplier-dot
//! notation (`66.11·10-62`) is a rejected input class and yields `None`.
//!
//! All failures here are soft: a fragment that does not parse returns `None`
//! and is dropped by the caller.

use crate::app::services::unit_registry::{Quantity, UnitRegistry};
use crate::Error;
use regex::Regex;
use std::sync::Arc;
use tracing::trace;

/// Pattern matching a leading signed numeric literal with optional exponent
const NUMERIC_PATTERN: &str = r"^[+-]?\d+(\.\d+)?([eE][+-]?\d+)?";

/// Extracts a single `number + unit` quantity from a text fragment
#[derive(Debug)]
pub struct QuantityTokenizer {
    registry: Arc<UnitRegistry>,
    numeric: Regex,
    hyphen_product: Regex,
}

impl QuantityTokenizer {
    /// Create a tokenizer backed by a shared unit registry
    pub fn new(registry: Arc<UnitRegistry>) -> Self {
        Self {
            registry,
            numeric: Regex::new(NUMERIC_PATTERN).expect("numeric pattern is valid"),
            hyphen_product: Regex::new(r"([a-zA-Z])-([a-zA-Z])").expect("hyphen pattern is valid"),
        }
    }

    /// Tokenize one fragment into a quantity
    ///
    /// Returns `None` when the fragment has no leading number, when its unit
    /// string cannot be resolved, or when it uses multiplier-dot notation.
    pub fn tokenize(&self, fragment: &str) -> Option<Quantity> {
        let fragment = fragment.trim();
        if fragment.contains('\u{b7}') || fragment.contains('\u{22c5}') {
            trace!("Rejecting multiplier-dot fragment: '{}'", fragment);
            return None;
        }

        let numeric = self.numeric.find(fragment)?;
        let magnitude: f64 = numeric.as_str().parse().ok()?;
        let unit_text = self.fix_unit_text(&fragment[numeric.end()..]);

        match self.registry.resolve(&unit_text) {
            Ok(unit) => Some(Quantity::new(magnitude, unit)),
            Err(Error::OffsetUnit { .. }) => self.retry_offset(magnitude, fragment),
            Err(_) => {
                trace!("Unresolved unit '{}' in fragment '{}'", unit_text, fragment);
                None
            }
        }
    }

    // Unit-token fixups: collapse internal whitespace ("mm Hg" -> "mmHg"),
    // lowercase the LB spelling, trim trailing punctuation, and rewrite a
    // bare hyphen between two unit atoms as multiplication ("g-mol" ->
    // "g*mol"). Hyphen before a digit is left alone so negative exponents
    // ("gcm-3") survive.
    fn fix_unit_text(&self, raw: &str) -> String {
        let mut text: String = raw.split_whitespace().collect();
        text = text.replace("LB", "lb");
        text = self
            .hyphen_product
            .replace_all(&text, "$1*$2")
            .into_owned();
        text.trim_end_matches(['.', ',', ';', ':']).to_string()
    }

    // Temperature fragments sometimes mix the degree word with stray symbols
    // in ways that resolve to an offset unit inside a compound expression.
    // The degree scale is still recoverable from the original letter.
    fn retry_offset(&self, magnitude: f64, fragment: &str) -> Option<Quantity> {
        let forced = if fragment.contains('F') {
            "degF"
        } else if fragment.contains('C') {
            "degC"
        } else {
            return None;
        };
        self.registry.quantity(magnitude, forced).ok()
    }
}

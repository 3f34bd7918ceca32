//! Range and condition resolution
//!
//! Classifies one normalized fragment into the three shapes observed in the
//! source corpus and reduces each into a canonical result:
//!
//! - value with condition: "20 mmHg at 77 degF"
//! - numeric range: "115.2-115.3 degC" (collapsed to the first bound)
//! - plain value: "0.87 g/ml"
//!
//! Detection order matters and first match wins. Semicolon splitting happens
//! upstream in the assembler; a fragment reaching this component holds at
//! most one value-condition pair.

use super::tokenizer::QuantityTokenizer;
use crate::app::services::unit_registry::Quantity;
use regex::Regex;
use tracing::trace;

/// Separator the normalizer guarantees between a value and its condition
const CONDITION_SEPARATOR: &str = " at ";

/// Pattern matching a numeric range ("115.2-115.3", "68 - 70", en dash too)
const RANGE_PATTERN: &str =
    r"(\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)\s*[-\u{2013}]\s*\d+(?:\.\d+)?(?:[eE][+-]?\d+)?";

/// One resolved fragment
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// A bare quantity with no condition
    Single(Quantity),
    /// A quantity measured under a condition value
    WithCondition {
        value: Quantity,
        condition: Quantity,
    },
}

impl Resolved {
    /// The main measured value
    pub fn value(&self) -> &Quantity {
        match self {
            Resolved::Single(q) => q,
            Resolved::WithCondition { value, .. } => value,
        }
    }

    /// The condition value, when one was resolved
    pub fn condition(&self) -> Option<&Quantity> {
        match self {
            Resolved::Single(_) => None,
            Resolved::WithCondition { condition, .. } => Some(condition),
        }
    }
}

/// Resolves normalized fragments into quantities with optional conditions
#[derive(Debug)]
pub struct RangeConditionResolver {
    tokenizer: QuantityTokenizer,
    range: Regex,
}

impl RangeConditionResolver {
    /// Create a resolver around a tokenizer
    pub fn new(tokenizer: QuantityTokenizer) -> Self {
        Self {
            tokenizer,
            range: Regex::new(RANGE_PATTERN).expect("range pattern is valid"),
        }
    }

    /// Resolve one normalized fragment
    ///
    /// Returns `None` when neither side of the fragment yields a quantity.
    pub fn resolve(&self, fragment: &str) -> Option<Resolved> {
        if let Some((left, right)) = fragment.split_once(CONDITION_SEPARATOR) {
            return self.resolve_condition_pair(left, right);
        }
        self.resolve_value(fragment).map(Resolved::Single)
    }

    // Each side of an at-pair may itself be a range, so range collapsing is
    // applied per side. When one side fails to tokenize, the surviving side
    // is returned as a bare value rather than losing the whole fragment.
    fn resolve_condition_pair(&self, left: &str, right: &str) -> Option<Resolved> {
        let value = self.resolve_value(left);
        let condition = self.resolve_value(right);

        match (value, condition) {
            (Some(value), Some(condition)) => Some(Resolved::WithCondition { value, condition }),
            (Some(value), None) => {
                trace!("Condition side failed to tokenize: '{}'", right);
                Some(Resolved::Single(value))
            }
            (None, Some(condition)) => {
                trace!("Value side failed to tokenize: '{}'", left);
                Some(Resolved::Single(condition))
            }
            (None, None) => None,
        }
    }

    // Range policy: keep the first bound, drop the second.
    fn resolve_value(&self, fragment: &str) -> Option<Quantity> {
        let collapsed = match self.range.captures(fragment) {
            Some(caps) => {
                let span = caps.get(0)?;
                let first = caps.get(1)?;
                format!(
                    "{}{}{}",
                    &fragment[..span.start()],
                    first.as_str(),
                    &fragment[span.end()..]
                )
            }
            None => fragment.to_string(),
        };
        self.tokenizer.tokenize(&collapsed)
    }
}

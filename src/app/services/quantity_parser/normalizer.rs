//! Text normalization
//!
//! Cleans one raw property string before any numeric parsing happens. The
//! passes run in a fixed order:
//!
//! 1. Remove configured noise phrases (citations, qualifiers) verbatim
//! 2. Resolve parenthetical spans (drop, unwrap, or promote to a condition)
//! 3. Apply the configured ordered symbol substitutions
//! 4. Strip leading non-numeric label text
//! 5. Truncate at the first `=` (alternate-unit restatements)
//!
//! Normalization never fails and is idempotent: running it on already
//! normalized text is a no-op.

use crate::config::NormalizerConfig;
use crate::constants::LEADING_TEXT_PATTERN;
use crate::{Error, Result};
use regex::Regex;

/// Configurable text cleaner for raw property strings
#[derive(Debug)]
pub struct TextNormalizer {
    remove_phrases: Vec<String>,
    substitutions: Vec<(Regex, String)>,
    parenthetical: Regex,
    leading_text: Regex,
    whitespace: Regex,
}

impl TextNormalizer {
    /// Build a normalizer from configuration
    ///
    /// Compiles every substitution pattern up front. A malformed pattern is a
    /// configuration error and fails here, before any record is processed.
    pub fn new(config: &NormalizerConfig) -> Result<Self> {
        let mut substitutions = Vec::with_capacity(config.substitutions.len());
        for (pattern, replacement) in &config.substitutions {
            let compiled = Regex::new(pattern).map_err(|e| {
                Error::configuration(format!(
                    "Invalid substitution pattern '{}': {}",
                    pattern, e
                ))
            })?;
            substitutions.push((compiled, replacement.clone()));
        }

        Ok(Self {
            remove_phrases: config.remove_phrases.clone(),
            substitutions,
            parenthetical: Regex::new(r"\(([^()]*)\)")
                .map_err(|e| Error::configuration(format!("Invalid parenthetical pattern: {}", e)))?,
            leading_text: Regex::new(LEADING_TEXT_PATTERN)
                .map_err(|e| Error::configuration(format!("Invalid leading-text pattern: {}", e)))?,
            whitespace: Regex::new(r"\s+")
                .map_err(|e| Error::configuration(format!("Invalid whitespace pattern: {}", e)))?,
        })
    }

    /// Build a normalizer with the default PubChem configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(&NormalizerConfig::default())
    }

    /// Normalize one raw property string
    pub fn normalize(&self, text: &str) -> String {
        let mut text = text.to_string();

        for phrase in &self.remove_phrases {
            text = text.replace(phrase.as_str(), "");
        }

        text = self.resolve_parentheticals(&text);

        for (pattern, replacement) in &self.substitutions {
            text = pattern.replace_all(&text, replacement.as_str()).into_owned();
        }

        text = self.leading_text.replace(&text, "").into_owned();

        if let Some((first, _)) = text.split_once('=') {
            text = first.to_string();
        }

        self.whitespace.replace_all(text.trim(), " ").into_owned()
    }

    // Parenthetical spans carry three kinds of content in the source corpus:
    // leftover citation text (no digits, dropped), a measurement condition
    // next to a main value ("20.8 mm Hg (25 °C)", promoted to " at 25 °C"),
    // or the value itself ("(0.87)", unwrapped so the number survives).
    fn resolve_parentheticals(&self, text: &str) -> String {
        if !self.parenthetical.is_match(text) {
            return text.to_string();
        }

        let outside = self.parenthetical.replace_all(text, "");
        let digits_outside = outside.chars().any(|c| c.is_ascii_digit());

        self.parenthetical
            .replace_all(text, |caps: &regex::Captures| {
                let inner = caps[1].trim();
                let inner = inner.strip_prefix("at ").unwrap_or(inner).trim();
                if !inner.chars().any(|c| c.is_ascii_digit()) {
                    String::new()
                } else if digits_outside {
                    format!(" at {}", inner)
                } else {
                    inner.to_string()
                }
            })
            .into_owned()
    }
}

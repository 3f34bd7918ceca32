//! Free-text quantity parsing
//!
//! This service turns scraped property text like "18 mm Hg at 68 °F" into
//! typed quantities. It is built from four small components, applied strictly
//! in order:
//!
//! 1. [`TextNormalizer`] - strips citation noise and canonicalizes symbols
//! 2. [`QuantityTokenizer`] - extracts one number + unit from a fragment
//! 3. [`RangeConditionResolver`] - detects range and at-condition shapes
//! 4. [`MultiValueReducer`] - reduces repeated independent measurements
//!
//! Every component degrades softly: an unparseable fragment becomes `None`
//! and is dropped from the property's result set. The only hard failures are
//! at construction time (malformed normalizer configuration).

pub mod normalizer;
pub mod reducer;
pub mod resolver;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

pub use normalizer::TextNormalizer;
pub use reducer::MultiValueReducer;
pub use resolver::{RangeConditionResolver, Resolved};
pub use tokenizer::QuantityTokenizer;

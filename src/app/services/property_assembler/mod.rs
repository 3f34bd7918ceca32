//! Property assembly service
//!
//! The consumer-facing surface of the parsing pipeline: raw property field
//! in, zero or more finished `Property` records out. Holds the condition
//! key registry and the per-property unit policies, both validated at
//! construction.

pub mod assembler;
pub mod condition_keys;

#[cfg(test)]
pub mod tests;

pub use assembler::{PropertyAssembler, RawField};
pub use condition_keys::{ConditionKey, ConditionKeyRegistry};

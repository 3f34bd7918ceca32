//! Unit registry for resolving and converting physical units
//!
//! This module is the dimensioned-quantity foundation of the processor:
//! - [`dimension`] - SI base-quantity exponent vectors
//! - [`quantity`] - `Unit` and `Quantity` value types with conversion
//! - [`registry`] - token table and unit expression resolution
//!
//! The registry is built once at pipeline construction, is read-only
//! afterwards, and is shared between parallel workers without
//! synchronization.

pub mod dimension;
pub mod quantity;
pub mod registry;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use dimension::Dimension;
pub use quantity::{Quantity, Unit};
pub use registry::UnitRegistry;

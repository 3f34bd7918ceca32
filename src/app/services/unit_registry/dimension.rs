//! Physical dimension vectors
//!
//! A dimension is a vector of exponents over the seven SI base quantities.
//! Two units are compatible (convertible) exactly when their dimension
//! vectors are equal, independent of the specific units involved.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Div, Mul};

/// Number of SI base quantities
const BASE_COUNT: usize = 7;

/// Symbols of the SI base units, index-aligned with the exponent vector
const BASE_SYMBOLS: [&str; BASE_COUNT] = ["m", "kg", "s", "A", "K", "mol", "cd"];

/// Exponent vector over the SI base quantities
///
/// Index order: length, mass, time, electric current, temperature,
/// amount of substance, luminous intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension([i8; BASE_COUNT]);

impl Dimension {
    /// Dimensionless
    pub const NONE: Dimension = Dimension([0; BASE_COUNT]);
    /// Length (m)
    pub const LENGTH: Dimension = Dimension([1, 0, 0, 0, 0, 0, 0]);
    /// Mass (kg)
    pub const MASS: Dimension = Dimension([0, 1, 0, 0, 0, 0, 0]);
    /// Time (s)
    pub const TIME: Dimension = Dimension([0, 0, 1, 0, 0, 0, 0]);
    /// Electric current (A)
    pub const CURRENT: Dimension = Dimension([0, 0, 0, 1, 0, 0, 0]);
    /// Thermodynamic temperature (K)
    pub const TEMPERATURE: Dimension = Dimension([0, 0, 0, 0, 1, 0, 0]);
    /// Amount of substance (mol)
    pub const AMOUNT: Dimension = Dimension([0, 0, 0, 0, 0, 1, 0]);
    /// Luminous intensity (cd)
    pub const LUMINOSITY: Dimension = Dimension([0, 0, 0, 0, 0, 0, 1]);

    /// Pressure (kg / m / s^2)
    pub const PRESSURE: Dimension = Dimension([-1, 1, -2, 0, 0, 0, 0]);
    /// Energy (kg * m^2 / s^2)
    pub const ENERGY: Dimension = Dimension([2, 1, -2, 0, 0, 0, 0]);
    /// Power (kg * m^2 / s^3)
    pub const POWER: Dimension = Dimension([2, 1, -3, 0, 0, 0, 0]);
    /// Force (kg * m / s^2)
    pub const FORCE: Dimension = Dimension([1, 1, -2, 0, 0, 0, 0]);
    /// Volume (m^3)
    pub const VOLUME: Dimension = Dimension([3, 0, 0, 0, 0, 0, 0]);
    /// Mass density (kg / m^3)
    pub const DENSITY: Dimension = Dimension([-3, 1, 0, 0, 0, 0, 0]);
    /// Frequency (1 / s)
    pub const FREQUENCY: Dimension = Dimension([0, 0, -1, 0, 0, 0, 0]);
    /// Electric potential (kg * m^2 / A / s^3)
    pub const POTENTIAL: Dimension = Dimension([2, 1, -3, -1, 0, 0, 0]);
    /// Dynamic viscosity (kg / m / s)
    pub const VISCOSITY: Dimension = Dimension([-1, 1, -1, 0, 0, 0, 0]);

    /// Create a dimension from raw exponents
    pub const fn new(exponents: [i8; BASE_COUNT]) -> Self {
        Self(exponents)
    }

    /// Check whether this is the dimensionless vector
    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(|&e| e == 0)
    }

    /// Raise the dimension to an integer power
    ///
    /// Exponents saturate at the i8 bounds; pathological unit text like
    /// `(m^100)^2` produces a clamped (and unmatchable) dimension instead
    /// of wrapping.
    pub fn pow(&self, exponent: i8) -> Self {
        let mut out = [0i8; BASE_COUNT];
        for (i, e) in self.0.iter().enumerate() {
            out[i] = (i16::from(*e) * i16::from(exponent))
                .clamp(i16::from(i8::MIN), i16::from(i8::MAX)) as i8;
        }
        Self(out)
    }
}

impl Mul for Dimension {
    type Output = Dimension;

    fn mul(self, rhs: Dimension) -> Dimension {
        let mut out = [0i8; BASE_COUNT];
        for i in 0..BASE_COUNT {
            out[i] = self.0[i].saturating_add(rhs.0[i]);
        }
        Dimension(out)
    }
}

impl Div for Dimension {
    type Output = Dimension;

    fn div(self, rhs: Dimension) -> Dimension {
        let mut out = [0i8; BASE_COUNT];
        for i in 0..BASE_COUNT {
            out[i] = self.0[i].saturating_sub(rhs.0[i]);
        }
        Dimension(out)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "dimensionless");
        }

        let mut parts = Vec::new();
        for (i, &exp) in self.0.iter().enumerate() {
            match exp {
                0 => {}
                1 => parts.push(BASE_SYMBOLS[i].to_string()),
                _ => parts.push(format!("{}^{}", BASE_SYMBOLS[i], exp)),
            }
        }
        write!(f, "{}", parts.join("*"))
    }
}

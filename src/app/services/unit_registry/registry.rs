//! Unit token resolution
//!
//! Resolves unit expressions scraped from free text ("g/cm3", "mmHg",
//! "g/[mol*s]", "kPa") into dimensioned units. Resolution works from a table
//! of unit atoms plus SI prefixes, and a small expression grammar:
//! factors separated by `*` or `/`, parenthesized or bracketed groups, and
//! integer exponents written as `^3`, `**3`, or directly appended (`m3`,
//! `cm-3`).
//!
//! Unknown atoms produce `Error::UnresolvedUnit`. An absolute temperature
//! unit (degC/degF) combined with other factors or raised to a power
//! produces `Error::OffsetUnit`, which the tokenizer uses to drive its
//! degF/degC retry.

use super::dimension::Dimension;
use super::quantity::Unit;
use crate::{Error, Result};
use std::collections::HashMap;

/// A single unit atom: dimension plus affine mapping onto SI base units
#[derive(Debug, Clone, Copy)]
struct AtomDef {
    dimension: Dimension,
    scale: f64,
    offset: f64,
}

impl AtomDef {
    const fn linear(dimension: Dimension, scale: f64) -> Self {
        Self {
            dimension,
            scale,
            offset: 0.0,
        }
    }

    const fn affine(dimension: Dimension, scale: f64, offset: f64) -> Self {
        Self {
            dimension,
            scale,
            offset,
        }
    }
}

/// Kelvin offsets for the absolute temperature units
const DEG_C_OFFSET: f64 = 273.15;
const DEG_F_SCALE: f64 = 5.0 / 9.0;
const DEG_F_OFFSET: f64 = 459.67 * DEG_F_SCALE;

/// Unit atom table: token, dimension, scale to SI base, offset
const ATOMS: &[(&str, AtomDef)] = &[
    // length
    ("m", AtomDef::linear(Dimension::LENGTH, 1.0)),
    ("meter", AtomDef::linear(Dimension::LENGTH, 1.0)),
    ("meters", AtomDef::linear(Dimension::LENGTH, 1.0)),
    ("metre", AtomDef::linear(Dimension::LENGTH, 1.0)),
    ("in", AtomDef::linear(Dimension::LENGTH, 0.0254)),
    ("inch", AtomDef::linear(Dimension::LENGTH, 0.0254)),
    ("ft", AtomDef::linear(Dimension::LENGTH, 0.3048)),
    ("foot", AtomDef::linear(Dimension::LENGTH, 0.3048)),
    ("feet", AtomDef::linear(Dimension::LENGTH, 0.3048)),
    // mass
    ("g", AtomDef::linear(Dimension::MASS, 1e-3)),
    ("gram", AtomDef::linear(Dimension::MASS, 1e-3)),
    ("grams", AtomDef::linear(Dimension::MASS, 1e-3)),
    ("lb", AtomDef::linear(Dimension::MASS, 0.45359237)),
    ("lbs", AtomDef::linear(Dimension::MASS, 0.45359237)),
    ("pound", AtomDef::linear(Dimension::MASS, 0.45359237)),
    ("pounds", AtomDef::linear(Dimension::MASS, 0.45359237)),
    ("oz", AtomDef::linear(Dimension::MASS, 0.028349523125)),
    ("tonne", AtomDef::linear(Dimension::MASS, 1000.0)),
    // time
    ("s", AtomDef::linear(Dimension::TIME, 1.0)),
    ("sec", AtomDef::linear(Dimension::TIME, 1.0)),
    ("second", AtomDef::linear(Dimension::TIME, 1.0)),
    ("seconds", AtomDef::linear(Dimension::TIME, 1.0)),
    ("min", AtomDef::linear(Dimension::TIME, 60.0)),
    ("minute", AtomDef::linear(Dimension::TIME, 60.0)),
    ("minutes", AtomDef::linear(Dimension::TIME, 60.0)),
    ("h", AtomDef::linear(Dimension::TIME, 3600.0)),
    ("hr", AtomDef::linear(Dimension::TIME, 3600.0)),
    ("hour", AtomDef::linear(Dimension::TIME, 3600.0)),
    ("hours", AtomDef::linear(Dimension::TIME, 3600.0)),
    ("day", AtomDef::linear(Dimension::TIME, 86400.0)),
    ("days", AtomDef::linear(Dimension::TIME, 86400.0)),
    // temperature
    ("K", AtomDef::linear(Dimension::TEMPERATURE, 1.0)),
    ("kelvin", AtomDef::linear(Dimension::TEMPERATURE, 1.0)),
    ("degC", AtomDef::affine(Dimension::TEMPERATURE, 1.0, DEG_C_OFFSET)),
    ("°C", AtomDef::affine(Dimension::TEMPERATURE, 1.0, DEG_C_OFFSET)),
    ("degF", AtomDef::affine(Dimension::TEMPERATURE, DEG_F_SCALE, DEG_F_OFFSET)),
    ("°F", AtomDef::affine(Dimension::TEMPERATURE, DEG_F_SCALE, DEG_F_OFFSET)),
    ("degR", AtomDef::linear(Dimension::TEMPERATURE, DEG_F_SCALE)),
    // current, amount, luminosity
    ("A", AtomDef::linear(Dimension::CURRENT, 1.0)),
    ("ampere", AtomDef::linear(Dimension::CURRENT, 1.0)),
    ("amp", AtomDef::linear(Dimension::CURRENT, 1.0)),
    ("mol", AtomDef::linear(Dimension::AMOUNT, 1.0)),
    ("mole", AtomDef::linear(Dimension::AMOUNT, 1.0)),
    ("moles", AtomDef::linear(Dimension::AMOUNT, 1.0)),
    ("cd", AtomDef::linear(Dimension::LUMINOSITY, 1.0)),
    // pressure
    ("Pa", AtomDef::linear(Dimension::PRESSURE, 1.0)),
    ("pascal", AtomDef::linear(Dimension::PRESSURE, 1.0)),
    ("atm", AtomDef::linear(Dimension::PRESSURE, 101_325.0)),
    ("bar", AtomDef::linear(Dimension::PRESSURE, 1e5)),
    ("mmHg", AtomDef::linear(Dimension::PRESSURE, 133.322387415)),
    ("mmhg", AtomDef::linear(Dimension::PRESSURE, 133.322387415)),
    ("torr", AtomDef::linear(Dimension::PRESSURE, 101_325.0 / 760.0)),
    ("Torr", AtomDef::linear(Dimension::PRESSURE, 101_325.0 / 760.0)),
    ("psi", AtomDef::linear(Dimension::PRESSURE, 6894.757293168)),
    // energy
    ("J", AtomDef::linear(Dimension::ENERGY, 1.0)),
    ("joule", AtomDef::linear(Dimension::ENERGY, 1.0)),
    ("joules", AtomDef::linear(Dimension::ENERGY, 1.0)),
    ("cal", AtomDef::linear(Dimension::ENERGY, 4.184)),
    ("calorie", AtomDef::linear(Dimension::ENERGY, 4.184)),
    ("calories", AtomDef::linear(Dimension::ENERGY, 4.184)),
    ("BTU", AtomDef::linear(Dimension::ENERGY, 1055.05585262)),
    ("Btu", AtomDef::linear(Dimension::ENERGY, 1055.05585262)),
    ("btu", AtomDef::linear(Dimension::ENERGY, 1055.05585262)),
    ("eV", AtomDef::linear(Dimension::ENERGY, 1.602176634e-19)),
    // power, potential, frequency
    ("W", AtomDef::linear(Dimension::POWER, 1.0)),
    ("watt", AtomDef::linear(Dimension::POWER, 1.0)),
    ("watts", AtomDef::linear(Dimension::POWER, 1.0)),
    ("V", AtomDef::linear(Dimension::POTENTIAL, 1.0)),
    ("volt", AtomDef::linear(Dimension::POTENTIAL, 1.0)),
    ("volts", AtomDef::linear(Dimension::POTENTIAL, 1.0)),
    ("Hz", AtomDef::linear(Dimension::FREQUENCY, 1.0)),
    ("hertz", AtomDef::linear(Dimension::FREQUENCY, 1.0)),
    ("rpm", AtomDef::linear(Dimension::FREQUENCY, 1.0 / 60.0)),
    // volume
    ("L", AtomDef::linear(Dimension::VOLUME, 1e-3)),
    ("l", AtomDef::linear(Dimension::VOLUME, 1e-3)),
    ("liter", AtomDef::linear(Dimension::VOLUME, 1e-3)),
    ("liters", AtomDef::linear(Dimension::VOLUME, 1e-3)),
    ("litre", AtomDef::linear(Dimension::VOLUME, 1e-3)),
    ("litres", AtomDef::linear(Dimension::VOLUME, 1e-3)),
    ("cc", AtomDef::linear(Dimension::VOLUME, 1e-6)),
    ("gal", AtomDef::linear(Dimension::VOLUME, 0.003785411784)),
    // force
    ("N", AtomDef::linear(Dimension::FORCE, 1.0)),
    ("newton", AtomDef::linear(Dimension::FORCE, 1.0)),
    ("newtons", AtomDef::linear(Dimension::FORCE, 1.0)),
    ("dyn", AtomDef::linear(Dimension::FORCE, 1e-5)),
    ("dyne", AtomDef::linear(Dimension::FORCE, 1e-5)),
    // viscosity
    ("P", AtomDef::linear(Dimension::VISCOSITY, 0.1)),
    ("poise", AtomDef::linear(Dimension::VISCOSITY, 0.1)),
    ("St", AtomDef::linear(Dimension::new([2, 0, -1, 0, 0, 0, 0]), 1e-4)),
    ("stokes", AtomDef::linear(Dimension::new([2, 0, -1, 0, 0, 0, 0]), 1e-4)),
    // dimensionless
    ("rad", AtomDef::linear(Dimension::NONE, 1.0)),
];

/// SI prefixes accepted on linear unit atoms
const PREFIXES: &[(&str, f64)] = &[
    ("G", 1e9),
    ("M", 1e6),
    ("k", 1e3),
    ("h", 1e2),
    ("d", 1e-1),
    ("c", 1e-2),
    ("m", 1e-3),
    ("u", 1e-6),
    ("µ", 1e-6),
    ("n", 1e-9),
    ("p", 1e-12),
];

/// Resolves unit token strings to dimensioned units
///
/// One registry is built per pipeline and shared read-only between workers;
/// it is never mutated after construction.
#[derive(Debug)]
pub struct UnitRegistry {
    atoms: HashMap<&'static str, AtomDef>,
}

impl UnitRegistry {
    /// Build the registry from the built-in atom table
    pub fn new() -> Self {
        let mut atoms = HashMap::with_capacity(ATOMS.len());
        for (token, def) in ATOMS {
            atoms.insert(*token, *def);
        }
        Self { atoms }
    }

    /// Resolve a unit expression to a dimensioned unit
    ///
    /// Whitespace is ignored. An empty expression resolves to the
    /// dimensionless unit.
    pub fn resolve(&self, text: &str) -> Result<Unit> {
        let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        if cleaned.is_empty() {
            return Ok(Unit::dimensionless());
        }

        let chars: Vec<char> = cleaned.chars().collect();
        let mut parser = ExprParser {
            registry: self,
            chars,
            pos: 0,
        };
        let composite = parser.parse_sequence(None, &cleaned)?;

        if composite.offset_conflict {
            return Err(Error::offset_unit(cleaned));
        }

        Ok(Unit::new(
            cleaned,
            composite.dimension,
            composite.scale,
            composite.offset,
        ))
    }

    /// Shorthand: resolve a unit and attach a magnitude
    pub fn quantity(&self, magnitude: f64, unit_text: &str) -> Result<super::Quantity> {
        Ok(super::Quantity::new(magnitude, self.resolve(unit_text)?))
    }

    fn lookup_direct(&self, token: &str) -> Option<AtomDef> {
        self.atoms.get(token).copied()
    }

    fn lookup_prefixed(&self, token: &str) -> Option<AtomDef> {
        for (prefix, factor) in PREFIXES {
            if let Some(rest) = token.strip_prefix(prefix) {
                if rest.is_empty() {
                    continue;
                }
                if let Some(def) = self.atoms.get(rest) {
                    // no prefixed offset units (no "mdegC")
                    if def.offset == 0.0 {
                        return Some(AtomDef::linear(def.dimension, def.scale * factor));
                    }
                }
            }
        }
        None
    }

    fn lookup_atom(&self, token: &str) -> Option<AtomDef> {
        self.lookup_direct(token)
            .or_else(|| self.lookup_prefixed(token))
    }

    /// Resolve an alphabetic run into one or more unit atoms
    ///
    /// Tries the whole run first (direct, then prefixed), then falls back to
    /// greedy longest-match segmentation so that fused tokens like "gcm"
    /// split into gram and centimeter.
    fn resolve_run(&self, run: &str) -> Result<Vec<AtomDef>> {
        if let Some(def) = self.lookup_atom(run) {
            return Ok(vec![def]);
        }

        let chars: Vec<char> = run.chars().collect();
        let mut segments = Vec::new();
        let mut pos = 0;
        while pos < chars.len() {
            let mut matched = None;
            for end in (pos + 1..=chars.len()).rev() {
                let head: String = chars[pos..end].iter().collect();
                if let Some(def) = self.lookup_atom(&head) {
                    matched = Some((def, end));
                    break;
                }
            }
            match matched {
                Some((def, end)) => {
                    segments.push(def);
                    pos = end;
                }
                None => return Err(Error::unresolved_unit(run)),
            }
        }

        Ok(segments)
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Intermediate result of parsing a unit expression
#[derive(Debug, Clone, Copy)]
struct Composite {
    dimension: Dimension,
    scale: f64,
    offset: f64,
    atoms: usize,
    offset_conflict: bool,
}

impl Composite {
    fn unity() -> Self {
        Self {
            dimension: Dimension::NONE,
            scale: 1.0,
            offset: 0.0,
            atoms: 0,
            offset_conflict: false,
        }
    }

    fn atom(def: AtomDef) -> Self {
        Self {
            dimension: def.dimension,
            scale: def.scale,
            offset: def.offset,
            atoms: 1,
            offset_conflict: false,
        }
    }

    /// Raise to an integer power; offset units do not survive exponents
    fn pow(mut self, exponent: i8) -> Self {
        if exponent == 1 {
            return self;
        }
        if self.offset != 0.0 {
            self.offset = 0.0;
            self.offset_conflict = true;
        }
        self.dimension = self.dimension.pow(exponent);
        self.scale = self.scale.powi(exponent as i32);
        self
    }

    /// Merge a factor in, multiplying or dividing
    fn merge(mut self, factor: Composite, divide: bool) -> Self {
        self.offset_conflict |= factor.offset_conflict;

        // an offset atom is only valid as the sole factor of the expression
        if self.offset != 0.0 || (factor.offset != 0.0 && (divide || self.atoms > 0)) {
            self.offset_conflict = true;
            self.offset = 0.0;
        } else if factor.offset != 0.0 {
            self.offset = factor.offset;
        }

        if divide {
            self.dimension = self.dimension / factor.dimension;
            self.scale /= factor.scale;
        } else {
            self.dimension = self.dimension * factor.dimension;
            self.scale *= factor.scale;
        }
        self.atoms += factor.atoms;
        self
    }
}

/// Recursive-descent parser over a whitespace-free unit expression
struct ExprParser<'r> {
    registry: &'r UnitRegistry,
    chars: Vec<char>,
    pos: usize,
}

impl ExprParser<'_> {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn is_atom_char(c: char) -> bool {
        c.is_alphabetic() || c == '°' || c == 'µ'
    }

    fn parse_sequence(&mut self, closing: Option<char>, original: &str) -> Result<Composite> {
        let mut acc = Composite::unity();
        let mut divide = false;

        while let Some(c) = self.peek() {
            if Some(c) == closing {
                self.advance();
                return Ok(acc);
            }

            match c {
                '*' => {
                    self.advance();
                    // tolerate "**" written as a multiply typo between factors
                    if self.peek() == Some('*') {
                        self.advance();
                    }
                }
                '/' => {
                    self.advance();
                    divide = true;
                }
                '(' | '[' => {
                    self.advance();
                    let close = if c == '(' { ')' } else { ']' };
                    let mut group = self.parse_sequence(Some(close), original)?;
                    if let Some(exp) = self.parse_exponent() {
                        group = group.pow(exp);
                    }
                    acc = acc.merge(group, divide);
                    divide = false;
                }
                c if Self::is_atom_char(c) => {
                    let factor = self.parse_atom_factor()?;
                    acc = acc.merge(factor, divide);
                    divide = false;
                }
                _ => return Err(Error::unresolved_unit(original)),
            }
        }

        if closing.is_some() {
            // unterminated group
            return Err(Error::unresolved_unit(original));
        }
        Ok(acc)
    }

    /// Parse an atom run plus optional exponent into a composite factor
    fn parse_atom_factor(&mut self) -> Result<Composite> {
        let mut run = String::new();
        while let Some(c) = self.peek() {
            if Self::is_atom_char(c) {
                run.push(c);
                self.advance();
            } else {
                break;
            }
        }

        let segments = self.registry.resolve_run(&run)?;
        let exponent = self.parse_exponent().unwrap_or(1);

        // a trailing exponent binds to the last atom of a fused run:
        // "gcm-3" is g * cm^-3
        let mut acc = Composite::unity();
        let last = segments.len() - 1;
        for (i, def) in segments.into_iter().enumerate() {
            let mut factor = Composite::atom(def);
            if i == last {
                factor = factor.pow(exponent);
            }
            acc = acc.merge(factor, false);
        }
        Ok(acc)
    }

    /// Parse an integer exponent: `^3`, `**3`, `-3`, or `3`
    fn parse_exponent(&mut self) -> Option<i8> {
        let start = self.pos;

        match self.peek() {
            Some('^') => {
                self.advance();
            }
            Some('*') => {
                if self.chars.get(self.pos + 1) == Some(&'*')
                    && self
                        .chars
                        .get(self.pos + 2)
                        .is_some_and(|c| c.is_ascii_digit() || *c == '-' || *c == '+')
                {
                    self.advance();
                    self.advance();
                } else {
                    return None;
                }
            }
            Some(c) if c.is_ascii_digit() || c == '-' || c == '+' => {}
            _ => return None,
        }

        let mut sign = 1i8;
        match self.peek() {
            Some('-') => {
                sign = -1;
                self.advance();
            }
            Some('+') => {
                self.advance();
            }
            _ => {}
        }

        let mut digits = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                digits.push(c);
                self.advance();
            } else {
                break;
            }
        }

        match digits.parse::<i8>() {
            Ok(value) if !digits.is_empty() => Some(sign * value),
            _ => {
                // not an exponent after all (e.g. a lone '-')
                self.pos = start;
                None
            }
        }
    }
}

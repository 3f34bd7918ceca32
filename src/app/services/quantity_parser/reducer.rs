//! Multi-value reduction
//!
//! A property field often carries several independently reported measurements
//! of the same property (legacy and duplicated depositor records). This
//! component picks one representative quantity from such a list. The result
//! is always drawn from the input set; no synthesized average is ever
//! returned.

use crate::app::services::unit_registry::{Dimension, Quantity};
use tracing::trace;

/// Reduces a list of independent measurements to one representative value
///
/// Rules:
/// - empty list: `None`
/// - one or two items: the first item, unchanged
/// - three or more: keep the largest same-dimension group, then iteratively
///   drop the member farthest from the group mean until one remains
#[derive(Debug, Default)]
pub struct MultiValueReducer;

impl MultiValueReducer {
    /// Create a reducer
    pub fn new() -> Self {
        Self
    }

    /// Reduce a list of quantities to one representative element
    pub fn reduce(&self, items: Vec<Quantity>) -> Option<Quantity> {
        match items.len() {
            0 => None,
            1 | 2 => items.into_iter().next(),
            _ => self.reduce_many(items),
        }
    }

    fn reduce_many(&self, items: Vec<Quantity>) -> Option<Quantity> {
        let mut group = self.dominant_dimension_group(items);
        trace!("Reducing {} same-dimension measurements", group.len());

        while group.len() > 1 {
            let mean = group.iter().map(Quantity::base_magnitude).sum::<f64>()
                / group.len() as f64;
            let farthest = group
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| {
                    let da = (a.base_magnitude() - mean).abs();
                    let db = (b.base_magnitude() - mean).abs();
                    da.total_cmp(&db)
                })
                .map(|(i, _)| i)?;
            group.remove(farthest);
        }

        group.into_iter().next()
    }

    // Group by dimensionality preserving input order; keep the group with the
    // most members. Ties go to the group encountered first.
    fn dominant_dimension_group(&self, items: Vec<Quantity>) -> Vec<Quantity> {
        let mut groups: Vec<(Dimension, Vec<Quantity>)> = Vec::new();
        for item in items {
            let dimension = item.dimensionality();
            match groups.iter_mut().find(|(d, _)| *d == dimension) {
                Some((_, members)) => members.push(item),
                None => groups.push((dimension, vec![item])),
            }
        }

        let mut best: Vec<Quantity> = Vec::new();
        for (_, members) in groups {
            if members.len() > best.len() {
                best = members;
            }
        }
        best
    }
}

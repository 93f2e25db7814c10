//! Weighted and uniform selection from lists.

use crate::error::{MechError, MechResult};
use crate::random::RandomProvider;

/// A value with a relative selection weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Weighted<T> {
    /// Relative weight; higher is more likely.
    pub weight: f64,
    /// The value returned when selected.
    pub value: T,
}

impl<T> Weighted<T> {
    /// Pair a weight with a value.
    pub fn new(weight: f64, value: T) -> Self {
        Self { weight, value }
    }
}

/// Select one value with probability proportional to its weight.
///
/// Fails only on an empty list. If float rounding leaves the draw past the
/// last cumulative weight, the last item is returned.
pub fn roll_weighted<'a, T>(
    items: &'a [Weighted<T>],
    rng: &mut dyn RandomProvider,
) -> MechResult<&'a T> {
    let last = items.last().ok_or(MechError::EmptyTable)?;
    let total: f64 = items.iter().map(|i| i.weight).sum();
    let r = rng.next() * total;

    let mut cumulative = 0.0;
    for item in items {
        cumulative += item.weight;
        if cumulative > r {
            return Ok(&item.value);
        }
    }
    Ok(&last.value)
}

/// Pick one item uniformly, or `None` if the list is empty.
pub fn pick<'a, T>(items: &'a [T], rng: &mut dyn RandomProvider) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let index = (rng.next() * items.len() as f64).floor() as usize;
    items.get(index.min(items.len() - 1))
}

//! Metrics.
//!
//! Metrics are evaluation helpers (they do not participate in backprop).

use crate::{Dataset, Error, Network, Result};

/// Index of the strictly greatest value.
///
/// Ties resolve to the lowest index. Returns `0` for an empty or all-NaN input.
#[inline]
pub fn argmax<I: IntoIterator<Item = f64>>(values: I) -> usize {
    let mut values = values.into_iter();
    let Some(mut max) = values.next() else {
        return 0;
    };
    let mut best = 0;
    for (i, v) in values.enumerate() {
        if v > max || max.is_nan() {
            max = v;
            best = i + 1;
        }
    }
    if max.is_nan() { 0 } else { best }
}

/// Fraction of instances whose prediction matches the arg-max of their class
/// values.
pub fn accuracy(network: &mut Network, data: &Dataset) -> Result<f64> {
    if data.class_count() != network.class_count() {
        return Err(Error::DimensionMismatch {
            what: "dataset class values",
            expected: network.class_count(),
            actual: data.class_count(),
        });
    }

    let mut correct = 0_usize;
    for instance in data {
        if network.predict(instance.attributes())? == instance.label() {
            correct += 1;
        }
    }
    Ok(correct as f64 / data.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_picks_the_largest() {
        assert_eq!(argmax([0.1, 0.5, 0.2]), 1);
        assert_eq!(argmax([3.0]), 0);
        assert_eq!(argmax([-3.0, -1.0, -2.0]), 1);
    }

    #[test]
    fn argmax_ties_go_to_the_lowest_index() {
        assert_eq!(argmax([0.25, 0.5, 0.5, 0.25]), 1);
        assert_eq!(argmax([0.0, 0.0, 0.0]), 0);
    }

    #[test]
    fn argmax_tolerates_degenerate_input() {
        assert_eq!(argmax(std::iter::empty()), 0);
        assert_eq!(argmax([f64::NAN, f64::NAN]), 0);
        assert_eq!(argmax([f64::NAN, 0.2, 0.7]), 2);
    }
}

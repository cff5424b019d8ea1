//! Activation functions.
//!
//! The hidden layer applies ReLU element-wise. The output layer applies softmax
//! over the whole layer, so it cannot be evaluated until every output node has
//! its weighted input.
//!
//! Softmax is evaluated as `exp(z_i) / sum_j exp(z_j)` without subtracting the
//! max logit first. Large logits can therefore overflow. The only guard is in
//! [`softmax_normalizer`]: when the plain denominator is zero or not finite
//! (which would turn every output into NaN), it switches to the max-shifted
//! form.

use log::debug;

#[inline]
pub fn relu(x: f64) -> f64 {
    x.max(0.0)
}

/// Subgradient of ReLU; `0.0` at exactly zero.
#[inline]
pub fn relu_prime(x: f64) -> f64 {
    if x > 0.0 { 1.0 } else { 0.0 }
}

/// Returns `(shift, denominator)` such that
/// `softmax_i = exp(z_i - shift) / denominator`.
///
/// `shift` is `0.0` unless the unshifted denominator underflowed to zero or
/// overflowed.
pub fn softmax_normalizer<I>(logits: I) -> (f64, f64)
where
    I: Iterator<Item = f64> + Clone,
{
    let mut denominator = 0.0_f64;
    for z in logits.clone() {
        denominator += z.exp();
    }
    if denominator > 0.0 && denominator.is_finite() {
        return (0.0, denominator);
    }

    let shift = logits.clone().fold(f64::NEG_INFINITY, f64::max);
    let mut shifted = 0.0_f64;
    for z in logits {
        shifted += (z - shift).exp();
    }
    debug!("softmax denominator {denominator} is degenerate, shifting logits by {shift}");
    (shift, shifted)
}

/// Softmax of `logits` into `out`.
///
/// Shape contract: `logits.len() == out.len()`.
pub fn softmax(logits: &[f64], out: &mut [f64]) {
    assert_eq!(
        logits.len(),
        out.len(),
        "logits len {} does not match out len {}",
        logits.len(),
        out.len()
    );

    let (shift, denominator) = softmax_normalizer(logits.iter().copied());
    for (o, &z) in out.iter_mut().zip(logits) {
        *o = (z - shift).exp() / denominator;
    }
}

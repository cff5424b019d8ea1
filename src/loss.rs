//! Loss functions.
//!
//! The network is trained by maximizing the log-likelihood of the target
//! class values, i.e. minimizing cross-entropy. The combined gradient of
//! softmax + cross-entropy w.r.t. an output node's weighted input is
//! `probability - target`, so the backward pass never calls into this module;
//! it is used for diagnostics only.

/// Cross-entropy `-sum_i t_i * ln(p_i)` of one instance.
///
/// Terms with `t_i == 0` are skipped, so a zero probability on a non-target
/// class contributes nothing. A zero probability on a target class yields
/// `+inf`.
///
/// Shape contract: `predicted` yields `target.len()` values.
#[inline]
pub fn cross_entropy<I: IntoIterator<Item = f64>>(predicted: I, target: &[f64]) -> f64 {
    let mut n = 0_usize;
    let mut loss = 0.0_f64;
    for (p, &t) in predicted.into_iter().zip(target) {
        n += 1;
        if t != 0.0 {
            loss -= t * p.ln();
        }
    }
    assert_eq!(
        n,
        target.len(),
        "pred len {n} does not match target len {}",
        target.len()
    );
    loss
}

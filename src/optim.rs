//! Update rule.
//!
//! Training is plain online gradient ascent on the log-likelihood: one weight
//! update per instance, no momentum and no batching.

use crate::{Error, Instance, Network, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
/// Online stochastic gradient step with a fixed learning rate.
pub struct Sgd {
    lr: f64,
}

impl Sgd {
    #[inline]
    /// Construct the update rule.
    ///
    /// Returns an error if `lr` is not finite or `lr < 0`. A zero rate is
    /// accepted and leaves every weight untouched.
    pub fn new(lr: f64) -> Result<Self> {
        if !(lr.is_finite() && lr >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "learning rate must be finite and >= 0, got {lr}"
            )));
        }
        Ok(Self { lr })
    }

    #[inline]
    /// Returns the learning rate.
    pub fn lr(&self) -> f64 {
        self.lr
    }

    #[inline]
    /// Forward, backward and update for a single instance.
    pub fn step(&self, network: &mut Network, instance: &Instance) {
        network.train_step(instance.attributes(), instance.class_values(), self.lr);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sgd_requires_finite_non_negative_lr() {
        assert!(Sgd::new(-1.0).is_err());
        assert!(Sgd::new(f64::NAN).is_err());
        assert!(Sgd::new(f64::INFINITY).is_err());
        assert_eq!(Sgd::new(0.0).unwrap().lr(), 0.0);
        assert_eq!(Sgd::new(0.1).unwrap().lr(), 0.1);
    }

    #[test]
    fn step_moves_output_weights_toward_the_target() {
        let mut net =
            Network::new(1, &[vec![1.0, 0.0]], &[vec![0.0, 0.0], vec![0.0, 0.0]]).unwrap();
        let instance = Instance::new(vec![2.0], vec![1.0, 0.0]);

        Sgd::new(0.5).unwrap().step(&mut net, &instance);

        // p = [0.5, 0.5], deltas = [0.5, -0.5], hidden output = 2, bias = 1.
        assert_eq!(
            net.output_weights(),
            vec![vec![0.5, 0.25], vec![-0.5, -0.25]]
        );
        // Output weights were zero when the hidden delta was taken.
        assert_eq!(net.hidden_weights(), vec![vec![1.0, 0.0]]);
    }
}

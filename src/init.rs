//! Initial weight matrices.
//!
//! The network takes its starting weights from the caller. This module offers
//! a few common policies for producing correctly-shaped matrices from any RNG.
//! It is independent of the shuffle RNG used during training.

use rand::Rng;
use rand::distributions::{Distribution, Uniform};

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
/// Weight initialization scheme.
pub enum Init {
    /// Uniform in `[-limit, limit)`.
    Uniform { limit: f64 },
    /// He/Kaiming (uniform variant): `limit = sqrt(6 / fan_in)`.
    He,
    /// Xavier/Glorot (uniform variant): `limit = sqrt(6 / (fan_in + fan_out))`.
    Xavier,
}

impl Init {
    pub fn validate(self) -> Result<()> {
        if let Init::Uniform { limit } = self {
            if !(limit.is_finite() && limit > 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "uniform init limit must be finite and > 0, got {limit}"
                )));
            }
        }
        Ok(())
    }

    fn limit(self, fan_in: usize, fan_out: usize) -> f64 {
        match self {
            Init::Uniform { limit } => limit,
            Init::He => (6.0 / fan_in as f64).sqrt(),
            Init::Xavier => (6.0 / (fan_in + fan_out) as f64).sqrt(),
        }
    }

    /// A `[rows][cols]` matrix. `cols` is the fan-in (bias column included).
    pub fn matrix<R: Rng + ?Sized>(
        self,
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<Vec<Vec<f64>>> {
        self.validate()?;
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidConfig(format!(
                "weight matrix dims must be > 0, got {rows}x{cols}"
            )));
        }

        let limit = self.limit(cols, rows);
        let dist = Uniform::new(-limit, limit);
        Ok((0..rows)
            .map(|_| (0..cols).map(|_| dist.sample(rng)).collect())
            .collect())
    }
}

/// Hidden and output matrices shaped for a network.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialWeights {
    /// `[hidden_count][attribute_count + 1]`
    pub hidden: Vec<Vec<f64>>,
    /// `[class_count][hidden_count + 1]`
    pub output: Vec<Vec<f64>>,
}

impl InitialWeights {
    pub fn generate<R: Rng + ?Sized>(
        attribute_count: usize,
        hidden_count: usize,
        class_count: usize,
        init: Init,
        rng: &mut R,
    ) -> Result<Self> {
        let hidden = init.matrix(hidden_count, attribute_count + 1, rng)?;
        let output = init.matrix(class_count, hidden_count + 1, rng)?;
        Ok(Self { hidden, output })
    }
}

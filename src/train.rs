use std::fmt;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Dataset, Error, Instance, Network, Result, Sgd, metrics};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    pub hidden_node_count: usize,
    pub learning_rate: f64,
    pub max_epoch: usize,
    /// Seeds the shuffle order only; initial weights come from the caller.
    pub seed: u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            hidden_node_count: 8,
            learning_rate: 1e-2,
            max_epoch: 100,
            seed: 0,
        }
    }
}

impl TrainConfig {
    pub fn validate(&self) -> Result<()> {
        if self.hidden_node_count == 0 {
            return Err(Error::InvalidConfig("hidden node count must be > 0".to_owned()));
        }
        Sgd::new(self.learning_rate)?;
        Ok(())
    }
}

/// Diagnostic record emitted after every epoch.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochReport {
    pub epoch: usize,
    /// Mean cross-entropy over the training set, measured after the epoch.
    pub loss: f64,
}

impl fmt::Display for EpochReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Epoch: {}, Loss: {:.2e}", self.epoch, self.loss)
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainReport {
    pub epochs: Vec<EpochReport>,
}

impl TrainReport {
    pub fn final_loss(&self) -> Option<f64> {
        self.epochs.last().map(|e| e.loss)
    }
}

/// A network bound to its training set, update rule and shuffle RNG.
#[derive(Debug, Clone)]
pub struct Classifier<R = StdRng> {
    network: Network,
    train_set: Dataset,
    sgd: Sgd,
    max_epoch: usize,
    rng: R,
}

impl Classifier<StdRng> {
    /// Like [`Classifier::new`], shuffling with a `StdRng` seeded from
    /// `config.seed`.
    pub fn with_seed(
        train_set: Dataset,
        config: &TrainConfig,
        hidden_weights: &[Vec<f64>],
        output_weights: &[Vec<f64>],
    ) -> Result<Self> {
        let rng = StdRng::seed_from_u64(config.seed);
        Self::new(train_set, config, rng, hidden_weights, output_weights)
    }
}

impl<R: Rng> Classifier<R> {
    /// Builds the network for `train_set`.
    ///
    /// `hidden_weights` must be `[config.hidden_node_count][attributes + 1]`
    /// and `output_weights` `[classes][config.hidden_node_count + 1]`.
    pub fn new(
        train_set: Dataset,
        config: &TrainConfig,
        rng: R,
        hidden_weights: &[Vec<f64>],
        output_weights: &[Vec<f64>],
    ) -> Result<Self> {
        config.validate()?;
        if hidden_weights.len() != config.hidden_node_count {
            return Err(Error::DimensionMismatch {
                what: "hidden weight matrix",
                expected: config.hidden_node_count,
                actual: hidden_weights.len(),
            });
        }

        let network = Network::for_dataset(&train_set, hidden_weights, output_weights)?;
        Ok(Self {
            network,
            train_set,
            sgd: Sgd::new(config.learning_rate)?,
            max_epoch: config.max_epoch,
            rng,
        })
    }

    #[inline]
    pub fn network(&self) -> &Network {
        &self.network
    }

    #[inline]
    pub fn train_set(&self) -> &Dataset {
        &self.train_set
    }

    #[inline]
    pub fn max_epoch(&self) -> usize {
        self.max_epoch
    }

    #[inline]
    pub fn learning_rate(&self) -> f64 {
        self.sgd.lr()
    }

    pub fn into_network(self) -> Network {
        self.network
    }

    /// Runs `max_epoch` epochs of online training.
    ///
    /// Each epoch shuffles the training set, then steps once per instance.
    /// The mean loss after each epoch is logged and returned.
    pub fn train(&mut self) -> TrainReport {
        debug!(
            "training {} instances for {} epochs: hidden={} lr={}",
            self.train_set.len(),
            self.max_epoch,
            self.network.hidden_count(),
            self.sgd.lr()
        );
        if self.sgd.lr() == 0.0 && self.max_epoch > 0 {
            warn!("learning rate is 0, weights will not change");
        }

        let mut epochs = Vec::with_capacity(self.max_epoch);
        for epoch in 0..self.max_epoch {
            self.train_set.shuffle(&mut self.rng);
            for instance in &self.train_set {
                self.sgd.step(&mut self.network, instance);
            }

            let report = EpochReport {
                epoch,
                loss: self.network.mean_loss_unchecked(&self.train_set),
            };
            info!("{report}");
            epochs.push(report);
        }
        TrainReport { epochs }
    }

    /// Index of the most probable class for `instance`.
    pub fn predict(&mut self, instance: &Instance) -> Result<usize> {
        self.network.predict(instance.attributes())
    }

    /// Mean cross-entropy over the training set under the current weights.
    pub fn mean_loss(&mut self) -> f64 {
        self.network.mean_loss_unchecked(&self.train_set)
    }

    /// Accuracy on `data` under the current weights.
    pub fn accuracy(&mut self, data: &Dataset) -> Result<f64> {
        metrics::accuracy(&mut self.network, data)
    }
}

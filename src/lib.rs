//! A one-hidden-layer perceptron classifier trained by online backpropagation.
//!
//! `online-mlp` builds a fixed three-layer network (inputs, one ReLU hidden
//! layer, softmax outputs) from caller-supplied weight matrices and trains it
//! with one gradient step per instance, for a fixed number of epochs.
//!
//! # Topology
//!
//! - input layer: one `Input` node per attribute, then a `HiddenBias` node
//! - hidden layer: one `Hidden` node per row of the hidden weight matrix, then
//!   an `OutputBias` node
//! - output layer: one `Output` node per class
//!
//! Bias nodes always output `1.0`. Every computed node holds one edge per node
//! of the preceding layer, and edge `j` always connects to node `j`. The
//! backward pass relies on that: hidden node `j` finds its downstream weights
//! at edge `j` of every output node.
//!
//! # Panics vs `Result`
//!
//! - Low-level passes ([`Network::forward`], [`Network::compute_output_deltas`],
//!   [`Network::train_step`]) treat shape mismatches as programmer error and
//!   panic via `assert!`.
//! - Construction, prediction and loss ([`Network::new`], [`Classifier::new`],
//!   [`Network::predict`], [`Network::mean_loss`]) validate their inputs and
//!   return [`Result`].
//!
//! # Logging
//!
//! Training reports go through the [`log`] facade: one `info` record per
//! epoch (`Epoch: 3, Loss: 1.23e-2`). Install any logger to see them.
//!
//! # Quick start
//!
//! ```rust
//! use online_mlp::{Classifier, Dataset, TrainConfig};
//!
//! # fn main() -> online_mlp::Result<()> {
//! let xs = vec![vec![-1.0, -1.0], vec![-2.0, -1.0], vec![1.0, 1.0], vec![2.0, 1.0]];
//! let ys = vec![vec![1.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0], vec![0.0, 1.0]];
//! let train = Dataset::from_rows(&xs, &ys)?;
//!
//! let config = TrainConfig {
//!     hidden_node_count: 2,
//!     learning_rate: 0.1,
//!     max_epoch: 50,
//!     seed: 0,
//! };
//! // [hidden][attributes + 1] and [classes][hidden + 1]
//! let hidden = vec![vec![1.0, 1.0, 0.0], vec![-1.0, -1.0, 0.0]];
//! let output = vec![vec![-0.1, 0.1, 0.0], vec![0.1, -0.1, 0.0]];
//!
//! let mut clf = Classifier::with_seed(train.clone(), &config, &hidden, &output)?;
//! let report = clf.train();
//! assert_eq!(report.epochs.len(), 50);
//! assert_eq!(clf.accuracy(&train)?, 1.0);
//! # Ok(())
//! # }
//! ```

pub mod activation;
pub mod data;
pub mod error;
pub mod init;
pub mod layer;
pub mod loss;
pub mod metrics;
pub mod network;
pub mod neuron;
pub mod node;
pub mod optim;
pub mod train;

pub use data::{Dataset, Instance};
pub use error::{Error, Result};
pub use init::{Init, InitialWeights};
pub use layer::Layer;
pub use network::Network;
pub use neuron::{Edge, Neuron};
pub use node::{Node, NodeKind};
pub use optim::Sgd;
pub use train::{Classifier, EpochReport, TrainConfig, TrainReport};

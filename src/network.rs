use crate::activation::{relu, relu_prime, softmax_normalizer};
use crate::metrics::argmax;
use crate::{Dataset, Error, Instance, Layer, Node, Result, loss};

/// A three-layer perceptron: inputs, one ReLU hidden layer, softmax outputs.
///
/// Nodes cache the values of the most recent forward/backward pass, so even
/// inference takes `&mut self`. The only state that survives between calls is
/// the edge weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    input: Layer,
    hidden: Layer,
    output: Layer,
}

impl Network {
    /// Builds the topology for `attribute_count` inputs.
    ///
    /// - `hidden_weights`: `[hidden_count][attribute_count + 1]`, last column
    ///   is the input-layer bias
    /// - `output_weights`: `[class_count][hidden_count + 1]`, last column is
    ///   the hidden-layer bias
    pub fn new(
        attribute_count: usize,
        hidden_weights: &[Vec<f64>],
        output_weights: &[Vec<f64>],
    ) -> Result<Self> {
        if attribute_count == 0 {
            return Err(Error::InvalidConfig("attribute count must be > 0".to_owned()));
        }
        if hidden_weights.is_empty() {
            return Err(Error::InvalidConfig("hidden node count must be > 0".to_owned()));
        }
        if output_weights.is_empty() {
            return Err(Error::InvalidConfig("class count must be > 0".to_owned()));
        }

        let input = Layer::input(attribute_count);
        let hidden = Layer::hidden(hidden_weights, &input)?;
        let output = Layer::output(output_weights, &hidden)?;

        // The hidden delta pass indexes each output node's edges by hidden
        // node position.
        hidden.check_edges("hidden edges", &input)?;
        output.check_edges("output edges", &hidden)?;

        Ok(Self {
            input,
            hidden,
            output,
        })
    }

    /// Builds a network sized for `data`.
    pub fn for_dataset(
        data: &Dataset,
        hidden_weights: &[Vec<f64>],
        output_weights: &[Vec<f64>],
    ) -> Result<Self> {
        if output_weights.len() != data.class_count() {
            return Err(Error::DimensionMismatch {
                what: "output weight matrix",
                expected: data.class_count(),
                actual: output_weights.len(),
            });
        }
        Self::new(data.attribute_count(), hidden_weights, output_weights)
    }

    /// Number of attributes (excludes the bias node).
    #[inline]
    pub fn attribute_count(&self) -> usize {
        self.input.len() - 1
    }

    /// Number of hidden units (excludes the bias node).
    #[inline]
    pub fn hidden_count(&self) -> usize {
        self.hidden.len() - 1
    }

    #[inline]
    pub fn class_count(&self) -> usize {
        self.output.len()
    }

    #[inline]
    pub fn input_layer(&self) -> &Layer {
        &self.input
    }

    #[inline]
    pub fn hidden_layer(&self) -> &Layer {
        &self.hidden
    }

    #[inline]
    pub fn output_layer(&self) -> &Layer {
        &self.output
    }

    /// Hidden weights in constructor layout.
    pub fn hidden_weights(&self) -> Vec<Vec<f64>> {
        self.hidden.weights()
    }

    /// Output weights in constructor layout.
    pub fn output_weights(&self) -> Vec<Vec<f64>> {
        self.output.weights()
    }

    /// Class probabilities of the most recent forward pass.
    #[inline]
    pub fn probabilities(&self) -> impl Iterator<Item = f64> + Clone + '_ {
        self.output.outputs()
    }

    /// Forward pass for a single instance.
    ///
    /// Shape contract: `attributes.len() == self.attribute_count()`.
    pub fn forward(&mut self, attributes: &[f64]) {
        assert_eq!(
            attributes.len(),
            self.attribute_count(),
            "attributes len {} does not match network attribute count {}",
            attributes.len(),
            self.attribute_count()
        );

        self.input.set_inputs(attributes);

        // Every hidden output must be final before any output node reads it.
        for node in self.hidden.nodes_mut() {
            if let Node::Hidden(neuron) = node {
                let z = neuron.feed(self.input.nodes());
                neuron.set_output(relu(z));
            }
        }

        for node in self.output.nodes_mut() {
            if let Node::Output(neuron) = node {
                neuron.feed(self.hidden.nodes());
            }
        }

        // Softmax needs the weighted inputs of the whole layer.
        let (shift, denominator) =
            softmax_normalizer(self.output.nodes().iter().map(Node::weighted_input));
        for node in self.output.nodes_mut() {
            if let Node::Output(neuron) = node {
                neuron.set_output((neuron.weighted_input() - shift).exp() / denominator);
            }
        }
    }

    /// Sets each output delta to `target - probability`.
    ///
    /// Call after `forward`. Shape contract: `target.len() == self.class_count()`.
    pub fn compute_output_deltas(&mut self, target: &[f64]) {
        assert_eq!(
            target.len(),
            self.class_count(),
            "target len {} does not match network class count {}",
            target.len(),
            self.class_count()
        );

        for (node, &t) in self.output.nodes_mut().iter_mut().zip(target) {
            if let Node::Output(neuron) = node {
                neuron.set_delta(t - neuron.output());
            }
        }
    }

    /// Sets each hidden delta to `relu'(z) * sum_o(w_o[idx] * delta_o)`.
    ///
    /// Reads every output delta, so `compute_output_deltas` must run first.
    /// Hidden node `idx` is reached through edge `idx` of each output node.
    pub fn compute_hidden_deltas(&mut self) {
        let output = self.output.nodes();
        for (idx, node) in self.hidden.nodes_mut().iter_mut().enumerate() {
            if let Node::Hidden(neuron) = node {
                let mut downstream = 0.0_f64;
                for out in output.iter().filter_map(Node::neuron) {
                    downstream += out.weight_from(idx) * out.delta();
                }
                neuron.set_delta(relu_prime(neuron.weighted_input()) * downstream);
            }
        }
    }

    /// Applies `w += lr * parent_output * delta` to every edge, output layer
    /// first.
    pub fn update_weights(&mut self, lr: f64) {
        self.output.update_weights(&self.hidden, lr);
        self.hidden.update_weights(&self.input, lr);
    }

    /// One online step: forward, output deltas, hidden deltas, update.
    pub fn train_step(&mut self, attributes: &[f64], target: &[f64], lr: f64) {
        self.forward(attributes);
        self.compute_output_deltas(target);
        self.compute_hidden_deltas();
        self.update_weights(lr);
    }

    /// Index of the most probable class (lowest index on ties).
    pub fn predict(&mut self, attributes: &[f64]) -> Result<usize> {
        if attributes.len() != self.attribute_count() {
            return Err(Error::DimensionMismatch {
                what: "instance attributes",
                expected: self.attribute_count(),
                actual: attributes.len(),
            });
        }

        self.forward(attributes);
        Ok(argmax(self.probabilities()))
    }

    /// Cross-entropy of one instance under the current weights.
    pub fn loss(&mut self, instance: &Instance) -> Result<f64> {
        self.check_dims(
            ("instance attributes", "instance class values"),
            instance.attributes().len(),
            instance.class_values().len(),
        )?;
        Ok(self.instance_loss(instance))
    }

    /// Mean cross-entropy over `data`, in its current order.
    pub fn mean_loss(&mut self, data: &Dataset) -> Result<f64> {
        self.check_dims(
            ("dataset attributes", "dataset class values"),
            data.attribute_count(),
            data.class_count(),
        )?;
        Ok(self.mean_loss_unchecked(data))
    }

    /// `data` must already match the network's dimensions.
    pub(crate) fn mean_loss_unchecked(&mut self, data: &Dataset) -> f64 {
        let mut total = 0.0_f64;
        for instance in data {
            total += self.instance_loss(instance);
        }
        total / data.len() as f64
    }

    fn instance_loss(&mut self, instance: &Instance) -> f64 {
        self.forward(instance.attributes());
        loss::cross_entropy(self.probabilities(), instance.class_values())
    }

    /// Errors unless `attributes` and `classes` match the network's
    /// input and output widths. `what` names the (attributes, classes) pair.
    fn check_dims(
        &self,
        what: (&'static str, &'static str),
        attributes: usize,
        classes: usize,
    ) -> Result<()> {
        if attributes != self.attribute_count() {
            return Err(Error::DimensionMismatch {
                what: what.0,
                expected: self.attribute_count(),
                actual: attributes,
            });
        }
        if classes != self.class_count() {
            return Err(Error::DimensionMismatch {
                what: what.1,
                expected: self.class_count(),
                actual: classes,
            });
        }
        Ok(())
    }
}

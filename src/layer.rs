use crate::{Error, Node, NodeKind, Result};

/// An ordered list of nodes.
///
/// Layout by role:
/// - input: `attribute_count` `Input` nodes, then one `HiddenBias`
/// - hidden: one `Hidden` node per weight row, then one `OutputBias`
/// - output: one `Output` node per weight row
///
/// Node order never changes after construction. Every computed node holds one
/// edge per node of its source layer, and edge `j` points at source node `j`.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    nodes: Vec<Node>,
}

impl Layer {
    pub fn input(attribute_count: usize) -> Self {
        let mut nodes = Vec::with_capacity(attribute_count + 1);
        nodes.extend((0..attribute_count).map(|_| Node::new(NodeKind::Input)));
        nodes.push(Node::HiddenBias);
        Self { nodes }
    }

    /// `weights` has shape `[hidden_count][source.len()]`.
    pub fn hidden(weights: &[Vec<f64>], source: &Layer) -> Result<Self> {
        let mut layer = Self::computed(NodeKind::Hidden, "hidden weight rows", weights, source)?;
        layer.nodes.push(Node::OutputBias);
        Ok(layer)
    }

    /// `weights` has shape `[class_count][source.len()]`.
    pub fn output(weights: &[Vec<f64>], source: &Layer) -> Result<Self> {
        Self::computed(NodeKind::Output, "output weight rows", weights, source)
    }

    fn computed(
        kind: NodeKind,
        what: &'static str,
        weights: &[Vec<f64>],
        source: &Layer,
    ) -> Result<Self> {
        debug_assert!(kind.is_computed());
        if weights.is_empty() {
            return Err(Error::InvalidConfig(format!("{what} must not be empty")));
        }

        let mut nodes = Vec::with_capacity(weights.len() + 1);
        for row in weights {
            if row.len() != source.len() {
                return Err(Error::DimensionMismatch {
                    what,
                    expected: source.len(),
                    actual: row.len(),
                });
            }
            if row.iter().any(|w| !w.is_finite()) {
                return Err(Error::InvalidData(format!(
                    "{what} must contain only finite values"
                )));
            }
            nodes.push(Node::with_weights(kind, row)?);
        }
        Ok(Self { nodes })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Panics if `idx >= len`.
    #[inline]
    pub fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    /// Number of nodes that are not bias nodes.
    pub fn unit_count(&self) -> usize {
        self.nodes.iter().filter(|n| !n.kind().is_bias()).count()
    }

    #[inline]
    pub fn outputs(&self) -> impl Iterator<Item = f64> + Clone + '_ {
        self.nodes.iter().map(Node::output)
    }

    /// Incoming weights of every computed node, one row per node.
    pub fn weights(&self) -> Vec<Vec<f64>> {
        self.nodes
            .iter()
            .filter_map(Node::neuron)
            .map(|n| n.weights())
            .collect()
    }

    /// Writes `values` into the leading `Input` nodes.
    pub(crate) fn set_inputs(&mut self, values: &[f64]) {
        for (node, &v) in self.nodes.iter_mut().zip(values) {
            node.set_input(v);
        }
    }

    /// Applies the update rule to every computed node, reading parent outputs
    /// from `source`.
    pub(crate) fn update_weights(&mut self, source: &Layer, lr: f64) {
        for node in &mut self.nodes {
            if let Some(neuron) = node.neuron_mut() {
                neuron.update_weights(&source.nodes, lr);
            }
        }
    }

    /// Checks that every computed node has one edge per source node, with
    /// edge `j` pointing at source node `j`.
    pub(crate) fn check_edges(&self, what: &'static str, source: &Layer) -> Result<()> {
        for neuron in self.nodes.iter().filter_map(Node::neuron) {
            if neuron.edges().len() != source.len() {
                return Err(Error::DimensionMismatch {
                    what,
                    expected: source.len(),
                    actual: neuron.edges().len(),
                });
            }
            if let Some((j, _)) = neuron
                .edges()
                .iter()
                .enumerate()
                .find(|(j, e)| e.parent() != *j)
            {
                return Err(Error::InvalidConfig(format!(
                    "{what}: edge {j} does not point at source node {j}"
                )));
            }
        }
        Ok(())
    }
}

//! Typed computation units.
//!
//! A network is made of five kinds of nodes. Only `Hidden` and `Output` nodes
//! own incoming edges, and that is enforced by the `Node` variants themselves:
//! bias nodes carry no state at all and always output `1.0`.

use crate::{Error, Neuron, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Input,
    HiddenBias,
    Hidden,
    OutputBias,
    Output,
}

impl NodeKind {
    /// Maps the integer tags `0..=4` (input, hidden bias, hidden, output bias,
    /// output) onto a kind.
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(NodeKind::Input),
            1 => Ok(NodeKind::HiddenBias),
            2 => Ok(NodeKind::Hidden),
            3 => Ok(NodeKind::OutputBias),
            4 => Ok(NodeKind::Output),
            _ => Err(Error::InvalidNodeKind { code }),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            NodeKind::Input => 0,
            NodeKind::HiddenBias => 1,
            NodeKind::Hidden => 2,
            NodeKind::OutputBias => 3,
            NodeKind::Output => 4,
        }
    }

    #[inline]
    pub fn is_bias(self) -> bool {
        matches!(self, NodeKind::HiddenBias | NodeKind::OutputBias)
    }

    /// Whether nodes of this kind hold incoming edges.
    #[inline]
    pub fn is_computed(self) -> bool {
        matches!(self, NodeKind::Hidden | NodeKind::Output)
    }
}

impl TryFrom<i32> for NodeKind {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        NodeKind::from_code(code)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Input { value: f64 },
    HiddenBias,
    Hidden(Neuron),
    OutputBias,
    Output(Neuron),
}

impl Node {
    /// A node of `kind` with no edges.
    pub fn new(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Input => Node::input(0.0),
            NodeKind::HiddenBias => Node::HiddenBias,
            NodeKind::Hidden => Node::Hidden(Neuron::new(&[])),
            NodeKind::OutputBias => Node::OutputBias,
            NodeKind::Output => Node::Output(Neuron::new(&[])),
        }
    }

    #[inline]
    pub fn input(value: f64) -> Self {
        Node::Input { value }
    }

    /// A computed node with one edge per weight, in parent order.
    pub fn with_weights(kind: NodeKind, weights: &[f64]) -> Result<Self> {
        match kind {
            NodeKind::Hidden => Ok(Node::Hidden(Neuron::new(weights))),
            NodeKind::Output => Ok(Node::Output(Neuron::new(weights))),
            other => Err(Error::InvalidConfig(format!(
                "{other:?} nodes do not hold incoming edges"
            ))),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Input { .. } => NodeKind::Input,
            Node::HiddenBias => NodeKind::HiddenBias,
            Node::Hidden(_) => NodeKind::Hidden,
            Node::OutputBias => NodeKind::OutputBias,
            Node::Output(_) => NodeKind::Output,
        }
    }

    /// Value this node passes on to the next layer.
    #[inline]
    pub fn output(&self) -> f64 {
        match self {
            Node::Input { value } => *value,
            Node::HiddenBias | Node::OutputBias => 1.0,
            Node::Hidden(neuron) | Node::Output(neuron) => neuron.output(),
        }
    }

    /// Pre-activation value. Inputs report their value, bias nodes `1.0`.
    #[inline]
    pub fn weighted_input(&self) -> f64 {
        match self {
            Node::Hidden(neuron) | Node::Output(neuron) => neuron.weighted_input(),
            other => other.output(),
        }
    }

    /// Error gradient of the last backward pass; `0.0` for nodes without one.
    #[inline]
    pub fn delta(&self) -> f64 {
        self.neuron().map_or(0.0, Neuron::delta)
    }

    /// Sets the value of an input node, or the weighted input of a computed
    /// node. Bias nodes ignore it.
    pub fn set_input(&mut self, input: f64) {
        match self {
            Node::Input { value } => *value = input,
            Node::Hidden(neuron) | Node::Output(neuron) => neuron.set_weighted_input(input),
            Node::HiddenBias | Node::OutputBias => {}
        }
    }

    #[inline]
    pub fn neuron(&self) -> Option<&Neuron> {
        match self {
            Node::Hidden(neuron) | Node::Output(neuron) => Some(neuron),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn neuron_mut(&mut self) -> Option<&mut Neuron> {
        match self {
            Node::Hidden(neuron) | Node::Output(neuron) => Some(neuron),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_tags_map_onto_kinds() {
        for code in 0..=4 {
            let kind = NodeKind::from_code(code).unwrap();
            assert_eq!(kind.code(), code);
            assert_eq!(Node::new(kind).kind(), kind);
        }
        assert_eq!(
            NodeKind::try_from(5_i32),
            Err(Error::InvalidNodeKind { code: 5 })
        );
        assert_eq!(
            NodeKind::from_code(-1),
            Err(Error::InvalidNodeKind { code: -1 })
        );
    }

    #[test]
    fn only_computed_kinds_take_edges() {
        assert!(Node::with_weights(NodeKind::Hidden, &[1.0]).is_ok());
        assert!(Node::with_weights(NodeKind::Output, &[1.0]).is_ok());
        assert!(Node::with_weights(NodeKind::Input, &[1.0]).is_err());
        assert!(Node::with_weights(NodeKind::HiddenBias, &[1.0]).is_err());
        assert!(Node::with_weights(NodeKind::OutputBias, &[1.0]).is_err());
    }

    #[test]
    fn bias_nodes_ignore_inputs_and_output_one() {
        let mut bias = Node::new(NodeKind::OutputBias);
        bias.set_input(42.0);
        assert_eq!(bias.output(), 1.0);
        assert_eq!(bias.delta(), 0.0);
        assert!(bias.neuron().is_none());
        assert!(NodeKind::HiddenBias.is_bias());
        assert!(!NodeKind::Hidden.is_bias());
    }

    #[test]
    fn input_nodes_pass_their_value_through() {
        let mut node = Node::new(NodeKind::Input);
        node.set_input(-3.5);
        assert_eq!(node.output(), -3.5);
        assert_eq!(node.weighted_input(), -3.5);
    }
}

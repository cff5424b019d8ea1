use crate::Node;

/// A weighted connection from a node in the preceding layer.
///
/// `parent` is the index of the source node inside its layer. Edges are owned
/// by the child neuron and are never shared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    parent: usize,
    weight: f64,
}

impl Edge {
    #[inline]
    pub fn parent(&self) -> usize {
        self.parent
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// State of a computed (`Hidden` / `Output`) node.
///
/// `weighted_input`, `output` and `delta` hold the values of the most recent
/// forward/backward pass; only the edge weights persist across instances.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    edges: Vec<Edge>,
    weighted_input: f64,
    output: f64,
    delta: f64,
}

impl Neuron {
    /// One edge per entry of `weights`; edge `j` connects to parent `j`.
    pub fn new(weights: &[f64]) -> Self {
        let edges = weights
            .iter()
            .enumerate()
            .map(|(parent, &weight)| Edge { parent, weight })
            .collect();
        Self {
            edges,
            weighted_input: 0.0,
            output: 0.0,
            delta: 0.0,
        }
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn weighted_input(&self) -> f64 {
        self.weighted_input
    }

    #[inline]
    pub fn output(&self) -> f64 {
        self.output
    }

    #[inline]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn weights(&self) -> Vec<f64> {
        self.edges.iter().map(Edge::weight).collect()
    }

    /// Weight of the edge coming from `parent`.
    ///
    /// Relies on the positional invariant: edge `j` has parent `j`.
    #[inline]
    pub fn weight_from(&self, parent: usize) -> f64 {
        let edge = self.edges[parent];
        debug_assert_eq!(edge.parent, parent, "edge order does not match parent order");
        edge.weight
    }

    /// Computes and stores `z = sum(parent.output() * weight)`.
    #[inline]
    pub(crate) fn feed(&mut self, source: &[Node]) -> f64 {
        debug_assert_eq!(source.len(), self.edges.len());

        let mut sum = 0.0_f64;
        for edge in &self.edges {
            sum += source[edge.parent].output() * edge.weight;
        }
        self.weighted_input = sum;
        sum
    }

    #[inline]
    pub(crate) fn set_weighted_input(&mut self, value: f64) {
        self.weighted_input = value;
    }

    #[inline]
    pub(crate) fn set_output(&mut self, value: f64) {
        self.output = value;
    }

    #[inline]
    pub(crate) fn set_delta(&mut self, value: f64) {
        self.delta = value;
    }

    /// `weight += lr * parent.output() * delta` for every incoming edge.
    #[inline]
    pub(crate) fn update_weights(&mut self, source: &[Node], lr: f64) {
        debug_assert_eq!(source.len(), self.edges.len());

        let delta = self.delta;
        for edge in &mut self.edges {
            edge.weight += lr * source[edge.parent].output() * delta;
        }
    }
}

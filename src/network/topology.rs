use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};

/// Ordered layer widths of a fully-connected network, input first.
///
/// A topology always has at least two layers (input and output) and every
/// layer has at least one node. It is fixed once a `Network` is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Topology {
    layers: Vec<usize>,
}

impl Topology {
    /// Builds `[input, hidden.., output]`.
    pub fn new(input_size: usize, hidden_sizes: &[usize], output_size: usize) -> Result<Topology> {
        let mut layers = Vec::with_capacity(hidden_sizes.len() + 2);
        layers.push(input_size);
        layers.extend_from_slice(hidden_sizes);
        layers.push(output_size);
        Topology::from_layers(layers)
    }

    pub fn from_layers(layers: Vec<usize>) -> Result<Topology> {
        if layers.len() < 2 {
            return Err(NetworkError::InvalidTopology(format!(
                "need at least an input and an output layer, got {} layer(s)",
                layers.len()
            )));
        }
        if let Some(idx) = layers.iter().position(|&w| w == 0) {
            return Err(NetworkError::InvalidTopology(format!("layer {idx} has zero nodes")));
        }
        Ok(Topology { layers })
    }

    pub fn layers(&self) -> &[usize] {
        &self.layers
    }

    /// Number of layers, `N`.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn width(&self, layer: usize) -> usize {
        self.layers[layer]
    }

    pub fn input_width(&self) -> usize {
        self.layers[0]
    }

    pub fn output_width(&self) -> usize {
        self.layers[self.layers.len() - 1]
    }

    pub fn hidden(&self) -> &[usize] {
        &self.layers[1..self.layers.len() - 1]
    }

    /// Number of adjacent layer pairs, i.e. weight matrices.
    pub fn pair_count(&self) -> usize {
        self.layers.len() - 1
    }

    /// Total number of weights across all layer pairs.
    pub fn weight_count(&self) -> usize {
        self.layers.windows(2).map(|w| w[0] * w[1]).sum()
    }

    /// Number of source rows across all layer pairs (one per non-output node).
    pub fn row_count(&self) -> usize {
        self.layers[..self.layers.len() - 1].iter().sum()
    }
}

impl TryFrom<Vec<usize>> for Topology {
    type Error = NetworkError;

    fn try_from(layers: Vec<usize>) -> Result<Topology> {
        Topology::from_layers(layers)
    }
}

impl From<Topology> for Vec<usize> {
    fn from(topology: Topology) -> Vec<usize> {
        topology.layers
    }
}

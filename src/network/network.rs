use log::debug;
use rand::Rng;

use crate::activation::sigmoid;
use crate::error::{NetworkError, Result};
use crate::math::tensor::WeightTensor;
use crate::network::scratch::Scratch;
use crate::network::topology::Topology;

/// A fully-connected feed-forward network with sigmoid activations.
///
/// All buffers are allocated once at construction. `propagate` overwrites the
/// activation and `theta` buffers; `backprop` overwrites the scratch buffers
/// and updates weights in place.
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) topology: Topology,
    pub(crate) activations: Vec<Vec<f64>>,
    pub(crate) weights: WeightTensor,
    pub(crate) scratch: Scratch,
}

impl Network {
    /// Builds a network with all weights set to zero.
    ///
    /// Call `randomize_weights` or `load_weights` before using it.
    pub fn new(input_size: usize, hidden_sizes: &[usize], output_size: usize) -> Result<Network> {
        Ok(Network::from_topology(Topology::new(input_size, hidden_sizes, output_size)?))
    }

    pub fn from_topology(topology: Topology) -> Network {
        debug!("building network with layers {:?}", topology.layers());
        let activations = topology.layers().iter().map(|&w| vec![0.0; w]).collect();
        let weights = WeightTensor::zeros(&topology);
        let scratch = Scratch::new(&topology);
        Network { topology, activations, weights, scratch }
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn weights(&self) -> &WeightTensor {
        &self.weights
    }

    /// Replaces every weight with a uniform sample from `[min, max)`.
    pub fn randomize_weights(&mut self, min: f64, max: f64) {
        self.weights = WeightTensor::random(&self.topology, min, max);
    }

    pub fn randomize_weights_with<R: Rng + ?Sized>(&mut self, rng: &mut R, min: f64, max: f64) {
        self.weights = WeightTensor::random_with(&self.topology, rng, min, max);
    }

    /// Installs pretrained weights; the tensor must have been built for the
    /// same topology.
    pub fn load_weights(&mut self, weights: WeightTensor) -> Result<()> {
        if weights.topology() != &self.topology {
            return Err(NetworkError::shape(
                format!("weight tensor for layers {:?}", weights.topology().layers()),
                self.topology.weight_count(),
                weights.topology().weight_count(),
            ));
        }
        self.weights = weights;
        Ok(())
    }

    /// Forward pass. Returns the output layer activations.
    pub fn propagate(&mut self, input: &[f64]) -> Result<&[f64]> {
        if input.len() != self.topology.input_width() {
            return Err(NetworkError::shape("input vector", self.topology.input_width(), input.len()));
        }
        self.activations[0].copy_from_slice(input);

        for n in 1..self.topology.layer_count() {
            let (before, after) = self.activations.split_at_mut(n);
            let prev = &before[n - 1];
            let current = &mut after[0];
            let theta = &mut self.scratch.theta[n];

            for k in 0..current.len() {
                let mut sum = 0.0;
                for (m, &a) in prev.iter().enumerate() {
                    sum += self.weights.get(n - 1, m, k) * a;
                }
                theta[k] = sum;
                current[k] = sigmoid(sum);
            }
        }

        Ok(self.output())
    }

    /// Output layer activations from the most recent `propagate`.
    pub fn output(&self) -> &[f64] {
        &self.activations[self.topology.layer_count() - 1]
    }

    pub fn activations(&self, layer: usize) -> &[f64] {
        &self.activations[layer]
    }

    pub fn theta(&self, layer: usize) -> &[f64] {
        &self.scratch.theta[layer]
    }

    pub fn omega(&self, layer: usize) -> &[f64] {
        &self.scratch.omega[layer]
    }

    pub fn psi(&self, layer: usize) -> &[f64] {
        &self.scratch.psi[layer]
    }
}

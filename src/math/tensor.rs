use rand::prelude::*;

use crate::error::{NetworkError, Result};
use crate::network::topology::Topology;

/// All weights of a network in one contiguous buffer.
///
/// Weight `(n, j, k)` connects source node `j` of layer `n` to destination
/// node `k` of layer `n + 1`. Pair `n` occupies `L[n] * L[n+1]` consecutive
/// values, row-major by source node, so each source row holds its destination
/// weights side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTensor {
    topology: Topology,
    offsets: Vec<usize>,
    data: Vec<f64>,
}

impl WeightTensor {
    pub fn zeros(topology: &Topology) -> WeightTensor {
        let mut offsets = Vec::with_capacity(topology.pair_count());
        let mut total = 0;
        for pair in topology.layers().windows(2) {
            offsets.push(total);
            total += pair[0] * pair[1];
        }
        WeightTensor {
            topology: topology.clone(),
            offsets,
            data: vec![0.0; total],
        }
    }

    /// Uniform samples `(max - min) * u + min` with `u` drawn from `[0, 1)`.
    pub fn random(topology: &Topology, min: f64, max: f64) -> WeightTensor {
        let mut rng = rand::thread_rng();
        WeightTensor::random_with(topology, &mut rng, min, max)
    }

    pub fn random_with<R: Rng + ?Sized>(topology: &Topology, rng: &mut R, min: f64, max: f64) -> WeightTensor {
        let mut res = WeightTensor::zeros(topology);
        for w in res.data.iter_mut() {
            *w = (max - min) * rng.gen::<f64>() + min;
        }
        res
    }

    /// Builds a tensor from source rows in nested `(pair, source)` order.
    pub fn from_rows(topology: &Topology, rows: &[Vec<f64>]) -> Result<WeightTensor> {
        if rows.len() != topology.row_count() {
            return Err(NetworkError::shape("weight rows", topology.row_count(), rows.len()));
        }
        let mut res = WeightTensor::zeros(topology);
        let coords = (0..topology.pair_count())
            .flat_map(|n| (0..topology.width(n)).map(move |j| (n, j)));
        for ((n, j), row) in coords.zip(rows) {
            let width = topology.width(n + 1);
            if row.len() != width {
                return Err(NetworkError::shape(format!("weight row ({n}, {j})"), width, row.len()));
            }
            res.row_mut(n, j).copy_from_slice(row);
        }
        Ok(res)
    }

    /// Builds a tensor from a flat buffer laid out as described on the type.
    pub fn from_flat(topology: &Topology, data: Vec<f64>) -> Result<WeightTensor> {
        let mut res = WeightTensor::zeros(topology);
        if data.len() != res.data.len() {
            return Err(NetworkError::shape("weight buffer", res.data.len(), data.len()));
        }
        res.data = data;
        Ok(res)
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    #[inline]
    fn index(&self, pair: usize, source: usize, dest: usize) -> usize {
        self.offsets[pair] + source * self.topology.width(pair + 1) + dest
    }

    #[inline]
    pub fn get(&self, pair: usize, source: usize, dest: usize) -> f64 {
        self.data[self.index(pair, source, dest)]
    }

    #[inline]
    pub fn get_mut(&mut self, pair: usize, source: usize, dest: usize) -> &mut f64 {
        let idx = self.index(pair, source, dest);
        &mut self.data[idx]
    }

    /// Destination weights leaving `source` in layer `pair`.
    pub fn row(&self, pair: usize, source: usize) -> &[f64] {
        let start = self.index(pair, source, 0);
        &self.data[start..start + self.topology.width(pair + 1)]
    }

    pub fn row_mut(&mut self, pair: usize, source: usize) -> &mut [f64] {
        let start = self.index(pair, source, 0);
        let width = self.topology.width(pair + 1);
        &mut self.data[start..start + width]
    }

    /// Every source row in nested `(pair, source)` order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, usize, &[f64])> + '_ {
        (0..self.topology.pair_count()).flat_map(move |n| {
            (0..self.topology.width(n)).map(move |j| (n, j, self.row(n, j)))
        })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

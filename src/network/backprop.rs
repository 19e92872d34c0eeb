use crate::activation::sigmoid_prime;
use crate::error::{NetworkError, Result};
use crate::network::network::Network;

impl Network {
    /// One online gradient-descent step against `expected`, using the state
    /// left by the preceding `propagate` call for the same example.
    ///
    /// Layers are walked from the output back to the first hidden layer. The
    /// weights feeding a layer are updated as soon as that layer's deltas are
    /// known, so the delta of layer `n` is computed from the already updated
    /// weights between `n` and `n + 1`.
    pub fn backprop(&mut self, expected: &[f64], learning_rate: f64) -> Result<()> {
        let last = self.topology.layer_count() - 1;
        if expected.len() != self.topology.output_width() {
            return Err(NetworkError::shape(
                "expected output vector",
                self.topology.output_width(),
                expected.len(),
            ));
        }

        let source_width = self.topology.width(last - 1);
        for k in 0..self.topology.output_width() {
            let omega = expected[k] - self.activations[last][k];
            let psi = omega * sigmoid_prime(self.scratch.theta[last][k]);
            self.scratch.omega[last][k] = omega;
            self.scratch.psi[last][k] = psi;

            for j in 0..source_width {
                *self.weights.get_mut(last - 1, j, k) += learning_rate * self.activations[last - 1][j] * psi;
            }
        }

        for n in (1..last).rev() {
            for j in 0..self.topology.width(n) {
                let omega_sum: f64 = self.scratch.psi[n + 1]
                    .iter()
                    .zip(self.weights.row(n, j))
                    .map(|(psi, w)| psi * w)
                    .sum();
                let psi = omega_sum * sigmoid_prime(self.scratch.theta[n][j]);
                self.scratch.omega[n][j] = omega_sum;
                self.scratch.psi[n][j] = psi;

                for k in 0..self.topology.width(n - 1) {
                    *self.weights.get_mut(n - 1, k, j) += learning_rate * self.activations[n - 1][k] * psi;
                }
            }
        }

        Ok(())
    }
}

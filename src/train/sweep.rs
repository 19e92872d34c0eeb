use crate::error::{NetworkError, Result};
use crate::loss::mse::MseLoss;
use crate::network::network::Network;
use crate::network::topology::Topology;

/// Checks that a training set is non-empty, paired, and matches the network
/// widths, so a sweep never fails half way through its weight updates.
pub fn check_dataset(topology: &Topology, inputs: &[Vec<f64>], expected: &[Vec<f64>]) -> Result<()> {
    if inputs.is_empty() {
        return Err(NetworkError::shape("training set", 1, 0));
    }
    if inputs.len() != expected.len() {
        return Err(NetworkError::shape("expected output count", inputs.len(), expected.len()));
    }
    for (idx, (input, target)) in inputs.iter().zip(expected.iter()).enumerate() {
        if input.len() != topology.input_width() {
            return Err(NetworkError::shape(format!("input {idx}"), topology.input_width(), input.len()));
        }
        if target.len() != topology.output_width() {
            return Err(NetworkError::shape(format!("expected output {idx}"), topology.output_width(), target.len()));
        }
    }
    Ok(())
}

/// One online sweep: every example is propagated, scored, and immediately
/// back-propagated, in index order.
///
/// Returns the sweep error. Each example is scored on the output it produced
/// before its own weight update, while earlier examples of the same sweep
/// have already moved the weights; no separate evaluation pass is made.
pub fn run_sweep(
    network: &mut Network,
    inputs: &[Vec<f64>],
    expected: &[Vec<f64>],
    learning_rate: f64,
) -> Result<f64> {
    check_dataset(network.topology(), inputs, expected)?;
    sweep_unchecked(network, inputs, expected, learning_rate)
}

pub(crate) fn sweep_unchecked(
    network: &mut Network,
    inputs: &[Vec<f64>],
    expected: &[Vec<f64>],
    learning_rate: f64,
) -> Result<f64> {
    let mut total = 0.0;

    for (input, target) in inputs.iter().zip(expected.iter()) {
        let output = network.propagate(input)?;
        total += MseLoss::half_squared_sum(output, target);
        network.backprop(target, learning_rate)?;
    }

    Ok(MseLoss::sweep_error(total, inputs.len(), network.topology().output_width()))
}

/// The opening sweep of a training run. Updates exactly like
/// `sweep_unchecked`, but the error is scored afterwards: every target is
/// compared against the output left behind by the last example, not against
/// its own output.
pub(crate) fn first_sweep_unchecked(
    network: &mut Network,
    inputs: &[Vec<f64>],
    expected: &[Vec<f64>],
    learning_rate: f64,
) -> Result<f64> {
    for (input, target) in inputs.iter().zip(expected.iter()) {
        network.propagate(input)?;
        network.backprop(target, learning_rate)?;
    }

    let last = network.output();
    let total: f64 = expected.iter().map(|target| MseLoss::half_squared_sum(last, target)).sum();
    Ok(MseLoss::sweep_error(total, inputs.len(), network.topology().output_width()))
}

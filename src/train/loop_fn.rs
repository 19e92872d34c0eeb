use log::{debug, info};

use crate::error::Result;
use crate::network::network::Network;
use crate::train::report::{StopReason, TrainingReport};
use crate::train::sweep::{check_dataset, first_sweep_unchecked, sweep_unchecked};
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` by online gradient descent until a stop condition holds.
///
/// # Arguments
/// - `network`  — mutable reference to the network; weights change in place
/// - `inputs`   — training samples, each of length `input_width`
/// - `expected` — corresponding targets, each of length `output_width`
/// - `config`   — learning rate, epoch limit, error threshold
///
/// # Stopping
/// After every sweep the epoch counter (starting at 1) and the sweep error are
/// checked: reaching `max_epochs` stops with `MaxEpochsReached`, an error at or
/// below `error_threshold` stops with `ErrorThresholdReached`. When both hold
/// the threshold wins.
///
/// The first epoch scores every target against the output of the last
/// example once the sweep is done. Later epochs score each example on the
/// output it produced mid-sweep, before its own update.
///
/// # Errors
/// Hyperparameters and dataset shapes are validated before the first update;
/// on error the weights are untouched.
pub fn train_loop(
    network: &mut Network,
    inputs: &[Vec<f64>],
    expected: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<TrainingReport> {
    config.validate()?;
    check_dataset(network.topology(), inputs, expected)?;

    let mut epoch = 0;
    let mut first = None;

    loop {
        let error = if epoch == 0 {
            first_sweep_unchecked(network, inputs, expected, config.learning_rate)?
        } else {
            sweep_unchecked(network, inputs, expected, config.learning_rate)?
        };
        epoch += 1;
        let first_error = *first.get_or_insert(error);
        debug!("epoch {epoch}: sweep error = {error}");

        if let Some(stop_reason) = StopReason::check(epoch, config.max_epochs, error, config.error_threshold) {
            match stop_reason {
                StopReason::MaxEpochsReached => info!(
                    "training complete: epoch limit of {} reached with error {}",
                    config.max_epochs, error
                ),
                StopReason::ErrorThresholdReached => info!(
                    "training complete: error threshold {} reached after {} epoch(s) with error {}",
                    config.error_threshold, epoch, error
                ),
            }
            return Ok(TrainingReport {
                epochs_run: epoch,
                first_error,
                final_error: error,
                stop_reason,
            });
        }
    }
}

impl Network {
    /// Convenience wrapper around `train_loop`.
    pub fn train(
        &mut self,
        inputs: &[Vec<f64>],
        expected: &[Vec<f64>],
        config: &TrainConfig,
    ) -> Result<TrainingReport> {
        train_loop(self, inputs, expected, config)
    }
}

use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};

/// Hyperparameters for a `train_loop` run.
///
/// # Fields
/// - `learning_rate`   — step size of every weight update; must be positive
/// - `max_epochs`      — upper bound on full sweeps over the training set
/// - `error_threshold` — training stops once the sweep error is at or below
///                       this value; a negative threshold never triggers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub max_epochs: usize,
    pub error_threshold: f64,
}

impl TrainConfig {
    pub fn new(learning_rate: f64, max_epochs: usize, error_threshold: f64) -> Self {
        TrainConfig { learning_rate, max_epochs, error_threshold }
    }

    /// Rejects values that would make the loop meaningless.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(NetworkError::NonPositiveHyperparameter {
                name: "learning_rate",
                value: self.learning_rate,
            });
        }
        if self.max_epochs < 1 {
            return Err(NetworkError::NonPositiveHyperparameter {
                name: "max_epochs",
                value: self.max_epochs as f64,
            });
        }
        Ok(())
    }
}

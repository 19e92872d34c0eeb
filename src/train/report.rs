use serde::{Deserialize, Serialize};

/// Why `train_loop` returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    MaxEpochsReached,
    ErrorThresholdReached,
}

/// Diagnostics returned by `train_loop`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Number of completed sweeps, counting from 1.
    pub epochs_run: usize,
    /// Sweep error of the first epoch.
    pub first_error: f64,
    /// Sweep error of the last epoch.
    pub final_error: f64,
    pub stop_reason: StopReason,
}

impl StopReason {
    /// Stop condition evaluated after every sweep. The threshold is checked
    /// last and wins when both conditions hold.
    pub fn check(epoch: usize, max_epochs: usize, error: f64, error_threshold: f64) -> Option<StopReason> {
        let mut reason = None;
        if epoch >= max_epochs {
            reason = Some(StopReason::MaxEpochsReached);
        }
        if error <= error_threshold {
            reason = Some(StopReason::ErrorThresholdReached);
        }
        reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_going_when_neither_condition_holds() {
        assert_eq!(StopReason::check(3, 10, 0.5, 0.1), None);
    }

    #[test]
    fn epoch_limit_alone() {
        assert_eq!(StopReason::check(10, 10, 0.5, 0.1), Some(StopReason::MaxEpochsReached));
        assert_eq!(StopReason::check(11, 10, 0.5, 0.1), Some(StopReason::MaxEpochsReached));
    }

    #[test]
    fn threshold_wins_over_epoch_limit() {
        assert_eq!(StopReason::check(10, 10, 0.1, 0.1), Some(StopReason::ErrorThresholdReached));
        assert_eq!(StopReason::check(1, 10, 0.05, 0.1), Some(StopReason::ErrorThresholdReached));
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&StopReason::MaxEpochsReached).unwrap();
        assert_eq!(json, "\"max_epochs_reached\"");
    }
}

use serde::{Deserialize, Serialize};

/// Whether a harness run trains the network or only evaluates loaded weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Randomize weights, train, then evaluate.
    Train,
    /// Evaluate the pretrained weights carried by the config.
    InferenceOnly,
}

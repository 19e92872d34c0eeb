use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NetworkError>;

#[derive(Error, Debug)]
pub enum NetworkError {
    /// A layer was declared with zero nodes, or fewer than two layers exist.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    /// A vector or tensor does not match the width declared by the topology.
    #[error("shape mismatch for {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("hyperparameter {name} must be positive, got {value}")]
    NonPositiveHyperparameter { name: &'static str, value: f64 },

    /// Malformed config, case file, or weight dump. `line` is 1-based.
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NetworkError {
    pub fn shape(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        NetworkError::ShapeMismatch { what: what.into(), expected, actual }
    }

    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        NetworkError::Parse { line, message: message.into() }
    }
}

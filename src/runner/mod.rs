pub mod cases;
pub mod image;
pub mod run_mode;

pub use cases::{evaluate, prepare_network, run_cases, RunOutcome};
pub use image::{run_autoencoder, run_classifier, ImageOutcome};
pub use run_mode::RunMode;

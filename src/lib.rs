pub mod error;
pub mod math;
pub mod activation;
pub mod network;
pub mod loss;
pub mod train;
pub mod config;
pub mod codec;
pub mod runner;

// Convenience re-exports
pub use error::{NetworkError, Result};
pub use math::tensor::WeightTensor;
pub use activation::{sigmoid, sigmoid_prime};
pub use network::network::Network;
pub use network::topology::Topology;
pub use loss::mse::MseLoss;
pub use train::{train_loop, run_sweep, StopReason, TrainConfig, TrainingReport};
pub use config::{NetworkConfig, TestCases};
pub use codec::PixelGrid;
pub use runner::RunMode;

pub mod loop_fn;
pub mod report;
pub mod sweep;
pub mod train_config;

pub use loop_fn::train_loop;
pub use report::{StopReason, TrainingReport};
pub use sweep::run_sweep;
pub use train_config::TrainConfig;

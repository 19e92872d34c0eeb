pub mod cases;
pub mod network_config;
pub mod scanner;

pub use cases::TestCases;
pub use network_config::NetworkConfig;

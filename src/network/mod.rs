pub mod backprop;
pub mod export;
pub mod network;
pub mod scratch;
pub mod topology;

pub use network::Network;
pub use topology::Topology;

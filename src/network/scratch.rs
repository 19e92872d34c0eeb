use crate::network::topology::Topology;

/// Per-layer buffers reused by every forward and backward pass.
///
/// - `theta` — pre-activation weighted sums (layer 0 unused)
/// - `omega` — error signal; `expected - actual` at the output layer,
///             the downstream weighted delta sum at interior layers
/// - `psi`   — back-propagated delta scaling the weight updates into a node
#[derive(Debug, Clone)]
pub struct Scratch {
    pub theta: Vec<Vec<f64>>,
    pub omega: Vec<Vec<f64>>,
    pub psi: Vec<Vec<f64>>,
}

impl Scratch {
    pub fn new(topology: &Topology) -> Scratch {
        let layered = || topology.layers().iter().map(|&w| vec![0.0; w]).collect::<Vec<_>>();
        Scratch {
            theta: layered(),
            omega: layered(),
            psi: layered(),
        }
    }
}

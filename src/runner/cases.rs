use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::config::cases::TestCases;
use crate::config::network_config::NetworkConfig;
use crate::error::{NetworkError, Result};
use crate::math::tensor::WeightTensor;
use crate::network::network::Network;
use crate::network::topology::Topology;
use crate::runner::run_mode::RunMode;
use crate::train::loop_fn::train_loop;
use crate::train::report::TrainingReport;

/// Everything a harness run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    pub mode: RunMode,
    pub topology: Topology,
    /// Outputs for every case before training; empty for inference runs.
    pub outputs_before: Vec<Vec<f64>>,
    /// Outputs for every case with the final weights.
    pub outputs: Vec<Vec<f64>>,
    pub expected: Vec<Vec<f64>>,
    pub report: Option<TrainingReport>,
    #[serde(skip)]
    pub weights: WeightTensor,
}

impl RunOutcome {
    /// Pretty-printed JSON summary; the weights are left to the record dump.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builds the network for a run: random weights in the config's range for
/// training (seeded when `seed` is given), the config's pretrained weights
/// for inference.
pub fn prepare_network(config: &NetworkConfig, mode: RunMode, seed: Option<u64>) -> Result<Network> {
    let topology = config.topology()?;
    info!("layers: {:?}", topology.layers());

    match mode {
        RunMode::Train => {
            let mut network = Network::from_topology(topology);
            match seed {
                Some(seed) => network.randomize_weights_with(
                    &mut StdRng::seed_from_u64(seed),
                    config.min_random,
                    config.max_random,
                ),
                None => network.randomize_weights(config.min_random, config.max_random),
            }
            info!(
                "training with learning rate {}, at most {} epochs, error threshold {}, initial weights in [{}, {}]",
                config.learning_rate, config.max_epochs, config.error_threshold, config.min_random, config.max_random
            );
            Ok(network)
        }
        RunMode::InferenceOnly => {
            if !config.has_weights() {
                return Err(NetworkError::shape("pretrained weight rows", topology.row_count(), 0));
            }
            config.build_network()
        }
    }
}

/// Propagates every input and collects copies of the outputs.
pub fn evaluate(network: &mut Network, inputs: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    inputs
        .iter()
        .map(|input| network.propagate(input).map(|out| out.to_vec()))
        .collect()
}

/// Case-table harness: train on (or just evaluate) a set of test cases.
pub fn run_cases(config: &NetworkConfig, cases: &TestCases, mode: RunMode, seed: Option<u64>) -> Result<RunOutcome> {
    let mut network = prepare_network(config, mode, seed)?;
    cases.check(network.topology())?;

    let (outputs_before, report) = match mode {
        RunMode::Train => {
            let before = evaluate(&mut network, &cases.inputs)?;
            let report = train_loop(&mut network, &cases.inputs, &cases.expected, &config.train_config())?;
            (before, Some(report))
        }
        RunMode::InferenceOnly => (Vec::new(), None),
    };
    let outputs = evaluate(&mut network, &cases.inputs)?;

    Ok(RunOutcome {
        mode,
        topology: network.topology().clone(),
        outputs_before,
        outputs,
        expected: cases.expected.clone(),
        report,
        weights: network.weights().clone(),
    })
}

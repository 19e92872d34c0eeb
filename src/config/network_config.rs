use std::fmt;
use std::path::Path;

use log::debug;

use crate::config::scanner::{parse_csv, TextScanner};
use crate::error::{NetworkError, Result};
use crate::math::tensor::WeightTensor;
use crate::network::export::format_weight;
use crate::network::network::Network;
use crate::network::topology::Topology;
use crate::train::train_config::TrainConfig;

/// Network shape, training hyperparameters and optional pretrained weights,
/// as read from a network info file.
///
/// Text layout (numbers may wrap across lines; the hidden list and each
/// weight row occupy their own line):
///
/// ```text
/// <input size> <hidden layer count>
/// <comma-separated hidden sizes, or `-` when there are none>
/// <output size>
/// <min random weight> <max random weight>
/// <learning rate>
/// <max epochs>
/// <error threshold>
/// <weight rows, one per source node in (layer pair, source) order>
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkConfig {
    pub input_size: usize,
    pub hidden_sizes: Vec<usize>,
    pub output_size: usize,
    pub min_random: f64,
    pub max_random: f64,
    pub learning_rate: f64,
    pub max_epochs: usize,
    pub error_threshold: f64,
    /// Pretrained weight rows; empty when the file carries none.
    pub weight_rows: Vec<Vec<f64>>,
}

impl NetworkConfig {
    pub fn parse(text: &str) -> Result<NetworkConfig> {
        let mut sc = TextScanner::new(text);

        let input_size: usize = sc.parse_next("input size")?;
        let hidden_count: usize = sc.parse_next("hidden layer count")?;
        sc.finish_line();

        let (line_no, hidden_line) = sc
            .next_line()
            .ok_or_else(|| NetworkError::parse(sc.line_no(), "missing hidden layer sizes line"))?;
        let hidden_line = hidden_line.trim();
        let hidden_sizes: Vec<usize> = if hidden_line == "-" {
            Vec::new()
        } else {
            parse_csv(line_no, hidden_line, "hidden layer size")?
        };
        if hidden_sizes.len() != hidden_count {
            return Err(NetworkError::parse(
                line_no,
                format!("declared {hidden_count} hidden layer(s) but listed {}", hidden_sizes.len()),
            ));
        }

        let output_size: usize = sc.parse_next("output size")?;
        let min_random: f64 = sc.parse_next("minimum random weight")?;
        let max_random: f64 = sc.parse_next("maximum random weight")?;
        let learning_rate: f64 = sc.parse_next("learning rate")?;
        let max_epochs: usize = sc.parse_next("max epochs")?;
        let error_threshold: f64 = sc.parse_next("error threshold")?;
        sc.finish_line();

        let mut weight_rows = Vec::new();
        for (line_no, line) in sc.remaining_lines() {
            weight_rows.push(parse_csv(line_no, line, "weight")?);
        }

        let config = NetworkConfig {
            input_size,
            hidden_sizes,
            output_size,
            min_random,
            max_random,
            learning_rate,
            max_epochs,
            error_threshold,
            weight_rows,
        };
        config.topology()?;
        debug!(
            "parsed network config: layers {:?}, {} pretrained weight row(s)",
            config.topology()?.layers(),
            config.weight_rows.len()
        );
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<NetworkConfig> {
        let text = std::fs::read_to_string(path)?;
        NetworkConfig::parse(&text)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }

    pub fn topology(&self) -> Result<Topology> {
        Topology::new(self.input_size, &self.hidden_sizes, self.output_size)
    }

    pub fn train_config(&self) -> TrainConfig {
        TrainConfig::new(self.learning_rate, self.max_epochs, self.error_threshold)
    }

    /// Same hyperparameters with the input and output widths replaced, for
    /// harnesses that derive them from their data (e.g. an image's pixel count).
    pub fn with_sizes(&self, input_size: usize, output_size: usize) -> NetworkConfig {
        NetworkConfig { input_size, output_size, ..self.clone() }
    }

    /// Replaces the pretrained rows with the given tensor's rows.
    pub fn with_weights(&self, weights: &WeightTensor) -> NetworkConfig {
        NetworkConfig {
            weight_rows: weights.rows().map(|(_, _, row)| row.to_vec()).collect(),
            ..self.clone()
        }
    }

    pub fn has_weights(&self) -> bool {
        !self.weight_rows.is_empty()
    }

    pub fn pretrained_weights(&self) -> Result<Option<WeightTensor>> {
        if self.weight_rows.is_empty() {
            return Ok(None);
        }
        let topology = self.topology()?;
        Ok(Some(WeightTensor::from_rows(&topology, &self.weight_rows)?))
    }

    /// Builds the network, installing pretrained weights when present.
    /// Without them every weight is zero until the caller randomizes.
    pub fn build_network(&self) -> Result<Network> {
        let mut network = Network::from_topology(self.topology()?);
        if let Some(weights) = self.pretrained_weights()? {
            network.load_weights(weights)?;
        }
        Ok(network)
    }
}

impl fmt::Display for NetworkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.input_size, self.hidden_sizes.len())?;
        if self.hidden_sizes.is_empty() {
            writeln!(f, "-")?;
        } else {
            let hidden: Vec<String> = self.hidden_sizes.iter().map(|h| h.to_string()).collect();
            writeln!(f, "{}", hidden.join(","))?;
        }
        writeln!(f, "{}", self.output_size)?;
        writeln!(f, "{} {}", format_weight(self.min_random), format_weight(self.max_random))?;
        writeln!(f, "{}", format_weight(self.learning_rate))?;
        writeln!(f, "{}", self.max_epochs)?;
        writeln!(f, "{}", format_weight(self.error_threshold))?;
        for row in &self.weight_rows {
            let row: Vec<String> = row.iter().map(|&w| format_weight(w)).collect();
            writeln!(f, "{}", row.join(","))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XOR_INFO: &str = "2\n1\n2\n1\n-1.5\n1.5\n0.3\n100000\n0.001\n";

    #[test]
    fn parses_one_value_per_line() {
        let cfg = NetworkConfig::parse(XOR_INFO).unwrap();
        assert_eq!(cfg.input_size, 2);
        assert_eq!(cfg.hidden_sizes, vec![2]);
        assert_eq!(cfg.output_size, 1);
        assert_eq!(cfg.min_random, -1.5);
        assert_eq!(cfg.max_random, 1.5);
        assert_eq!(cfg.learning_rate, 0.3);
        assert_eq!(cfg.max_epochs, 100000);
        assert_eq!(cfg.error_threshold, 0.001);
        assert!(!cfg.has_weights());
        assert_eq!(cfg.topology().unwrap().layers(), &[2, 2, 1]);
    }

    #[test]
    fn parses_compact_layout_with_weights() {
        let text = "2 2\n3,2\n1\n-1 1 0.5 10 0.01\n\
                    0.1,0.2,0.3\n0.4,0.5,0.6\n\
                    1,2\n3,4\n5,6\n\
                    7\n8\n";
        let cfg = NetworkConfig::parse(text).unwrap();
        assert_eq!(cfg.hidden_sizes, vec![3, 2]);
        let net = cfg.build_network().unwrap();
        assert_eq!(net.weights().get(0, 1, 2), 0.6);
        assert_eq!(net.weights().get(1, 2, 1), 6.0);
        assert_eq!(net.weights().get(2, 1, 0), 8.0);
    }

    #[test]
    fn zero_hidden_layers_use_a_dash() {
        let cfg = NetworkConfig::parse("3 0\n-\n2\n-1 1\n0.1\n5\n0.0\n").unwrap();
        assert!(cfg.hidden_sizes.is_empty());
        assert_eq!(cfg.topology().unwrap().layer_count(), 2);
        assert!(cfg.to_string().starts_with("3 0\n-\n2\n"));
    }

    #[test]
    fn display_round_trips() {
        let text = "2 1\n2\n1\n-1.5 1.5\n0.3\n100\n0.001\n0.25,-0.5\n1.0,2.0\n3.5\n-4.0\n";
        let cfg = NetworkConfig::parse(text).unwrap();
        assert_eq!(cfg.to_string(), text);
        assert_eq!(NetworkConfig::parse(&cfg.to_string()).unwrap(), cfg);
    }

    #[test]
    fn reports_bad_input_with_line_numbers() {
        assert!(matches!(
            NetworkConfig::parse("2 2\n3\n1\n"),
            Err(NetworkError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            NetworkConfig::parse("2 1\n2\n1\n-1 x\n"),
            Err(NetworkError::Parse { line: 4, .. })
        ));
        assert!(matches!(NetworkConfig::parse("2 1\n2\n1\n-1 1\n"), Err(NetworkError::Parse { .. })));
        assert!(matches!(
            NetworkConfig::parse("2 1\n0\n1\n-1 1\n0.1\n5\n0.1\n"),
            Err(NetworkError::InvalidTopology(_))
        ));
    }

    #[test]
    fn weight_rows_must_match_topology() {
        let cfg = NetworkConfig::parse("1 0\n-\n1\n-1 1\n0.1\n5\n0.1\n1.0,2.0\n").unwrap();
        assert!(matches!(cfg.build_network(), Err(NetworkError::ShapeMismatch { .. })));
    }
}

use std::path::Path;

use crate::config::scanner::{parse_csv, TextScanner};
use crate::error::{NetworkError, Result};
use crate::network::topology::Topology;
use crate::train::sweep::check_dataset;

/// Paired input / expected-output vectors read from a test case file.
///
/// ```text
/// <case count>
/// <input row>     (case count lines, comma-separated)
/// <expected row>  (case count lines, comma-separated)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TestCases {
    pub inputs: Vec<Vec<f64>>,
    pub expected: Vec<Vec<f64>>,
}

impl TestCases {
    pub fn new(inputs: Vec<Vec<f64>>, expected: Vec<Vec<f64>>) -> TestCases {
        TestCases { inputs, expected }
    }

    pub fn parse(text: &str) -> Result<TestCases> {
        let mut sc = TextScanner::new(text);
        let count: usize = sc.parse_next("case count")?;
        sc.finish_line();

        let rows = sc.remaining_lines();
        if rows.len() != 2 * count {
            return Err(NetworkError::parse(
                sc.line_no(),
                format!("expected {} case rows ({count} inputs then {count} outputs), found {}", 2 * count, rows.len()),
            ));
        }

        let mut parsed = rows
            .into_iter()
            .map(|(line_no, line)| parse_csv::<f64>(line_no, line, "case value"))
            .collect::<Result<Vec<_>>>()?;
        let expected = parsed.split_off(count);
        Ok(TestCases { inputs: parsed, expected })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<TestCases> {
        let text = std::fs::read_to_string(path)?;
        TestCases::parse(&text)
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Verifies every row against the network widths.
    pub fn check(&self, topology: &Topology) -> Result<()> {
        check_dataset(topology, &self.inputs, &self.expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XOR_CASES: &str = "4\n0,0\n0,1\n1,0\n1,1\n0\n1\n1\n0\n";

    #[test]
    fn parses_inputs_then_outputs() {
        let cases = TestCases::parse(XOR_CASES).unwrap();
        assert_eq!(cases.len(), 4);
        assert_eq!(cases.inputs[1], vec![0.0, 1.0]);
        assert_eq!(cases.expected, vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]]);
        assert!(cases.check(&Topology::new(2, &[2], 1).unwrap()).is_ok());
    }

    #[test]
    fn wrong_width_is_a_shape_mismatch() {
        let cases = TestCases::parse(XOR_CASES).unwrap();
        assert!(matches!(
            cases.check(&Topology::new(3, &[2], 1).unwrap()),
            Err(NetworkError::ShapeMismatch { expected: 3, actual: 2, .. })
        ));
    }

    #[test]
    fn missing_rows_are_reported() {
        assert!(matches!(TestCases::parse("2\n0,1\n1,0\n1\n"), Err(NetworkError::Parse { .. })));
        assert!(matches!(TestCases::parse("1\n0,q\n1\n"), Err(NetworkError::Parse { line: 2, .. })));
    }
}

pub struct MseLoss;

impl MseLoss {
    /// Summed half squared error of one example: `Σ 0.5 * (expected - predicted)²`.
    pub fn half_squared_sum(predicted: &[f64], expected: &[f64]) -> f64 {
        expected.iter().zip(predicted.iter())
            .map(|(e, a)| 0.5 * ((e - a) * (e - a)))
            .sum::<f64>()
    }

    /// Mean over every example and output node of a sweep.
    pub fn sweep_error(total: f64, cases: usize, outputs: usize) -> f64 {
        total / (cases * outputs) as f64
    }
}

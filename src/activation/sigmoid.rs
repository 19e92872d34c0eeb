/// Largest magnitude for which `exp(-x)` stays finite in `f64`.
const EXP_LIMIT: f64 = 709.0;

/// Logistic sigmoid: `1 / (1 + e^-x)`.
///
/// Saturates to exactly `0.0` / `1.0` outside `[-EXP_LIMIT, EXP_LIMIT]` so that
/// very large pre-activation sums never produce infinities or NaN.
pub fn sigmoid(x: f64) -> f64 {
    if x < -EXP_LIMIT {
        0.0
    } else if x > EXP_LIMIT {
        1.0
    } else {
        1.0 / (1.0 + (-x).exp())
    }
}

/// Derivative of the sigmoid expressed through the sigmoid itself.
pub fn sigmoid_prime(x: f64) -> f64 {
    let fx = sigmoid(x);
    fx * (1.0 - fx)
}

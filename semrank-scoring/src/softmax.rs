//! Numerically stable softmax.
//!
//! The maximum logit is subtracted before exponentiation. Non-finite logits
//! contribute zero weight, and a zero or non-finite denominator yields an
//! all-zero distribution rather than NaN.

fn finite_max(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .filter(|x| x.is_finite())
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Normalize `logits` into weights summing to 1.
pub fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = finite_max(logits);
    if !max.is_finite() {
        return vec![0.0; logits.len()];
    }

    let exps: Vec<f64> = logits
        .iter()
        .map(|&x| if x.is_finite() { (x - max).exp() } else { 0.0 })
        .collect();
    let sum: f64 = exps.iter().sum();
    if sum <= 0.0 || !sum.is_finite() {
        return vec![0.0; logits.len()];
    }

    exps.into_iter().map(|e| e / sum).collect()
}

/// Softmax over `scores / temperature`. `temperature` must already be
/// validated positive.
///
/// The maximum is subtracted before dividing, so the top score always maps
/// to logit 0 and a tiny temperature cannot overflow the logits. Gaps that
/// underflow to `-inf` just get zero weight.
pub fn softmax_with_temperature(scores: &[f64], temperature: f64) -> Vec<f64> {
    let max = finite_max(scores);
    if !max.is_finite() {
        return vec![0.0; scores.len()];
    }
    let logits: Vec<f64> = scores
        .iter()
        .map(|&s| if s.is_finite() { (s - max) / temperature } else { f64::NAN })
        .collect();
    softmax(&logits)
}

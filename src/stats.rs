//! Summary statistics over individual run times.

/// z-score for a two-sided 95% interval under the normal approximation.
const Z_95: f64 = 1.96;

/// Arithmetic mean. `0.0` for an empty slice.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Sample standard deviation (n - 1 denominator). `0.0` below two samples.
pub fn stdev(samples: &[f64]) -> f64 {
    let n = samples.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(samples);
    let var = samples.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (n - 1) as f64;
    var.sqrt()
}

/// Confidence interval for the mean of `samples` as `(low, high)`.
///
/// Uses `mean ± z * stdev / sqrt(n)` with the normal approximation, so it
/// understates the width for small `n`. Only `0.95` maps to its exact z-score;
/// any other level falls back to it as well. Returns `(0.0, 0.0)` when there
/// are fewer than two samples.
pub fn confidence_interval(samples: &[f64], confidence: f64) -> (f64, f64) {
    if samples.len() < 2 {
        return (0.0, 0.0);
    }
    let z = z_score(confidence);
    let m = mean(samples);
    let margin = z * (stdev(samples) / (samples.len() as f64).sqrt());
    (m - margin, m + margin)
}

fn z_score(confidence: f64) -> f64 {
    // 90% and 99% are the only other levels anyone asks for
    if (confidence - 0.90).abs() < 1e-9 {
        1.645
    } else if (confidence - 0.99).abs() < 1e-9 {
        2.576
    } else {
        Z_95
    }
}

use ndarray::ArrayView1;

/// Pearson correlation between `a` and `b`.
///
/// Mismatched lengths, empty input, or zero variance in either argument
/// yield 0.0 rather than an error; callers treat 0 as "no signal".
pub fn correlation(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let n = a.len() as f64;
    let mean_a = a.sum() / n;
    let mean_b = b.sum() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (&x, &y) in a.iter().zip(b.iter()) {
        cov += (x - mean_a) * (y - mean_b);
        var_a += (x - mean_a).powi(2);
        var_b += (y - mean_b).powi(2);
    }

    let denom = (var_a * var_b).sqrt();
    if denom == 0.0 {
        return 0.0;
    }
    cov / denom
}

/// Coefficient of determination. Empty or mismatched input yields 0.0, as
/// does a constant `actual` (zero total sum of squares).
pub fn r_squared(actual: ArrayView1<f64>, predicted: ArrayView1<f64>) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return 0.0;
    }
    let mean = actual.sum() / actual.len() as f64;
    let ss_res: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();
    let ss_tot: f64 = actual.iter().map(|a| (a - mean).powi(2)).sum();
    if ss_tot == 0.0 {
        return 0.0;
    }
    1.0 - ss_res / ss_tot
}

/// Empty or mismatched input yields +inf; treat it as "undefined", not as
/// a real large error.
pub fn mean_absolute_error(actual: ArrayView1<f64>, predicted: ArrayView1<f64>) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::INFINITY;
    }
    actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum::<f64>()
        / actual.len() as f64
}

/// Empty or mismatched input yields +inf.
pub fn mean_squared_error(actual: ArrayView1<f64>, predicted: ArrayView1<f64>) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::INFINITY;
    }
    actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum::<f64>()
        / actual.len() as f64
}

/// Empty or mismatched input yields +inf.
pub fn root_mean_squared_error(actual: ArrayView1<f64>, predicted: ArrayView1<f64>) -> f64 {
    mean_squared_error(actual, predicted).sqrt()
}

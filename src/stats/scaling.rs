use ndarray::{Array1, ArrayView1};

/// Rescales `values` to [0, 1] via (v - min) / (max - min). A constant
/// input maps to all 0.5 so downstream weighting sees a neutral value
/// instead of a division by zero.
pub fn normalize(values: ArrayView1<f64>) -> Array1<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == min {
        return Array1::from_elem(values.len(), 0.5);
    }
    values.map(|v| (v - min) / (max - min))
}

/// Rescales `values` to mean 0 and unit variance. Population variance
/// (divide by n, not n - 1). A zero-variance input maps to all zeros.
pub fn standardize(values: ArrayView1<f64>) -> Array1<f64> {
    if values.is_empty() {
        return Array1::zeros(0);
    }
    let n = values.len() as f64;
    let mean = values.sum() / n;
    let std = (values.map(|v| (v - mean).powi(2)).sum() / n).sqrt();
    if std == 0.0 {
        return Array1::zeros(values.len());
    }
    values.map(|v| (v - mean) / std)
}

use ndarray::{Array1, ArrayView1, ArrayView2};
use tracing::debug;

use super::params::LinearRegressionParams;
use super::FittedLinear;

/// Batch gradient descent for exactly `epochs` iterations; no early
/// stopping and no convergence check, regardless of the loss trend.
pub fn fit(
    x: ArrayView2<f64>,
    y: ArrayView1<f64>,
    params: &LinearRegressionParams,
) -> FittedLinear {
    let n = x.nrows() as f64;
    let mut weights = Array1::<f64>::zeros(x.ncols());
    let mut bias = 0.0;

    for _ in 0..params.epochs {
        let mut weight_grad = Array1::<f64>::zeros(x.ncols());
        let mut bias_grad = 0.0;

        for (row, &target) in x.rows().into_iter().zip(y.iter()) {
            let residual = bias + weights.dot(&row) - target;
            weight_grad.scaled_add(residual, &row);
            bias_grad += residual;
        }

        weights.zip_mut_with(&weight_grad, |w, g| {
            *w -= params.learning_rate * (g / n + params.regularization * *w);
        });
        bias -= params.learning_rate * (bias_grad / n);
    }

    let loss: f64 = x
        .rows()
        .into_iter()
        .zip(y.iter())
        .map(|(row, &target)| (bias + weights.dot(&row) - target).powi(2))
        .sum::<f64>()
        / n;
    debug!(epochs = params.epochs, loss, "gradient descent finished");

    FittedLinear { weights, bias }
}

//! Machine-learning engine for a quantitative-finance scanner: supervised
//! regression (linear, tree, forest), k-means clustering, and the
//! statistical utilities the downstream analytics modules build on.
pub mod cluster;
pub mod dataset;
pub mod error;
pub mod forest;
pub mod linear;
pub mod stats;
pub mod tree;

pub use error::{ModelError, Result};

use ndarray::{Array1, ArrayView1, ArrayView2};

/// Uniform fit/predict contract shared by the regression models, so that
/// callers can swap model types without branching on internals beyond
/// configuration.
pub trait Regressor {
    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> &mut Self;

    /// Errors with [`ModelError::NotFitted`] when called before `fit`.
    fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<f64>>;
}

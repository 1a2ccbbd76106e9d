pub mod fitter;
pub mod params;

use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::error::{ModelError, Result};
use crate::Regressor;
use params::LinearRegressionParams;

/// Linear model fitted by batch gradient descent with L2 regularization
/// on the weights (the bias is never penalized).
#[derive(Debug, Clone)]
pub struct LinearRegression {
    params: LinearRegressionParams,
    fitted: Option<FittedLinear>,
}

#[derive(Debug, Clone)]
pub struct FittedLinear {
    pub weights: Array1<f64>,
    pub bias: f64,
}

impl LinearRegression {
    pub fn new(params: LinearRegressionParams) -> Self {
        Self {
            params,
            fitted: None,
        }
    }

    pub fn params(&self) -> &LinearRegressionParams {
        &self.params
    }

    pub fn weights(&self) -> Result<ArrayView1<f64>> {
        Ok(self.fitted()?.weights.view())
    }

    pub fn bias(&self) -> Result<f64> {
        Ok(self.fitted()?.bias)
    }

    /// Absolute weight magnitudes. A naive proxy: larger only means a
    /// larger coefficient in the possibly-unstandardized feature space, so
    /// standardize inputs first when comparability across features
    /// matters.
    pub fn feature_importance(&self) -> Result<Array1<f64>> {
        Ok(self.fitted()?.weights.map(|w| w.abs()))
    }

    fn fitted(&self) -> Result<&FittedLinear> {
        self.fitted.as_ref().ok_or(ModelError::NotFitted {
            model: "LinearRegression",
        })
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new(LinearRegressionParams::default())
    }
}

impl Regressor for LinearRegression {
    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> &mut Self {
        self.fitted = Some(fitter::fit(x, y, &self.params));
        self
    }

    fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        let fitted = self.fitted()?;
        Ok(x.rows()
            .into_iter()
            .map(|row| fitted.bias + fitted.weights.dot(&row))
            .collect())
    }
}

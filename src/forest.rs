pub mod fitter;
pub mod params;

use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::error::{ModelError, Result};
use crate::tree::node::Node;
use crate::Regressor;
use params::RandomForestParams;

/// Bootstrap-aggregated ensemble of regression trees with per-split
/// random feature subsampling.
#[derive(Debug, Clone)]
pub struct RandomForestRegressor {
    params: RandomForestParams,
    fitted: Option<FittedForest>,
}

#[derive(Debug, Clone)]
pub struct FittedForest {
    pub trees: Vec<Node>,
    pub n_features: usize,
}

impl RandomForestRegressor {
    pub fn new(params: RandomForestParams) -> Self {
        Self {
            params,
            fitted: None,
        }
    }

    pub fn params(&self) -> &RandomForestParams {
        &self.params
    }

    /// Fits while reporting fractional completion after each finished
    /// tree. The observer runs on the training thread(s) and must not
    /// block indefinitely.
    pub fn fit_with_progress(
        &mut self,
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
        on_progress: &(dyn Fn(f64) + Sync),
    ) -> &mut Self {
        self.fitted = Some(fitter::fit(x, y, &self.params, Some(on_progress)));
        self
    }

    /// Count-based importance: the fraction of all split nodes across the
    /// forest that test each feature. Not impurity-weighted, so trees with
    /// very unbalanced depths can misrepresent importance.
    pub fn feature_importance(&self) -> Result<Array1<f64>> {
        let fitted = self.fitted()?;
        let mut counts = vec![0usize; fitted.n_features];
        for tree in &fitted.trees {
            tree.count_split_features(&mut counts);
        }
        let total: usize = counts.iter().sum();
        if total == 0 {
            return Ok(Array1::zeros(fitted.n_features));
        }
        Ok(counts.iter().map(|&c| c as f64 / total as f64).collect())
    }

    fn fitted(&self) -> Result<&FittedForest> {
        self.fitted.as_ref().ok_or(ModelError::NotFitted {
            model: "RandomForestRegressor",
        })
    }
}

impl Default for RandomForestRegressor {
    fn default() -> Self {
        Self::new(RandomForestParams::default())
    }
}

impl Regressor for RandomForestRegressor {
    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> &mut Self {
        self.fitted = Some(fitter::fit(x, y, &self.params, None));
        self
    }

    /// Ensemble prediction is the arithmetic mean across trees, with no
    /// weighting by tree quality.
    fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        let fitted = self.fitted()?;
        let mut result = Array1::zeros(x.nrows());
        for tree in &fitted.trees {
            for (i, row) in x.rows().into_iter().enumerate() {
                result[i] += tree.predict_row(row);
            }
        }
        Ok(result / fitted.trees.len() as f64)
    }
}

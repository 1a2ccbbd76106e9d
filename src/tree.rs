pub mod fitter;
pub mod node;
pub mod params;

use ndarray::{Array1, ArrayView1, ArrayView2};
use rand::{rngs::StdRng, SeedableRng};

use crate::error::{ModelError, Result};
use crate::Regressor;
use node::Node;
use params::DecisionTreeParams;

/// CART-style regression tree: greedy, axis-aligned splits chosen by
/// impurity gain, mean-valued leaves.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    params: DecisionTreeParams,
    root: Option<Node>,
}

impl DecisionTree {
    pub fn new(params: DecisionTreeParams) -> Self {
        Self { params, root: None }
    }

    pub fn params(&self) -> &DecisionTreeParams {
        &self.params
    }

    pub fn root(&self) -> Result<&Node> {
        self.root.as_ref().ok_or(ModelError::NotFitted {
            model: "DecisionTree",
        })
    }
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new(DecisionTreeParams::default())
    }
}

impl Regressor for DecisionTree {
    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> &mut Self {
        let mut rng = StdRng::seed_from_u64(self.params.seed);
        self.root = Some(fitter::fit(x, y, &self.params, &mut rng));
        self
    }

    fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        let root = self.root()?;
        Ok(x.rows().into_iter().map(|row| root.predict_row(row)).collect())
    }
}

pub mod fitter;
pub mod params;

use ndarray::{Array1, Array2, ArrayView2};
use rand::{rngs::StdRng, SeedableRng};

use crate::error::{ModelError, Result};
use fitter::nearest_centroid;
use params::KMeansParams;

/// Centroid-based clustering with k-means++ seeding and Lloyd iteration.
#[derive(Debug, Clone)]
pub struct KMeans {
    params: KMeansParams,
    fitted: Option<FittedKMeans>,
}

#[derive(Debug, Clone)]
pub struct FittedKMeans {
    /// One row per centroid, shape (k, n_features).
    pub centroids: Array2<f64>,
    /// Cluster index of each training point, parallel to the fit input.
    pub labels: Vec<usize>,
}

impl KMeans {
    pub fn new(params: KMeansParams) -> Self {
        Self {
            params,
            fitted: None,
        }
    }

    pub fn params(&self) -> &KMeansParams {
        &self.params
    }

    /// Recomputes centroids and labels in full; nothing survives from a
    /// previous fit.
    pub fn fit(&mut self, x: ArrayView2<f64>) -> &mut Self {
        let mut rng = StdRng::seed_from_u64(self.params.seed);
        self.fitted = Some(fitter::fit(x, &self.params, &mut rng));
        self
    }

    /// Assigns each row to the nearest fitted centroid.
    pub fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<usize>> {
        let fitted = self.fitted()?;
        Ok(x.rows()
            .into_iter()
            .map(|row| nearest_centroid(row, fitted.centroids.view()).0)
            .collect())
    }

    /// Sum of squared distances from each row to its assigned centroid.
    /// Returns +inf when the model has not been fitted; callers treat that
    /// as "undefined" rather than a real large value.
    pub fn inertia(&self, x: ArrayView2<f64>) -> f64 {
        let Some(fitted) = self.fitted.as_ref() else {
            return f64::INFINITY;
        };
        x.rows()
            .into_iter()
            .map(|row| nearest_centroid(row, fitted.centroids.view()).1)
            .sum()
    }

    pub fn centroids(&self) -> Result<ArrayView2<f64>> {
        Ok(self.fitted()?.centroids.view())
    }

    pub fn labels(&self) -> Result<&[usize]> {
        Ok(&self.fitted()?.labels)
    }

    fn fitted(&self) -> Result<&FittedKMeans> {
        self.fitted.as_ref().ok_or(ModelError::NotFitted { model: "KMeans" })
    }
}

impl Default for KMeans {
    fn default() -> Self {
        Self::new(KMeansParams::default())
    }
}

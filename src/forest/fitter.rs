use std::sync::atomic::{AtomicUsize, Ordering};

use ndarray::{ArrayView1, ArrayView2, Axis};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use super::params::RandomForestParams;
use super::FittedForest;
use crate::tree::{self, node::Node};

#[cfg(feature = "use-rayon")]
use rayon::prelude::*;

pub fn fit(
    x: ArrayView2<f64>,
    y: ArrayView1<f64>,
    hyperparameters: &RandomForestParams,
    on_progress: Option<&(dyn Fn(f64) + Sync)>,
) -> FittedForest {
    let RandomForestParams {
        n_estimators,
        bootstrap,
        tree_params,
        seed,
    } = hyperparameters;
    let n = x.nrows();
    let total = *n_estimators;
    let mut master_rng = StdRng::seed_from_u64(*seed);

    // Pre-generate per-tree seeds so the sequential and parallel paths
    // train identical forests.
    let seeds: Vec<u64> = (0..total).map(|_| master_rng.gen()).collect();
    let finished = AtomicUsize::new(0);

    let fit_one = |(b, &tree_seed): (usize, &u64)| -> Node {
        let mut tree_rng = StdRng::seed_from_u64(tree_seed);
        let node = if *bootstrap {
            // n draws with replacement; duplicates allowed, some rows left out.
            let sample_indices: Vec<usize> = (0..n).map(|_| tree_rng.gen_range(0..n)).collect();
            let x_sample = x.select(Axis(0), &sample_indices);
            let y_sample = y.select(Axis(0), &sample_indices);
            tree::fitter::fit(x_sample.view(), y_sample.view(), tree_params, &mut tree_rng)
        } else {
            tree::fitter::fit(x, y, tree_params, &mut tree_rng)
        };
        let done = finished.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(tree = b, done, total, "trained tree");
        if let Some(progress) = on_progress {
            progress(done as f64 / total as f64);
        }
        node
    };

    #[cfg(not(feature = "use-rayon"))]
    let trees: Vec<Node> = seeds.iter().enumerate().map(fit_one).collect();

    #[cfg(feature = "use-rayon")]
    let trees: Vec<Node> = seeds.par_iter().enumerate().map(fit_one).collect();

    FittedForest {
        trees,
        n_features: x.ncols(),
    }
}

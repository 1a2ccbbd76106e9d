use std::collections::HashMap;

use itertools::Itertools;
use ndarray::{ArrayView1, ArrayView2};
use rand::{seq::index::sample, Rng};

use super::node::Node;
use super::params::{DecisionTreeParams, Impurity};

/// Builds a tree over all rows of `x`. Feature subsampling draws from
/// `rng`, so forest callers pass their per-tree RNG here.
pub fn fit<R: Rng + ?Sized>(
    x: ArrayView2<f64>,
    y: ArrayView1<f64>,
    params: &DecisionTreeParams,
    rng: &mut R,
) -> Node {
    let indices: Vec<usize> = (0..x.nrows()).collect();
    build(x, y, &indices, 0, params, rng)
}

fn build<R: Rng + ?Sized>(
    x: ArrayView2<f64>,
    y: ArrayView1<f64>,
    indices: &[usize],
    depth: usize,
    params: &DecisionTreeParams,
    rng: &mut R,
) -> Node {
    if indices.len() < params.min_samples_split || depth >= params.max_depth {
        return Node::Leaf {
            value: mean_of(y, indices),
        };
    }

    let Some(candidate) = best_split(x, y, indices, params, rng) else {
        return Node::Leaf {
            value: mean_of(y, indices),
        };
    };

    // A positive-gain split is still discarded when it would leave a child
    // below the leaf minimum.
    if candidate.gain <= 0.0
        || candidate.left.len() < params.min_samples_leaf
        || candidate.right.len() < params.min_samples_leaf
    {
        return Node::Leaf {
            value: mean_of(y, indices),
        };
    }

    let left = build(x, y, &candidate.left, depth + 1, params, rng);
    let right = build(x, y, &candidate.right, depth + 1, params, rng);
    Node::Split {
        feature: candidate.feature,
        threshold: candidate.threshold,
        left: Box::new(left),
        right: Box::new(right),
    }
}

#[derive(Debug)]
struct SplitCandidate {
    feature: usize,
    threshold: f64,
    gain: f64,
    left: Vec<usize>,
    right: Vec<usize>,
}

/// Enumerates midpoints between consecutive distinct sorted values of each
/// candidate feature and keeps the (feature, threshold) pair with maximum
/// weighted impurity gain. Ties keep the first-found candidate.
fn best_split<R: Rng + ?Sized>(
    x: ArrayView2<f64>,
    y: ArrayView1<f64>,
    indices: &[usize],
    params: &DecisionTreeParams,
    rng: &mut R,
) -> Option<SplitCandidate> {
    let n_features = x.ncols();
    let n_candidates = params.max_features.resolve(n_features);
    // A fresh random subset at every split decision, not once per tree.
    let features: Vec<usize> = if n_candidates == n_features {
        (0..n_features).collect()
    } else {
        sample(rng, n_features, n_candidates).into_vec()
    };

    let parent = impurity(y, indices, params.impurity);
    let n = indices.len() as f64;
    let mut best: Option<SplitCandidate> = None;

    for feature in features {
        let mut values: Vec<f64> = indices.iter().map(|&i| x[[i, feature]]).collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());
        values.dedup();

        for (a, b) in values.iter().tuple_windows() {
            let threshold = (a + b) / 2.0;
            let (left, right): (Vec<usize>, Vec<usize>) = indices
                .iter()
                .copied()
                .partition(|&i| x[[i, feature]] <= threshold);

            let gain = parent
                - (left.len() as f64 / n) * impurity(y, &left, params.impurity)
                - (right.len() as f64 / n) * impurity(y, &right, params.impurity);

            if best.as_ref().map_or(true, |current| gain > current.gain) {
                best = Some(SplitCandidate {
                    feature,
                    threshold,
                    gain,
                    left,
                    right,
                });
            }
        }
    }

    best
}

pub fn impurity(y: ArrayView1<f64>, indices: &[usize], measure: Impurity) -> f64 {
    match measure {
        Impurity::Variance => variance(y, indices),
        Impurity::Gini => gini(y, indices),
    }
}

fn mean_of(y: ArrayView1<f64>, indices: &[usize]) -> f64 {
    if indices.is_empty() {
        return 0.0;
    }
    indices.iter().map(|&i| y[i]).sum::<f64>() / indices.len() as f64
}

fn variance(y: ArrayView1<f64>, indices: &[usize]) -> f64 {
    if indices.is_empty() {
        return 0.0;
    }
    let mean = mean_of(y, indices);
    indices.iter().map(|&i| (y[i] - mean).powi(2)).sum::<f64>() / indices.len() as f64
}

fn gini(y: ArrayView1<f64>, indices: &[usize]) -> f64 {
    if indices.is_empty() {
        return 0.0;
    }
    // Classes are the exact target bit patterns; regression never routes here.
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for &i in indices {
        *counts.entry(y[i].to_bits()).or_insert(0) += 1;
    }
    let n = indices.len() as f64;
    1.0 - counts.values().map(|&c| (c as f64 / n).powi(2)).sum::<f64>()
}

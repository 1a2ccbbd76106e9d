use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::{seq::SliceRandom, Rng};

use super::metrics::r_squared;
use crate::Regressor;

#[derive(Debug)]
pub struct TrainTestSplit {
    pub x_train: Array2<f64>,
    pub x_test: Array2<f64>,
    pub y_train: Array1<f64>,
    pub y_test: Array1<f64>,
}

/// Partitions rows into train and test sets. The test set gets
/// floor(n * test_ratio) rows and the train set the remainder. When
/// `shuffle` is set, indices go through a Fisher-Yates shuffle driven by
/// the injected RNG first. No stratification.
pub fn train_test_split<R: Rng + ?Sized>(
    x: ArrayView2<f64>,
    y: ArrayView1<f64>,
    test_ratio: f64,
    shuffle: bool,
    rng: &mut R,
) -> TrainTestSplit {
    let n = x.nrows();
    let mut indices: Vec<usize> = (0..n).collect();
    if shuffle {
        indices.shuffle(rng);
    }
    let n_test = (n as f64 * test_ratio).floor() as usize;
    let (test_indices, train_indices) = indices.split_at(n_test);

    TrainTestSplit {
        x_train: x.select(Axis(0), train_indices),
        x_test: x.select(Axis(0), test_indices),
        y_train: y.select(Axis(0), train_indices),
        y_test: y.select(Axis(0), test_indices),
    }
}

#[derive(Debug, Clone)]
pub struct Fold {
    pub train_indices: Vec<usize>,
    pub test_indices: Vec<usize>,
}

/// Partitions 0..n into k contiguous, non-shuffled folds of floor(n / k)
/// indices, the last fold absorbing the remainder. Each fold's train
/// indices are the concatenation of all other folds.
pub fn k_fold_split(n: usize, k: usize) -> Vec<Fold> {
    let fold_size = n / k;
    (0..k)
        .map(|fold| {
            let start = fold * fold_size;
            let end = if fold == k - 1 { n } else { start + fold_size };
            Fold {
                train_indices: (0..start).chain(end..n).collect(),
                test_indices: (start..end).collect(),
            }
        })
        .collect()
}

/// K-fold cross-validation: clones the model per fold, fits it on the
/// fold's train indices, and returns the R-squared on the held-out fold.
pub fn cross_validate<M: Regressor + Clone>(
    model: &M,
    x: ArrayView2<f64>,
    y: ArrayView1<f64>,
    k: usize,
) -> crate::Result<Vec<f64>> {
    let folds = k_fold_split(x.nrows(), k);
    let mut scores = Vec::with_capacity(folds.len());
    for fold in &folds {
        let x_train = x.select(Axis(0), &fold.train_indices);
        let y_train = y.select(Axis(0), &fold.train_indices);
        let x_test = x.select(Axis(0), &fold.test_indices);
        let y_test = y.select(Axis(0), &fold.test_indices);

        let mut fold_model = model.clone();
        let predicted = fold_model
            .fit(x_train.view(), y_train.view())
            .predict(x_test.view())?;
        scores.push(r_squared(y_test.view(), predicted.view()));
    }
    Ok(scores)
}

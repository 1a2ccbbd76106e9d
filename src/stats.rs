pub mod metrics;
pub mod scaling;
pub mod split;

pub use metrics::{
    correlation, mean_absolute_error, mean_squared_error, r_squared, root_mean_squared_error,
};
pub use scaling::{normalize, standardize};
pub use split::{cross_validate, k_fold_split, train_test_split, Fold, TrainTestSplit};

use std::time::SystemTime;

use quantml::{
    dataset::load_xy_csv,
    forest::{params::RandomForestParamsBuilder, RandomForestRegressor},
    linear::{params::LinearRegressionParamsBuilder, LinearRegression},
    stats::{mean_absolute_error, r_squared, root_mean_squared_error, train_test_split},
    Regressor,
};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./dat.csv".to_string());
    let (x, y) = load_xy_csv(&path);
    info!(samples = y.len(), features = x.ncols(), path = %path, "loaded dataset");

    let mut rng = StdRng::seed_from_u64(42);
    let split = train_test_split(x.view(), y.view(), 0.2, true, &mut rng);

    let start = SystemTime::now();
    let params = RandomForestParamsBuilder::new()
        .n_estimators(50)
        .max_depth(8)
        .build();
    let mut forest = RandomForestRegressor::new(params);
    let forest_preds = forest
        .fit(split.x_train.view(), split.y_train.view())
        .predict(split.x_test.view())
        .expect("forest was just fitted");
    let elapsed = start.elapsed().expect("clock went backwards");
    info!(
        ?elapsed,
        r2 = r_squared(split.y_test.view(), forest_preds.view()),
        mae = mean_absolute_error(split.y_test.view(), forest_preds.view()),
        rmse = root_mean_squared_error(split.y_test.view(), forest_preds.view()),
        "random forest"
    );

    let start = SystemTime::now();
    let params = LinearRegressionParamsBuilder::new().learning_rate(0.01).build();
    let mut linreg = LinearRegression::new(params);
    let linear_preds = linreg
        .fit(split.x_train.view(), split.y_train.view())
        .predict(split.x_test.view())
        .expect("linear model was just fitted");
    let elapsed = start.elapsed().expect("clock went backwards");
    info!(
        ?elapsed,
        r2 = r_squared(split.y_test.view(), linear_preds.view()),
        mae = mean_absolute_error(split.y_test.view(), linear_preds.view()),
        rmse = root_mean_squared_error(split.y_test.view(), linear_preds.view()),
        "linear regression"
    );
}

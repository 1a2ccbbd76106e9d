use ndarray::Array2;
use quantml::{
    dataset::linear_line,
    linear::{params::LinearRegressionParamsBuilder, LinearRegression},
    stats::{cross_validate, r_squared},
    ModelError, Regressor,
};

#[test]
fn test_linear_fit_recovers_line() {
    // y = 2x + 1 over x = 1..5
    let (x, y) = linear_line(5);
    let params = LinearRegressionParamsBuilder::new()
        .learning_rate(0.1)
        .epochs(1000)
        .build();
    let mut model = LinearRegression::new(params);
    let preds = model.fit(x.view(), y.view()).predict(x.view()).unwrap();

    let r2 = r_squared(y.view(), preds.view());
    assert!(r2 > 0.95, "R^2 {} is not above 0.95", r2);
    assert!((model.weights().unwrap()[0] - 2.0).abs() < 0.3);
    assert!((model.bias().unwrap() - 1.0).abs() < 0.5);
}

#[test]
fn test_linear_predict_before_fit_errors() {
    let model = LinearRegression::default();
    let x = Array2::<f64>::zeros((2, 2));
    assert!(matches!(
        model.predict(x.view()),
        Err(ModelError::NotFitted { model: "LinearRegression" })
    ));
    assert!(model.feature_importance().is_err());
    assert!(model.weights().is_err());
    assert!(model.bias().is_err());
}

#[test]
fn test_linear_feature_importance_is_weight_magnitude() {
    let (x, y) = linear_line(10);
    let params = LinearRegressionParamsBuilder::new().learning_rate(0.02).build();
    let mut model = LinearRegression::new(params);
    model.fit(x.view(), y.view());

    let importance = model.feature_importance().unwrap();
    let weights = model.weights().unwrap();
    assert_eq!(importance.len(), 1);
    assert_eq!(importance[0], weights[0].abs());
}

#[test]
fn test_linear_refit_replaces_state() {
    let (x1, y1) = linear_line(10);
    // y = -3x, fitted second, must fully replace the first fit.
    let x2 = x1.clone();
    let y2 = x2.column(0).map(|v| -3.0 * v);

    let params = LinearRegressionParamsBuilder::new().learning_rate(0.02).build();
    let mut model = LinearRegression::new(params);
    model.fit(x1.view(), y1.view());
    model.fit(x2.view(), y2.view());

    assert!(model.weights().unwrap()[0] < 0.0);
}

#[test]
fn test_cross_validate_scores_every_fold() {
    // y = 2x + 1 over x in [0, 5), kept small so the default-ish learning
    // rate stays well inside the gradient-descent stability region.
    let x = Array2::from_shape_fn((50, 1), |(i, _)| i as f64 / 10.0);
    let y = x.column(0).map(|v| 2.0 * v + 1.0);
    let params = LinearRegressionParamsBuilder::new().learning_rate(0.1).build();
    let model = LinearRegression::new(params);

    let scores = cross_validate(&model, x.view(), y.view(), 5).unwrap();
    assert_eq!(scores.len(), 5);
    // A noiseless line should be easy for every fold.
    assert!(scores.iter().all(|&s| s > 0.8), "scores: {:?}", scores);
}

use std::sync::Mutex;

use ndarray::Array2;
use quantml::{
    dataset::quadratic_surface,
    forest::{params::RandomForestParamsBuilder, RandomForestRegressor},
    stats::{mean_absolute_error, train_test_split},
    tree::params::MaxFeatures,
    ModelError, Regressor,
};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn test_forest_fit_quadratic_surface() {
    let mut rng = StdRng::seed_from_u64(7);
    let (x, y) = quadratic_surface(50, &mut rng);
    let split = train_test_split(x.view(), y.view(), 0.2, true, &mut rng);

    let params = RandomForestParamsBuilder::new()
        .n_estimators(20)
        .max_depth(5)
        .max_features(MaxFeatures::All)
        .build();
    let mut forest = RandomForestRegressor::new(params);
    let preds = forest
        .fit(split.x_train.view(), split.y_train.view())
        .predict(split.x_test.view())
        .unwrap();

    let mae = mean_absolute_error(split.y_test.view(), preds.view());
    println!("Held-out MAE: {:?}", mae);
    assert!(mae < 10.0, "MAE {} is not below 10", mae);
}

#[test]
fn test_forest_reproducibility() {
    let mut rng = StdRng::seed_from_u64(7);
    let (x, y) = quadratic_surface(60, &mut rng);

    let params = RandomForestParamsBuilder::new()
        .n_estimators(10)
        .max_depth(5)
        .seed(42)
        .build();

    // Train two models with the same seed
    let mut model1 = RandomForestRegressor::new(params.clone());
    let mut model2 = RandomForestRegressor::new(params);
    let pred1 = model1.fit(x.view(), y.view()).predict(x.view()).unwrap();
    let pred2 = model2.fit(x.view(), y.view()).predict(x.view()).unwrap();

    let diff = &pred1 - &pred2;
    assert!(
        diff.iter().all(|&v| v.abs() < 1e-10),
        "Models with same seed produced different predictions"
    );
}

#[test]
fn test_forest_different_seeds() {
    let mut rng = StdRng::seed_from_u64(7);
    let (x, y) = quadratic_surface(60, &mut rng);

    let mut model1 = RandomForestRegressor::new(
        RandomForestParamsBuilder::new().n_estimators(10).max_depth(5).seed(42).build(),
    );
    let mut model2 = RandomForestRegressor::new(
        RandomForestParamsBuilder::new().n_estimators(10).max_depth(5).seed(43).build(),
    );
    let pred1 = model1.fit(x.view(), y.view()).predict(x.view()).unwrap();
    let pred2 = model2.fit(x.view(), y.view()).predict(x.view()).unwrap();

    let diff = &pred1 - &pred2;
    assert!(
        diff.iter().any(|&v| v.abs() > 1e-10),
        "Models with different seeds produced identical predictions"
    );
}

#[test]
fn test_forest_predict_before_fit_errors() {
    let forest = RandomForestRegressor::default();
    let x = Array2::<f64>::zeros((3, 2));
    assert!(matches!(
        forest.predict(x.view()),
        Err(ModelError::NotFitted { model: "RandomForestRegressor" })
    ));
    assert!(forest.feature_importance().is_err());
}

#[test]
fn test_forest_feature_importance_sums_to_one() {
    let mut rng = StdRng::seed_from_u64(7);
    let (x, y) = quadratic_surface(50, &mut rng);

    let params = RandomForestParamsBuilder::new()
        .n_estimators(10)
        .max_depth(5)
        .max_features(MaxFeatures::All)
        .build();
    let mut forest = RandomForestRegressor::new(params);
    forest.fit(x.view(), y.view());

    let importance = forest.feature_importance().unwrap();
    assert_eq!(importance.len(), 2);
    assert!((importance.sum() - 1.0).abs() < 1e-12);
    // y depends on x1 quadratically and x2 only linearly, so x1 should
    // host the bulk of the splits.
    assert!(importance[0] > importance[1]);
}

#[test]
fn test_forest_progress_reaches_completion() {
    let mut rng = StdRng::seed_from_u64(7);
    let (x, y) = quadratic_surface(40, &mut rng);

    let params = RandomForestParamsBuilder::new()
        .n_estimators(8)
        .max_depth(4)
        .build();
    let mut forest = RandomForestRegressor::new(params);

    let fractions = Mutex::new(Vec::new());
    forest.fit_with_progress(x.view(), y.view(), &|fraction| {
        fractions.lock().unwrap().push(fraction);
    });

    let fractions = fractions.into_inner().unwrap();
    assert_eq!(fractions.len(), 8);
    assert!(fractions.iter().any(|f| (f - 1.0).abs() < 1e-12));
    assert!(fractions.iter().all(|f| (0.0..=1.0).contains(f)));
}

#[test]
fn test_forest_without_bootstrap_still_fits() {
    let mut rng = StdRng::seed_from_u64(7);
    let (x, y) = quadratic_surface(50, &mut rng);

    let params = RandomForestParamsBuilder::new()
        .n_estimators(5)
        .max_depth(6)
        .max_features(MaxFeatures::All)
        .bootstrap(false)
        .build();
    let mut forest = RandomForestRegressor::new(params);
    let preds = forest.fit(x.view(), y.view()).predict(x.view()).unwrap();

    let mae = mean_absolute_error(y.view(), preds.view());
    assert!(mae < 10.0, "MAE {} is not below 10", mae);
}

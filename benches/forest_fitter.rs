use criterion::{criterion_group, criterion_main, Criterion};
use quantml::dataset::quadratic_surface;
use quantml::forest::{params::RandomForestParamsBuilder, RandomForestRegressor};
use quantml::Regressor;
use rand::{rngs::StdRng, SeedableRng};

fn bench_forest_fitter(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let (x, y) = quadratic_surface(200, &mut rng);

    let mut group = c.benchmark_group("RandomForestRegressor");

    group.bench_function("fit_20_trees_depth_5", |b| {
        b.iter(|| {
            let params = RandomForestParamsBuilder::new()
                .n_estimators(20)
                .max_depth(5)
                .build();
            let mut forest = RandomForestRegressor::new(params);
            forest.fit(x.view(), y.view());
        })
    });
    group.finish();
}

criterion_group!(benches, bench_forest_fitter);
criterion_main!(benches);

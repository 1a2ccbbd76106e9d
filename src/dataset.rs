//! Numeric dataset loading for the demo binary plus synthetic generators
//! shared by the test and bench suites.

use csv::ReaderBuilder;
use ndarray::{Array1, Array2};
use rand::Rng;

/// Reads a numeric CSV with a header row; the first column is the target
/// and the remaining columns are features.
pub fn load_xy_csv(path: &str) -> (Array2<f64>, Array1<f64>) {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .expect("Failed to open file");

    let mut x_data: Vec<f64> = Vec::new();
    let mut y_data: Vec<f64> = Vec::new();
    let mut n_features = 0;
    for result in rdr.records() {
        let record = result.expect("Failed to read record");
        n_features = record.len() - 1;
        let y: f64 = record[0].parse().expect("Failed to parse target");
        y_data.push(y);
        for field in record.iter().skip(1) {
            x_data.push(field.parse().expect("Failed to parse feature"));
        }
    }
    let x = Array2::from_shape_vec((y_data.len(), n_features), x_data)
        .expect("Failed to create Array2");
    (x, Array1::from(y_data))
}

/// y = 2x + 1 over x = 1..=n, one feature column.
pub fn linear_line(n: usize) -> (Array2<f64>, Array1<f64>) {
    let x = Array2::from_shape_fn((n, 1), |(i, _)| (i + 1) as f64);
    let y = x.column(0).map(|v| 2.0 * v + 1.0);
    (x, y)
}

/// y = x1^2 + x2 with both features uniform in [0, 10).
pub fn quadratic_surface<R: Rng + ?Sized>(n: usize, rng: &mut R) -> (Array2<f64>, Array1<f64>) {
    let x = Array2::from_shape_fn((n, 2), |_| rng.gen_range(0.0..10.0));
    let y = x
        .rows()
        .into_iter()
        .map(|row| row[0] * row[0] + row[1])
        .collect();
    (x, y)
}

/// `k` square blobs of `per_cluster` 2-d points, centered `separation`
/// apart along the diagonal with +-0.5 of uniform jitter.
pub fn blobs<R: Rng + ?Sized>(
    k: usize,
    per_cluster: usize,
    separation: f64,
    rng: &mut R,
) -> Array2<f64> {
    let mut data = Array2::<f64>::zeros((k * per_cluster, 2));
    for cluster in 0..k {
        let center = cluster as f64 * separation;
        for point in 0..per_cluster {
            let i = cluster * per_cluster + point;
            data[[i, 0]] = center + rng.gen_range(-0.5..0.5);
            data[[i, 1]] = center + rng.gen_range(-0.5..0.5);
        }
    }
    data
}

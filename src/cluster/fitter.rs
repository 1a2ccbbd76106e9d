use ndarray::{s, Array2, ArrayView1, ArrayView2};
use rand::Rng;
use tracing::trace;

use super::params::KMeansParams;
use super::FittedKMeans;

pub fn fit<R: Rng + ?Sized>(
    x: ArrayView2<f64>,
    params: &KMeansParams,
    rng: &mut R,
) -> FittedKMeans {
    let n = x.nrows();
    let mut centroids = init_centroids(x, params.k, rng);
    let mut labels = vec![0usize; n];

    for iteration in 0..params.max_iterations {
        for (i, row) in x.rows().into_iter().enumerate() {
            labels[i] = nearest_centroid(row, centroids.view()).0;
        }

        let mut new_centroids = Array2::<f64>::zeros(centroids.raw_dim());
        let mut counts = vec![0usize; params.k];
        for (i, row) in x.rows().into_iter().enumerate() {
            let mut sum = new_centroids.row_mut(labels[i]);
            sum += &row;
            counts[labels[i]] += 1;
        }
        for cluster in 0..params.k {
            if counts[cluster] == 0 {
                // An emptied cluster restarts at a random data point so it
                // cannot stay empty forever.
                new_centroids
                    .row_mut(cluster)
                    .assign(&x.row(rng.gen_range(0..n)));
            } else {
                let mut sum = new_centroids.row_mut(cluster);
                sum /= counts[cluster] as f64;
            }
        }

        let shift: f64 = centroids
            .rows()
            .into_iter()
            .zip(new_centroids.rows())
            .map(|(old, new)| squared_distance(old, new).sqrt())
            .sum();
        centroids = new_centroids;
        trace!(iteration, shift, "k-means iteration");
        if shift < params.tolerance {
            break;
        }
    }

    // Labels were assigned against the previous centroid positions; redo
    // the assignment so they match the final centroids.
    for (i, row) in x.rows().into_iter().enumerate() {
        labels[i] = nearest_centroid(row, centroids.view()).0;
    }

    FittedKMeans { centroids, labels }
}

/// k-means++: the first centroid is uniform over the data; each next one
/// is sampled with probability proportional to the squared distance to the
/// nearest already-chosen centroid (roulette wheel over the cumulative
/// sum, one uniform draw).
fn init_centroids<R: Rng + ?Sized>(x: ArrayView2<f64>, k: usize, rng: &mut R) -> Array2<f64> {
    let n = x.nrows();
    let mut centroids = Array2::<f64>::zeros((k, x.ncols()));
    centroids.row_mut(0).assign(&x.row(rng.gen_range(0..n)));

    for c in 1..k {
        let chosen = centroids.slice(s![..c, ..]);
        let distances: Vec<f64> = x
            .rows()
            .into_iter()
            .map(|row| nearest_centroid(row, chosen).1)
            .collect();
        let total: f64 = distances.iter().sum();

        let pick = if total == 0.0 {
            // Every point coincides with a chosen centroid.
            rng.gen_range(0..n)
        } else {
            let draw = rng.gen::<f64>() * total;
            let mut cumulative = 0.0;
            let mut pick = n - 1;
            for (i, d) in distances.iter().enumerate() {
                cumulative += d;
                if draw <= cumulative {
                    pick = i;
                    break;
                }
            }
            pick
        };
        centroids.row_mut(c).assign(&x.row(pick));
    }

    centroids
}

/// Index of the closest centroid and the squared distance to it.
pub(crate) fn nearest_centroid(row: ArrayView1<f64>, centroids: ArrayView2<f64>) -> (usize, f64) {
    let mut best = (0, f64::INFINITY);
    for (i, centroid) in centroids.rows().into_iter().enumerate() {
        let distance = squared_distance(row, centroid);
        if distance < best.1 {
            best = (i, distance);
        }
    }
    best
}

fn squared_distance(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum()
}

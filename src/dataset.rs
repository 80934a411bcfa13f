//! Feature/label containers and synthetic datasets with known ground truth.

use ndarray::s;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::{Normal, Uniform};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{Matrix, ShapeError, Vector};

#[derive(Clone, Debug)]
pub struct Dataset {
    pub features: Matrix,
    pub labels: Vector,
}

impl Dataset {
    pub fn new(features: Matrix, labels: Vector) -> Result<Self, ShapeError> {
        if features.nrows() != labels.len() {
            return Err(ShapeError::TargetLength {
                expected: features.nrows(),
                actual: labels.len(),
            });
        }

        Ok(Self { features, labels })
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Split into (train, test) by row order; panics unless 0 < test_size < 1.
    pub fn train_test_split(&self, test_size: f64) -> (Self, Self) {
        if test_size <= 0.0 || test_size >= 1.0 {
            panic!("test_size must be between 0 and 1, got {}", test_size);
        }

        let n_samples = self.n_samples();
        let n_test = (n_samples as f64 * test_size).round() as usize;
        let n_train = n_samples - n_test;

        let train = Self {
            features: self.features.slice(s![..n_train, ..]).to_owned(),
            labels: self.labels.slice(s![..n_train]).to_owned(),
        };
        let test = Self {
            features: self.features.slice(s![n_train.., ..]).to_owned(),
            labels: self.labels.slice(s![n_train..]).to_owned(),
        };
        (train, test)
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// One-feature regression data following `y = 3x + 1` plus Gaussian noise.
///
/// Features are drawn uniformly from [-1, 1); `noise` is the standard deviation
/// of the additive noise (0 gives an exact line). Pass a seed for reproducible
/// draws.
pub fn make_linear_regression(n_samples: usize, noise: f64, seed: Option<u64>) -> (Matrix, Vector) {
    let mut rng = seeded_rng(seed);

    let x = Matrix::random_using((n_samples, 1), Uniform::new(-1.0, 1.0), &mut rng);
    let mut y = x.column(0).mapv(|v| 3.0 * v + 1.0);
    if noise > 0.0 {
        let distr = Normal::new(0.0, noise).unwrap();
        y = y + Vector::random_using(n_samples, distr, &mut rng);
    }
    (x, y)
}

/// Linearly separable two-class data: Gaussian blobs around (1, 1) and (-1, -1).
///
/// The first half of the rows is the positive class (label 1), the second half
/// the negative class (label 0).
pub fn make_binary_classification(n_samples: usize, seed: Option<u64>) -> (Matrix, Vector) {
    let mut rng = seeded_rng(seed);
    let n_pos = n_samples / 2;
    let n_neg = n_samples - n_pos;

    let pos = Matrix::random_using((n_pos, 2), Normal::new(1.0, 0.6).unwrap(), &mut rng);
    let neg = Matrix::random_using((n_neg, 2), Normal::new(-1.0, 0.6).unwrap(), &mut rng);

    let x = ndarray::concatenate![ndarray::Axis(0), pos, neg];
    let mut y = Vector::zeros(n_samples);
    y.slice_mut(s![..n_pos]).fill(1.0);
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_dataset_creation() {
        let features = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let labels = array![1.0, 2.0, 3.0];

        let dataset = Dataset::new(features, labels).unwrap();
        assert_eq!(dataset.n_samples(), 3);
        assert_eq!(dataset.n_features(), 2);
    }

    #[test]
    fn test_dataset_rejects_misaligned_labels() {
        let features = Matrix::zeros((4, 2));
        let labels = Vector::zeros(3);
        assert!(Dataset::new(features, labels).is_err());
    }

    #[test]
    fn test_train_test_split() {
        let features = Matrix::zeros((100, 5));
        let labels = Vector::zeros(100);
        let dataset = Dataset::new(features, labels).unwrap();

        let (train, test) = dataset.train_test_split(0.2);
        assert_eq!(train.n_samples(), 80);
        assert_eq!(test.n_samples(), 20);
        assert_eq!(train.n_features(), 5);
    }

    #[test]
    fn test_linear_regression_data_is_exact_without_noise() {
        let (x, y) = make_linear_regression(50, 0.0, Some(3));

        assert_eq!(x.shape(), &[50, 1]);
        for (row, target) in x.column(0).iter().zip(y.iter()) {
            assert!((3.0 * row + 1.0 - target).abs() < 1e-12);
            assert!((-1.0..1.0).contains(row));
        }
    }

    #[test]
    fn test_generators_are_reproducible() {
        let (x1, y1) = make_linear_regression(20, 0.1, Some(42));
        let (x2, y2) = make_linear_regression(20, 0.1, Some(42));
        assert_eq!(x1, x2);
        assert_eq!(y1, y2);

        let (c1, l1) = make_binary_classification(30, Some(42));
        let (c2, l2) = make_binary_classification(30, Some(42));
        assert_eq!(c1, c2);
        assert_eq!(l1, l2);
    }

    #[test]
    fn test_classification_labels_split_in_halves() {
        let (x, y) = make_binary_classification(21, Some(0));

        assert_eq!(x.shape(), &[21, 2]);
        assert_eq!(y.slice(s![..10]).sum(), 10.0);
        assert_eq!(y.slice(s![10..]).sum(), 0.0);
    }
}

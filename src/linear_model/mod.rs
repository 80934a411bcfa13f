//! Linear models for regression and binary classification.
//!
//! This module provides:
//! - `LinearRegression`: least squares via the normal equation or gradient descent
//! - `LogisticRegression`: binary classification trained by gradient descent
//!
//! # Examples
//!
//! ## Linear Regression
//! ```rust
//! use linlab::LinearRegression;
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0]];
//! let y = array![2.0, 4.0, 6.0];
//!
//! let mut model = LinearRegression::new();
//! model.fit(&x, &y).unwrap();
//! let predictions = model.predict(&x).unwrap();
//! ```
//!
//! ## Logistic Regression
//! ```rust
//! use linlab::{GradientDescent, LogisticRegression};
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0], [4.0]];
//! let y = array![0.0, 0.0, 1.0, 1.0];
//!
//! let mut model = LogisticRegression::new();
//! model.fit(&x, &y, &GradientDescent::new()).unwrap();
//! let labels = model.predict(&x).unwrap();
//! let probabilities = model.predict_proba(&x).unwrap();
//! ```

mod linear_regression;
mod logistic_regression;

pub use linear_regression::{LinearRegression, SquaredError};
pub use logistic_regression::{CrossEntropy, LogisticRegression};

use crate::{Error, Matrix, Vector};

/// Batch prediction as a capability, independent of the model family.
///
/// Regression models return affine predictions, classifiers return thresholded
/// 0/1 labels. Consumers that only need outputs for a batch of points (the
/// decision-boundary plot, for one) depend on this trait rather than a concrete
/// model type.
pub trait Predictor {
    fn predict_batch(&self, x: &Matrix) -> Result<Vector, Error>;
}

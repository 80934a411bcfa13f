//! Small teaching toolkit for linear models.
//!
//! Two model families — linear regression and binary logistic regression — each
//! trainable by the closed-form normal equation (linear only) and/or batch
//! gradient descent, plus synthetic dataset generators and plotting helpers.

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod design;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod optim;
pub mod plot;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

pub use dataset::{Dataset, make_binary_classification, make_linear_regression};
pub use design::{design_matrix, design_matrix_dyn};
pub use error::{Error, ShapeError};
pub use linear_model::{
    CrossEntropy, LinearRegression, LogisticRegression, Predictor, SquaredError,
};
pub use optim::{Fit, GradientDescent, LossLogging, Objective};

//! Errors raised by the model and solver APIs.

use thiserror::Error;

/// Incompatible array dimensions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("expected {expected} target values to match the sample count, got {actual}")]
    TargetLength { expected: usize, actual: usize },
    #[error("parameter vector has length {actual}, design matrix has {expected} columns")]
    ParameterLength { expected: usize, actual: usize },
    #[error("expected a 1-d or 2-d array, got {0} dimensions")]
    UnsupportedRank(usize),
}

/// Any error a model can return.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("model not fitted, call fit() first")]
    NotFitted,
    #[error("labels must be 0 or 1 for binary classification, got {0}")]
    InvalidLabel(f64),
}

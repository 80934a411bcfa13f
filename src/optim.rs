//! Batch gradient descent over a differentiable objective.
//!
//! The trainer is deliberately plain: a fixed step size and a fixed iteration
//! count, no line search, momentum or early stopping. Each objective declares
//! when its loss is recorded relative to the parameter update, so the trace
//! semantics live in one place instead of per-model training loops.

use log::debug;

use crate::design::design_matrix;
use crate::{Matrix, ShapeError, Vector};

/// When an objective's loss is appended to the trace, relative to the step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LossLogging {
    /// Record the loss at the parameters *before* the update.
    PreStep,
    /// Record the loss at the parameters *after* the update.
    PostStep,
}

/// A differentiable training objective over an augmented design matrix.
///
/// `design` always carries the intercept column, so `theta.len() == design.ncols()`.
pub trait Objective {
    /// Scalar loss at `theta`, as recorded in the trace.
    fn loss(&self, design: &Matrix, y: &Vector, theta: &Vector) -> f64;

    /// Gradient of the objective at `theta`, including any L2 term.
    fn gradient(&self, design: &Matrix, y: &Vector, theta: &Vector) -> Vector;

    /// Trace-recording policy for this objective.
    fn loss_logging(&self) -> LossLogging;
}

/// Result of a gradient-descent run.
#[derive(Clone, Debug)]
pub struct Fit {
    /// Trained parameters; index 0 is the intercept weight.
    pub theta: Vector,
    /// One loss value per completed iteration.
    pub loss_trace: Vec<f64>,
}

/// Fixed-step batch gradient descent.
#[derive(Clone, Debug)]
pub struct GradientDescent {
    learning_rate: f64,
    iterations: usize,
}

impl GradientDescent {
    pub fn new() -> Self {
        Self {
            learning_rate: 0.1,
            iterations: 1000,
        }
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        if learning_rate <= 0.0 {
            panic!("learning_rate must be positive, got {}", learning_rate);
        }
        self.learning_rate = learning_rate;
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Run the full iteration budget of `objective` on `(x, y)`.
    ///
    /// Builds the design matrix once, starts from the zero parameter vector and
    /// applies `theta <- theta - lr * grad` for exactly `iterations` steps. With
    /// zero iterations the zero vector and an empty trace come back unchanged.
    pub fn run<O: Objective>(
        &self,
        objective: &O,
        x: &Matrix,
        y: &Vector,
    ) -> Result<Fit, ShapeError> {
        if y.len() != x.nrows() {
            return Err(ShapeError::TargetLength {
                expected: x.nrows(),
                actual: y.len(),
            });
        }

        let design = design_matrix(x.view());
        let mut theta = Vector::zeros(design.ncols());
        let mut loss_trace = Vec::with_capacity(self.iterations);

        for _ in 0..self.iterations {
            if objective.loss_logging() == LossLogging::PreStep {
                loss_trace.push(objective.loss(&design, y, &theta));
            }

            let gradient = objective.gradient(&design, y, &theta);
            theta = &theta - &(gradient * self.learning_rate);

            if objective.loss_logging() == LossLogging::PostStep {
                loss_trace.push(objective.loss(&design, y, &theta));
            }
        }

        if let Some(last) = loss_trace.last() {
            debug!(
                "gradient descent finished: {} iterations, final loss {}",
                self.iterations, last
            );
        }

        Ok(Fit { theta, loss_trace })
    }
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self::new()
    }
}

use crate::design::design_matrix;
use crate::optim::{Fit, GradientDescent, LossLogging, Objective};
use crate::{Error, Matrix, ShapeError, Vector};

use super::Predictor;

/// Mean-squared-error objective over an augmented design matrix.
///
/// The recorded loss is the plain (unpenalized) MSE. The gradient carries the
/// optional L2 term with the intercept contribution added and then reverted, so
/// the net penalty on component 0 is zero; the loss is recorded after each
/// parameter update.
#[derive(Clone, Debug)]
pub struct SquaredError {
    pub l2_reg: f64,
}

impl Objective for SquaredError {
    fn loss(&self, design: &Matrix, y: &Vector, theta: &Vector) -> f64 {
        let residual = &design.dot(theta) - y;
        residual.mapv(|r| r * r).mean().unwrap()
    }

    fn gradient(&self, design: &Matrix, y: &Vector, theta: &Vector) -> Vector {
        let n_samples = design.nrows() as f64;
        let residual = &design.dot(theta) - y;
        let mut gradient = design.t().dot(&residual) * (2.0 / n_samples);
        if self.l2_reg > 0.0 {
            gradient = gradient + &(theta * (2.0 * self.l2_reg));
            // revert the penalty on the intercept component
            gradient[0] -= 2.0 * self.l2_reg * theta[0];
        }
        gradient
    }

    fn loss_logging(&self) -> LossLogging {
        LossLogging::PostStep
    }
}

/// Linear regression over a design matrix with an intercept column.
///
/// `fit` solves the normal equation in closed form; `fit_gradient_descent` runs
/// batch gradient descent on [`SquaredError`] instead. Either way the trained
/// parameters land in `theta`, intercept weight first.
#[derive(Clone, Debug)]
pub struct LinearRegression {
    pub theta: Option<Vector>,
    l2_reg: f64,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self {
            theta: None,
            l2_reg: 0.0,
        }
    }

    pub fn l2_reg(mut self, l2_reg: f64) -> Self {
        if l2_reg < 0.0 {
            panic!("l2_reg must be non-negative, got {}", l2_reg);
        }
        self.l2_reg = l2_reg;
        self
    }

    /// Solve the normal equation `theta = pinv(D^T D) D^T y`.
    ///
    /// The Gram matrix goes through a pseudo-inverse, so rank-deficient or
    /// perfectly collinear features still produce a finite (minimum-norm)
    /// solution instead of an error. With `l2_reg > 0` the ridge term is added
    /// over the whole augmented Gram matrix, intercept entry included — unlike
    /// the gradient-descent path, which leaves the intercept unpenalized.
    pub fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<(), Error> {
        if x.nrows() != y.len() {
            return Err(ShapeError::TargetLength {
                expected: x.nrows(),
                actual: y.len(),
            }
            .into());
        }

        let design = design_matrix(x.view());
        let mut gram = design.t().dot(&design);
        if self.l2_reg > 0.0 {
            for i in 0..gram.nrows() {
                gram[(i, i)] += self.l2_reg;
            }
        }

        let moment = design.t().dot(y);
        self.theta = Some(pinv_symmetric(&gram).dot(&moment));
        Ok(())
    }

    /// Train by batch gradient descent and return the per-iteration MSE trace.
    pub fn fit_gradient_descent(
        &mut self,
        x: &Matrix,
        y: &Vector,
        gd: &GradientDescent,
    ) -> Result<Vec<f64>, Error> {
        let objective = SquaredError {
            l2_reg: self.l2_reg,
        };
        let Fit { theta, loss_trace } = gd.run(&objective, x, y)?;
        self.theta = Some(theta);
        Ok(loss_trace)
    }

    pub fn predict(&self, x: &Matrix) -> Result<Vector, Error> {
        let theta = self.theta.as_ref().ok_or(Error::NotFitted)?;
        let design = design_matrix(x.view());
        if design.ncols() != theta.len() {
            return Err(ShapeError::ParameterLength {
                expected: design.ncols(),
                actual: theta.len(),
            }
            .into());
        }
        Ok(design.dot(theta))
    }

    pub fn score(&self, x: &Matrix, y: &Vector) -> Result<f64, Error> {
        let y_pred = self.predict(x)?;
        Ok(crate::metrics::r2_score(y, &y_pred)?)
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl Predictor for LinearRegression {
    fn predict_batch(&self, x: &Matrix) -> Result<Vector, Error> {
        self.predict(x)
    }
}

/// Pseudo-inverse of a symmetric matrix via cyclic Jacobi eigendecomposition.
///
/// Eigenvalues whose magnitude falls below a relative cutoff are treated as
/// zero, which is what makes the normal-equation solve total on singular Gram
/// matrices.
fn pinv_symmetric(matrix: &Matrix) -> Matrix {
    let n = matrix.nrows();
    let mut a = matrix.clone();
    let mut v = Matrix::eye(n);

    for _sweep in 0..64 {
        let off_sq: f64 = (0..n)
            .flat_map(|p| ((p + 1)..n).map(move |q| (p, q)))
            .map(|(p, q)| a[(p, q)] * a[(p, q)])
            .sum();
        if off_sq < 1e-24 {
            break;
        }

        for p in 0..n {
            for q in (p + 1)..n {
                if a[(p, q)].abs() < 1e-300 {
                    continue;
                }
                let tau = (a[(q, q)] - a[(p, p)]) / (2.0 * a[(p, q)]);
                let t = if tau >= 0.0 {
                    1.0 / (tau + (1.0 + tau * tau).sqrt())
                } else {
                    -1.0 / (-tau + (1.0 + tau * tau).sqrt())
                };
                let c = 1.0 / (1.0 + t * t).sqrt();
                let s = t * c;

                // a <- J^T a J, applied as a row transform then a column transform
                for k in 0..n {
                    let apk = a[(p, k)];
                    let aqk = a[(q, k)];
                    a[(p, k)] = c * apk - s * aqk;
                    a[(q, k)] = s * apk + c * aqk;
                }
                for k in 0..n {
                    let akp = a[(k, p)];
                    let akq = a[(k, q)];
                    a[(k, p)] = c * akp - s * akq;
                    a[(k, q)] = s * akp + c * akq;
                }
                for k in 0..n {
                    let vkp = v[(k, p)];
                    let vkq = v[(k, q)];
                    v[(k, p)] = c * vkp - s * vkq;
                    v[(k, q)] = s * vkp + c * vkq;
                }
            }
        }
    }

    let eig_max = (0..n).map(|i| a[(i, i)].abs()).fold(0.0, f64::max);
    let cutoff = eig_max * 1e-10;
    let inv_eigs: Vec<f64> = (0..n)
        .map(|i| {
            let eig = a[(i, i)];
            if eig.abs() > cutoff { 1.0 / eig } else { 0.0 }
        })
        .collect();

    let mut pinv = Matrix::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0;
            for (k, inv_eig) in inv_eigs.iter().enumerate() {
                sum += v[(i, k)] * inv_eig * v[(j, k)];
            }
            pinv[(i, j)] = sum;
        }
    }
    pinv
}

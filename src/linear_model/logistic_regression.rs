use crate::design::design_matrix;
use crate::optim::{Fit, GradientDescent, LossLogging, Objective};
use crate::{Error, Matrix, ShapeError, Vector};

use super::Predictor;

const EPS: f64 = 1e-8;

/// Cross-entropy objective with a sigmoid link.
///
/// The optional L2 term skips the intercept outright, on both the loss and the
/// gradient; the loss is recorded before each parameter update.
#[derive(Clone, Debug)]
pub struct CrossEntropy {
    pub l2_reg: f64,
}

impl Objective for CrossEntropy {
    fn loss(&self, design: &Matrix, y: &Vector, theta: &Vector) -> f64 {
        let probs = design.dot(theta).mapv(sigmoid);
        let mut loss = -y
            .iter()
            .zip(probs.iter())
            .map(|(&label, &p)| label * (p + EPS).ln() + (1.0 - label) * (1.0 - p + EPS).ln())
            .sum::<f64>()
            / y.len() as f64;
        if self.l2_reg > 0.0 {
            loss += self.l2_reg * theta.iter().skip(1).map(|t| t * t).sum::<f64>();
        }
        loss
    }

    fn gradient(&self, design: &Matrix, y: &Vector, theta: &Vector) -> Vector {
        let probs = design.dot(theta).mapv(sigmoid);
        let mut gradient = design.t().dot(&(&probs - y)) / y.len() as f64;
        if self.l2_reg > 0.0 {
            for i in 1..gradient.len() {
                gradient[i] += 2.0 * self.l2_reg * theta[i];
            }
        }
        gradient
    }

    fn loss_logging(&self) -> LossLogging {
        LossLogging::PreStep
    }
}

/// Binary logistic regression trained by batch gradient descent.
#[derive(Clone, Debug)]
pub struct LogisticRegression {
    pub theta: Option<Vector>,
    l2_reg: f64,
    threshold: f64,
}

impl LogisticRegression {
    pub fn new() -> Self {
        Self {
            theta: None,
            l2_reg: 0.0,
            threshold: 0.5,
        }
    }

    pub fn l2_reg(mut self, l2_reg: f64) -> Self {
        if l2_reg < 0.0 {
            panic!("l2_reg must be non-negative, got {}", l2_reg);
        }
        self.l2_reg = l2_reg;
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        if !(0.0..=1.0).contains(&threshold) {
            panic!("threshold must be in [0, 1], got {}", threshold);
        }
        self.threshold = threshold;
        self
    }

    /// Train on 0/1 labels and return the per-iteration cross-entropy trace.
    pub fn fit(
        &mut self,
        x: &Matrix,
        y: &Vector,
        gd: &GradientDescent,
    ) -> Result<Vec<f64>, Error> {
        validate_labels(y)?;

        let objective = CrossEntropy {
            l2_reg: self.l2_reg,
        };
        let Fit { theta, loss_trace } = gd.run(&objective, x, y)?;
        self.theta = Some(theta);
        Ok(loss_trace)
    }

    /// Probability of the positive class for each row of `x`.
    pub fn predict_proba(&self, x: &Matrix) -> Result<Vector, Error> {
        let theta = self.theta.as_ref().ok_or(Error::NotFitted)?;
        let design = design_matrix(x.view());
        if design.ncols() != theta.len() {
            return Err(ShapeError::ParameterLength {
                expected: design.ncols(),
                actual: theta.len(),
            }
            .into());
        }
        Ok(design.dot(theta).mapv(sigmoid))
    }

    /// 0/1 labels from thresholded probabilities.
    pub fn predict(&self, x: &Matrix) -> Result<Vector, Error> {
        let threshold = self.threshold;
        let probabilities = self.predict_proba(x)?;
        Ok(probabilities.mapv(|p| if p >= threshold { 1.0 } else { 0.0 }))
    }

    pub fn score(&self, x: &Matrix, y: &Vector) -> Result<f64, Error> {
        let predictions = self.predict(x)?;
        Ok(crate::metrics::accuracy_score(y, &predictions)?)
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl Predictor for LogisticRegression {
    fn predict_batch(&self, x: &Matrix) -> Result<Vector, Error> {
        self.predict(x)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

fn validate_labels(y: &Vector) -> Result<(), Error> {
    for &label in y.iter() {
        if label != 0.0 && label != 1.0 {
            return Err(Error::InvalidLabel(label));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::make_binary_classification;
    use ndarray::array;

    #[test]
    fn test_separated_clusters_reach_high_accuracy() {
        let (x, y) = make_binary_classification(200, Some(2));
        let gd = GradientDescent::new().learning_rate(0.2).iterations(300);

        let mut model = LogisticRegression::new();
        let trace = model.fit(&x, &y, &gd).unwrap();

        assert_eq!(trace.len(), 300);
        let accuracy = model.score(&x, &y).unwrap();
        assert!(accuracy >= 0.95, "accuracy {} below 0.95", accuracy);
    }

    #[test]
    fn test_probabilities_ordered_along_feature() {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![0.0, 0.0, 1.0, 1.0];
        let gd = GradientDescent::new().learning_rate(0.5).iterations(2000);

        let mut model = LogisticRegression::new();
        model.fit(&x, &y, &gd).unwrap();

        let probs = model.predict_proba(&x).unwrap();
        assert!(probs[0] < 0.5);
        assert!(probs[3] > 0.5);
        assert!(probs[0] < probs[1] && probs[1] < probs[2] && probs[2] < probs[3]);
    }

    #[test]
    fn test_l2_gradient_skips_intercept() {
        let x = array![[1.0, -2.0], [2.0, 0.5], [3.0, 1.0]];
        let y = array![0.0, 1.0, 1.0];
        let design = design_matrix(x.view());
        let theta = array![0.3, -0.8, 1.1];

        let plain = CrossEntropy { l2_reg: 0.0 }.gradient(&design, &y, &theta);
        let penalized = CrossEntropy { l2_reg: 0.25 }.gradient(&design, &y, &theta);

        assert_eq!(penalized[0], plain[0]);
        for i in 1..theta.len() {
            assert!((penalized[i] - (plain[i] + 2.0 * 0.25 * theta[i])).abs() < 1e-12);
        }
    }

    #[test]
    fn test_l2_loss_skips_intercept() {
        let x = array![[1.0], [2.0]];
        let y = array![0.0, 1.0];
        let design = design_matrix(x.view());

        // theta differing only in the intercept component must not change the
        // size of the penalty
        let theta = array![5.0, 0.5];
        let shifted = array![-5.0, 0.5];
        let objective = CrossEntropy { l2_reg: 1.0 };
        let unpenalized = CrossEntropy { l2_reg: 0.0 };

        let penalty = objective.loss(&design, &y, &theta) - unpenalized.loss(&design, &y, &theta);
        let penalty_shifted =
            objective.loss(&design, &y, &shifted) - unpenalized.loss(&design, &y, &shifted);
        assert!((penalty - 0.25).abs() < 1e-12);
        assert!((penalty_shifted - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_custom_threshold() {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![0.0, 0.0, 1.0, 1.0];
        let gd = GradientDescent::new().learning_rate(0.5).iterations(500);

        let mut strict = LogisticRegression::new().threshold(0.99);
        strict.fit(&x, &y, &gd).unwrap();

        let mut lenient = LogisticRegression::new().threshold(0.01);
        lenient.theta = strict.theta.clone();

        let strict_positives: f64 = strict.predict(&x).unwrap().sum();
        let lenient_positives: f64 = lenient.predict(&x).unwrap().sum();
        assert!(strict_positives <= lenient_positives);
    }

    #[test]
    fn test_invalid_labels_rejected() {
        let x = array![[1.0], [2.0]];
        let y = array![0.5, 2.0];

        let mut model = LogisticRegression::new();
        let err = model.fit(&x, &y, &GradientDescent::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidLabel(_)));
    }

    #[test]
    fn test_predict_without_fit() {
        let x = array![[1.0], [2.0]];
        let model = LogisticRegression::new();
        assert!(matches!(model.predict(&x), Err(Error::NotFitted)));
    }
}

use crate::{ShapeError, Vector};

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64, ShapeError> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(|x| x * x).mean().unwrap())
}

pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64, ShapeError> {
    check_lengths(y_true, y_pred)?;

    let y_mean = y_true.mean().unwrap();
    let ss_res = (y_true - y_pred).mapv(|x| x * x).sum();
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    if ss_tot == 0.0 {
        return Ok(1.0); // Perfect prediction when variance is zero
    }

    Ok(1.0 - ss_res / ss_tot)
}

/// Fraction of exactly matching 0/1 labels.
pub fn accuracy_score(y_true: &Vector, y_pred: &Vector) -> Result<f64, ShapeError> {
    check_lengths(y_true, y_pred)?;

    let hits = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(truth, pred)| (*truth - *pred).abs() < 1e-10)
        .count();
    Ok(hits as f64 / y_true.len() as f64)
}

fn check_lengths(y_true: &Vector, y_pred: &Vector) -> Result<(), ShapeError> {
    if y_true.len() != y_pred.len() {
        return Err(ShapeError::TargetLength {
            expected: y_true.len(),
            actual: y_pred.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_mean_squared_error() {
        let y_true = array![1.0, 2.0, 3.0];
        let y_pred = array![1.0, 2.0, 5.0];

        let mse = mean_squared_error(&y_true, &y_pred).unwrap();
        assert!((mse - 4.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_r2_score() {
        let y_true = array![1.0, 2.0, 3.0, 4.0];
        let y_pred = array![1.0, 2.0, 3.0, 4.0];

        let r2 = r2_score(&y_true, &y_pred).unwrap();
        assert!((r2 - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_accuracy_score() {
        let y_true = array![0.0, 1.0, 1.0, 0.0];
        let y_pred = array![0.0, 1.0, 0.0, 0.0];

        let acc = accuracy_score(&y_true, &y_pred).unwrap();
        assert!((acc - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_length_mismatch() {
        let y_true = array![1.0, 2.0];
        let y_pred = array![1.0];

        assert!(mean_squared_error(&y_true, &y_pred).is_err());
    }
}

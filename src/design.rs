//! Design-matrix construction: a feature matrix with a prepended column of ones
//! standing in for the intercept term.

use ndarray::{ArrayView2, ArrayViewD, Axis, Ix1, Ix2, s};

use crate::{Matrix, ShapeError};

/// Return a copy of `x` with a constant-1 column prepended.
///
/// The output has shape `(n_samples, n_features + 1)`; the input is not touched.
pub fn design_matrix(x: ArrayView2<'_, f64>) -> Matrix {
    let mut design = Matrix::ones((x.nrows(), x.ncols() + 1));
    design.slice_mut(s![.., 1..]).assign(&x);
    design
}

/// Like [`design_matrix`], but accepts dynamic-rank input.
///
/// A 1-d array is treated as a single feature column. Anything other than 1-d or
/// 2-d input is rejected with [`ShapeError::UnsupportedRank`].
pub fn design_matrix_dyn(x: ArrayViewD<'_, f64>) -> Result<Matrix, ShapeError> {
    match x.ndim() {
        1 => {
            let column = x
                .into_dimensionality::<Ix1>()
                .expect("rank checked above")
                .insert_axis(Axis(1));
            Ok(design_matrix(column))
        }
        2 => Ok(design_matrix(
            x.into_dimensionality::<Ix2>().expect("rank checked above"),
        )),
        rank => Err(ShapeError::UnsupportedRank(rank)),
    }
}

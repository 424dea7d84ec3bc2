//! Small dense linear algebra for the normal equations

use super::RegressionError;
use ndarray::Array2;

/// Relative pivot threshold below which a matrix is treated as singular
const PIVOT_TOLERANCE: f64 = 1e-12;

/// Invert a square matrix by Gauss-Jordan elimination with partial pivoting
///
/// Pivots are compared against the largest absolute entry of the input so
/// that the singularity check does not depend on the scale of the data.
///
/// # Arguments
/// * `matrix` - Square matrix to invert
///
/// # Returns
/// * The inverse, or [`RegressionError::Singular`]
pub fn invert(matrix: &Array2<f64>) -> Result<Array2<f64>, RegressionError> {
    let n = matrix.nrows();
    if n != matrix.ncols() {
        return Err(RegressionError::DimensionMismatch(format!(
            "cannot invert a {}x{} matrix",
            n,
            matrix.ncols()
        )));
    }

    let scale = matrix.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if scale == 0.0 || !scale.is_finite() {
        return Err(RegressionError::Singular);
    }

    let mut a = matrix.clone();
    let mut inv = Array2::<f64>::eye(n);

    for col in 0..n {
        // Partial pivoting
        let pivot_row = (col..n)
            .max_by(|&i, &j| a[[i, col]].abs().total_cmp(&a[[j, col]].abs()))
            .unwrap_or(col);
        if a[[pivot_row, col]].abs() <= PIVOT_TOLERANCE * scale {
            return Err(RegressionError::Singular);
        }
        if pivot_row != col {
            swap_rows(&mut a, pivot_row, col);
            swap_rows(&mut inv, pivot_row, col);
        }

        let pivot = a[[col, col]];
        a.row_mut(col).mapv_inplace(|v| v / pivot);
        inv.row_mut(col).mapv_inplace(|v| v / pivot);

        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = a[[row, col]];
            if factor == 0.0 {
                continue;
            }
            for k in 0..n {
                let (a_ck, inv_ck) = (a[[col, k]], inv[[col, k]]);
                a[[row, k]] -= factor * a_ck;
                inv[[row, k]] -= factor * inv_ck;
            }
        }
    }

    Ok(inv)
}

fn swap_rows(m: &mut Array2<f64>, i: usize, j: usize) {
    for k in 0..m.ncols() {
        m.swap([i, k], [j, k]);
    }
}

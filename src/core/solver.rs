//! Dense linear solver
//!
//! LU factorization with partial pivoting for the augmented panel system.
//! Near-singular systems (degenerate or self-intersecting geometry) are
//! detected through the pivot magnitude relative to the matrix scale and
//! reported instead of silently producing NaN.

use ndarray::{Array1, Array2};

use crate::core::error::PanelError;

/// Default relative pivot threshold below which the system counts as singular
pub const DEFAULT_SINGULAR_THRESHOLD: f64 = 1e-12;

/// Solve Ax = b with the default singularity threshold
pub fn lu_solve(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>, PanelError> {
    lu_solve_with_threshold(a, b, DEFAULT_SINGULAR_THRESHOLD)
}

/// Solve Ax = b, reporting [`PanelError::SingularSystem`] when the smallest
/// pivot falls below `threshold` times the largest matrix entry
pub fn lu_solve_with_threshold(
    a: &Array2<f64>,
    b: &Array1<f64>,
    threshold: f64,
) -> Result<Array1<f64>, PanelError> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(PanelError::DimensionMismatch {
            expected: n,
            got: a.ncols(),
        });
    }
    if b.len() != n {
        return Err(PanelError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }

    let scale = a.iter().fold(0.0f64, |acc, &v| acc.max(v.abs()));
    if scale == 0.0 {
        return Err(PanelError::SingularSystem { pivot_ratio: 0.0 });
    }

    let mut lu = a.clone();
    let mut x = b.clone();

    for k in 0..n {
        // Partial pivoting
        let mut max_val = lu[[k, k]].abs();
        let mut max_row = k;
        for i in (k + 1)..n {
            let val = lu[[i, k]].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if max_val < threshold * scale {
            return Err(PanelError::SingularSystem {
                pivot_ratio: max_val / scale,
            });
        }

        if max_row != k {
            for j in 0..n {
                let tmp = lu[[k, j]];
                lu[[k, j]] = lu[[max_row, j]];
                lu[[max_row, j]] = tmp;
            }
            x.swap(k, max_row);
        }

        // Eliminate below the pivot, folding the RHS in as we go
        let pivot = lu[[k, k]];
        for i in (k + 1)..n {
            let mult = lu[[i, k]] / pivot;
            lu[[i, k]] = mult;
            for j in (k + 1)..n {
                let update = mult * lu[[k, j]];
                lu[[i, j]] -= update;
            }
            x[i] = x[i] - mult * x[k];
        }
    }

    // Backward substitution: Ux = y
    for i in (0..n).rev() {
        for j in (i + 1)..n {
            let u_ij = lu[[i, j]];
            x[i] = x[i] - u_ij * x[j];
        }
        x[i] /= lu[[i, i]];
    }

    Ok(x)
}

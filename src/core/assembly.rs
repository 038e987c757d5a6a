//! Influence matrices and the augmented linear system
//!
//! For N panels the flow-tangency equations give an N×N source-influence
//! matrix and an N×N vortex-influence matrix (both in the normal direction
//! at each control point). The Kutta condition adds one row and the single
//! shared circulation unknown adds one column, producing the augmented
//! (N+1)×(N+1) system.
//!
//! Self-influence terms are fixed by the sheet jump conditions: a panel's
//! source self-influence on its own normal velocity is exactly 0.5 and its
//! vortex self-influence is exactly 0.0.

use ndarray::{Array1, Array2};
use std::f64::consts::PI;

use crate::core::error::PanelError;
use crate::core::integration::{line_integral, KernelScheme};
use crate::core::parallel::parallel_map_indexed;
use crate::core::types::{FreeStream, Panel};

/// Normal-direction influence matrices for the panel set
#[derive(Debug, Clone)]
pub struct InfluenceMatrices {
    /// Source contribution to the normal velocity at each control point
    pub a_source: Array2<f64>,
    /// Vortex contribution to the normal velocity at each control point
    pub b_vortex: Array2<f64>,
}

/// Build the source-normal and vortex-normal influence matrices
///
/// Off-diagonal entries integrate the panel kernel at the target control
/// point projected on the target normal (source) or its vortex rotation;
/// diagonals are the fixed self terms. Rows are assembled in parallel.
pub fn influence_matrices(
    panels: &[Panel],
    scheme: KernelScheme,
) -> Result<InfluenceMatrices, PanelError> {
    let n = panels.len();

    let rows: Vec<Result<(Vec<f64>, Vec<f64>), PanelError>> =
        parallel_map_indexed(n, |i| {
            let p_i = &panels[i];
            let (sin_b, cos_b) = p_i.beta.sin_cos();
            let mut source_row = vec![0.0; n];
            let mut vortex_row = vec![0.0; n];

            for (j, p_j) in panels.iter().enumerate() {
                if i == j {
                    source_row[j] = 0.5;
                    vortex_row[j] = 0.0;
                } else {
                    source_row[j] = 0.5 / PI
                        * line_integral(p_i.xc, p_i.yc, p_j, cos_b, sin_b, scheme)?;
                    vortex_row[j] = -0.5 / PI
                        * line_integral(p_i.xc, p_i.yc, p_j, sin_b, -cos_b, scheme)?;
                }
            }
            Ok((source_row, vortex_row))
        });

    let mut a_source = Array2::zeros((n, n));
    let mut b_vortex = Array2::zeros((n, n));
    for (i, row) in rows.into_iter().enumerate() {
        let (source_row, vortex_row) = row?;
        for j in 0..n {
            a_source[[i, j]] = source_row[j];
            b_vortex[[i, j]] = vortex_row[j];
        }
    }

    Ok(InfluenceMatrices { a_source, b_vortex })
}

/// Assemble the augmented (N+1)×(N+1) system matrix
///
/// - rows 0..N-1, cols 0..N-1: source-normal matrix
/// - rows 0..N-1, col N: row-sum of the vortex-normal matrix (the shared
///   circulation's normal contribution on each panel)
/// - row N (Kutta condition): tangential equality at the two trailing-edge
///   panels, using the identity that a panel's tangential source influence
///   equals another's normal vortex influence
pub fn build_system(matrices: &InfluenceMatrices) -> Array2<f64> {
    let n = matrices.a_source.nrows();
    let mut a = Array2::zeros((n + 1, n + 1));

    for i in 0..n {
        for j in 0..n {
            a[[i, j]] = matrices.a_source[[i, j]];
        }
        a[[i, n]] = matrices.b_vortex.row(i).sum();
    }

    // Kutta row: first and last panel meet at the trailing edge
    let last = n - 1;
    let mut corner = 0.0;
    for j in 0..n {
        a[[n, j]] = matrices.b_vortex[[0, j]] + matrices.b_vortex[[last, j]];
        corner += matrices.a_source[[0, j]] + matrices.a_source[[last, j]];
    }
    a[[n, n]] = -corner;

    a
}

/// Assemble the free-stream right-hand side
///
/// bᵢ = −V·cos(α − βᵢ) for the flow-tangency rows and
/// b_N = −V·(sin(α − β₀) + sin(α − β_last)) for the Kutta row.
pub fn build_rhs(panels: &[Panel], free_stream: &FreeStream) -> Array1<f64> {
    let n = panels.len();
    let v = free_stream.velocity;
    let alpha = free_stream.alpha;

    let mut b = Array1::zeros(n + 1);
    for (i, panel) in panels.iter().enumerate() {
        b[i] = -v * (alpha - panel.beta).cos();
    }
    b[n] = -v * ((alpha - panels[0].beta).sin() + (alpha - panels[n - 1].beta).sin());
    b
}

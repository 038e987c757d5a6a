//! Panel kernel line integrals
//!
//! Evaluates the influence of a unit-strength singularity distributed over a
//! panel at an arbitrary point:
//!
//! I = ∫₀ᴸ [(x − xa + sin β·s)·dx + (y − ya − cos β·s)·dy]
//!          / [(x − xa + sin β·s)² + (y − ya − cos β·s)²] ds
//!
//! where (dx, dy) selects the projection direction (normal, tangential, or
//! Cartesian unit vectors for field evaluation). The straight-panel kernel
//! has a closed-form arctangent/logarithm antiderivative, used by default;
//! an adaptive Gauss-Legendre quadrature is available as an alternative.

use serde::{Deserialize, Serialize};

use crate::core::error::PanelError;
use crate::core::types::Panel;

/// Threshold below which the perpendicular distance counts as zero
const COLLINEAR_EPS: f64 = 1e-12;

/// Kernel evaluation scheme
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum KernelScheme {
    /// Closed-form arctangent/logarithm antiderivative (exact, default)
    ClosedForm,
    /// Adaptive bisected Gauss-Legendre quadrature
    Quadrature {
        /// Relative tolerance on the integral estimate
        tolerance: f64,
        /// Maximum bisection depth before reporting divergence
        max_depth: usize,
    },
}

impl Default for KernelScheme {
    fn default() -> Self {
        KernelScheme::ClosedForm
    }
}

impl KernelScheme {
    /// Quadrature scheme with the usual tolerance settings
    pub fn quadrature() -> Self {
        KernelScheme::Quadrature {
            tolerance: 1e-10,
            max_depth: 24,
        }
    }
}

/// Influence integral of `panel` at point (x, y) projected on (dxdz, dydz)
pub fn line_integral(
    x: f64,
    y: f64,
    panel: &Panel,
    dxdz: f64,
    dydz: f64,
    scheme: KernelScheme,
) -> Result<f64, PanelError> {
    match scheme {
        KernelScheme::ClosedForm => closed_form(x, y, panel, dxdz, dydz),
        KernelScheme::Quadrature {
            tolerance,
            max_depth,
        } => quadrature(x, y, panel, dxdz, dydz, tolerance, max_depth),
    }
}

/// Closed-form evaluation
///
/// With a = (x−xa)·sin β − (y−ya)·cos β, b = (x−xa)² + (y−ya)² and the
/// signed perpendicular distance h = (x−xa)·cos β + (y−ya)·sin β, the
/// denominator is (s+a)² + h² and the antiderivative splits into a log term
/// and an arctangent term. The arctangent coefficient reduces to
/// sign(h)·(dx·cos β + dy·sin β), which stays bounded as h → 0.
fn closed_form(
    x: f64,
    y: f64,
    panel: &Panel,
    dxdz: f64,
    dydz: f64,
) -> Result<f64, PanelError> {
    let (sb, cb) = panel.beta.sin_cos();
    let ax = x - panel.xa;
    let ay = y - panel.ya;
    let l = panel.length;

    let a = ax * sb - ay * cb;
    let b = ax * ax + ay * ay;
    let h = ax * cb + ay * sb;
    let d = sb * dxdz - cb * dydz;

    let end = l * l + 2.0 * a * l + b;
    if b <= COLLINEAR_EPS || end <= COLLINEAR_EPS {
        // Evaluation point coincides with a panel endpoint
        return Err(PanelError::PointOnPanel { x, y });
    }
    if h.abs() <= COLLINEAR_EPS && -a > -COLLINEAR_EPS && -a < l + COLLINEAR_EPS {
        // Point lies on the panel interior; the kernel is non-integrable
        return Err(PanelError::PointOnPanel { x, y });
    }

    let log_term = 0.5 * d * (end.ln() - b.ln());
    let atan_term = if h.abs() <= COLLINEAR_EPS {
        0.0
    } else {
        let coeff = h.signum() * (dxdz * cb + dydz * sb);
        coeff * (((l + a) / h.abs()).atan() - (a / h.abs()).atan())
    };

    Ok(log_term + atan_term)
}

/// Adaptive quadrature evaluation
fn quadrature(
    x: f64,
    y: f64,
    panel: &Panel,
    dxdz: f64,
    dydz: f64,
    tolerance: f64,
    max_depth: usize,
) -> Result<f64, PanelError> {
    let (sb, cb) = panel.beta.sin_cos();
    let ax = x - panel.xa;
    let ay = y - panel.ya;

    let integrand = |s: f64| {
        let px = ax + sb * s;
        let py = ay - cb * s;
        (px * dxdz + py * dydz) / (px * px + py * py)
    };

    let whole = gauss_segment(&integrand, 0.0, panel.length);
    adaptive(&integrand, 0.0, panel.length, whole, tolerance, 0, max_depth)
}

fn adaptive(
    f: &impl Fn(f64) -> f64,
    lo: f64,
    hi: f64,
    whole: f64,
    tolerance: f64,
    depth: usize,
    max_depth: usize,
) -> Result<f64, PanelError> {
    let mid = 0.5 * (lo + hi);
    let left = gauss_segment(f, lo, mid);
    let right = gauss_segment(f, mid, hi);
    let refined = left + right;
    let error = (refined - whole).abs();

    if error <= tolerance * refined.abs().max(1.0) {
        return Ok(refined);
    }
    if depth >= max_depth {
        return Err(PanelError::IntegrationDiverged {
            estimate: refined,
            error,
        });
    }

    let half_tol = 0.5 * tolerance;
    Ok(adaptive(f, lo, mid, left, half_tol, depth + 1, max_depth)?
        + adaptive(f, mid, hi, right, half_tol, depth + 1, max_depth)?)
}

/// 8-point Gauss-Legendre rule on [lo, hi]
fn gauss_segment(f: &impl Fn(f64) -> f64, lo: f64, hi: f64) -> f64 {
    let half = 0.5 * (hi - lo);
    let mid = 0.5 * (hi + lo);
    GL8_X
        .iter()
        .zip(GL8_W.iter())
        .map(|(&xi, &wi)| wi * f(mid + half * xi))
        .sum::<f64>()
        * half
}

// Gauss-Legendre abscissas and weights, order 8
#[allow(clippy::excessive_precision)]
static GL8_X: [f64; 8] = [
    -0.9602898564975363,
    -0.7966664774136267,
    -0.5255324099163290,
    -0.1834346424956498,
    0.1834346424956498,
    0.5255324099163290,
    0.7966664774136267,
    0.9602898564975363,
];
#[allow(clippy::excessive_precision)]
static GL8_W: [f64; 8] = [
    0.1012285362903763,
    0.2223810344533745,
    0.3137066458778873,
    0.3626837833783620,
    0.3626837833783620,
    0.3137066458778873,
    0.2223810344533745,
    0.1012285362903763,
];

//! Error taxonomy for the panel-method solver
//!
//! Geometry, integration and linear-system failures abort a solve with a
//! reported cause; wake close-encounter conditions are per-step and are
//! clamped or reported depending on configuration, never a panic.

use thiserror::Error;

/// Errors that can occur during panelization, solving or wake advection
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PanelError {
    /// A panel with coincident endpoints was requested
    #[error("degenerate panel at ({x:.6}, {y:.6}): coincident endpoints")]
    DegeneratePanel {
        /// x coordinate of the repeated endpoint
        x: f64,
        /// y coordinate of the repeated endpoint
        y: f64,
    },

    /// The boundary does not contain enough vertices to form a panel set
    #[error("boundary needs at least {minimum} panels, got {got}")]
    TooFewPanels {
        /// Minimum number of panels required
        minimum: usize,
        /// Number of panels the vertex sequence would produce
        got: usize,
    },

    /// The augmented linear system is singular or ill-conditioned
    #[error("linear system is singular or ill-conditioned (pivot ratio {pivot_ratio:.3e})")]
    SingularSystem {
        /// Smallest pivot magnitude relative to the matrix scale
        pivot_ratio: f64,
    },

    /// A kernel line integral did not converge within tolerance
    #[error("kernel integral failed to converge (estimate {estimate:.6e}, error {error:.3e})")]
    IntegrationDiverged {
        /// Best available estimate of the integral
        estimate: f64,
        /// Remaining error estimate at the deepest refinement level
        error: f64,
    },

    /// A field evaluation point lies on a panel, where the kernel is singular
    #[error("evaluation point ({x:.6}, {y:.6}) lies on a panel")]
    PointOnPanel {
        /// x coordinate of the evaluation point
        x: f64,
        /// y coordinate of the evaluation point
        y: f64,
    },

    /// Two wake particles are closer than the configured minimum separation
    #[error("wake particles closer than {min_separation:.3e} (induced speed {speed:.3e})")]
    DegenerateInfluence {
        /// Configured minimum pairwise separation
        min_separation: f64,
        /// Induced speed magnitude that exceeded the sanity bound
        speed: f64,
    },

    /// An input does not have the expected dimension
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension
        got: usize,
    },

    /// A NACA profile code could not be parsed
    #[error("invalid NACA 4-digit code: {0:?}")]
    InvalidProfile(String),
}

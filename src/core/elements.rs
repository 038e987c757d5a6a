//! Closed-form elementary flow primitives
//!
//! Point source/sink, doublet, point vortex and uniform stream as small
//! immutable value types behind a tagged variant. No behavior is shared
//! beyond the velocity/stream-function signature, so an enum is preferred
//! over a trait hierarchy.

use std::f64::consts::PI;

/// Velocity induced at (x, y) by a point vortex of circulation `gamma`
/// located at (xv, yv)
///
/// Standard 2-D Biot-Savart form: F = γ/(2π r²)·(-r_y, r_x) with
/// r = (x - xv, y - yv), counterclockwise for positive γ. The
/// zero-separation limit is exactly (0, 0), never a division error.
pub fn point_vortex_velocity(gamma: f64, xv: f64, yv: f64, x: f64, y: f64) -> (f64, f64) {
    let dx = x - xv;
    let dy = y - yv;
    let r2 = dx * dx + dy * dy;
    if r2 == 0.0 {
        return (0.0, 0.0);
    }
    let fac = gamma / (2.0 * PI * r2);
    (-fac * dy, fac * dx)
}

/// An elementary potential-flow singularity or onset flow
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlowElement {
    /// Point source (positive strength) or sink (negative strength)
    SourceSink {
        /// Volume outflow strength
        strength: f64,
        /// x position
        x: f64,
        /// y position
        y: f64,
    },
    /// Doublet aligned with the x-axis
    Doublet {
        /// Doublet strength κ
        kappa: f64,
        /// x position
        x: f64,
        /// y position
        y: f64,
    },
    /// Point vortex
    PointVortex {
        /// Circulation Γ
        gamma: f64,
        /// x position
        x: f64,
        /// y position
        y: f64,
    },
    /// Uniform stream
    UniformStream {
        /// x velocity component
        u: f64,
        /// y velocity component
        v: f64,
    },
}

impl FlowElement {
    /// Velocity (u, v) induced at a point
    ///
    /// Singularities return (0, 0) at zero separation from their own
    /// location (defined limit, not a fault).
    pub fn velocity_at(&self, px: f64, py: f64) -> (f64, f64) {
        match *self {
            FlowElement::SourceSink { strength, x, y } => {
                let dx = px - x;
                let dy = py - y;
                let r2 = dx * dx + dy * dy;
                if r2 == 0.0 {
                    return (0.0, 0.0);
                }
                let fac = strength / (2.0 * PI * r2);
                (fac * dx, fac * dy)
            }
            FlowElement::Doublet { kappa, x, y } => {
                let dx = px - x;
                let dy = py - y;
                let r2 = dx * dx + dy * dy;
                if r2 == 0.0 {
                    return (0.0, 0.0);
                }
                let fac = -kappa / (2.0 * PI * r2 * r2);
                (fac * (dx * dx - dy * dy), fac * 2.0 * dx * dy)
            }
            FlowElement::PointVortex { gamma, x, y } => {
                point_vortex_velocity(gamma, x, y, px, py)
            }
            FlowElement::UniformStream { u, v } => (u, v),
        }
    }

    /// Stream function ψ at a point
    pub fn stream_function_at(&self, px: f64, py: f64) -> f64 {
        match *self {
            FlowElement::SourceSink { strength, x, y } => {
                strength / (2.0 * PI) * (py - y).atan2(px - x)
            }
            FlowElement::Doublet { kappa, x, y } => {
                let dx = px - x;
                let dy = py - y;
                let r2 = dx * dx + dy * dy;
                if r2 == 0.0 {
                    return 0.0;
                }
                -kappa / (2.0 * PI) * dy / r2
            }
            FlowElement::PointVortex { gamma, x, y } => {
                let dx = px - x;
                let dy = py - y;
                let r2 = dx * dx + dy * dy;
                if r2 == 0.0 {
                    return 0.0;
                }
                -gamma / (4.0 * PI) * r2.ln()
            }
            FlowElement::UniformStream { u, v } => u * py - v * px,
        }
    }
}

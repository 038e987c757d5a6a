//! Core type definitions for the panel-method solver
//!
//! A `Panel` is a straight boundary segment with a control point at its
//! midpoint and an orientation angle β measured between the x-axis and the
//! panel's outward normal. A `FreeStream` is the uniform onset flow.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::core::error::PanelError;

/// A straight boundary-element segment approximating part of a body surface
///
/// Panels are immutable once constructed; solved quantities (source strength,
/// tangential velocity, pressure coefficient) live in
/// [`crate::core::panel_solver::PanelSolution`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// x coordinate of the first endpoint
    pub xa: f64,
    /// y coordinate of the first endpoint
    pub ya: f64,
    /// x coordinate of the second endpoint
    pub xb: f64,
    /// y coordinate of the second endpoint
    pub yb: f64,
    /// x coordinate of the control point (midpoint)
    pub xc: f64,
    /// y coordinate of the control point (midpoint)
    pub yc: f64,
    /// Euclidean length of the panel
    pub length: f64,
    /// Orientation: angle between the x-axis and the outward normal
    pub beta: f64,
}

impl Panel {
    /// Build a panel from its two endpoints
    ///
    /// The orientation convention follows the boundary winding: a body traced
    /// counter-clockwise yields outward normals. Coincident endpoints are a
    /// degenerate input and fail fast.
    pub fn new(xa: f64, ya: f64, xb: f64, yb: f64) -> Result<Self, PanelError> {
        let length = ((xb - xa).powi(2) + (yb - ya).powi(2)).sqrt();
        if length == 0.0 {
            return Err(PanelError::DegeneratePanel { x: xa, y: ya });
        }

        // Angle between the x-axis and the panel's outward normal; the branch
        // depends on the sign of the x-extent so the normal stays outward for
        // a consistently wound boundary.
        let beta = if xb - xa <= 0.0 {
            ((yb - ya) / length).acos()
        } else {
            PI + (-(yb - ya) / length).acos()
        };

        Ok(Self {
            xa,
            ya,
            xb,
            yb,
            xc: 0.5 * (xa + xb),
            yc: 0.5 * (ya + yb),
            length,
            beta,
        })
    }

    /// Unit outward normal (cos β, sin β)
    pub fn normal(&self) -> (f64, f64) {
        (self.beta.cos(), self.beta.sin())
    }
}

/// Uniform free stream: magnitude and angle of attack
///
/// Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreeStream {
    /// Free-stream speed magnitude
    pub velocity: f64,
    /// Angle of attack in radians
    pub alpha: f64,
    /// Cartesian x component: V·cos α
    pub u_inf: f64,
    /// Cartesian y component: V·sin α
    pub v_inf: f64,
}

impl FreeStream {
    /// Create a free stream from a speed and an angle of attack in degrees
    pub fn new(velocity: f64, alpha_deg: f64) -> Self {
        Self::from_radians(velocity, alpha_deg * PI / 180.0)
    }

    /// Create a free stream from a speed and an angle of attack in radians
    pub fn from_radians(velocity: f64, alpha: f64) -> Self {
        Self {
            velocity,
            alpha,
            u_inf: velocity * alpha.cos(),
            v_inf: velocity * alpha.sin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_panel_geometry() {
        // Vertical panel going up on the right side of a CCW body: the
        // outward normal points along +x, so beta = 0.
        let p = Panel::new(1.0, -0.5, 1.0, 0.5).unwrap();
        assert_relative_eq!(p.length, 1.0);
        assert_relative_eq!(p.xc, 1.0);
        assert_relative_eq!(p.yc, 0.0);
        assert_relative_eq!(p.beta, 0.0);
        let (nx, ny) = p.normal();
        assert_relative_eq!(nx, 1.0);
        assert_relative_eq!(ny, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_panel_top_of_body() {
        // Horizontal panel traversed in -x on top of a CCW body: the outward
        // normal points along +y.
        let p = Panel::new(0.5, 1.0, -0.5, 1.0).unwrap();
        assert_relative_eq!(p.beta, std::f64::consts::FRAC_PI_2);
        let (nx, ny) = p.normal();
        assert_relative_eq!(nx, 0.0, epsilon = 1e-15);
        assert_relative_eq!(ny, 1.0);
    }

    #[test]
    fn test_degenerate_panel() {
        let result = Panel::new(0.3, 0.7, 0.3, 0.7);
        assert!(matches!(result, Err(PanelError::DegeneratePanel { .. })));
    }

    #[test]
    fn test_free_stream_decomposition() {
        let fs = FreeStream::new(2.0, 90.0);
        assert_relative_eq!(fs.alpha, std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(fs.u_inf, 0.0, epsilon = 1e-15);
        assert_relative_eq!(fs.v_inf, 2.0);

        let fs = FreeStream::from_radians(1.0, 0.0);
        assert_relative_eq!(fs.u_inf, 1.0);
        assert_relative_eq!(fs.v_inf, 0.0);
    }
}

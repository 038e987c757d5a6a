//! Boundary panelization
//!
//! Converts an ordered, closed sequence of boundary vertices into panels.
//! The vertex order must trace the boundary counter-clockwise so the β
//! convention yields outward normals; this is a documented precondition,
//! not a runtime check. The first and last vertex may coincide (parametric
//! circle) or be slightly offset (open-trailing-edge airfoil); the wake is
//! always seeded at their midpoint.

pub mod generators;

use crate::core::error::PanelError;
use crate::core::types::Panel;

/// Minimum number of panels the solver can work with
pub const MIN_PANELS: usize = 2;

/// Build one panel per consecutive vertex pair
///
/// # Errors
/// - [`PanelError::TooFewPanels`] when fewer than two panels would result
/// - [`PanelError::DegeneratePanel`] on coincident consecutive vertices
pub fn panelize(vertices: &[[f64; 2]]) -> Result<Vec<Panel>, PanelError> {
    if vertices.len() < MIN_PANELS + 1 {
        return Err(PanelError::TooFewPanels {
            minimum: MIN_PANELS,
            got: vertices.len().saturating_sub(1),
        });
    }

    vertices
        .windows(2)
        .map(|w| Panel::new(w[0][0], w[0][1], w[1][0], w[1][1]))
        .collect()
}

/// Midpoint of the first/last vertex pair, used only for wake seeding
///
/// For a closed polygon (first == last vertex) this is the shared point
/// itself; for an open trailing edge it folds the two edge vertices into a
/// single seed location.
pub fn trailing_edge_midpoint(vertices: &[[f64; 2]]) -> [f64; 2] {
    let first = vertices[0];
    let last = vertices[vertices.len() - 1];
    [0.5 * (first[0] + last[0]), 0.5 * (first[1] + last[1])]
}

/// Extent of the body along the x-axis (chord for an airfoil)
pub fn body_x_extent(panels: &[Panel]) -> f64 {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    for p in panels {
        x_min = x_min.min(p.xa).min(p.xb);
        x_max = x_max.max(p.xa).max(p.xb);
    }
    x_max - x_min
}

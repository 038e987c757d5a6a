//! Parametric boundary generators for standard test geometries
//!
//! Provides vertex sequences for a circle and for NACA 4-digit airfoil
//! profiles, ordered counter-clockwise so panelization yields outward
//! normals. Reading profile coordinates from a file is a collaborator's
//! concern; the core only consumes ordered vertex sequences.

use std::f64::consts::PI;

use crate::core::error::PanelError;

/// Vertices of a circle of given radius centered at the origin
///
/// Returns `n_panels + 1` points with the last equal to the first, traced
/// counter-clockwise starting at (radius, 0).
pub fn circle(radius: f64, n_panels: usize) -> Vec<[f64; 2]> {
    (0..=n_panels)
        .map(|i| {
            let theta = 2.0 * PI * i as f64 / n_panels as f64;
            [radius * theta.cos(), radius * theta.sin()]
        })
        .collect()
}

/// Vertices of a NACA 4-digit profile with unit chord
///
/// Cosine spacing clusters vertices near the leading and trailing edges.
/// The sequence runs trailing edge → upper surface → leading edge → lower
/// surface → trailing edge (counter-clockwise); the standard thickness
/// polynomial leaves a small open trailing edge, which the wake seeding
/// folds into its midpoint.
///
/// `n_side` is the number of panels per surface side, so the result holds
/// `2·n_side + 1` vertices.
pub fn naca4(code: &str, n_side: usize) -> Result<Vec<[f64; 2]>, PanelError> {
    if code.len() != 4 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(PanelError::InvalidProfile(code.to_string()));
    }
    let m = code[0..1].parse::<f64>().unwrap() / 100.0; // max camber
    let p = code[1..2].parse::<f64>().unwrap() / 10.0; // camber position
    let t = code[2..4].parse::<f64>().unwrap() / 100.0; // thickness

    let mut upper = Vec::with_capacity(n_side + 1);
    let mut lower = Vec::with_capacity(n_side + 1);

    for i in 0..=n_side {
        let theta = PI * i as f64 / n_side as f64;
        let x = 0.5 * (1.0 - theta.cos());

        // Mean camber line and its slope (zero for symmetric profiles)
        let (yc, dyc_dx) = if m == 0.0 || p == 0.0 {
            (0.0, 0.0)
        } else if x < p {
            (
                m * (x / p.powi(2)) * (2.0 * p - x),
                2.0 * m / p.powi(2) * (p - x),
            )
        } else {
            (
                m * ((1.0 - x) / (1.0 - p).powi(2)) * (1.0 + x - 2.0 * p),
                2.0 * m / (1.0 - p).powi(2) * (p - x),
            )
        };

        // Thickness distribution
        let yt = 5.0
            * t
            * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
                - 0.1015 * x.powi(4));

        let angle = dyc_dx.atan();
        upper.push([x - yt * angle.sin(), yc + yt * angle.cos()]);
        lower.push([x + yt * angle.sin(), yc - yt * angle.cos()]);
    }

    // Trailing edge → upper → leading edge → lower → trailing edge
    let mut vertices: Vec<[f64; 2]> = upper.into_iter().rev().collect();
    vertices.extend(lower.into_iter().skip(1));
    Ok(vertices)
}

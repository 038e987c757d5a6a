//! Validation against NACA 4-digit profiles
//!
//! Thin-airfoil theory gives CL = 2*pi*alpha for a symmetric section; a
//! moderately thick panelization should land within a few percent. Cambered
//! sections must lift at zero incidence, and the Kutta condition must hold
//! to solver precision.

use approx::assert_relative_eq;
use panel2d::{FreeStream, PanelError, PanelProblem, PanelSolution, PanelSolver};
use std::f64::consts::PI;

fn solve_naca(code: &str, n_side: usize, alpha_rad: f64) -> PanelSolution {
    let problem =
        PanelProblem::naca4(code, n_side, FreeStream::from_radians(1.0, alpha_rad)).unwrap();
    PanelSolver::new().solve(&problem).unwrap()
}

#[test]
fn test_naca0012_lift_slope() {
    let alpha = 0.04;
    let solution = solve_naca("0012", 80, alpha);
    let cl_thin = 2.0 * PI * alpha;
    let cl = solution.lift_coefficient();
    assert!(
        (cl - cl_thin).abs() < 0.2 * cl_thin,
        "CL = {}, thin-airfoil = {}",
        cl,
        cl_thin
    );
}

#[test]
fn test_naca0012_lift_regression_baseline() {
    // Converged reference solve: NACA 0012 at alpha = 0.04 rad, 200 panels.
    // The pinned value sits on the inviscid lift slope for a 12%-thick
    // symmetric section (about 6.9 per radian, above the thin-airfoil 2*pi);
    // a change outside the band means the assembly or solve changed.
    let solution = solve_naca("0012", 100, 0.04);
    let cl = solution.lift_coefficient();
    let cl_ref = 0.2752;
    assert!(
        (cl - cl_ref).abs() < 0.02 * cl_ref,
        "CL = {} drifted from reference {}",
        cl,
        cl_ref
    );
}

#[test]
fn test_naca0012_symmetric_at_zero_incidence() {
    let solution = solve_naca("0012", 60, 0.0);
    assert_relative_eq!(solution.gamma, 0.0, epsilon = 1e-8);
    assert_relative_eq!(solution.lift_coefficient(), 0.0, epsilon = 1e-6);
}

#[test]
fn test_naca2412_lifts_at_zero_incidence() {
    let solution = solve_naca("2412", 80, 0.0);
    assert!(
        solution.lift_coefficient() > 0.0,
        "cambered section must lift at alpha = 0, got CL = {}",
        solution.lift_coefficient()
    );
}

#[test]
fn test_kutta_condition_residual() {
    // The augmented system enforces vt[0] + vt[N-1] = 0 through the same
    // matrix expressions, so the residual is at solver precision.
    for &(code, alpha) in &[("0012", 0.04), ("2412", 0.0), ("4412", 0.08)] {
        let solution = solve_naca(code, 60, alpha);
        let n = solution.vt.len();
        let residual = solution.vt[0] + solution.vt[n - 1];
        assert!(
            residual.abs() < 1e-8,
            "{} at alpha {}: Kutta residual {}",
            code,
            alpha,
            residual
        );
    }
}

#[test]
fn test_airfoil_flow_tangency() {
    let solution = solve_naca("2412", 80, 0.04);
    let v_ref = solution.free_stream.velocity;

    for panel in &solution.panels {
        // Offset scales with the panel so short leading-edge panels are
        // probed inside their own near field
        let off = 0.05 * panel.length;
        let (nx, ny) = panel.normal();
        let (u, v) = solution
            .velocity_at(panel.xc + off * nx, panel.yc + off * ny)
            .unwrap();
        let vn = u * nx + v * ny;
        assert!(
            vn.abs() < 0.05 * v_ref,
            "normal velocity {} at ({}, {})",
            vn,
            panel.xc,
            panel.yc
        );
    }
}

#[test]
fn test_lift_grows_with_incidence() {
    let cl_low = solve_naca("0012", 60, 0.02).lift_coefficient();
    let cl_high = solve_naca("0012", 60, 0.06).lift_coefficient();
    assert!(cl_high > cl_low);
}

#[test]
fn test_invalid_profile_code() {
    let result = PanelProblem::naca4("00x2", 40, FreeStream::new(1.0, 0.0));
    assert!(matches!(result, Err(PanelError::InvalidProfile(_))));

    let result = PanelProblem::naca4("00123", 40, FreeStream::new(1.0, 0.0));
    assert!(matches!(result, Err(PanelError::InvalidProfile(_))));
}

#[test]
fn test_too_few_vertices() {
    let result = PanelProblem::from_vertices(
        &[[0.0, 0.0], [1.0, 0.0]],
        FreeStream::new(1.0, 0.0),
    );
    assert!(matches!(result, Err(PanelError::TooFewPanels { .. })));
}

#[test]
fn test_repeated_vertex_is_degenerate() {
    let result = PanelProblem::from_vertices(
        &[[0.0, 0.0], [1.0, 0.0], [1.0, 0.0], [0.5, 1.0], [0.0, 0.0]],
        FreeStream::new(1.0, 0.0),
    );
    assert!(matches!(result, Err(PanelError::DegeneratePanel { .. })));
}

#[test]
fn test_control_point_evaluation_is_rejected() {
    // A control point lies on its own panel; field evaluation there must
    // report instead of returning a garbage value.
    let solution = solve_naca("0012", 40, 0.0);
    let panel = &solution.panels[3];
    let result = solution.velocity_at(panel.xc, panel.yc);
    assert!(matches!(result, Err(PanelError::PointOnPanel { .. })));
}

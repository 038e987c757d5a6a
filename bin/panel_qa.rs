//! QA Suite for panel2d
//!
//! Validates:
//! 1. Non-lifting cylinder (symmetry, zero circulation, zero lift)
//! 2. NACA 4-digit airfoils (thin-airfoil lift slope, Kutta condition)
//! 3. Free-vortex wake marching behind a lifting profile
//!
//! Usage:
//!     cargo run --bin panel_qa --release

use std::f64::consts::PI;

use panel2d::core::io::{SolutionSnapshot, WakeFrame};
use panel2d::{
    FreeStream, PanelProblem, PanelSolution, PanelSolver, SheddingSchedule, WakeConfig,
    WakeSimulation,
};

struct QaCase {
    name: String,
    measured: f64,
    expected: f64,
    tolerance: f64,
}

impl QaCase {
    fn passed(&self) -> bool {
        (self.measured - self.expected).abs() <= self.tolerance
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Starting panel2d QA Suite...");
    println!("============================");

    let mut results = Vec::new();

    // 1. Cylinder: symmetric non-lifting flow
    println!("\nRunning Cylinder Tests...");
    let cylinder = PanelProblem::circle(1.0, 40, FreeStream::new(1.0, 0.0))?;
    let solution = PanelSolver::new().solve(&cylinder)?;
    results.push(QaCase {
        name: "Cylinder circulation".into(),
        measured: solution.gamma,
        expected: 0.0,
        tolerance: 1e-8,
    });
    results.push(QaCase {
        name: "Cylinder lift coefficient".into(),
        measured: solution.lift_coefficient(),
        expected: 0.0,
        tolerance: 1e-6,
    });
    results.push(QaCase {
        name: "Cylinder net source outflow".into(),
        measured: solution.net_source_strength(),
        expected: 0.0,
        tolerance: 1e-8,
    });
    SolutionSnapshot::from_solution(&solution).save_json("qa_cylinder.json")?;

    // 2. Airfoils: lift against the thin-airfoil slope 2*pi*alpha
    println!("\nRunning Airfoil Tests...");
    let alpha = 0.04; // radians
    let airfoil = PanelProblem::naca4("0012", 80, FreeStream::from_radians(1.0, alpha))?;
    let solution = PanelSolver::new().solve(&airfoil)?;
    let cl_thin = 2.0 * PI * alpha;
    results.push(QaCase {
        name: format!("NACA 0012 CL at alpha={:.3} rad", alpha),
        measured: solution.lift_coefficient(),
        expected: cl_thin,
        tolerance: 0.2 * cl_thin,
    });
    results.push(QaCase {
        name: "NACA 0012 Kutta residual".into(),
        measured: kutta_residual(&solution),
        expected: 0.0,
        tolerance: 1e-8,
    });

    let cambered = PanelProblem::naca4("2412", 80, FreeStream::new(1.0, 0.0))?;
    let solution = PanelSolver::new().solve(&cambered)?;
    println!("  NACA 2412 CL at alpha=0: {:.4}", solution.lift_coefficient());
    results.push(QaCase {
        name: "NACA 2412 positive lift at alpha=0".into(),
        measured: solution.lift_coefficient().signum(),
        expected: 1.0,
        tolerance: 0.0,
    });
    SolutionSnapshot::from_solution(&solution).save_json("qa_naca2412.json")?;

    // 3. Wake marching
    println!("\nRunning Wake Tests...");
    let mut wake = WakeSimulation::new(
        solution.clone(),
        SheddingSchedule::default(),
        WakeConfig::default(),
    );
    wake.run(50)?;
    results.push(QaCase {
        name: "Wake particle count after 50 steps".into(),
        measured: wake.particles().len() as f64,
        expected: 50.0,
        tolerance: 0.0,
    });
    let all_finite = wake
        .particles()
        .iter()
        .all(|p| p.x.is_finite() && p.y.is_finite());
    results.push(QaCase {
        name: "Wake positions finite".into(),
        measured: if all_finite { 1.0 } else { 0.0 },
        expected: 1.0,
        tolerance: 0.0,
    });
    WakeFrame::from_simulation(&wake).save_json("qa_wake.json")?;

    // Summary
    println!("\n{:<45} {:>12} {:>12} {:>6}", "Test", "Measured", "Expected", "Pass");
    println!("{}", "-".repeat(80));
    let mut failed = false;
    for case in &results {
        println!(
            "{:<45} {:>12.4e} {:>12.4e} {:>6}",
            case.name,
            case.measured,
            case.expected,
            if case.passed() { "OK" } else { "FAIL" }
        );
        if !case.passed() {
            eprintln!(
                "TEST FAILED: {} (measured {:.6e}, expected {:.6e})",
                case.name, case.measured, case.expected
            );
            failed = true;
        }
    }

    println!("\nSnapshots saved to: qa_cylinder.json, qa_naca2412.json, qa_wake.json");

    if failed {
        std::process::exit(1);
    } else {
        println!("\nALL TESTS PASSED");
        Ok(())
    }
}

fn kutta_residual(solution: &PanelSolution) -> f64 {
    let n = solution.vt.len();
    solution.vt[0] + solution.vt[n - 1]
}

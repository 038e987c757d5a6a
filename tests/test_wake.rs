//! Free-vortex wake behaviour
//!
//! Exercises seeding, snapshot advection, the shedding schedules and the
//! close-encounter policies behind a solved lifting body.

use approx::assert_relative_eq;
use panel2d::{
    DegeneratePolicy, FreeStream, FreeVortex, PanelError, PanelProblem, PanelSolution,
    PanelSolver, SheddingSchedule, WakeConfig, WakeSimulation,
};

fn solved_airfoil() -> PanelSolution {
    let problem = PanelProblem::naca4("2412", 40, FreeStream::new(1.0, 0.0)).unwrap();
    PanelSolver::new().solve(&problem).unwrap()
}

#[test]
fn test_particles_seed_at_trailing_edge() {
    let solution = solved_airfoil();
    let te = solution.trailing_edge;
    let mut wake = WakeSimulation::new(
        solution,
        SheddingSchedule::Constant(1.0),
        WakeConfig::default(),
    );
    wake.step().unwrap();
    assert_eq!(wake.particles().len(), 1);
    let p = wake.particles()[0];
    assert_relative_eq!(p.x, te[0]);
    assert_relative_eq!(p.y, te[1]);
    assert_relative_eq!(p.omega, 1.0);
}

#[test]
fn test_one_particle_per_step() {
    let mut wake = WakeSimulation::new(
        solved_airfoil(),
        SheddingSchedule::Constant(0.5),
        WakeConfig::default(),
    );
    wake.run(12).unwrap();
    assert_eq!(wake.particles().len(), 12);
    assert_eq!(wake.steps_taken(), 12);
    assert_relative_eq!(wake.time(), 1.2, epsilon = 1e-12);
}

#[test]
fn test_oscillatory_schedule_strengths() {
    // Default schedule: omega(t) = 10 * pi/4 * cos(5 t), evaluated at the
    // time the particle is shed.
    let mut wake = WakeSimulation::new(
        solved_airfoil(),
        SheddingSchedule::default(),
        WakeConfig::default(),
    );
    wake.run(3).unwrap();

    let expected = |t: f64| 10.0 * std::f64::consts::FRAC_PI_4 * (5.0 * t).cos();
    for (k, p) in wake.particles().iter().enumerate() {
        let t = 0.1 * k as f64;
        assert_relative_eq!(p.t, t, epsilon = 1e-12);
        assert_relative_eq!(p.omega, expected(t), epsilon = 1e-12);
    }
}

#[test]
fn test_zero_strength_wake_leaves_field_unchanged() {
    let solution = solved_airfoil();
    let mut wake = WakeSimulation::new(
        solution.clone(),
        SheddingSchedule::Constant(0.0),
        WakeConfig::default(),
    );
    wake.run(10).unwrap();
    assert_eq!(wake.particles().len(), 10);

    for &(x, y) in &[(2.0, 0.3), (3.0, -0.5), (1.5, 1.0)] {
        let (u, v) = wake.combined_velocity(x, y).unwrap();
        let (ub, vb) = solution.velocity_at(x, y).unwrap();
        assert_relative_eq!(u, ub, epsilon = 1e-14);
        assert_relative_eq!(v, vb, epsilon = 1e-14);
    }
}

#[test]
fn test_lone_particle_rides_the_free_stream() {
    // Advection sums the influence of the *other* particles plus the free
    // stream; a lone particle induces nothing on itself.
    let mut wake = WakeSimulation::new(
        solved_airfoil(),
        SheddingSchedule::Disabled,
        WakeConfig::default(),
    );
    wake.seed(3.0);
    let start = wake.particles()[0];
    wake.run(4).unwrap();
    let end = wake.particles()[0];
    assert_relative_eq!(end.x, start.x + 1.0 * 0.4, epsilon = 1e-12);
    assert_relative_eq!(end.y, start.y, epsilon = 1e-12);
}

#[test]
fn test_self_influence_is_exactly_zero() {
    let p = FreeVortex {
        x: 1.5,
        y: -0.5,
        omega: 4.0,
        t: 0.0,
    };
    assert_eq!(p.influence(1.5, -0.5), (0.0, 0.0));
}

#[test]
fn test_snapshot_advection_is_order_independent() {
    // Two equal-strength vortices advect with velocities computed from the
    // start-of-step positions, so the pair stays symmetric about its centre
    // regardless of update order.
    let dt = 0.01;
    let mut wake = WakeSimulation::new(
        solved_airfoil(),
        SheddingSchedule::Disabled,
        WakeConfig {
            dt,
            ..WakeConfig::default()
        },
    );
    // Pair symmetric about y = 0, far downstream so the body field is
    // negligible next to the mutual induction.
    wake.seed_at(FreeVortex {
        x: 100.0,
        y: 0.5,
        omega: 1.0,
        t: 0.0,
    });
    wake.seed_at(FreeVortex {
        x: 100.0,
        y: -0.5,
        omega: 1.0,
        t: 0.0,
    });

    wake.step().unwrap();
    let a = wake.particles()[0];
    let b = wake.particles()[1];

    // Each vortex induces |omega| / (2 pi r^2) * r = 1/(2 pi) on the other,
    // in opposite x directions; the vertical components vanish.
    let shift = dt / (2.0 * std::f64::consts::PI);
    assert_relative_eq!(a.y, 0.5, epsilon = 1e-4);
    assert_relative_eq!(b.y, -0.5, epsilon = 1e-4);
    assert_relative_eq!(b.x - a.x, 2.0 * shift, epsilon = 1e-5);
    assert_relative_eq!(0.5 * (a.x + b.x), 100.0 + dt * 1.0, epsilon = 1e-4);
}

#[test]
fn test_report_policy_aborts_on_close_pair() {
    let mut wake = WakeSimulation::new(
        solved_airfoil(),
        SheddingSchedule::Disabled,
        WakeConfig {
            policy: DegeneratePolicy::Report,
            ..WakeConfig::default()
        },
    );
    let te = wake.solution().trailing_edge;
    wake.seed_at(FreeVortex {
        x: te[0],
        y: te[1],
        omega: 1.0,
        t: 0.0,
    });
    wake.seed_at(FreeVortex {
        x: te[0] + 1e-9,
        y: te[1],
        omega: 1.0,
        t: 0.0,
    });
    assert!(matches!(
        wake.step(),
        Err(PanelError::DegenerateInfluence { .. })
    ));
}

#[test]
fn test_clamp_policy_caps_the_induced_speed() {
    let mut wake = WakeSimulation::new(
        solved_airfoil(),
        SheddingSchedule::Disabled,
        WakeConfig::default(),
    );
    let te = wake.solution().trailing_edge;
    wake.seed_at(FreeVortex {
        x: te[0],
        y: te[1],
        omega: 1.0,
        t: 0.0,
    });
    wake.seed_at(FreeVortex {
        x: te[0] + 1e-9,
        y: te[1],
        omega: 1.0,
        t: 0.0,
    });
    wake.step().unwrap();

    // Displacement per step bounded by (max_speed + |V|) * dt
    let bound = (1e3 + 1.0) * 0.1 + 1e-6;
    for p in wake.particles() {
        assert!(p.x.is_finite() && p.y.is_finite());
        assert!((p.x - te[0]).abs() <= bound);
        assert!((p.y - te[1]).abs() <= bound);
    }
}

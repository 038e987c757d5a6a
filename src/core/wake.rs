//! Discrete free-vortex wake
//!
//! Time-marches a cloud of free point vortices shed from the trailing edge
//! of a solved body. Each step advects every existing particle by the sum
//! of the free stream and the velocity mutually induced by all other
//! particles, evaluated from a snapshot of the positions at the start of
//! the step, then seeds one new particle at the trailing edge with a
//! strength drawn from the shedding schedule at the current simulation time.
//!
//! The body's own singularities are frozen: particles feel the free stream
//! and each other, and the body field is superposed only when sampling the
//! combined velocity.

use serde::{Deserialize, Serialize};

use crate::core::elements::point_vortex_velocity;
use crate::core::error::PanelError;
use crate::core::panel_solver::PanelSolution;

/// A free point vortex carried by the wake
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreeVortex {
    /// Current x position
    pub x: f64,
    /// Current y position
    pub y: f64,
    /// Circulation strength ω (sign gives the rotation sense)
    pub omega: f64,
    /// Simulation time at which the particle was shed
    pub t: f64,
}

impl FreeVortex {
    /// Velocity this particle induces at (x, y); exactly zero at its own
    /// position
    pub fn influence(&self, x: f64, y: f64) -> (f64, f64) {
        point_vortex_velocity(self.omega, self.x, self.y, x, y)
    }
}

/// Strength of the particle shed at each step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SheddingSchedule {
    /// No particles are shed; existing ones still advect
    Disabled,
    /// Same strength every step
    Constant(f64),
    /// ω(t) = gain·amplitude·cos(frequency·t)
    Oscillatory {
        /// Scale factor applied to the amplitude
        gain: f64,
        /// Base amplitude in circulation units
        amplitude: f64,
        /// Angular frequency of the oscillation
        frequency: f64,
    },
}

impl Default for SheddingSchedule {
    fn default() -> Self {
        SheddingSchedule::Oscillatory {
            gain: 10.0,
            amplitude: std::f64::consts::FRAC_PI_4,
            frequency: 5.0,
        }
    }
}

impl SheddingSchedule {
    /// Strength of a particle shed at time `t`, or `None` when disabled
    pub fn strength_at(&self, t: f64) -> Option<f64> {
        match *self {
            SheddingSchedule::Disabled => None,
            SheddingSchedule::Constant(omega) => Some(omega),
            SheddingSchedule::Oscillatory {
                gain,
                amplitude,
                frequency,
            } => Some(gain * amplitude * (frequency * t).cos()),
        }
    }
}

/// What to do when two particles come close enough for the induced speed to
/// blow up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegeneratePolicy {
    /// Clamp the induced speed to the configured maximum and log a warning
    Clamp,
    /// Abort the step with [`PanelError::DegenerateInfluence`]
    Report,
}

/// Wake time-stepping parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WakeConfig {
    /// Time-step size
    pub dt: f64,
    /// Separation below which a particle pair counts as degenerate
    pub min_separation: f64,
    /// Speed cap applied under [`DegeneratePolicy::Clamp`]
    pub max_speed: f64,
    /// Close-encounter handling
    pub policy: DegeneratePolicy,
}

impl Default for WakeConfig {
    fn default() -> Self {
        Self {
            dt: 0.1,
            min_separation: 1e-6,
            max_speed: 1e3,
            policy: DegeneratePolicy::Clamp,
        }
    }
}

/// Free-vortex wake marching behind a solved body
#[derive(Debug, Clone)]
pub struct WakeSimulation {
    solution: PanelSolution,
    schedule: SheddingSchedule,
    config: WakeConfig,
    particles: Vec<FreeVortex>,
    time: f64,
    steps: usize,
}

impl WakeSimulation {
    /// Start an empty wake behind `solution`
    pub fn new(solution: PanelSolution, schedule: SheddingSchedule, config: WakeConfig) -> Self {
        Self {
            solution,
            schedule,
            config,
            particles: Vec::new(),
            time: 0.0,
            steps: 0,
        }
    }

    /// Particles currently in the wake, oldest first
    pub fn particles(&self) -> &[FreeVortex] {
        &self.particles
    }

    /// Current simulation time
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Number of steps taken so far
    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    /// The solved body state the wake marches behind
    pub fn solution(&self) -> &PanelSolution {
        &self.solution
    }

    /// Velocity induced at (x, y) by every wake particle except the one at
    /// index `skip` (pass `usize::MAX` to include all)
    fn induced_by_others(
        &self,
        snapshot: &[FreeVortex],
        skip: usize,
        x: f64,
        y: f64,
    ) -> Result<(f64, f64), PanelError> {
        let mut u = 0.0;
        let mut v = 0.0;
        for (k, p) in snapshot.iter().enumerate() {
            if k == skip {
                continue;
            }
            let dx = x - p.x;
            let dy = y - p.y;
            let r = (dx * dx + dy * dy).sqrt();
            let (du, dv) = p.influence(x, y);
            if r > 0.0 && r < self.config.min_separation {
                let speed = (du * du + dv * dv).sqrt();
                match self.config.policy {
                    DegeneratePolicy::Report => {
                        return Err(PanelError::DegenerateInfluence {
                            min_separation: self.config.min_separation,
                            speed,
                        });
                    }
                    DegeneratePolicy::Clamp => {
                        log::warn!(
                            "clamping induced speed {:.3e} at separation {:.3e}",
                            speed,
                            r
                        );
                        if speed > self.config.max_speed {
                            let s = self.config.max_speed / speed;
                            u += du * s;
                            v += dv * s;
                            continue;
                        }
                    }
                }
            }
            u += du;
            v += dv;
        }
        Ok((u, v))
    }

    /// Velocity induced at (x, y) by the whole wake
    pub fn induced_velocity(&self, x: f64, y: f64) -> Result<(f64, f64), PanelError> {
        self.induced_by_others(&self.particles, usize::MAX, x, y)
    }

    /// Body field plus wake-induced velocity at (x, y)
    pub fn combined_velocity(&self, x: f64, y: f64) -> Result<(f64, f64), PanelError> {
        let (ub, vb) = self.solution.velocity_at(x, y)?;
        let (uw, vw) = self.induced_velocity(x, y)?;
        Ok((ub + uw, vb + vw))
    }

    /// Combined velocity sampled over a set of points
    pub fn sample_combined(&self, points: &[[f64; 2]]) -> Result<Vec<(f64, f64)>, PanelError> {
        points
            .iter()
            .map(|p| self.combined_velocity(p[0], p[1]))
            .collect()
    }

    /// Advance the wake by one time step
    ///
    /// Advection uses the particle positions at the start of the step, so the
    /// outcome does not depend on update order. The newly seeded particle
    /// does not influence this step's advection.
    pub fn step(&mut self) -> Result<(), PanelError> {
        let snapshot = self.particles.clone();
        let fs = self.solution.free_stream;

        let mut velocities = Vec::with_capacity(snapshot.len());
        for (k, p) in snapshot.iter().enumerate() {
            velocities.push(self.induced_by_others(&snapshot, k, p.x, p.y)?);
        }

        for (particle, (ui, vi)) in self.particles.iter_mut().zip(velocities) {
            particle.x += (ui + fs.u_inf) * self.config.dt;
            particle.y += (vi + fs.v_inf) * self.config.dt;
        }

        if let Some(omega) = self.schedule.strength_at(self.time) {
            self.seed(omega);
        }

        self.time += self.config.dt;
        self.steps += 1;
        log::debug!(
            "wake step {}: t = {:.3}, {} particles",
            self.steps,
            self.time,
            self.particles.len()
        );
        Ok(())
    }

    /// Insert a particle of strength `omega` at the trailing edge
    pub fn seed(&mut self, omega: f64) {
        let [x, y] = self.solution.trailing_edge;
        self.seed_at(FreeVortex {
            x,
            y,
            omega,
            t: self.time,
        });
    }

    /// Insert a particle at an explicit position
    pub fn seed_at(&mut self, particle: FreeVortex) {
        self.particles.push(particle);
    }

    /// Run `n` steps
    pub fn run(&mut self, n: usize) -> Result<(), PanelError> {
        for _ in 0..n {
            self.step()?;
        }
        Ok(())
    }
}

//! High-level panel-method API
//!
//! `PanelProblem` bundles the panelized body with the free stream,
//! `PanelSolver` configures and runs a solve, and `PanelSolution` holds the
//! solved singularity strengths together with derived surface quantities.
//! A solve never mutates the problem, so re-solving the same geometry under
//! a different free stream is safe.
//!
//! # Example
//!
//! ```ignore
//! use panel2d::{FreeStream, PanelProblem, PanelSolver};
//!
//! let problem = PanelProblem::circle(1.0, 40, FreeStream::new(1.0, 0.0))?;
//! let solution = PanelSolver::new().solve(&problem)?;
//! let (u, v) = solution.velocity_at(2.0, 0.5)?;
//! let cl = solution.lift_coefficient();
//! ```

use ndarray::Array1;

use crate::core::assembly::{build_rhs, build_system, influence_matrices};
use crate::core::error::PanelError;
use crate::core::geometry::{generators, panelize, trailing_edge_midpoint, MIN_PANELS};
use crate::core::integration::KernelScheme;
use crate::core::postprocess;
use crate::core::solver::{lu_solve_with_threshold, DEFAULT_SINGULAR_THRESHOLD};
use crate::core::types::{FreeStream, Panel};

/// Definition of a panel-method problem: geometry plus onset flow
#[derive(Debug, Clone)]
pub struct PanelProblem {
    /// Ordered panel set tracing the body counter-clockwise
    pub panels: Vec<Panel>,
    /// Uniform onset flow
    pub free_stream: FreeStream,
    /// Wake seed point (midpoint of the first/last boundary vertex)
    pub trailing_edge: [f64; 2],
}

impl PanelProblem {
    /// Build a problem from an ordered, closed boundary vertex sequence
    pub fn from_vertices(
        vertices: &[[f64; 2]],
        free_stream: FreeStream,
    ) -> Result<Self, PanelError> {
        Ok(Self {
            panels: panelize(vertices)?,
            free_stream,
            trailing_edge: trailing_edge_midpoint(vertices),
        })
    }

    /// Flow past a circle of given radius
    pub fn circle(
        radius: f64,
        n_panels: usize,
        free_stream: FreeStream,
    ) -> Result<Self, PanelError> {
        Self::from_vertices(&generators::circle(radius, n_panels), free_stream)
    }

    /// Flow past a NACA 4-digit profile with `n_side` panels per surface
    pub fn naca4(
        code: &str,
        n_side: usize,
        free_stream: FreeStream,
    ) -> Result<Self, PanelError> {
        Self::from_vertices(&generators::naca4(code, n_side)?, free_stream)
    }

    /// Number of panels
    pub fn num_panels(&self) -> usize {
        self.panels.len()
    }
}

/// Panel-method solver configuration
#[derive(Debug, Clone)]
pub struct PanelSolver {
    /// Kernel evaluation scheme for influence and field integrals
    pub scheme: KernelScheme,
    /// Relative pivot threshold for singularity detection
    pub singular_threshold: f64,
}

impl Default for PanelSolver {
    fn default() -> Self {
        Self {
            scheme: KernelScheme::default(),
            singular_threshold: DEFAULT_SINGULAR_THRESHOLD,
        }
    }
}

impl PanelSolver {
    /// Create a solver with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the kernel evaluation scheme
    pub fn with_kernel_scheme(mut self, scheme: KernelScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Set the relative pivot threshold for singularity detection
    pub fn with_singular_threshold(mut self, threshold: f64) -> Self {
        self.singular_threshold = threshold;
        self
    }

    /// Solve the augmented source + circulation system
    ///
    /// Returns an immutable [`PanelSolution`]; the problem itself is left
    /// untouched.
    pub fn solve(&self, problem: &PanelProblem) -> Result<PanelSolution, PanelError> {
        let panels = &problem.panels;
        let n = panels.len();
        // Public fields allow hand-built problems that bypass panelize
        if n < MIN_PANELS {
            return Err(PanelError::TooFewPanels {
                minimum: MIN_PANELS,
                got: n,
            });
        }
        log::info!("solving panel system: {} panels", n);

        let matrices = influence_matrices(panels, self.scheme)?;
        let a = build_system(&matrices);
        let b = build_rhs(panels, &problem.free_stream);

        let strengths = lu_solve_with_threshold(&a, &b, self.singular_threshold)?;

        let sigma = strengths.slice(ndarray::s![0..n]).to_owned();
        let gamma = strengths[n];

        let vt = postprocess::surface_velocities(
            panels,
            &matrices,
            &sigma,
            gamma,
            &problem.free_stream,
        );
        let cp = postprocess::pressure_coefficients(&vt, &problem.free_stream);

        log::info!(
            "panel solve complete: gamma = {:.6e}, max |sigma| = {:.6e}",
            gamma,
            sigma.iter().fold(0.0f64, |acc, s| acc.max(s.abs()))
        );

        Ok(PanelSolution {
            panels: panels.clone(),
            free_stream: problem.free_stream,
            trailing_edge: problem.trailing_edge,
            sigma,
            gamma,
            vt,
            cp,
            scheme: self.scheme,
        })
    }
}

/// Solved panel-method state
///
/// Separates solved strengths from the immutable panel geometry so partial
/// updates can never be observed.
#[derive(Debug, Clone)]
pub struct PanelSolution {
    /// Panel geometry the solve was performed on
    pub panels: Vec<Panel>,
    /// Free stream the solve was performed for
    pub free_stream: FreeStream,
    /// Wake seed point
    pub trailing_edge: [f64; 2],
    /// Per-panel source strengths σ
    pub sigma: Array1<f64>,
    /// Single circulation strength γ shared by all panels
    pub gamma: f64,
    /// Tangential velocity at each control point
    pub vt: Array1<f64>,
    /// Pressure coefficient at each control point
    pub cp: Array1<f64>,
    /// Kernel scheme used, reused for field evaluation
    pub scheme: KernelScheme,
}

impl PanelSolution {
    /// Number of panels
    pub fn num_panels(&self) -> usize {
        self.panels.len()
    }

    /// Velocity (u, v) at an arbitrary point
    pub fn velocity_at(&self, x: f64, y: f64) -> Result<(f64, f64), PanelError> {
        postprocess::velocity_at(
            &self.panels,
            &self.sigma,
            self.gamma,
            &self.free_stream,
            x,
            y,
            self.scheme,
        )
    }

    /// Velocity sampled over a caller-supplied mesh of points
    pub fn sample_field(&self, points: &[[f64; 2]]) -> Result<Vec<(f64, f64)>, PanelError> {
        postprocess::sample_field(
            &self.panels,
            &self.sigma,
            self.gamma,
            &self.free_stream,
            points,
            self.scheme,
        )
    }

    /// Lift coefficient from the solved circulation
    pub fn lift_coefficient(&self) -> f64 {
        postprocess::lift_coefficient(&self.panels, self.gamma, &self.free_stream)
    }

    /// Net source outflow Σ σⱼ·Lⱼ (≈ 0 for a well-posed closed body)
    pub fn net_source_strength(&self) -> f64 {
        self.panels
            .iter()
            .zip(self.sigma.iter())
            .map(|(p, s)| p.length * s)
            .sum()
    }
}

//! # panel2d: 2-D Potential-Flow Panel Method
//!
//! Source/vortex panel-method solver for 2-D potential flow around closed
//! bodies (airfoil profiles, circles), with a discrete free-vortex wake
//! extension for approximate unsteady shedding.
//!
//! ## Features
//!
//! - Analytic (closed-form) panel influence kernels, with an adaptive
//!   Gauss-Legendre quadrature alternative
//! - Augmented source + circulation linear system with the Kutta condition
//! - Velocity-field reconstruction at arbitrary points
//! - Explicit free-vortex wake advection seeded at the trailing edge
//! - Parallel matrix assembly and field sampling with Rayon
//! - JSON output for visualization

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::too_many_arguments)] // Scientific code often has many parameters

pub mod core;

// Re-exports
pub use crate::core::error::PanelError;
pub use crate::core::geometry::generators;
pub use crate::core::integration::KernelScheme;
pub use crate::core::panel_solver::{PanelProblem, PanelSolution, PanelSolver};
pub use crate::core::types::{FreeStream, Panel};
pub use crate::core::wake::{
    DegeneratePolicy, FreeVortex, SheddingSchedule, WakeConfig, WakeSimulation,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Core panel-method solver
//!
//! ## Architecture
//!
//! - `types`: Fundamental data structures (Panel, FreeStream)
//! - `error`: Error taxonomy for the whole crate
//! - `elements`: Closed-form elementary flow primitives
//! - `geometry`: Boundary panelization and parametric generators
//! - `integration`: Panel kernel line integrals (closed form / quadrature)
//! - `assembly`: Influence matrices and the augmented linear system
//! - `solver`: Dense LU solve with singularity detection
//! - `postprocess`: Field evaluation, surface velocities, lift coefficient
//! - `panel_solver`: High-level API for solving panel problems
//! - `wake`: Discrete free-vortex wake advection
//! - `io`: JSON snapshot export
//! - `parallel`: Portable parallel iteration (rayon or sequential)

pub mod assembly;
pub mod elements;
pub mod error;
pub mod geometry;
pub mod integration;
pub mod io;
pub mod panel_solver;
pub mod parallel;
pub mod postprocess;
pub mod solver;
pub mod types;
pub mod wake;

// Re-exports for convenience
pub use self::error::PanelError;
pub use self::integration::KernelScheme;
pub use self::panel_solver::{PanelProblem, PanelSolution, PanelSolver};
pub use self::types::{FreeStream, Panel};

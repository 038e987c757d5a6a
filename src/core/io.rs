//! JSON snapshots of solved and time-marched state

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::panel_solver::PanelSolution;
use crate::core::types::{FreeStream, Panel};
use crate::core::wake::{FreeVortex, WakeSimulation};

/// Serializable snapshot of a solved panel problem
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionSnapshot {
    /// Panel geometry
    pub panels: Vec<Panel>,
    /// Onset flow
    pub free_stream: FreeStream,
    /// Per-panel source strengths
    pub sigma: Vec<f64>,
    /// Shared circulation strength
    pub gamma: f64,
    /// Tangential velocity per control point
    pub vt: Vec<f64>,
    /// Pressure coefficient per control point
    pub cp: Vec<f64>,
    /// Lift coefficient
    pub cl: f64,
}

impl SolutionSnapshot {
    /// Capture a solution's surface state
    pub fn from_solution(solution: &PanelSolution) -> Self {
        Self {
            panels: solution.panels.clone(),
            free_stream: solution.free_stream,
            sigma: solution.sigma.to_vec(),
            gamma: solution.gamma,
            vt: solution.vt.to_vec(),
            cp: solution.cp.to_vec(),
            cl: solution.lift_coefficient(),
        }
    }

    /// Write the snapshot as pretty-printed JSON
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        write_json(path, self)
    }
}

/// Serializable snapshot of a wake state at one instant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WakeFrame {
    /// Simulation time of the frame
    pub time: f64,
    /// Steps taken to reach the frame
    pub steps: usize,
    /// Particles in the wake, oldest first
    pub particles: Vec<FreeVortex>,
}

impl WakeFrame {
    /// Capture the wake's current particle state
    pub fn from_simulation(wake: &WakeSimulation) -> Self {
        Self {
            time: wake.time(),
            steps: wake.steps_taken(),
            particles: wake.particles().to_vec(),
        }
    }

    /// Write the frame as pretty-printed JSON
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        write_json(path, self)
    }
}

fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    Ok(())
}

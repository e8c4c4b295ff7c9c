//! Per-cell combustion state machine
//!
//! Each grid position owns one [`Cell`]: a small state machine driven by the
//! propagation engine. Cells are created once at grid construction and never
//! destroyed; only `state`, `arrival_time` and `burn_time` change afterwards.

use serde::{Deserialize, Serialize};

use crate::core_types::TerrainSample;

/// Combustion state of a single cell.
///
/// Transitions are strictly forward: `Unburned -> Burning -> Burned`.
/// A cell never reverts, and a cell with zero fuel never leaves `Unburned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// Fuel intact, fire has not arrived
    Unburned,
    /// Actively burning for exactly one tick
    Burning,
    /// Fuel consumed (terminal)
    Burned,
}

/// Dynamic combustion state for one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Current combustion state
    pub state: CellState,
    /// Earliest predicted simulation time at which fire reaches this cell.
    /// Starts at infinity and only ever decreases (min-aggregation over all
    /// burning neighbors proposing an arrival).
    pub arrival_time: f32,
    /// Simulation time at which burning began, if it has
    pub burn_time: Option<f32>,
    /// Static terrain attributes, copied from the terrain grid at init
    pub terrain: TerrainSample,
}

impl Cell {
    /// Create an unburned cell from its terrain sample.
    pub fn new(terrain: TerrainSample) -> Self {
        Cell {
            state: CellState::Unburned,
            arrival_time: f32::INFINITY,
            burn_time: None,
            terrain,
        }
    }

    /// Whether this cell can ever ignite (fuel present and not yet consumed).
    #[inline]
    pub fn is_combustible(&self) -> bool {
        self.terrain.is_combustible()
    }
}

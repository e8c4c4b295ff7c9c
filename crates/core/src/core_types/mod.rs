//! Core value types shared across the engine

mod cell;
mod terrain_sample;

pub use cell::{Cell, CellState};
pub use terrain_sample::TerrainSample;

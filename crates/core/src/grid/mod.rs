//! Terrain raster and grid topology
//!
//! The terrain grid owns the five co-registered raster layers the terrain
//! loader produces; topology provides the 8-connected Moore neighborhood
//! with boundary clipping used by the propagation engine.

pub mod terrain;
pub mod topology;

pub use terrain::{TerrainError, TerrainGrid};
pub use topology::{bearing_degrees, moore_neighbors, neighbor_distance, MOORE_OFFSETS};

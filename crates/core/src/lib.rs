//! Fire Spread Simulation Core
//!
//! A grid-based wildfire spread engine. Each cell of a terrain raster is a
//! combustion state machine (`Unburned -> Burning -> Burned`) whose ignition
//! timing comes from the Rothermel (1972) surface-fire rate-of-spread model
//! with Albini (1976) wind and slope corrections.
//!
//! The engine owns the grid, clock and parameters; terrain loading (`GeoTIFF`
//! decoding, resampling), rendering and the driver loop are collaborator
//! concerns that talk to it through [`TerrainGrid`], the query API and
//! [`FireSimulation::step`].
//!
//! ```
//! use fire_spread_core::{FireParameters, FireSimulation, TerrainGrid};
//!
//! let terrain = TerrainGrid::uniform(9, 9, 0.2, 1.0).unwrap();
//! let mut sim = FireSimulation::new(&terrain, FireParameters::default()).unwrap();
//! sim.ignite(4, 4);
//! while !sim.is_quiescent() {
//!     let summary = sim.step();
//!     assert_eq!(summary.unburned + summary.burning + summary.burned, 81);
//! }
//! ```

// Core value types
pub mod core_types;

// Terrain raster and adjacency
pub mod grid;

// Rothermel/Albini spread physics
pub mod physics;

// Propagation engine
pub mod simulation;

// Re-export the main types
pub use core_types::{Cell, CellState, TerrainSample};
pub use grid::{TerrainError, TerrainGrid};
pub use physics::{FireParameters, ParameterError};
pub use simulation::{ConfigError, FireSimulation, SpreadMode, StateCounts, TickSummary};

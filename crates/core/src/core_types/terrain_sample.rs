//! Static per-cell terrain attributes
//!
//! One sample per grid position, read from the five co-registered raster
//! layers produced by the terrain loader. Samples are immutable after load;
//! the dynamic combustion state lives in [`crate::core_types::Cell`].

use serde::{Deserialize, Serialize};

/// Static physical attributes of one grid position.
///
/// Units follow the LANDFIRE-style landscape layers the loader produces:
/// elevation in meters, slope and aspect in degrees, fuel in fuel-model
/// units (0 = incombustible), canopy cover as a 0-1 fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainSample {
    /// Elevation above sea level (m)
    pub elevation: f32,
    /// Terrain slope angle (degrees)
    pub slope: f32,
    /// Slope aspect (degrees, 0 = North, clockwise)
    pub aspect: f32,
    /// Fuel load in fuel-model units; 0 means the cell can never burn
    pub fuel: f32,
    /// Canopy cover fraction (0-1)
    pub canopy_cover: f32,
}

impl TerrainSample {
    /// Whether this position carries enough fuel to sustain combustion.
    #[inline]
    pub fn is_combustible(&self) -> bool {
        self.fuel > 0.0
    }
}

impl Default for TerrainSample {
    fn default() -> Self {
        TerrainSample {
            elevation: 0.0,
            slope: 0.0,
            aspect: 0.0,
            fuel: 0.0,
            canopy_cover: 0.0,
        }
    }
}

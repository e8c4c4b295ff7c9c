//! Terrain raster holding the five co-registered landscape layers
//!
//! The loader hands the engine five 2D fields of identical shape (elevation,
//! slope, aspect, fuel, canopy cover) in row-major order. All shape and range
//! validation happens here, at construction time; a constructed grid is
//! immutable and every later lookup is infallible.

use serde::{Deserialize, Serialize};

use crate::core_types::TerrainSample;

/// Construction-time terrain validation failures.
#[derive(Debug, Clone, PartialEq)]
pub enum TerrainError {
    /// Grid has zero rows or zero columns
    EmptyGrid,
    /// A layer's length does not match `rows * cols`
    ShapeMismatch {
        /// Name of the offending layer
        layer: &'static str,
        /// Expected element count (`rows * cols`)
        expected: usize,
        /// Actual element count supplied
        actual: usize,
    },
    /// Fuel value is negative or not finite
    InvalidFuel {
        /// Grid row of the offending value
        row: usize,
        /// Grid column of the offending value
        col: usize,
        /// The rejected value
        value: f32,
    },
    /// Cell size is zero, negative, or not finite
    InvalidCellSize(f32),
}

impl std::fmt::Display for TerrainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerrainError::EmptyGrid => write!(f, "terrain grid must have nonzero dimensions"),
            TerrainError::ShapeMismatch {
                layer,
                expected,
                actual,
            } => write!(
                f,
                "layer '{layer}' has {actual} samples, expected {expected}"
            ),
            TerrainError::InvalidFuel { row, col, value } => {
                write!(f, "invalid fuel value {value} at ({row}, {col})")
            }
            TerrainError::InvalidCellSize(size) => {
                write!(f, "cell size must be positive and finite, got {size}")
            }
        }
    }
}

impl std::error::Error for TerrainError {}

/// Read-only terrain raster: five layers of identical shape plus the grid
/// spacing in meters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainGrid {
    rows: usize,
    cols: usize,
    /// Grid spacing in meters per cell edge
    cell_size: f32,
    /// Elevation layer (m), row-major `[row * cols + col]`
    elevation: Vec<f32>,
    /// Slope layer (degrees)
    slope: Vec<f32>,
    /// Aspect layer (degrees, 0 = North)
    aspect: Vec<f32>,
    /// Fuel layer (fuel-model units, 0 = incombustible)
    fuel: Vec<f32>,
    /// Canopy cover layer (fraction 0-1)
    canopy_cover: Vec<f32>,
}

impl TerrainGrid {
    /// Build a terrain grid from raw row-major layers.
    ///
    /// # Errors
    /// Returns [`TerrainError`] when dimensions are zero, any layer length
    /// differs from `rows * cols`, any fuel value is negative or non-finite,
    /// or `cell_size` is not a positive finite number.
    #[expect(
        clippy::too_many_arguments,
        reason = "Five co-registered layers plus shape and spacing are the loader's natural output"
    )]
    pub fn from_layers(
        rows: usize,
        cols: usize,
        elevation: Vec<f32>,
        slope: Vec<f32>,
        aspect: Vec<f32>,
        fuel: Vec<f32>,
        canopy_cover: Vec<f32>,
        cell_size: f32,
    ) -> Result<Self, TerrainError> {
        if rows == 0 || cols == 0 {
            return Err(TerrainError::EmptyGrid);
        }
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(TerrainError::InvalidCellSize(cell_size));
        }

        let expected = rows * cols;
        let layers: [(&'static str, &Vec<f32>); 5] = [
            ("elevation", &elevation),
            ("slope", &slope),
            ("aspect", &aspect),
            ("fuel", &fuel),
            ("canopy_cover", &canopy_cover),
        ];
        for (layer, data) in layers {
            if data.len() != expected {
                return Err(TerrainError::ShapeMismatch {
                    layer,
                    expected,
                    actual: data.len(),
                });
            }
        }

        for (idx, &value) in fuel.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(TerrainError::InvalidFuel {
                    row: idx / cols,
                    col: idx % cols,
                    value,
                });
            }
        }

        Ok(TerrainGrid {
            rows,
            cols,
            cell_size,
            elevation,
            slope,
            aspect,
            fuel,
            canopy_cover,
        })
    }

    /// Flat, zero-slope terrain with uniform fuel everywhere.
    ///
    /// Primary constructor for tests and demos, the counterpart of a
    /// resampled single-fuel landscape raster.
    ///
    /// # Errors
    /// Returns [`TerrainError`] for zero dimensions, negative fuel, or a
    /// non-positive cell size.
    pub fn uniform(
        rows: usize,
        cols: usize,
        fuel: f32,
        cell_size: f32,
    ) -> Result<Self, TerrainError> {
        let n = rows * cols;
        TerrainGrid::from_layers(
            rows,
            cols,
            vec![0.0; n],
            vec![0.0; n],
            vec![0.0; n],
            vec![fuel; n],
            vec![0.0; n],
            cell_size,
        )
    }

    /// Flat index of `(row, col)`.
    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Terrain sample at `(row, col)`, or `None` outside the grid.
    pub fn sample(&self, row: usize, col: usize) -> Option<TerrainSample> {
        if row < self.rows && col < self.cols {
            let idx = self.index(row, col);
            Some(TerrainSample {
                elevation: self.elevation[idx],
                slope: self.slope[idx],
                aspect: self.aspect[idx],
                fuel: self.fuel[idx],
                canopy_cover: self.canopy_cover[idx],
            })
        } else {
            None
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid spacing in meters.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Fuel value at `(row, col)`, or `None` outside the grid.
    pub fn fuel_at(&self, row: usize, col: usize) -> Option<f32> {
        if row < self.rows && col < self.cols {
            Some(self.fuel[self.index(row, col)])
        } else {
            None
        }
    }
}

//! Fire spread physics
//!
//! Rothermel (1972) surface-fire rate of spread with Albini (1976) wind and
//! slope corrections, reduced to the directional per-neighbor rate the
//! propagation engine needs.

pub mod rothermel;

pub use rothermel::{
    direction_factor, directional_spread_rate, packing_ratio, slope_factor, wind_factor,
    FireParameters, ParameterError,
};

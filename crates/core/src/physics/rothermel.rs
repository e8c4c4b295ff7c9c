//! Rothermel surface-fire spread model (1972) with Albini corrections (1976)
//!
//! Computes the directional rate of spread from a burning cell toward one
//! neighbor. The model is empirical: reaction intensity, propagating flux and
//! heat-sink terms are fixed fuel-bed constants, scaled per target cell by
//! its fuel load and corrected for wind, slope, and spread direction.
//!
//! # Formula
//! ```text
//! R = f_dir × I_R' × ξ × (1 + Φ_w + Φ_s) / (ρ_b × ε × Q_ig)
//! ```
//!
//! Where:
//! - **`f_dir`** = directional factor, cos(bearing − wind direction), floored
//! - **`I_R'`** = reaction intensity scaled by the target's fuel load
//! - **ξ** = propagating flux ratio
//! - **`Φ_w`** = Albini wind factor
//! - **`Φ_s`** = Albini slope factor (target cell's slope)
//! - **`ρ_b`** = fuel bed bulk density
//! - **ε** = effective heating number
//! - **`Q_ig`** = heat of pre-ignition
//!
//! # References
//! - Rothermel, R.C. (1972). "A mathematical model for predicting fire spread
//!   in wildland fuels." USDA Forest Service Research Paper INT-115.
//! - Albini, F.A. (1976). "Estimating wildfire behavior and effects."
//!   USDA Forest Service General Technical Report INT-30.

use serde::{Deserialize, Serialize};

use crate::core_types::TerrainSample;

/// Invalid fire parameter values, rejected at construction time.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// Fuel particle density must be positive (it divides the packing ratio)
    NonPositiveFuelDensity(f32),
    /// Reference fuel load must be positive (it scales reaction intensity)
    NonPositiveReferenceLoad(f32),
    /// Wind speed cannot be negative
    NegativeWindSpeed(f32),
    /// Moisture content cannot be negative
    NegativeMoisture(f32),
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterError::NonPositiveFuelDensity(v) => {
                write!(f, "fuel particle density must be positive, got {v}")
            }
            ParameterError::NonPositiveReferenceLoad(v) => {
                write!(f, "reference fuel load must be positive, got {v}")
            }
            ParameterError::NegativeWindSpeed(v) => {
                write!(f, "wind speed cannot be negative, got {v}")
            }
            ParameterError::NegativeMoisture(v) => {
                write!(f, "moisture content cannot be negative, got {v}")
            }
        }
    }
}

impl std::error::Error for ParameterError {}

/// Global fire and fuel-bed parameters, shared by every spread calculation.
///
/// Units follow the original model: imperial fuel-bed quantities
/// (lb/ft³, Btu/lb, ft/min) with angles in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FireParameters {
    /// Fuel particle density `ρ_p` (lb/ft³)
    pub fuel_density: f32,
    /// Fuel heat content h (Btu/lb)
    pub heat_content: f32,
    /// Midflame wind speed U (ft/min)
    pub wind_speed: f32,
    /// Wind direction (degrees, 0 = North, clockwise; direction the wind
    /// blows *toward*)
    pub wind_direction: f32,
    /// Dead fuel moisture content (fraction)
    pub moisture_content: f32,
    /// Fuel load at which the reaction intensity constant applies; the
    /// target cell's load scales the reaction intensity relative to this
    pub reference_fuel_load: f32,
}

impl FireParameters {
    /// Propagating flux ratio ξ (empirical)
    pub const XI: f32 = 0.3;
    /// Effective heating number ε
    pub const EPSILON: f32 = 0.9;
    /// Heat of pre-ignition `Q_ig` (Btu/lb)
    pub const HEAT_OF_PREIGNITION: f32 = 250.0;
    /// Reaction intensity `I_R` at the reference fuel load (Btu/ft²/min)
    // TODO: derive I_R from heat content and a moisture damping term instead
    // of holding it constant; heat_content/moisture_content are carried here
    // for that refinement.
    pub const REACTION_INTENSITY: f32 = 100.0;
    /// Fuel bed bulk density `ρ_b` (lb/ft³)
    pub const BULK_DENSITY: f32 = 0.02;
    /// Albini wind factor constant C
    pub const WIND_C: f32 = 0.045;
    /// Albini wind factor exponent B
    pub const WIND_B: f32 = 2.0;
    /// Albini packing-ratio exponent E
    pub const WIND_E: f32 = 0.715;
    /// Minimum directional factor: spread never fully stalls against the wind
    pub const DIRECTION_FLOOR: f32 = 0.1;

    /// Check parameter ranges.
    ///
    /// # Errors
    /// Returns [`ParameterError`] for a non-positive fuel density or
    /// reference load, or a negative wind speed or moisture content.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(self.fuel_density.is_finite() && self.fuel_density > 0.0) {
            return Err(ParameterError::NonPositiveFuelDensity(self.fuel_density));
        }
        if !(self.reference_fuel_load.is_finite() && self.reference_fuel_load > 0.0) {
            return Err(ParameterError::NonPositiveReferenceLoad(
                self.reference_fuel_load,
            ));
        }
        if self.wind_speed < 0.0 {
            return Err(ParameterError::NegativeWindSpeed(self.wind_speed));
        }
        if self.moisture_content < 0.0 {
            return Err(ParameterError::NegativeMoisture(self.moisture_content));
        }
        Ok(())
    }
}

impl Default for FireParameters {
    /// Calm conditions over an oven-dry-wood fuel bed.
    fn default() -> Self {
        FireParameters {
            fuel_density: 32.0,
            heat_content: 8000.0,
            wind_speed: 0.0,
            wind_direction: 0.0,
            moisture_content: 0.05,
            reference_fuel_load: 1.0,
        }
    }
}

/// Actual and optimal packing ratios of the fuel bed.
///
/// `β = ρ_b / ρ_p`, `β_op = 3.348 × β^0.8189`. Returns `(0, 0)` for a
/// degenerate particle density instead of dividing by zero (a validated
/// simulation never reaches this).
pub fn packing_ratio(params: &FireParameters) -> (f32, f32) {
    if params.fuel_density <= 0.0 {
        return (0.0, 0.0);
    }
    let beta = FireParameters::BULK_DENSITY / params.fuel_density;
    let beta_op = 3.348 * beta.powf(0.8189);
    (beta, beta_op)
}

/// Albini wind factor `Φ_w = C × U^B × (β/β_op)^(-E)`.
///
/// Zero for calm air and for a degenerate packing ratio.
pub fn wind_factor(params: &FireParameters, beta: f32, beta_op: f32) -> f32 {
    if params.wind_speed < 1e-3 || beta <= 0.0 || beta_op <= 0.0 {
        return 0.0;
    }
    FireParameters::WIND_C
        * params.wind_speed.powf(FireParameters::WIND_B)
        * (beta / beta_op).powf(-FireParameters::WIND_E)
}

/// Albini slope factor `Φ_s = 5.275 × β^(-0.3) × tan²(θ)` for the *target*
/// cell's slope angle in degrees.
///
/// Zero on flat ground and for a degenerate packing ratio.
pub fn slope_factor(beta: f32, slope_deg: f32) -> f32 {
    if slope_deg <= 0.0 || beta <= 0.0 {
        return 0.0;
    }
    let tan_slope = slope_deg.to_radians().tan();
    5.275 * beta.powf(-0.3) * tan_slope * tan_slope
}

/// Directional factor: alignment between spread direction and wind.
///
/// `cos(bearing − wind direction)` floored at [`FireParameters::DIRECTION_FLOOR`]
/// so a fire still creeps against the wind. With no wind there is no
/// preferred direction and the factor is 1 for every bearing.
pub fn direction_factor(params: &FireParameters, bearing_deg: f32) -> f32 {
    if params.wind_speed < 1e-3 {
        return 1.0;
    }
    (bearing_deg - params.wind_direction)
        .to_radians()
        .cos()
        .max(FireParameters::DIRECTION_FLOOR)
}

/// Directional rate of spread toward a target cell (ft/min).
///
/// Pure function of the target's terrain, the compass bearing from the
/// burning source toward it, and the global fire parameters. Returns 0 when
/// the target carries no fuel (fire never arrives) and never returns a
/// negative rate; degenerate inputs fall back to 0 rather than faulting.
pub fn directional_spread_rate(
    target: &TerrainSample,
    bearing_deg: f32,
    params: &FireParameters,
) -> f32 {
    if target.fuel <= 0.0 {
        return 0.0;
    }

    let (beta, beta_op) = packing_ratio(params);
    if beta <= 0.0 {
        return 0.0;
    }

    let phi_w = wind_factor(params, beta, beta_op);
    let phi_s = slope_factor(beta, target.slope);
    let f_dir = direction_factor(params, bearing_deg);

    // Reaction intensity scaled by the target's fuel load
    let reaction_intensity =
        FireParameters::REACTION_INTENSITY * target.fuel / params.reference_fuel_load;

    let numerator = f_dir * reaction_intensity * FireParameters::XI * (1.0 + phi_w + phi_s);
    let denominator = FireParameters::BULK_DENSITY
        * FireParameters::EPSILON
        * FireParameters::HEAT_OF_PREIGNITION;

    (numerator / denominator).max(0.0)
}

//! Input record for a single flight leg.

use serde::{Deserialize, Serialize};

use crate::wind::{self, NoSolution, WindTriangleResult};

/// The five scalar inputs of a leg calculation.
///
/// The solver only assumes finite values and a positive TAS; acceptance
/// ranges for a front end live in [`crate::limits`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegInputs {
    /// Desired course over ground in degrees.
    pub track_deg: f64,
    /// True airspeed in knots.
    pub tas_kt: f64,
    /// Direction the wind is blowing from, in degrees.
    pub wind_dir_deg: f64,
    /// Wind speed in knots.
    pub wind_speed_kt: f64,
    /// Leg length in nautical miles.
    pub distance_nm: f64,
}

impl LegInputs {
    /// Solve the wind triangle for these inputs.
    pub fn solve(&self) -> Result<WindTriangleResult, NoSolution> {
        wind::solve(
            self.track_deg,
            self.tas_kt,
            self.wind_dir_deg,
            self.wind_speed_kt,
            self.distance_nm,
        )
    }
}

//! Acceptance ranges for leg inputs.
//!
//! The solver in [`crate::wind`] only requires finite values with a
//! positive TAS; everything stricter is policy owned by the caller. This
//! module holds that policy so every front end rejects the same inputs
//! with the same messages.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::LegInputs;

/// An input outside the accepted envelope.
///
/// Carries the user-facing field label so the message reads the way the
/// form shows it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LimitError {
    /// The value is NaN or infinite.
    #[error("{field} must be a valid number.")]
    NotFinite { field: &'static str },
    /// The value is finite but outside the closed range.
    #[error("{field} must be between {min} and {max}.")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
}

/// Closed acceptance range for one input field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    fn check(&self, field: &'static str, value: f64) -> Result<(), LimitError> {
        if !value.is_finite() {
            return Err(LimitError::NotFinite { field });
        }
        if value < self.min || value > self.max {
            return Err(LimitError::OutOfRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Per-field acceptance ranges for a leg calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputLimits {
    /// Accepted track range in degrees
    pub track_deg: FieldRange,
    /// Accepted true airspeed range in knots
    pub tas_kt: FieldRange,
    /// Accepted wind direction range in degrees
    pub wind_dir_deg: FieldRange,
    /// Accepted wind speed range in knots
    pub wind_speed_kt: FieldRange,
    /// Accepted distance range in nautical miles
    pub distance_nm: FieldRange,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            track_deg: FieldRange { min: 0.0, max: 360.0 },
            tas_kt: FieldRange { min: 0.1, max: 10_000.0 },
            wind_dir_deg: FieldRange { min: 0.0, max: 360.0 },
            wind_speed_kt: FieldRange { min: 0.0, max: 10_000.0 },
            distance_nm: FieldRange { min: 0.1, max: 100_000.0 },
        }
    }
}

impl InputLimits {
    /// Check every field, reporting the first violation in form order.
    pub fn check(&self, inputs: &LegInputs) -> Result<(), LimitError> {
        self.track_deg.check("Track", inputs.track_deg)?;
        self.tas_kt.check("TAS", inputs.tas_kt)?;
        self.wind_dir_deg.check("Wind Direction", inputs.wind_dir_deg)?;
        self.wind_speed_kt.check("Wind Speed", inputs.wind_speed_kt)?;
        self.distance_nm.check("Distance", inputs.distance_nm)?;
        Ok(())
    }
}

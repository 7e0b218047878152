//! Wind-triangle math for a single flight leg.

use std::time::Duration;

use thiserror::Error;

/// Geometry for which no heading can hold the desired track.
///
/// Both kinds surface to the pilot as one generic "no solution" message;
/// they stay separate variants so diagnostics and tests can tell them
/// apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NoSolution {
    /// The crosswind component exceeds true airspeed.
    #[error("wind too strong to maintain track")]
    WindExceedsAirspeed,
    /// The headwind component cancels all progress along the track.
    #[error("no forward progress possible along track")]
    NoForwardProgress,
}

/// Solved navigation parameters for one leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindTriangleResult {
    /// Wind correction angle in degrees; positive corrects right of track.
    pub wca_deg: f64,
    /// True heading to fly, in [0, 360).
    pub heading_deg: f64,
    /// Speed over ground in knots; always positive for a returned result.
    pub ground_speed_kt: f64,
    /// Time to fly the leg at the computed ground speed. Saturates at
    /// `Duration::MAX` when a vanishing ground speed pushes it out of range.
    pub leg_time: Duration,
}

/// Solve the wind triangle for a leg.
///
/// Given the desired track, true airspeed, wind (direction the wind blows
/// from, and speed), and leg distance, computes the wind correction angle,
/// the heading to fly, the ground speed, and the leg time. Angles are in
/// degrees, speeds in knots, distance in nautical miles.
///
/// The caller must supply finite values with `tas_kt > 0`; acceptance
/// ranges beyond that are front-end policy (see [`crate::limits`]).
///
/// # Errors
/// [`NoSolution::WindExceedsAirspeed`] when the crosswind component is
/// stronger than the airspeed, and [`NoSolution::NoForwardProgress`] when
/// the headwind component reduces ground speed to zero or below.
pub fn solve(
    track_deg: f64,
    tas_kt: f64,
    wind_dir_deg: f64,
    wind_speed_kt: f64,
    distance_nm: f64,
) -> Result<WindTriangleResult, NoSolution> {
    let theta = (wind_dir_deg - track_deg).to_radians();
    let sin_wca = wind_speed_kt * theta.sin() / tas_kt;

    // Strictly greater than 1: a crosswind exactly matching the airspeed is
    // still inside the asin domain, and falls through to the ground-speed
    // check below. NaN from out-of-contract inputs also lands here.
    if !(sin_wca.abs() <= 1.0) {
        return Err(NoSolution::WindExceedsAirspeed);
    }

    let wca = sin_wca.asin();
    let heading = normalize_degrees(track_deg + wca.to_degrees());
    let ground_speed_kt = tas_kt * wca.cos() - wind_speed_kt * theta.cos();

    if !(ground_speed_kt > 0.0) {
        return Err(NoSolution::NoForwardProgress);
    }

    let hours = (distance_nm / ground_speed_kt).max(0.0);
    // Ground speed can survive the guard as a cancellation residue so
    // small that the leg time overflows Duration; saturate rather than
    // panic.
    let leg_time = Duration::try_from_secs_f64(hours * 3600.0).unwrap_or(Duration::MAX);

    Ok(WindTriangleResult {
        wca_deg: round_tenths(wca.to_degrees()),
        heading_deg: normalize_degrees(round_tenths(heading)),
        ground_speed_kt: round_tenths(ground_speed_kt),
        leg_time,
    })
}

/// Map an angle in degrees onto [0, 360).
///
/// Negative angles wrap upward, e.g. -9.6 becomes 350.4. The double
/// modulo keeps the result below 360 even when the first fold rounds up
/// to exactly 360.0.
pub fn normalize_degrees(deg: f64) -> f64 {
    ((deg % 360.0) + 360.0) % 360.0
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

//! Pilot-facing rendering of solved legs.
//!
//! Whole degrees and knots, an explicit sign on the wind correction
//! angle, and HH:MM leg time.

use std::time::Duration;

/// Render a wind correction angle, e.g. `+10°` or `-9°`.
///
/// The sign is dropped when the angle rounds to zero.
pub fn wca(wca_deg: f64) -> String {
    let rounded = wca_deg.round();
    if rounded == 0.0 {
        "0°".to_string()
    } else {
        format!("{rounded:+.0}°")
    }
}

/// Render a heading as whole degrees, e.g. `350°`.
pub fn heading(heading_deg: f64) -> String {
    format!("{:.0}°", heading_deg.round())
}

/// Render a ground speed as whole knots, e.g. `118 kt`.
pub fn ground_speed(ground_speed_kt: f64) -> String {
    format!("{:.0} kt", ground_speed_kt.round())
}

/// Render a leg time as zero-padded `HH:MM`.
///
/// Seconds are truncated, not rounded, so 25 min 21 s reads `00:25`.
pub fn leg_time(leg_time: Duration) -> String {
    let total_secs = leg_time.as_secs();
    format!("{:02}:{:02}", total_secs / 3600, (total_secs % 3600) / 60)
}

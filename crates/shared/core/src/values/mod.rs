use chrono::{DateTime, Utc};

/// Angle in decimal degrees
pub type Degrees = f64;

/// Angle in decimal hours (15 degrees per hour)
pub type Hours = f64;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Wrap an angle into `[0, 360)`
///
/// Non-finite input is returned unchanged so that NaN keeps propagating.
pub fn wrap_degrees(angle: Degrees) -> Degrees {
    if !angle.is_finite() {
        return angle;
    }
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Convert decimal degrees to decimal hours
pub fn degrees_to_hours(angle: Degrees) -> Hours {
    angle / 15.0
}

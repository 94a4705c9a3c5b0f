//! Mean sidereal time
//!
//! GMST uses the IAU 1982 expression in degrees (Meeus, Astronomical
//! Algorithms, eq. 12.4). Good to well under an arcsecond for UI pointing.

use zenith_core::{Degrees, Timestamp};
use zenith_core::values::wrap_degrees;

/// Julian Date of the J2000.0 epoch
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of 1970-01-01T00:00:00Z
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

pub fn julian_date(datetime: Timestamp) -> f64 {
    datetime.timestamp_millis() as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JD
}

/// Greenwich mean sidereal time in degrees, `[0, 360)`
pub fn gmst_degrees(jd: f64) -> Degrees {
    let d = jd - J2000_JD;
    let t = d / 36_525.0;
    let gmst = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    wrap_degrees(gmst)
}

/// Local mean sidereal time in degrees for an east-positive longitude
pub fn local_sidereal_time(datetime: Timestamp, longitude: Degrees) -> Degrees {
    wrap_degrees(gmst_degrees(julian_date(datetime)) + longitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_julian_date_of_j2000() {
        let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(julian_date(j2000), J2000_JD);
    }

    #[test]
    fn test_gmst_meeus_example() {
        // Meeus example 12.a: 1987 April 10, 0h UT -> 13h10m46.3668s
        let jd = julian_date(Utc.with_ymd_and_hms(1987, 4, 10, 0, 0, 0).unwrap());
        let expected = (13.0 + 10.0 / 60.0 + 46.3668 / 3600.0) * 15.0;
        assert!((gmst_degrees(jd) - expected).abs() < 1e-4);
    }

    #[test]
    fn test_lst_applies_longitude() {
        let at = Utc.with_ymd_and_hms(2021, 5, 14, 0, 0, 0).unwrap();
        let gmst = gmst_degrees(julian_date(at));
        let lst = local_sidereal_time(at, -155.468094);
        assert!((wrap_degrees(lst - gmst) - wrap_degrees(-155.468094)).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_longitude_propagates() {
        let at = Utc.with_ymd_and_hms(2021, 5, 14, 0, 0, 0).unwrap();
        assert!(local_sidereal_time(at, f64::NAN).is_nan());
    }
}

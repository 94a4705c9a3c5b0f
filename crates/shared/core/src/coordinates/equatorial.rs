use serde::{Deserialize, Serialize};

use crate::values::{Degrees, wrap_degrees};

/// Celestial position of a target as right ascension and declination
///
/// `ra` lives in `[0, 360)` and `dec` in `[-90, 90]`, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoordinate {
    pub ra: Degrees,
    pub dec: Degrees,
}

impl EquatorialCoordinate {
    pub fn new(ra: Degrees, dec: Degrees) -> Self {
        Self { ra, dec }
    }

    /// Both axes are finite numbers
    pub fn is_finite(&self) -> bool {
        self.ra.is_finite() && self.dec.is_finite()
    }

    /// Both axes are inside their documented ranges
    pub fn is_valid(&self) -> bool {
        self.is_finite() && (0.0..360.0).contains(&self.ra) && self.dec.abs() <= 90.0
    }

    /// Right ascension wrapped into `[0, 360)`, declination untouched
    pub fn normalized(&self) -> Self {
        Self {
            ra: wrap_degrees(self.ra),
            dec: self.dec,
        }
    }
}

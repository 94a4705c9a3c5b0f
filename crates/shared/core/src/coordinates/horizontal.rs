use serde::{Deserialize, Serialize};

use crate::values::{Degrees, wrap_degrees};

/// Local observer-relative position as altitude and azimuth
///
/// Azimuth is measured from north through east. Values of this type are always
/// derived from an equatorial coordinate, an observer and a time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalCoordinate {
    pub alt: Degrees,
    pub az: Degrees,
}

impl HorizontalCoordinate {
    pub fn new(alt: Degrees, az: Degrees) -> Self {
        Self { alt, az }
    }

    pub fn is_finite(&self) -> bool {
        self.alt.is_finite() && self.az.is_finite()
    }

    /// Azimuth wrapped into `[0, 360)`
    pub fn normalized(&self) -> Self {
        Self {
            alt: self.alt,
            az: wrap_degrees(self.az),
        }
    }
}

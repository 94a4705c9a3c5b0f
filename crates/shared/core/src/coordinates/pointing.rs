use serde::{Deserialize, Serialize};

use super::{EquatorialCoordinate, HorizontalCoordinate};
use crate::values::Degrees;

/// Full pointing tuple shared with listeners of the current position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pointing {
    pub ra: Degrees,
    pub dec: Degrees,
    pub alt: Degrees,
    pub az: Degrees,
}

impl Pointing {
    pub fn new(equatorial: EquatorialCoordinate, horizontal: HorizontalCoordinate) -> Self {
        Self {
            ra: equatorial.ra,
            dec: equatorial.dec,
            alt: horizontal.alt,
            az: horizontal.az,
        }
    }

    pub fn equatorial(&self) -> EquatorialCoordinate {
        EquatorialCoordinate::new(self.ra, self.dec)
    }

    pub fn horizontal(&self) -> HorizontalCoordinate {
        HorizontalCoordinate::new(self.alt, self.az)
    }
}

impl Default for Pointing {
    fn default() -> Self {
        Self {
            ra: 0.0,
            dec: 0.0,
            alt: 0.0,
            az: 0.0,
        }
    }
}

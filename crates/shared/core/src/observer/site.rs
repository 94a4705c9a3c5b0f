use serde::{Deserialize, Serialize};

use crate::values::Degrees;

/// Ensure a number is a usable latitude
pub fn validate_latitude(latitude: Degrees) -> bool {
    latitude.is_finite() && latitude.abs() <= 90.0
}

/// Ensure a number is a usable longitude
pub fn validate_longitude(longitude: Degrees) -> bool {
    longitude.is_finite() && longitude.abs() <= 180.0
}

/// Geographic position the sky is observed from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    /// Longitude in degrees, east positive
    pub longitude: Degrees,
    /// Latitude in degrees, north positive
    pub latitude: Degrees,
    /// Elevation in meters above the geoid
    pub elevation: f64,
}

impl Observer {
    pub fn new(longitude: Degrees, latitude: Degrees, elevation: f64) -> Self {
        Self {
            longitude,
            latitude,
            elevation,
        }
    }

    pub fn is_valid(&self) -> bool {
        validate_longitude(self.longitude) && validate_latitude(self.latitude)
    }
}

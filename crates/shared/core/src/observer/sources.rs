use serde::{Deserialize, Serialize};

use super::site::{Observer, validate_latitude, validate_longitude};
use crate::values::{Degrees, Timestamp};

/// Fallback site when nothing better is known: Mauna Kea Observatories
pub const DEFAULT_SITE: Observer = Observer {
    longitude: -155.824615,
    latitude: 20.005039,
    elevation: 0.0,
};

/// Location reported by a geolocation provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoFix {
    pub longitude: Degrees,
    pub latitude: Degrees,
    /// When the fix was obtained; `None` until the provider has located us
    pub located_at: Option<Timestamp>,
}

/// Every candidate source for the observer position, ranked
///
/// Each axis is resolved independently: an explicitly provided value wins, then
/// the URL parameter, then the detected location, then [`DEFAULT_SITE`]. A
/// candidate failing its own axis validation falls through to the next rank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObserverSources {
    pub longitude: Option<Degrees>,
    pub latitude: Option<Degrees>,
    pub elevation: Option<f64>,
    /// Raw `longitude` query parameter
    pub longitude_param: Option<String>,
    /// Raw `latitude` query parameter
    pub latitude_param: Option<String>,
    pub detected: Option<GeoFix>,
}

impl ObserverSources {
    pub fn resolve_longitude(&self) -> Degrees {
        resolve_axis(
            self.longitude,
            self.longitude_param.as_deref(),
            self.located().map(|fix| fix.longitude),
            DEFAULT_SITE.longitude,
            validate_longitude,
        )
    }

    pub fn resolve_latitude(&self) -> Degrees {
        resolve_axis(
            self.latitude,
            self.latitude_param.as_deref(),
            self.located().map(|fix| fix.latitude),
            DEFAULT_SITE.latitude,
            validate_latitude,
        )
    }

    pub fn resolve_elevation(&self) -> f64 {
        self.elevation
            .filter(|elevation| elevation.is_finite())
            .unwrap_or(DEFAULT_SITE.elevation)
    }

    pub fn resolve(&self) -> Observer {
        Observer::new(
            self.resolve_longitude(),
            self.resolve_latitude(),
            self.resolve_elevation(),
        )
    }

    fn located(&self) -> Option<&GeoFix> {
        self.detected.as_ref().filter(|fix| fix.located_at.is_some())
    }
}

fn resolve_axis(
    explicit: Option<Degrees>,
    param: Option<&str>,
    detected: Option<Degrees>,
    fallback: Degrees,
    validate: fn(Degrees) -> bool,
) -> Degrees {
    let param = param.and_then(|raw| raw.trim().parse::<f64>().ok());

    [explicit, param, detected]
        .into_iter()
        .flatten()
        .find(|value| validate(*value))
        .unwrap_or(fallback)
}

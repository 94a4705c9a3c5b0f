//! The context every derivation runs in

use serde::{Deserialize, Serialize};
use zenith_astrometry::{
    equatorial_to_horizontal, horizontal_to_equatorial, project, unproject,
};
use zenith_core::{
    EquatorialCoordinate, HeadingOffset, HorizontalCoordinate, Observer, Pointing,
    ScreenCoordinate, Timestamp, Viewport,
};

/// Equatorial target to horizontal direction for an observer at a time
pub fn derive(
    equatorial: EquatorialCoordinate,
    observer: &Observer,
    datetime: Timestamp,
) -> HorizontalCoordinate {
    equatorial_to_horizontal(equatorial, observer, datetime)
}

/// Exact inverse of [`derive`]
pub fn inverse_derive(
    horizontal: HorizontalCoordinate,
    observer: &Observer,
    datetime: Timestamp,
) -> EquatorialCoordinate {
    horizontal_to_equatorial(horizontal, observer, datetime)
}

/// Observer, heading, surface and time at one instant
///
/// A plain value: callers rebuild or update it whenever an input changes and
/// every method is a pure function of its fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyFrame {
    pub observer: Observer,
    pub offset: HeadingOffset,
    pub viewport: Viewport,
    pub datetime: Timestamp,
}

impl SkyFrame {
    pub fn new(
        observer: Observer,
        offset: HeadingOffset,
        viewport: Viewport,
        datetime: Timestamp,
    ) -> Self {
        Self {
            observer,
            offset,
            viewport,
            datetime,
        }
    }

    pub fn derive(&self, equatorial: EquatorialCoordinate) -> HorizontalCoordinate {
        derive(equatorial, &self.observer, self.datetime)
    }

    pub fn inverse_derive(&self, horizontal: HorizontalCoordinate) -> EquatorialCoordinate {
        inverse_derive(horizontal, &self.observer, self.datetime)
    }

    /// Where a horizontal direction lands on screen under the current heading
    pub fn project(&self, horizontal: HorizontalCoordinate) -> ScreenCoordinate {
        project(self.offset.remove_from(horizontal), &self.viewport)
    }

    /// Horizontal direction under a screen position, heading offset applied
    pub fn unproject(&self, screen: ScreenCoordinate) -> HorizontalCoordinate {
        self.offset.add_to(unproject(screen, &self.viewport))
    }

    /// Full pointing tuple under a screen position
    pub fn pointing_at(&self, screen: ScreenCoordinate) -> Pointing {
        let horizontal = self.unproject(screen);
        Pointing::new(self.inverse_derive(horizontal), horizontal)
    }
}

use serde::{Deserialize, Serialize};
use zenith_core::{Degrees, HeadingOffset, Observer, ObserverSources, OffsetDelta};

use crate::orientation::DeviceOrientation;

/// Mutations the observer state accepts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObserverMessage {
    /// Relative heading change
    Nudge(OffsetDelta),
    /// Absolute heading
    SetOffset(HeadingOffset),
    /// Absolute azimuthal heading, altitude untouched
    SetAzimuthalOffset(Degrees),
    /// Move the observer
    Relocate(Observer),
}

/// Where the observer stands and where they look
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverState {
    pub observer: Observer,
    pub offset: HeadingOffset,
    pub orientation: DeviceOrientation,
}

impl ObserverState {
    pub fn new(observer: Observer) -> Self {
        Self {
            observer,
            offset: HeadingOffset::default(),
            orientation: DeviceOrientation::default(),
        }
    }

    pub fn from_sources(sources: &ObserverSources) -> Self {
        let observer = sources.resolve();
        log::info!(
            "observer at lon {} lat {} elev {}",
            observer.longitude,
            observer.latitude,
            observer.elevation
        );
        Self::new(observer)
    }

    /// Apply one message; returns whether anything changed
    pub fn apply(&mut self, message: ObserverMessage) -> bool {
        let before = *self;

        match message {
            ObserverMessage::Nudge(delta) => self.offset.apply(delta),
            ObserverMessage::SetOffset(offset) => self.offset = offset,
            ObserverMessage::SetAzimuthalOffset(azimuthal) => {
                if azimuthal.is_finite() {
                    self.offset.azimuthal = azimuthal;
                } else {
                    log::warn!("ignoring non-finite azimuthal offset {}", azimuthal);
                }
            }
            ObserverMessage::Relocate(observer) => {
                if observer.is_valid() {
                    self.observer = observer;
                } else {
                    log::warn!("rejecting invalid observer location {:?}", observer);
                }
            }
        }

        *self != before
    }
}

impl Default for ObserverState {
    fn default() -> Self {
        Self::from_sources(&ObserverSources::default())
    }
}

//! Zenith Core Domain
//!
//! Pure domain types for the Zenith telescope pointing system.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod coordinates;
pub mod observer;
pub mod status;
pub mod values;

// Re-export commonly used types at crate root
pub use coordinates::{
    EquatorialCoordinate, HorizontalCoordinate, Pointing, ScreenCoordinate, Viewport,
};
pub use observer::{
    DEFAULT_SITE, GeoFix, HeadingOffset, Observer, ObserverSources, OffsetDelta, PermissionState,
    validate_latitude, validate_longitude,
};
pub use status::MountStatus;
pub use values::{Degrees, Hours, Timestamp};

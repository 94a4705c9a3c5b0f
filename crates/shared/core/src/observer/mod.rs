mod offset;
mod permission;
mod site;
mod sources;

pub use offset::{HeadingOffset, OffsetDelta};
pub use permission::PermissionState;
pub use site::{Observer, validate_latitude, validate_longitude};
pub use sources::{DEFAULT_SITE, GeoFix, ObserverSources};

//! Zenith Astrometry
//!
//! Pure coordinate math for the pointing system:
//!
//! - **Sidereal time**: Julian date, Greenwich and local mean sidereal time
//! - **Transforms**: equatorial ↔ horizontal for an observer at a given time
//! - **Projection**: zenithal stereographic sky ↔ screen mapping
//! - **Formatting**: sexagesimal renderings of decimal degrees
//!
//! Nothing here panics or returns errors. Non-finite input yields non-finite
//! output, so a bad value passes through without poisoning later computations.

mod format;
mod projection;
mod sidereal;
mod transform;

pub use format::{DegreeFormat, format_degrees, to_dms, to_hms};
pub use projection::{horizon_radius, project, unproject};
pub use sidereal::{J2000_JD, gmst_degrees, julian_date, local_sidereal_time};
pub use transform::{equatorial_to_horizontal, hour_angle, horizontal_to_equatorial};

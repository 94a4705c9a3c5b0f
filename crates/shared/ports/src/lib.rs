//! Zenith Ports
//!
//! Port definitions (traits) for the Zenith telescope pointing system.
//! These define the boundaries between the pointing core and its collaborators:
//! time sources, frame pacing, the observatory hardware and platform prompts.

mod clock;
mod error;
mod hardware;
mod orientation;
mod tick;

pub use clock::Clock;
pub use error::{HardwareError, HardwareResult, StatusError};
pub use hardware::{FocuserControl, MountControl, RotatorControl};
pub use orientation::PermissionPrompt;
pub use tick::TickSource;

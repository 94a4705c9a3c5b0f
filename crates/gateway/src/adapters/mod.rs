//! Hardware adapters
//!
//! Clients implementing the hardware ports over HTTP, and the status monitor
//! fed by the server-sent event stream.

pub mod hardware;
pub mod status;

pub use hardware::{FocuserClient, MountClient, RotatorClient, dispatch, report};
pub use status::{StatusMonitor, StatusStream};

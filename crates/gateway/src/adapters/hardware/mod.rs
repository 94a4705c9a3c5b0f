//! Device clients for the hardware control server

mod dispatch;
mod focuser;
mod mount;
mod rotator;

pub use dispatch::{dispatch, report};
pub use focuser::FocuserClient;
pub use mount::MountClient;
pub use rotator::RotatorClient;

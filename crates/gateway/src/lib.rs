//! Zenith Gateway
//!
//! Gateway layer between the pointing core and the observatory hardware:
//! - Transport: HTTP GET commands and the server-sent status stream
//! - Messages: goto query parameters in the hardware API's units
//! - Adapters: mount, focuser and rotator clients implementing the ports,
//!   plus the status monitor
//!
//! ## Architecture
//!
//! ```text
//!      Pointing core
//!         │      ▲
//!  MountControl  │ watch<MountStatus>
//!  FocuserControl│
//!  RotatorControl│
//!    ┌────▼──────┴────┐
//!    │    Gateway     │
//!    └────┬──────▲────┘
//!         │ GET  │ text/event-stream
//!    {url}/mount/goto/...   {url}/status
//!         ▼      │
//!   Hardware control server
//! ```
//!
//! Commands are fire-and-forget from the core's point of view: failures are
//! logged and never feed back into the simulated pointing state.

pub mod adapters;
pub mod error;
pub mod messages;
pub mod transport;

// Re-export commonly used types
pub use adapters::{
    FocuserClient, MountClient, RotatorClient, StatusMonitor, StatusStream, dispatch,
};
pub use error::GatewayError;
pub use messages::GotoQuery;
pub use transport::{
    Endpoints, HardwareClient, HardwareConfig, SseDecoder, SseEvent, StatusConfig,
};

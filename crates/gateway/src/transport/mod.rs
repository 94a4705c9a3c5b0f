//! Transport layer
//!
//! Plain HTTP GETs for commands and a server-sent event stream for status.

pub mod config;
pub mod http;
pub mod sse;

pub use config::{Endpoints, HardwareConfig, StatusConfig};
pub use http::HardwareClient;
pub use sse::{SseDecoder, SseEvent};

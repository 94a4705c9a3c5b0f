//! Error types for the gateway crate

use thiserror::Error;
use zenith_ports::{HardwareError, StatusError};

/// Gateway-level errors (transport and decoding)
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl From<serde_json::Error> for GatewayError {
    fn from(e: serde_json::Error) -> Self {
        GatewayError::Parse(e.to_string())
    }
}

/// Convert gateway errors to the hardware port's error
impl From<GatewayError> for HardwareError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Http(e) => HardwareError::Request(e.to_string()),
            GatewayError::Status { endpoint, status } => HardwareError::Status { endpoint, status },
            GatewayError::Parse(msg) => HardwareError::InvalidResponse(msg),
            GatewayError::InvalidEndpoint(msg) => HardwareError::InvalidEndpoint(msg),
        }
    }
}

/// Convert gateway errors to the status stream's error
impl From<GatewayError> for StatusError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Parse(msg) => StatusError::Malformed(msg),
            other => StatusError::Connection(other.to_string()),
        }
    }
}

use thiserror::Error;

/// Errors raised while talking to the observatory hardware API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HardwareError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected HTTP status {status} from {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("Invalid response body: {0}")]
    InvalidResponse(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

pub type HardwareResult<T> = std::result::Result<T, HardwareError>;

/// Errors raised by the status stream
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatusError {
    #[error("Stream connection failed: {0}")]
    Connection(String),

    #[error("Stream reported an error event: {0}")]
    Event(String),

    #[error("Malformed status payload: {0}")]
    Malformed(String),

    #[error("Stream closed")]
    Closed,
}

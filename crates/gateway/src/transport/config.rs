//! Transport configuration

use serde::{Deserialize, Serialize};

/// Default hardware control server, as documented by the mount vendor
pub const DEFAULT_HARDWARE_URL: &str = "http://0.0.0.0:8220";

/// Default status event server
pub const DEFAULT_STATUS_URL: &str = "http://0.0.0.0:5000";

/// Connection options for one hardware client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HardwareConfig {
    /// Base URL of the control server, without the device namespace
    pub url: String,
    /// Enable (and for the mount, connect) as soon as the client starts
    pub immediate: bool,
}

impl Default for HardwareConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_HARDWARE_URL.to_string(),
            immediate: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    pub url: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_STATUS_URL.to_string(),
        }
    }
}

impl StatusConfig {
    pub fn stream_url(&self) -> String {
        format!("{}/{}", self.url.trim_end_matches('/'), Endpoints::STATUS)
    }
}

/// Namespaces and paths of the hardware API
///
/// Every device lives under `{url}/{namespace}/`.
pub struct Endpoints;

impl Endpoints {
    // Namespaces

    pub const MOUNT: &'static str = "mount";
    pub const FOCUSER: &'static str = "focuser";
    pub const ROTATOR: &'static str = "rotator";

    // Lifecycle, shared by every device

    pub const CONNECT: &'static str = "connect";
    pub const DISCONNECT: &'static str = "disconnect";
    pub const ENABLE: &'static str = "enable";
    pub const DISABLE: &'static str = "disable";
    pub const STOP: &'static str = "stop";

    // Mount

    pub const PARK: &'static str = "park";
    pub const GOTO_EQUATORIAL: &'static str = "goto/coordinates/equatorial";
    pub const GOTO_HORIZONTAL: &'static str = "goto/coordinates/horizontal";

    // Focuser

    pub const FOCUSER_GOTO: &'static str = "goto";

    // Rotator

    pub const ROTATOR_GOTO_MECH: &'static str = "goto/mech/target";
    pub const ROTATOR_GOTO_FIELD: &'static str = "goto/field/target";

    // Status server

    pub const STATUS: &'static str = "status";
}

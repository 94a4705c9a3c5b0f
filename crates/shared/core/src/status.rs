use serde::{Deserialize, Serialize};

use crate::values::Degrees;

/// Snapshot of the mount as reported by the hardware status stream
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MountStatus {
    /// No connection to the mount server
    pub is_offline: bool,
    /// The control server has a connection to the mount hardware
    pub is_connected: bool,
    /// The mount is moving to acquire a commanded target
    pub is_slewing: bool,
    /// The mount is following a target
    pub is_tracking: bool,
    /// Reported altitude; infinite while offline
    #[serde(default = "unknown_angle")]
    pub alt: Degrees,
    /// Reported azimuth; infinite while offline
    #[serde(default = "unknown_angle")]
    pub az: Degrees,
}

fn unknown_angle() -> Degrees {
    f64::INFINITY
}

impl MountStatus {
    /// The all-offline default every failure path collapses to
    pub const OFFLINE: MountStatus = MountStatus {
        is_offline: true,
        is_connected: false,
        is_slewing: false,
        is_tracking: false,
        alt: f64::INFINITY,
        az: f64::INFINITY,
    };
}

impl Default for MountStatus {
    fn default() -> Self {
        Self::OFFLINE
    }
}

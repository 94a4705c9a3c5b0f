//! Configuration loading for an observatory session
//!
//! One JSON document holds the options of every component:
//! - Virtual clock (start time, live timer, tick quantum)
//! - Observer sources and the projection viewport
//! - Initial target and slew animation
//! - Hardware and status servers

use serde::{Deserialize, Serialize};
use std::path::Path;
use zenith_clock::ClockConfig;
use zenith_core::{EquatorialCoordinate, ObserverSources, Viewport};
use zenith_gateway::{HardwareConfig, StatusConfig};
use zenith_slew::SlewConfig;

use crate::error::ConfigError;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservatoryConfig {
    pub clock: ClockConfig,

    /// Ranked observer location sources
    pub observer: ObserverSources,

    pub viewport: Viewport,

    /// Initial target; the zenith when absent
    pub target: Option<EquatorialCoordinate>,

    pub slew: SlewConfig,

    pub mount: HardwareConfig,
    pub focuser: HardwareConfig,
    pub rotator: HardwareConfig,
    pub status: StatusConfig,

    /// Forward each slew target to the mount as an equatorial goto
    pub mirror_slews: bool,

    /// Leave the hardware alone entirely
    pub offline: bool,
}

impl ObservatoryConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<ObservatoryConfig, ConfigError> {
    ObservatoryConfig::from_file(path)
}

pub fn load_config_from_str(json: &str) -> Result<ObservatoryConfig, ConfigError> {
    ObservatoryConfig::from_json(json)
}

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Answer of the platform to a device-orientation permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    Granted,
    #[default]
    Denied,
    /// Not decided yet; the user can still be asked
    Prompt,
}

impl FromStr for PermissionState {
    type Err = std::convert::Infallible;

    /// Anything unrecognised counts as a denial
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(match raw.trim().to_ascii_lowercase().as_str() {
            "granted" => PermissionState::Granted,
            "prompt" => PermissionState::Prompt,
            _ => PermissionState::Denied,
        })
    }
}

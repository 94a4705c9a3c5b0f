use async_trait::async_trait;
use zenith_core::{EquatorialCoordinate, HorizontalCoordinate, MountStatus};

use crate::error::HardwareResult;

/// Port for the telescope mount
///
/// Implementations issue side-effect commands only; the pointing core never
/// treats their responses as the source of truth for its simulated position.
#[async_trait]
pub trait MountControl: Send + Sync {
    async fn connect(&self) -> HardwareResult<()>;

    async fn disconnect(&self) -> HardwareResult<()>;

    async fn enable(&self) -> HardwareResult<()>;

    async fn disable(&self) -> HardwareResult<()>;

    async fn stop(&self) -> HardwareResult<()>;

    async fn park(&self) -> HardwareResult<()>;

    /// Command a goto to an equatorial target (right ascension in degrees)
    async fn goto_equatorial(&self, target: EquatorialCoordinate) -> HardwareResult<MountStatus>;

    /// Command a goto to a horizontal target
    async fn goto_horizontal(&self, target: HorizontalCoordinate) -> HardwareResult<MountStatus>;
}

/// Port for the focuser
#[async_trait]
pub trait FocuserControl: Send + Sync {
    async fn enable(&self) -> HardwareResult<()>;

    async fn disable(&self) -> HardwareResult<()>;

    async fn stop(&self) -> HardwareResult<()>;

    async fn goto_target(&self, target: &str) -> HardwareResult<MountStatus>;
}

/// Port for the field rotator
#[async_trait]
pub trait RotatorControl: Send + Sync {
    async fn enable(&self) -> HardwareResult<()>;

    async fn disable(&self) -> HardwareResult<()>;

    async fn stop(&self) -> HardwareResult<()>;

    /// Rotate to a mechanical position angle
    async fn goto_mech_target(&self, target: &str) -> HardwareResult<MountStatus>;

    /// Rotate to a field position angle
    async fn goto_field_target(&self, target: &str) -> HardwareResult<MountStatus>;
}

use async_trait::async_trait;
use zenith_core::PermissionState;

/// Port for the platform's device-orientation permission prompt
#[async_trait]
pub trait PermissionPrompt: Send + Sync {
    /// Ask the user; resolves with their answer
    async fn request(&self) -> PermissionState;
}

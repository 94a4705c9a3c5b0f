use serde::{Deserialize, Serialize};
use zenith_core::PermissionState;
use zenith_ports::PermissionPrompt;

/// Device-orientation permission and usage
///
/// Compass headings only drive the heading offset while `in_use` is set, and
/// it can only be set once permission was granted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceOrientation {
    permission: PermissionState,
    in_use: bool,
}

impl DeviceOrientation {
    pub fn permission(&self) -> PermissionState {
        self.permission
    }

    pub fn in_use(&self) -> bool {
        self.in_use
    }

    pub fn is_granted(&self) -> bool {
        self.permission == PermissionState::Granted
    }

    /// The user has not answered yet
    pub fn needs_prompt(&self) -> bool {
        self.permission == PermissionState::Prompt
    }

    /// Store an answer; losing the grant also stops using the compass
    pub fn record_permission(&mut self, permission: PermissionState) {
        self.permission = permission;
        if !self.is_granted() {
            self.in_use = false;
        }
    }

    /// Flip compass usage; returns the new value
    pub fn toggle(&mut self) -> bool {
        self.in_use = self.is_granted() && !self.in_use;
        self.in_use
    }

    /// Ask the platform and start using the compass when allowed
    pub async fn request_permission<P>(&mut self, prompt: &P) -> PermissionState
    where
        P: PermissionPrompt + ?Sized,
    {
        let answer = prompt.request().await;
        log::info!("device orientation permission: {:?}", answer);

        self.record_permission(answer);
        self.in_use = self.is_granted();
        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Answer(PermissionState);

    #[async_trait]
    impl PermissionPrompt for Answer {
        async fn request(&self) -> PermissionState {
            self.0
        }
    }

    #[test]
    fn test_defaults_to_denied_and_unused() {
        let orientation = DeviceOrientation::default();
        assert_eq!(orientation.permission(), PermissionState::Denied);
        assert!(!orientation.in_use());
    }

    #[test]
    fn test_toggle_requires_grant() {
        let mut orientation = DeviceOrientation::default();
        assert!(!orientation.toggle());

        orientation.record_permission(PermissionState::Granted);
        assert!(orientation.toggle());
        assert!(!orientation.toggle());
    }

    #[test]
    fn test_revoking_stops_usage() {
        let mut orientation = DeviceOrientation::default();
        orientation.record_permission(PermissionState::Granted);
        orientation.toggle();

        orientation.record_permission(PermissionState::Prompt);

        assert!(orientation.needs_prompt());
        assert!(!orientation.in_use());
    }

    #[tokio::test]
    async fn test_request_permission_grants_usage() {
        let mut orientation = DeviceOrientation::default();

        let answer = orientation
            .request_permission(&Answer(PermissionState::Granted))
            .await;

        assert_eq!(answer, PermissionState::Granted);
        assert!(orientation.in_use());
    }

    #[tokio::test]
    async fn test_request_permission_denied() {
        let mut orientation = DeviceOrientation::default();
        orientation
            .request_permission(&Answer(PermissionState::Denied))
            .await;
        assert!(!orientation.in_use());
    }
}

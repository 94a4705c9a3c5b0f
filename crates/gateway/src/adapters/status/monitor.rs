use tokio::sync::watch;
use zenith_core::{Degrees, MountStatus};
use zenith_ports::StatusError;

use crate::transport::SseEvent;

/// Latest mount status, published to any number of watchers
///
/// Starts offline. Any error event, malformed payload or dropped stream
/// collapses the status back to [`MountStatus::OFFLINE`] whatever it was
/// before.
#[derive(Debug)]
pub struct StatusMonitor {
    tx: watch::Sender<MountStatus>,
}

impl StatusMonitor {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(MountStatus::OFFLINE);
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<MountStatus> {
        self.tx.subscribe()
    }

    pub fn status(&self) -> MountStatus {
        *self.tx.borrow()
    }

    pub fn is_offline(&self) -> bool {
        self.tx.borrow().is_offline
    }

    pub fn is_connected(&self) -> bool {
        self.tx.borrow().is_connected
    }

    pub fn is_slewing(&self) -> bool {
        self.tx.borrow().is_slewing
    }

    pub fn is_tracking(&self) -> bool {
        self.tx.borrow().is_tracking
    }

    pub fn alt(&self) -> Degrees {
        self.tx.borrow().alt
    }

    pub fn az(&self) -> Degrees {
        self.tx.borrow().az
    }

    pub fn update(&self, status: MountStatus) {
        self.tx.send_replace(status);
    }

    pub fn reset(&self) {
        if !self.is_offline() {
            log::info!("mount status reset to offline");
        }
        self.tx.send_replace(MountStatus::OFFLINE);
    }

    /// Fold one stream event into the status
    pub fn apply_event(&self, event: &SseEvent) -> Result<MountStatus, StatusError> {
        if event.is_error() {
            self.reset();
            return Err(StatusError::Event(event.data.clone()));
        }

        match serde_json::from_str::<MountStatus>(&event.data) {
            Ok(status) => {
                self.update(status);
                Ok(status)
            }
            Err(e) => {
                self.reset();
                Err(StatusError::Malformed(e.to_string()))
            }
        }
    }
}

impl Default for StatusMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn online() -> SseEvent {
        SseEvent {
            event: None,
            data: r#"{"isOffline":false,"isConnected":true,"isSlewing":false,"isTracking":true,"alt":51.2,"az":201.7}"#
                .to_string(),
        }
    }

    #[test]
    fn test_starts_offline() {
        let monitor = StatusMonitor::new();
        assert!(monitor.is_offline());
        assert!(!monitor.is_connected());
        assert!(monitor.alt().is_infinite());
        assert!(monitor.az().is_infinite());
    }

    #[test]
    fn test_status_event_updates_accessors() {
        let monitor = StatusMonitor::new();
        let status = monitor.apply_event(&online()).unwrap();

        assert!(!status.is_offline);
        assert!(monitor.is_connected());
        assert!(monitor.is_tracking());
        assert!(!monitor.is_slewing());
        assert_eq!(monitor.alt(), 51.2);
        assert_eq!(monitor.az(), 201.7);
    }

    #[test]
    fn test_error_event_resets_to_offline() {
        let monitor = StatusMonitor::new();
        monitor.apply_event(&online()).unwrap();

        let result = monitor.apply_event(&SseEvent {
            event: Some("error".to_string()),
            data: "lost mount".to_string(),
        });

        assert_eq!(result, Err(StatusError::Event("lost mount".to_string())));
        assert_eq!(monitor.status(), MountStatus::OFFLINE);
    }

    #[test]
    fn test_malformed_payload_resets_to_offline() {
        let monitor = StatusMonitor::new();
        monitor.apply_event(&online()).unwrap();

        let result = monitor.apply_event(&SseEvent {
            event: None,
            data: "{not json".to_string(),
        });

        assert!(matches!(result, Err(StatusError::Malformed(_))));
        assert!(monitor.is_offline());
    }

    #[tokio::test]
    async fn test_watchers_see_updates() {
        let monitor = StatusMonitor::new();
        let mut rx = monitor.subscribe();

        monitor.apply_event(&online()).unwrap();

        rx.changed().await.unwrap();
        assert!(rx.borrow().is_connected);
    }
}

use std::future::Future;
use tokio::task::JoinHandle;
use zenith_ports::HardwareResult;

/// Log a failed command and drop the error
pub fn report<T>(label: &str, result: HardwareResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{} failed: {}", label, e);
            None
        }
    }
}

/// Run a hardware command in the background
///
/// The caller never waits on the hardware; a failure is logged and the handle
/// resolves to `None`.
pub fn dispatch<F, T>(label: &'static str, command: F) -> JoinHandle<Option<T>>
where
    F: Future<Output = HardwareResult<T>> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(async move { report(label, command.await) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use zenith_ports::HardwareError;

    #[tokio::test]
    async fn test_dispatch_swallows_errors() {
        let handle = dispatch("mount park", async {
            Err::<(), _>(HardwareError::Request("connection refused".to_string()))
        });
        assert_eq!(handle.await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_dispatch_returns_value() {
        let handle = dispatch("mount stop", async { Ok(7) });
        assert_eq!(handle.await.unwrap(), Some(7));
    }
}

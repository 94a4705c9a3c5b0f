use futures_util::StreamExt;
use reqwest::Client;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use zenith_ports::StatusError;

use super::monitor::StatusMonitor;
use crate::error::GatewayError;
use crate::transport::{SseDecoder, StatusConfig};

/// Delay before reopening a dropped stream
pub const RECONNECT_DELAY: Duration = Duration::from_secs(3);

/// Background reader of `{url}/status`
///
/// Feeds every event into a [`StatusMonitor`]. A failed or closed connection
/// resets the monitor to offline and is retried after [`RECONNECT_DELAY`]
/// until [`close`](StatusStream::close) is called.
pub struct StatusStream {
    monitor: Arc<StatusMonitor>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl StatusStream {
    /// Open the stream; must be called inside a Tokio runtime
    pub fn connect(config: &StatusConfig, monitor: Arc<StatusMonitor>) -> Self {
        Self::connect_with(Client::new(), config.stream_url(), monitor, RECONNECT_DELAY)
    }

    pub fn connect_with(
        client: Client,
        url: String,
        monitor: Arc<StatusMonitor>,
        reconnect: Duration,
    ) -> Self {
        let reader = Arc::clone(&monitor);
        let task = tokio::spawn(async move {
            loop {
                if let Err(e) = read_stream(&client, &url, &reader).await {
                    log::warn!("status stream {}: {}", url, e);
                }
                reader.reset();
                tokio::time::sleep(reconnect).await;
            }
        });

        Self {
            monitor,
            task: Mutex::new(Some(task)),
        }
    }

    pub fn monitor(&self) -> &Arc<StatusMonitor> {
        &self.monitor
    }

    pub fn is_open(&self) -> bool {
        self.task
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Stop reading; calling it again is a no-op
    pub fn close(&self) {
        let task = self
            .task
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(task) = task {
            task.abort();
            log::info!("status stream closed");
        }
    }
}

impl Drop for StatusStream {
    fn drop(&mut self) {
        self.close();
    }
}

async fn read_stream(
    client: &Client,
    url: &str,
    monitor: &StatusMonitor,
) -> Result<(), StatusError> {
    let resp = client
        .get(url)
        .header("Accept", "text/event-stream")
        .send()
        .await
        .map_err(GatewayError::from)?;

    if !resp.status().is_success() {
        return Err(GatewayError::Status {
            endpoint: url.to_string(),
            status: resp.status().as_u16(),
        }
        .into());
    }
    log::info!("status stream open at {}", url);

    let mut decoder = SseDecoder::new();
    let mut body = resp.bytes_stream();

    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(GatewayError::from)?;
        for event in decoder.feed(&chunk) {
            if let Err(e) = monitor.apply_event(&event) {
                log::warn!("status event rejected: {}", e);
            }
        }
    }

    Err(StatusError::Closed)
}

use async_trait::async_trait;
use reqwest::Client;
use zenith_core::MountStatus;
use zenith_ports::{FocuserControl, HardwareResult};

use super::dispatch::report;
use crate::messages::GotoQuery;
use crate::transport::{Endpoints, HardwareClient, HardwareConfig};

#[derive(Debug, Clone)]
pub struct FocuserClient {
    http: HardwareClient,
    immediate: bool,
}

impl FocuserClient {
    pub fn new(config: &HardwareConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &HardwareConfig) -> Self {
        Self {
            http: HardwareClient::with_client(client, &config.url, Endpoints::FOCUSER),
            immediate: config.immediate,
        }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Enable when configured to start immediately
    pub async fn start(&self) {
        if self.immediate {
            report("focuser enable", self.enable().await);
        }
    }

    pub async fn shutdown(&self) {
        report("focuser stop", self.stop().await);
        report("focuser disable", self.disable().await);
    }
}

#[async_trait]
impl FocuserControl for FocuserClient {
    async fn enable(&self) -> HardwareResult<()> {
        Ok(self.http.command(Endpoints::ENABLE).await?)
    }

    async fn disable(&self) -> HardwareResult<()> {
        Ok(self.http.command(Endpoints::DISABLE).await?)
    }

    async fn stop(&self) -> HardwareResult<()> {
        Ok(self.http.command(Endpoints::STOP).await?)
    }

    async fn goto_target(&self, target: &str) -> HardwareResult<MountStatus> {
        let query = GotoQuery::Focuser(target.to_string());
        Ok(self.http.query(query.path(), &query.params()).await?)
    }
}

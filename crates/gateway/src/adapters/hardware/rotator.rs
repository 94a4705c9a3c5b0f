use async_trait::async_trait;
use reqwest::Client;
use zenith_core::MountStatus;
use zenith_ports::{HardwareResult, RotatorControl};

use super::dispatch::report;
use crate::messages::GotoQuery;
use crate::transport::{Endpoints, HardwareClient, HardwareConfig};

/// Field rotator over the hardware control API
#[derive(Debug, Clone)]
pub struct RotatorClient {
    http: HardwareClient,
    immediate: bool,
}

impl RotatorClient {
    pub fn new(config: &HardwareConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &HardwareConfig) -> Self {
        Self {
            http: HardwareClient::with_client(client, &config.url, Endpoints::ROTATOR),
            immediate: config.immediate,
        }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub async fn start(&self) {
        if self.immediate {
            report("rotator enable", self.enable().await);
        }
    }

    pub async fn shutdown(&self) {
        report("rotator stop", self.stop().await);
        report("rotator disable", self.disable().await);
    }

    async fn goto(&self, query: GotoQuery) -> HardwareResult<MountStatus> {
        Ok(self.http.query(query.path(), &query.params()).await?)
    }
}

#[async_trait]
impl RotatorControl for RotatorClient {
    async fn enable(&self) -> HardwareResult<()> {
        Ok(self.http.command(Endpoints::ENABLE).await?)
    }

    async fn disable(&self) -> HardwareResult<()> {
        Ok(self.http.command(Endpoints::DISABLE).await?)
    }

    async fn stop(&self) -> HardwareResult<()> {
        Ok(self.http.command(Endpoints::STOP).await?)
    }

    async fn goto_mech_target(&self, target: &str) -> HardwareResult<MountStatus> {
        self.goto(GotoQuery::RotatorMech(target.to_string())).await
    }

    async fn goto_field_target(&self, target: &str) -> HardwareResult<MountStatus> {
        self.goto(GotoQuery::RotatorField(target.to_string())).await
    }
}

use async_trait::async_trait;
use reqwest::Client;
use zenith_core::{EquatorialCoordinate, HorizontalCoordinate, MountStatus};
use zenith_ports::{HardwareResult, MountControl};

use super::dispatch::report;
use crate::messages::GotoQuery;
use crate::transport::{Endpoints, HardwareClient, HardwareConfig};

/// Telescope mount over the hardware control API
#[derive(Debug, Clone)]
pub struct MountClient {
    http: HardwareClient,
    immediate: bool,
}

impl MountClient {
    pub fn new(config: &HardwareConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &HardwareConfig) -> Self {
        Self {
            http: HardwareClient::with_client(client, &config.url, Endpoints::MOUNT),
            immediate: config.immediate,
        }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Enable and connect when configured to start immediately
    pub async fn start(&self) {
        if !self.immediate {
            return;
        }
        log::info!("starting mount at {}", self.base_url());
        report("mount enable", self.enable().await);
        report("mount connect", self.connect().await);
    }

    /// Stop any motion and disconnect
    pub async fn shutdown(&self) {
        log::info!("shutting down mount at {}", self.base_url());
        report("mount stop", self.stop().await);
        report("mount disconnect", self.disconnect().await);
    }

    async fn goto(&self, query: GotoQuery) -> HardwareResult<MountStatus> {
        Ok(self.http.query(query.path(), &query.params()).await?)
    }
}

#[async_trait]
impl MountControl for MountClient {
    async fn connect(&self) -> HardwareResult<()> {
        Ok(self.http.command(Endpoints::CONNECT).await?)
    }

    async fn disconnect(&self) -> HardwareResult<()> {
        Ok(self.http.command(Endpoints::DISCONNECT).await?)
    }

    async fn enable(&self) -> HardwareResult<()> {
        Ok(self.http.command(Endpoints::ENABLE).await?)
    }

    async fn disable(&self) -> HardwareResult<()> {
        Ok(self.http.command(Endpoints::DISABLE).await?)
    }

    async fn stop(&self) -> HardwareResult<()> {
        Ok(self.http.command(Endpoints::STOP).await?)
    }

    async fn park(&self) -> HardwareResult<()> {
        Ok(self.http.command(Endpoints::PARK).await?)
    }

    async fn goto_equatorial(&self, target: EquatorialCoordinate) -> HardwareResult<MountStatus> {
        log::debug!("mount goto ra {} dec {}", target.ra, target.dec);
        self.goto(GotoQuery::Equatorial(target)).await
    }

    async fn goto_horizontal(&self, target: HorizontalCoordinate) -> HardwareResult<MountStatus> {
        log::debug!("mount goto alt {} az {}", target.alt, target.az);
        self.goto(GotoQuery::Horizontal(target)).await
    }
}

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::GatewayError;

/// GET client scoped to one device namespace
///
/// Infrastructure component: builds `{url}/{namespace}/{path}?{params}` and
/// handles the HTTP exchange.
#[derive(Debug, Clone)]
pub struct HardwareClient {
    client: Client,
    base_url: String,
}

impl HardwareClient {
    pub fn new(url: &str, namespace: &str) -> Self {
        Self::with_client(Client::new(), url, namespace)
    }

    /// Share a connection pool between devices
    pub fn with_client(client: Client, url: &str, namespace: &str) -> Self {
        HardwareClient {
            client,
            base_url: format!("{}/{}", url.trim_end_matches('/'), namespace),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str, params: &[(&str, String)]) -> Result<Url, GatewayError> {
        let raw = format!("{}/{}", self.base_url, path);
        let url = if params.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, params.iter())
        };
        url.map_err(|e| GatewayError::InvalidEndpoint(format!("{}: {}", raw, e)))
    }

    /// Fire a command whose response body carries nothing of interest
    pub async fn command(&self, path: &str) -> Result<(), GatewayError> {
        let url = self.endpoint(path, &[])?;
        log::debug!("GET {}", url);

        let resp = self.client.get(url.clone()).send().await?;
        Self::check_status(&url, &resp)?;
        Ok(())
    }

    /// GET with query parameters and decode the JSON response
    pub async fn query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, GatewayError> {
        let url = self.endpoint(path, params)?;
        log::debug!("GET {}", url);

        let resp = self
            .client
            .get(url.clone())
            .header("Content-Type", "application/json")
            .send()
            .await?;
        Self::check_status(&url, &resp)?;

        let text = resp.text().await?;
        serde_json::from_str(&text).map_err(|e| GatewayError::Parse(format!("{}: {}", url, e)))
    }

    fn check_status(url: &Url, resp: &reqwest::Response) -> Result<(), GatewayError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        Err(GatewayError::Status {
            endpoint: url.to_string(),
            status: status.as_u16(),
        })
    }
}

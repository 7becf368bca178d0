/// External API clients module
use crate::errors::UpstreamFailure;
use reqwest::Client;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client wrapper with common configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self, UpstreamFailure> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("nasa-apod-service/1.0")
            .build()?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// NASA Astronomy Picture of the Day client
#[derive(Clone)]
pub struct NasaClient {
    http_client: HttpClient,
    apod_url: String,
    api_key: String,
}

impl NasaClient {
    pub fn new(
        apod_url: String,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, UpstreamFailure> {
        Ok(Self {
            http_client: HttpClient::new(timeout)?,
            apod_url,
            api_key,
        })
    }

    /// Get APOD endpoint URL
    pub fn apod_url(&self) -> &str {
        &self.apod_url
    }

    /// Fetch APOD data. `api_key` is always sent; `params` only adds to it.
    ///
    /// Single attempt: non-2xx statuses, transport errors, timeouts and
    /// undecodable bodies all surface as [`UpstreamFailure`].
    pub async fn fetch_apod(
        &self,
        params: &Map<String, Value>,
    ) -> Result<Value, UpstreamFailure> {
        debug!(url = %self.apod_url, ?params, "requesting APOD");

        let result = self.send(params).await;
        if let Err(err) = &result {
            warn!(error = %err, "APOD request failed");
        }
        result
    }

    async fn send(&self, params: &Map<String, Value>) -> Result<Value, UpstreamFailure> {
        let resp = self
            .http_client
            .get_client()
            .get(&self.apod_url)
            .query(&[("api_key", &self.api_key)])
            .query(params)
            .send()
            .await?;

        debug!(status = %resp.status(), "APOD responded");

        let json = resp.error_for_status()?.json().await?;
        Ok(json)
    }
}

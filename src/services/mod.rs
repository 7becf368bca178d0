/// Business logic services layer
use crate::clients::NasaClient;
use crate::domain::{ApodParams, DisplayRecord};
use crate::errors::UpstreamFailure;
use serde_json::{Map, Value};

/// APOD lookups shared by the web and API entry points
pub struct ApodService {
    client: NasaClient,
}

impl ApodService {
    pub fn new(client: NasaClient) -> Self {
        Self { client }
    }

    /// Today's picture, normalized for display
    pub async fn today(&self) -> Result<DisplayRecord, UpstreamFailure> {
        let raw = self.client.fetch_apod(&Map::new()).await?;
        Ok(DisplayRecord::normalize(&raw))
    }

    /// Forward the allow-listed parameters and return the upstream JSON as-is
    pub async fn lookup(&self, params: &ApodParams) -> Result<Value, UpstreamFailure> {
        self.client.fetch_apod(&params.collect()).await
    }
}

//! HTTP client for the collector endpoint

use super::error::Result;
use super::payload::SubmissionPayload;
use crate::config::FormConfig;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Client that posts submissions to the collector
#[derive(Debug, Clone)]
pub struct CollectorClient {
    /// The HTTP client
    client: Client,
    /// The collector URL
    url: String,
}

impl CollectorClient {
    /// Create a new collector client from the resolved configuration
    pub fn new(config: &FormConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            url: config.collector_url(),
        })
    }

    /// The collector URL submissions are posted to
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Post one submission and parse the JSON reply.
    ///
    /// The status code is not a failure by itself: any reply whose body is
    /// JSON counts as accepted. Only network errors and non-JSON bodies fail.
    pub async fn submit(&self, payload: &SubmissionPayload) -> Result<serde_json::Value> {
        let body = payload.to_json()?;
        debug!("POST {} ({} bytes)", self.url, body.len());

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Collector replied with status {status}");
        }

        let text = response.text().await?;
        let data = serde_json::from_str(&text)?;
        Ok(data)
    }
}

//! HTTP prediction feed
//!
//! A single GET against the configured endpoint, no query parameters.
//! Failures are reported once; there is no retry.

use super::{FeedError, FeedSnapshot, PredictionFeed};
use crate::config::FeedConfig;
use crate::telemetry::{record_latency, LatencyMetric};
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};

/// Client for the prediction feed endpoint
pub struct HttpFeed {
    config: FeedConfig,
    client: Client,
}

impl HttpFeed {
    /// Create a feed client; the timeout applies only when configured
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self { config, client })
    }

    /// Endpoint this client fetches from
    pub fn url(&self) -> &str {
        &self.config.url
    }
}

#[async_trait]
impl PredictionFeed for HttpFeed {
    async fn fetch_all(&self) -> Result<FeedSnapshot, FeedError> {
        let started = Instant::now();

        tracing::debug!(url = %self.config.url, "Fetching predictions");

        let response = self.client.get(&self.config.url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        let snapshot = FeedSnapshot::decode(&body)?;

        record_latency(LatencyMetric::FeedFetch, started.elapsed());
        tracing::info!(
            records = snapshot.records.len(),
            rejected = snapshot.rejected,
            "Fetched predictions"
        );

        Ok(snapshot)
    }
}

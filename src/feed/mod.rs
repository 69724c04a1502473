//! Prediction feed module
//!
//! Fetches the full prediction record set once. Filtering happens locally
//! after the snapshot is retrieved.

mod file;
mod http;

pub use file::FileFeed;
pub use http::HttpFeed;

use crate::record::{decode_records, PredictionRecord};
use crate::telemetry::{record_stage, StageMetric};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;

/// Feed retrieval errors
#[derive(Debug, Error)]
pub enum FeedError {
    /// Endpoint unreachable or the request failed mid-flight
    #[error("Feed request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Endpoint answered with a non-success status
    #[error("Feed returned {status}: {body}")]
    Status { status: u16, body: String },
    /// Body is not valid JSON
    #[error("Feed body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    /// Body is JSON but not an array of records
    #[error("Feed body is a JSON {0}, expected an array of records")]
    NotAnArray(&'static str),
    /// Snapshot file could not be read
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// One complete retrieval of the record set
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    /// Valid records in feed order
    pub records: Vec<PredictionRecord>,
    /// Rows dropped as data-contract violations
    pub rejected: usize,
    /// When the snapshot was taken
    pub fetched_at: DateTime<Utc>,
}

impl FeedSnapshot {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Decode a feed body into a snapshot, dropping malformed rows
    pub fn decode(body: &[u8]) -> Result<Self, FeedError> {
        let value: serde_json::Value = serde_json::from_slice(body)?;
        let items = match value {
            serde_json::Value::Array(items) => items,
            serde_json::Value::Object(_) => return Err(FeedError::NotAnArray("object")),
            serde_json::Value::Null => return Err(FeedError::NotAnArray("null")),
            serde_json::Value::Bool(_) => return Err(FeedError::NotAnArray("boolean")),
            serde_json::Value::Number(_) => return Err(FeedError::NotAnArray("number")),
            serde_json::Value::String(_) => return Err(FeedError::NotAnArray("string")),
        };

        let decoded = decode_records(items);
        for rejection in &decoded.rejected {
            tracing::warn!(
                index = rejection.index,
                error = %rejection.error,
                "Dropping malformed prediction record"
            );
        }

        record_stage(StageMetric::FeedAccepted, decoded.records.len());
        record_stage(StageMetric::FeedRejected, decoded.rejected.len());

        Ok(Self {
            records: decoded.records,
            rejected: decoded.rejected.len(),
            fetched_at: Utc::now(),
        })
    }
}

/// Viewer-facing outcome of the fetch
#[derive(Debug)]
pub enum FeedState {
    /// Snapshot available; may be empty
    Ready(FeedSnapshot),
    /// Fetch failed; no partial data is shown
    Failed(FeedError),
}

impl FeedState {
    /// Fetch once and capture the outcome. No retry.
    pub async fn load(feed: &dyn PredictionFeed) -> Self {
        match feed.fetch_all().await {
            Ok(snapshot) => FeedState::Ready(snapshot),
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch predictions");
                FeedState::Failed(e)
            }
        }
    }

    pub fn snapshot(&self) -> Option<&FeedSnapshot> {
        match self {
            FeedState::Ready(snapshot) => Some(snapshot),
            FeedState::Failed(_) => None,
        }
    }
}

/// Trait for prediction feed implementations
#[async_trait]
pub trait PredictionFeed: Send + Sync {
    /// Retrieve the full record set
    async fn fetch_all(&self) -> Result<FeedSnapshot, FeedError>;
}

//! Snapshot file feed

use super::{FeedError, FeedSnapshot, PredictionFeed};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads a saved feed body from disk
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PredictionFeed for FileFeed {
    async fn fetch_all(&self) -> Result<FeedSnapshot, FeedError> {
        tracing::debug!(path = ?self.path, "Reading prediction snapshot");

        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FeedError::Io {
                path: self.path.clone(),
                source,
            })?;

        FeedSnapshot::decode(&body)
    }
}

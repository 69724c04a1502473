//! Selection arguments shared by the view commands

use crate::board::Board;
use crate::classify::AssetClass;
use crate::config::{Config, FeedConfig};
use crate::feed::{FeedSnapshot, FeedState, FileFeed, HttpFeed, PredictionFeed};
use crate::filter::RecencyWindow;
use crate::selection::{Selection, SymbolChoice};
use anyhow::Context;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Recency window: 1d, 7d or 30d
    #[arg(short, long)]
    pub window: Option<RecencyWindow>,

    /// Asset class: equity or crypto
    #[arg(long = "class")]
    pub asset_class: Option<AssetClass>,

    /// Symbol to show, or "all"; also selects the symbol's asset class
    #[arg(short, long)]
    pub symbol: Option<SymbolChoice>,

    /// Read a saved feed body instead of fetching
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Reference date for the recency window (defaults to today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

impl SelectionArgs {
    /// Replay the requested choices as selection events, in UI order
    pub fn selection(&self, config: &Config, board: &Board) -> Selection {
        let mut selection = Selection::with_window(config.view.default_window);

        if let Some(window) = self.window {
            selection.select_window(window);
        }
        if let Some(class) = self.asset_class {
            selection.select_asset_class(class);
        }
        if let Some(ref symbol) = self.symbol {
            selection.select_symbol(symbol.clone(), board.classifier());
        }

        selection
    }

    /// Date the recency window ends on
    pub fn today(&self) -> NaiveDate {
        self.as_of
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Fetch the snapshot once from the file or the configured endpoint
    pub async fn load(&self, config: &FeedConfig) -> anyhow::Result<FeedSnapshot> {
        let feed: Box<dyn PredictionFeed> = match self.input {
            Some(ref path) => Box::new(FileFeed::new(path.clone())),
            None => Box::new(HttpFeed::new(config.clone())?),
        };

        match FeedState::load(feed.as_ref()).await {
            FeedState::Ready(snapshot) => Ok(snapshot),
            FeedState::Failed(e) => Err(e).context("Could not load predictions"),
        }
    }
}

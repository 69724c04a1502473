//! prediction-board: presentation pipeline for price-prediction feeds
//!
//! This library provides the core components for:
//! - Decoding prediction records from the feed's JSON encoding
//! - Recency-window filtering
//! - Equity/crypto classification with configurable rules
//! - Viewer selection state (window, asset class, symbol, page)
//! - Per-timestamp series pivot for multi-line charts
//! - Table pagination
//! - Feed retrieval over HTTP or from a saved snapshot

pub mod board;
pub mod classify;
pub mod cli;
pub mod config;
pub mod feed;
pub mod filter;
pub mod paginate;
pub mod pivot;
pub mod record;
pub mod render;
pub mod selection;
pub mod telemetry;

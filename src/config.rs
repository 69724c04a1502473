//! Configuration types for prediction-board

use crate::classify::{AssetClass, DEFAULT_CRYPTO_PATTERN};
use crate::filter::RecencyWindow;
use crate::paginate::DEFAULT_PAGE_SIZE;
use crate::pivot::DEFAULT_MAX_POINTS;
use crate::record::Currency;
use crate::telemetry::LogFormat;
use serde::Deserialize;
use std::collections::HashMap;

/// Default prediction feed endpoint
pub const DEFAULT_FEED_URL: &str = "https://stock.glitched.dev/predictions";

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Prediction feed configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Endpoint returning the JSON record array
    #[serde(default = "default_feed_url")]
    pub url: String,

    /// Request timeout; unset means the request waits indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            timeout_secs: None,
        }
    }
}

/// Asset classification rule
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "rule", rename_all = "lowercase")]
pub enum ClassifierConfig {
    /// Crypto when the symbol contains `pattern`
    Contains {
        #[serde(default = "default_crypto_pattern")]
        pattern: String,
    },
    /// Crypto when the symbol ends with one of `suffixes`
    Suffix { suffixes: Vec<String> },
    /// Explicit registry; unlisted symbols get `fallback`
    Lookup {
        symbols: HashMap<String, AssetClass>,
        #[serde(default)]
        fallback: AssetClass,
    },
}

fn default_crypto_pattern() -> String {
    DEFAULT_CRYPTO_PATTERN.to_string()
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig::Contains {
            pattern: default_crypto_pattern(),
        }
    }
}

/// Table and chart presentation settings
#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    /// Rows per table page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Window selected at startup
    #[serde(default)]
    pub default_window: RecencyWindow,

    /// Most recent timestamps kept on the chart (0 = no cap)
    #[serde(default = "default_chart_max_points")]
    pub chart_max_points: usize,

    /// Currency plotted on the chart
    #[serde(default)]
    pub chart_currency: Currency,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
fn default_chart_max_points() -> usize {
    DEFAULT_MAX_POINTS
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_window: RecencyWindow::default(),
            chart_max_points: DEFAULT_MAX_POINTS,
            chart_currency: Currency::default(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

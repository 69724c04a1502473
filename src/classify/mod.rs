//! Asset classification
//!
//! Splits records into equities and crypto-assets with a declared,
//! swappable membership rule.

mod rules;

pub use rules::{ContainsRule, LookupRule, SuffixRule, DEFAULT_CRYPTO_PATTERN};

use crate::config::ClassifierConfig;
use crate::record::PredictionRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Mutually exclusive asset classes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    #[default]
    Equity,
    Crypto,
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetClass::Equity => f.write_str("equity"),
            AssetClass::Crypto => f.write_str("crypto"),
        }
    }
}

/// Error returned when parsing an unknown asset class name
#[derive(Debug, Clone, Error)]
#[error("unknown asset class '{0}' (expected equity or crypto)")]
pub struct UnknownAssetClass(pub String);

impl FromStr for AssetClass {
    type Err = UnknownAssetClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "equity" | "stock" | "stocks" => Ok(AssetClass::Equity),
            "crypto" => Ok(AssetClass::Crypto),
            _ => Err(UnknownAssetClass(s.to_string())),
        }
    }
}

/// A deterministic symbol → class membership rule
pub trait ClassificationRule: Send + Sync {
    /// Class for a symbol. Must be total: every symbol gets exactly one class.
    fn classify(&self, symbol: &str) -> AssetClass;
}

/// Records split by class, each side in input order
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Partition<'a> {
    pub equity: Vec<&'a PredictionRecord>,
    pub crypto: Vec<&'a PredictionRecord>,
}

impl<'a> Partition<'a> {
    /// Consume the partition, keeping one class
    pub fn into_class(self, class: AssetClass) -> Vec<&'a PredictionRecord> {
        match class {
            AssetClass::Equity => self.equity,
            AssetClass::Crypto => self.crypto,
        }
    }

    /// Total record count across both classes
    pub fn len(&self) -> usize {
        self.equity.len() + self.crypto.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classifier holding the active membership rule
pub struct AssetClassifier {
    rule: Box<dyn ClassificationRule>,
}

impl AssetClassifier {
    /// Create a classifier from any rule
    pub fn new(rule: impl ClassificationRule + 'static) -> Self {
        Self {
            rule: Box::new(rule),
        }
    }

    /// Build the rule declared in configuration
    pub fn from_config(config: &ClassifierConfig) -> Self {
        match config {
            ClassifierConfig::Contains { pattern } => Self::new(ContainsRule::new(pattern.clone())),
            ClassifierConfig::Suffix { suffixes } => Self::new(SuffixRule::new(suffixes.clone())),
            ClassifierConfig::Lookup { symbols, fallback } => {
                Self::new(LookupRule::new(symbols.clone(), *fallback))
            }
        }
    }

    /// Class of a single symbol
    pub fn classify(&self, symbol: &str) -> AssetClass {
        self.rule.classify(symbol)
    }

    /// Split records into equity and crypto, preserving order within each side
    pub fn partition<'a, I>(&self, records: I) -> Partition<'a>
    where
        I: IntoIterator<Item = &'a PredictionRecord>,
    {
        let mut partition = Partition::default();
        for record in records {
            match self.classify(&record.symbol) {
                AssetClass::Equity => partition.equity.push(record),
                AssetClass::Crypto => partition.crypto.push(record),
            }
        }
        partition
    }
}

impl Default for AssetClassifier {
    fn default() -> Self {
        Self::new(ContainsRule::default())
    }
}

impl fmt::Debug for AssetClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetClassifier").finish_non_exhaustive()
    }
}

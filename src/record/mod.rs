//! Prediction record model
//!
//! Canonical shape of one forecast-and-outcome row and the lenient decoder
//! for the feed's JSON encoding.

mod types;
mod wire;

pub use types::{
    Correctness, Currency, DisplayTimestamp, PredictionRecord, PricePair, Settlement,
    UnknownCurrency,
};
pub use wire::{decode_records, DecodedRecords, RawRecord, Rejection};

use thiserror::Error;

/// Data-contract violations that cause a single feed row to be dropped
#[derive(Debug, Error)]
pub enum RecordError {
    /// A required column is absent or blank
    #[error("missing required field {0}")]
    MissingField(&'static str),
    /// A column holds a value that cannot be parsed
    #[error("invalid {field}: '{value}'")]
    InvalidField { field: &'static str, value: String },
    /// Only one of the two actual-price columns is populated
    #[error("settled record is missing {0}")]
    PartialSettlement(&'static str),
    /// A correctness verdict on a row with no actual prices
    #[error("verdict '{0}' on an unsettled record")]
    VerdictWithoutSettlement(&'static str),
    /// The row is not a JSON object of the expected shape
    #[error("malformed record: {0}")]
    Malformed(String),
}

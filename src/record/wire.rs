//! Feed wire format
//!
//! The feed is a CSV sheet served as JSON, so unsettled cells show up as
//! `"Pending"`, `""` or `null`, and numeric columns that once held
//! `"Pending"` arrive as numeric strings. Everything is read leniently into
//! [`RawRecord`] first and validated into a [`PredictionRecord`] second.

use super::{
    Correctness, DisplayTimestamp, PredictionRecord, PricePair, RecordError, Settlement,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer};
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// One feed row as received, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Date", default, deserialize_with = "cell_text")]
    pub date: Option<String>,
    #[serde(rename = "Time", default, deserialize_with = "cell_text")]
    pub time: Option<String>,
    #[serde(rename = "Predicted_Time", default, deserialize_with = "cell_text")]
    pub predicted_time: Option<String>,
    #[serde(rename = "Predicted_Date", default, deserialize_with = "cell_text")]
    pub predicted_date: Option<String>,
    #[serde(rename = "Actual_Time", default, deserialize_with = "cell_text")]
    pub actual_time: Option<String>,
    #[serde(rename = "Stock", default, deserialize_with = "cell_text")]
    pub stock: Option<String>,
    #[serde(rename = "Predicted_Close", default, deserialize_with = "cell_price")]
    pub predicted_close: Option<Decimal>,
    #[serde(rename = "Predicted_Close_GBP", default, deserialize_with = "cell_price")]
    pub predicted_close_gbp: Option<Decimal>,
    #[serde(rename = "Actual_Close", default, deserialize_with = "cell_price")]
    pub actual_close: Option<Decimal>,
    #[serde(rename = "Actual_Close_GBP", default, deserialize_with = "cell_price")]
    pub actual_close_gbp: Option<Decimal>,
    #[serde(rename = "Correct", default, deserialize_with = "cell_correctness")]
    pub correct: Correctness,
}

/// A row the decoder refused, with its position in the feed array
#[derive(Debug)]
pub struct Rejection {
    /// Index in the feed array
    pub index: usize,
    /// Why the row was rejected
    pub error: RecordError,
}

/// Result of decoding a whole feed array
#[derive(Debug, Default)]
pub struct DecodedRecords {
    /// Valid records, feed order preserved
    pub records: Vec<PredictionRecord>,
    /// Rows dropped as contract violations
    pub rejected: Vec<Rejection>,
}

/// Decode every element of a feed array, keeping valid rows and collecting rejects
pub fn decode_records(items: Vec<serde_json::Value>) -> DecodedRecords {
    let mut decoded = DecodedRecords::default();

    for (index, item) in items.into_iter().enumerate() {
        let parsed = RawRecord::deserialize(item)
            .map_err(|e| RecordError::Malformed(e.to_string()))
            .and_then(PredictionRecord::try_from);

        match parsed {
            Ok(record) => decoded.records.push(record),
            Err(error) => decoded.rejected.push(Rejection { index, error }),
        }
    }

    decoded
}

impl TryFrom<RawRecord> for PredictionRecord {
    type Error = RecordError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let symbol = raw.stock.ok_or(RecordError::MissingField("Stock"))?;
        let date = parse_date("Date", required("Date", raw.date)?)?;
        let time = parse_time("Time", required("Time", raw.time)?)?;
        let predicted_time =
            parse_datetime("Predicted_Time", required("Predicted_Time", raw.predicted_time)?)?;
        let predicted_date = raw
            .predicted_date
            .map(|d| parse_date("Predicted_Date", d))
            .transpose()?;

        let predicted_close = PricePair {
            usd: raw
                .predicted_close
                .ok_or(RecordError::MissingField("Predicted_Close"))?,
            gbp: raw
                .predicted_close_gbp
                .ok_or(RecordError::MissingField("Predicted_Close_GBP"))?,
        };

        let settlement = match (raw.actual_close, raw.actual_close_gbp) {
            (None, None) if raw.correct != Correctness::Undetermined => {
                return Err(RecordError::VerdictWithoutSettlement(raw.correct.symbol()))
            }
            (None, None) => None,
            (Some(usd), Some(gbp)) => Some(Settlement {
                actual_time: raw
                    .actual_time
                    .map(|t| parse_datetime("Actual_Time", t))
                    .transpose()?,
                actual_close: PricePair { usd, gbp },
            }),
            (Some(_), None) => return Err(RecordError::PartialSettlement("Actual_Close_GBP")),
            (None, Some(_)) => return Err(RecordError::PartialSettlement("Actual_Close")),
        };

        Ok(PredictionRecord {
            symbol,
            timestamp: DisplayTimestamp::new(date, time),
            predicted_time,
            predicted_date,
            predicted_close,
            settlement,
            correctness: raw.correct,
        })
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, RecordError> {
    value.ok_or(RecordError::MissingField(field))
}

fn invalid(field: &'static str, value: String) -> RecordError {
    RecordError::InvalidField { field, value }
}

fn parse_date(field: &'static str, value: String) -> Result<NaiveDate, RecordError> {
    NaiveDate::parse_from_str(&value, DATE_FORMAT).map_err(|_| invalid(field, value))
}

fn parse_time(field: &'static str, value: String) -> Result<NaiveTime, RecordError> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&value, fmt).ok())
        .ok_or_else(|| invalid(field, value))
}

fn parse_datetime(field: &'static str, value: String) -> Result<NaiveDateTime, RecordError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(&value) {
        return Ok(dt.naive_local());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&value, fmt).ok())
        .ok_or_else(|| invalid(field, value))
}

/// True for the placeholders the feed uses for "no value yet"
fn is_placeholder(text: &str) -> bool {
    text.is_empty() || text.eq_ignore_ascii_case("pending")
}

fn cell_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !is_placeholder(s)))
}

fn cell_price<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MaybePrice {
        Price(Decimal),
        Text(String),
    }

    match Option::<MaybePrice>::deserialize(deserializer)? {
        None => Ok(None),
        Some(MaybePrice::Price(p)) => Ok(Some(p)),
        Some(MaybePrice::Text(s)) => {
            let trimmed = s.trim();
            if is_placeholder(trimmed) {
                return Ok(None);
            }
            Decimal::from_str(trimmed)
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid price '{}'", trimmed)))
        }
    }
}

fn cell_correctness<'de, D>(deserializer: D) -> Result<Correctness, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MaybeVerdict {
        Flag(bool),
        Text(String),
    }

    match Option::<MaybeVerdict>::deserialize(deserializer)? {
        None => Ok(Correctness::Undetermined),
        Some(MaybeVerdict::Flag(true)) => Ok(Correctness::Correct),
        Some(MaybeVerdict::Flag(false)) => Ok(Correctness::Incorrect),
        Some(MaybeVerdict::Text(s)) => match s.trim().to_lowercase().as_str() {
            "✅" | "correct" | "true" | "yes" => Ok(Correctness::Correct),
            "❌" | "incorrect" | "false" | "no" => Ok(Correctness::Incorrect),
            "" | "?" | "pending" => Ok(Correctness::Undetermined),
            other => Err(de::Error::custom(format!("invalid correctness '{}'", other))),
        },
    }
}

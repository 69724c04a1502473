//! Pivoted chart rows

use crate::record::DisplayTimestamp;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Key of the timestamp field in a serialized row
pub const TIMESTAMP_KEY: &str = "timestamp";

/// Field name for a symbol's predicted series
pub fn predicted_label(symbol: &str) -> String {
    format!("{} - Predicted", symbol)
}

/// Field name for a symbol's actual series
pub fn actual_label(symbol: &str) -> String {
    format!("{} - Actual", symbol)
}

/// Predicted/actual pair for one symbol at one timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesPoint {
    pub predicted: Decimal,
    /// `None` while the record is unsettled
    pub actual: Option<Decimal>,
}

/// One chart row: a timestamp and every symbol present at it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesRow {
    pub timestamp: DisplayTimestamp,
    /// Symbol → values, symbols in lexical order
    pub series: BTreeMap<String, SeriesPoint>,
}

impl SeriesRow {
    /// Predicted value of a symbol at this timestamp
    pub fn predicted(&self, symbol: &str) -> Option<Decimal> {
        self.series.get(symbol).map(|p| p.predicted)
    }

    /// Actual value of a symbol at this timestamp
    pub fn actual(&self, symbol: &str) -> Option<Decimal> {
        self.series.get(symbol).and_then(|p| p.actual)
    }
}

/// Serializes as a flat object:
/// `{"timestamp": "...", "<symbol> - Predicted": n, "<symbol> - Actual": n | null}`
impl Serialize for SeriesRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.series.len() * 2))?;
        map.serialize_entry(TIMESTAMP_KEY, &self.timestamp.to_string())?;
        for (symbol, point) in &self.series {
            map.serialize_entry(&predicted_label(symbol), &point.predicted.to_f64())?;
            map.serialize_entry(&actual_label(symbol), &point.actual.and_then(|a| a.to_f64()))?;
        }
        map.end()
    }
}

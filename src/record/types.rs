//! Prediction record types

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two feed currencies a price is quoted in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// Primary currency (`Predicted_Close` / `Actual_Close`)
    #[default]
    Usd,
    /// Secondary currency (`Predicted_Close_GBP` / `Actual_Close_GBP`)
    Gbp,
}

impl Currency {
    /// Currency sign used in table cells
    pub fn sign(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Gbp => "£",
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "usd" => Ok(Currency::Usd),
            "gbp" => Ok(Currency::Gbp),
            _ => Err(UnknownCurrency(s.to_string())),
        }
    }
}

/// Error returned when parsing an unsupported currency name
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown currency '{0}' (expected usd or gbp)")]
pub struct UnknownCurrency(pub String);

/// Outcome of a settled prediction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Correctness {
    /// Prediction landed within the upstream tolerance
    Correct,
    /// Prediction missed
    Incorrect,
    /// Not yet settled
    #[default]
    Undetermined,
}

impl Correctness {
    /// Table cell for this outcome
    pub fn symbol(&self) -> &'static str {
        match self {
            Correctness::Correct => "✅",
            Correctness::Incorrect => "❌",
            Correctness::Undetermined => "Pending",
        }
    }
}

/// Record timestamp formed by the `Date` and `Time` pair.
///
/// Ordering is chronological, which makes this the grouping and sort key for
/// both the chart and the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayTimestamp(NaiveDateTime);

impl DisplayTimestamp {
    /// Build from a calendar date and intraday time
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self(date.and_time(time))
    }

    /// Calendar date part
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// Intraday time part
    pub fn time(&self) -> NaiveTime {
        self.0.time()
    }

    /// Underlying naive datetime
    pub fn as_datetime(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for DisplayTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.second() == 0 {
            write!(f, "{}", self.0.format("%Y-%m-%d %H:%M"))
        } else {
            write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
        }
    }
}

/// A closing price pair in both feed currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricePair {
    /// Price in USD
    pub usd: Decimal,
    /// Price in GBP
    pub gbp: Decimal,
}

impl PricePair {
    /// Price in the requested currency
    pub fn in_currency(&self, currency: Currency) -> Decimal {
        match currency {
            Currency::Usd => self.usd,
            Currency::Gbp => self.gbp,
        }
    }
}

/// Settled half of a record, present only once the outcome is observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// When the actual price was observed
    pub actual_time: Option<NaiveDateTime>,
    /// Observed closing price
    pub actual_close: PricePair,
}

/// One forecast-and-outcome unit from the prediction feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRecord {
    /// Instrument symbol (e.g. "AAPL", "BTCUSD")
    pub symbol: String,
    /// Display timestamp (`Date` + `Time`)
    pub timestamp: DisplayTimestamp,
    /// When the prediction was generated
    pub predicted_time: NaiveDateTime,
    /// Trading day the forecast targets, when the feed provides it
    pub predicted_date: Option<NaiveDate>,
    /// Forecast closing price
    pub predicted_close: PricePair,
    /// Observed outcome, `None` while pending
    pub settlement: Option<Settlement>,
    /// Upstream correctness verdict
    pub correctness: Correctness,
}

impl PredictionRecord {
    /// Create an unsettled record
    pub fn new(
        symbol: impl Into<String>,
        timestamp: DisplayTimestamp,
        predicted_close: PricePair,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            timestamp,
            predicted_time: timestamp.as_datetime(),
            predicted_date: None,
            predicted_close,
            settlement: None,
            correctness: Correctness::Undetermined,
        }
    }

    /// Attach an observed outcome
    pub fn settled(mut self, actual_close: PricePair, correctness: Correctness) -> Self {
        self.settlement = Some(Settlement {
            actual_time: None,
            actual_close,
        });
        self.correctness = correctness;
        self
    }

    /// Calendar date of the record
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Whether the outcome is still pending
    pub fn is_pending(&self) -> bool {
        self.settlement.is_none()
    }

    /// Forecast price in the given currency
    pub fn predicted(&self, currency: Currency) -> Decimal {
        self.predicted_close.in_currency(currency)
    }

    /// Observed price in the given currency, `None` while pending
    pub fn actual(&self, currency: Currency) -> Option<Decimal> {
        self.settlement
            .as_ref()
            .map(|s| s.actual_close.in_currency(currency))
    }
}

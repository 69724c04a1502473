//! Trailing recency window

use crate::record::PredictionRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Trailing window of whole calendar days
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecencyWindow {
    /// Today and yesterday
    #[serde(rename = "1d", alias = "last-1-day")]
    LastDay,
    /// Last seven days
    #[default]
    #[serde(rename = "7d", alias = "last-7-days")]
    LastWeek,
    /// Last thirty days
    #[serde(rename = "30d", alias = "last-30-days")]
    LastMonth,
}

impl RecencyWindow {
    /// All windows, narrowest first
    pub const ALL: [RecencyWindow; 3] = [
        RecencyWindow::LastDay,
        RecencyWindow::LastWeek,
        RecencyWindow::LastMonth,
    ];

    /// Window length in days
    pub fn days(&self) -> i64 {
        match self {
            RecencyWindow::LastDay => 1,
            RecencyWindow::LastWeek => 7,
            RecencyWindow::LastMonth => 30,
        }
    }

    /// Whether a record dated `date` falls inside the window ending `today`.
    ///
    /// Only the calendar-day distance counts; dates after `today` are outside.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        let age = (today - date).num_days();
        (0..=self.days()).contains(&age)
    }

    /// Records inside the window, input order preserved
    pub fn filter<'a, I>(&self, records: I, today: NaiveDate) -> Vec<&'a PredictionRecord>
    where
        I: IntoIterator<Item = &'a PredictionRecord>,
    {
        records
            .into_iter()
            .filter(|r| self.contains(r.date(), today))
            .collect()
    }
}

impl fmt::Display for RecencyWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecencyWindow::LastDay => "1d",
            RecencyWindow::LastWeek => "7d",
            RecencyWindow::LastMonth => "30d",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing an unknown window name
#[derive(Debug, Clone, Error)]
#[error("unknown recency window '{0}' (expected 1d, 7d or 30d)")]
pub struct UnknownWindow(pub String);

impl FromStr for RecencyWindow {
    type Err = UnknownWindow;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1d" | "last-1-day" => Ok(RecencyWindow::LastDay),
            "7d" | "last-7-days" => Ok(RecencyWindow::LastWeek),
            "30d" | "last-30-days" => Ok(RecencyWindow::LastMonth),
            _ => Err(UnknownWindow(s.to_string())),
        }
    }
}

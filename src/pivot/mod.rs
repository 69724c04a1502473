//! Series pivot
//!
//! Regroups row-per-record data into row-per-timestamp data with one
//! predicted/actual column pair per symbol, the shape a multi-line chart
//! consumes.

mod series;

pub use series::{actual_label, predicted_label, SeriesPoint, SeriesRow, TIMESTAMP_KEY};

use crate::record::{Currency, DisplayTimestamp, PredictionRecord};
use std::collections::BTreeMap;

/// Default number of most recent timestamps kept on the chart
pub const DEFAULT_MAX_POINTS: usize = 100;

/// Group-by-timestamp, widen-by-symbol pivot
#[derive(Debug, Clone, Copy)]
pub struct SeriesPivot {
    currency: Currency,
    max_points: Option<usize>,
}

impl Default for SeriesPivot {
    fn default() -> Self {
        Self::new(Currency::Usd)
    }
}

impl SeriesPivot {
    /// Pivot prices in the given currency, without a point cap
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            max_points: None,
        }
    }

    /// Keep only the latest `max` timestamps; 0 disables the cap
    pub fn with_max_points(mut self, max: usize) -> Self {
        self.max_points = (max > 0).then_some(max);
        self
    }

    /// Switch the plotted currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Pivot records into chronologically ordered rows.
    ///
    /// A repeated `(symbol, timestamp)` key keeps the values of the record
    /// seen last.
    pub fn pivot<'a, I>(&self, records: I) -> Vec<SeriesRow>
    where
        I: IntoIterator<Item = &'a PredictionRecord>,
    {
        let currency = self.currency;
        self.collect(records.into_iter().map(|r| {
            (
                r.timestamp,
                r.symbol.clone(),
                SeriesPoint {
                    predicted: r.predicted(currency),
                    actual: r.actual(currency),
                },
            )
        }))
    }

    /// Pivot already-pivoted rows again; rows that are already one per
    /// timestamp come back unchanged
    pub fn pivot_rows<'a, I>(&self, rows: I) -> Vec<SeriesRow>
    where
        I: IntoIterator<Item = &'a SeriesRow>,
    {
        self.collect(rows.into_iter().flat_map(|row| {
            row.series
                .iter()
                .map(move |(symbol, point)| (row.timestamp, symbol.clone(), *point))
        }))
    }

    fn collect<I>(&self, points: I) -> Vec<SeriesRow>
    where
        I: Iterator<Item = (DisplayTimestamp, String, SeriesPoint)>,
    {
        let mut grouped: BTreeMap<DisplayTimestamp, BTreeMap<String, SeriesPoint>> =
            BTreeMap::new();

        for (timestamp, symbol, point) in points {
            grouped.entry(timestamp).or_default().insert(symbol, point);
        }

        let skip = match self.max_points {
            Some(max) => grouped.len().saturating_sub(max),
            None => 0,
        };

        grouped
            .into_iter()
            .skip(skip)
            .map(|(timestamp, series)| SeriesRow { timestamp, series })
            .collect()
    }
}

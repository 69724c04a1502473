//! Derived view for one selection

use crate::paginate::Page;
use crate::pivot::SeriesRow;
use crate::record::{Currency, PredictionRecord};
use crate::selection::Selection;
use rust_decimal::Decimal;
use serde::Serialize;

const PENDING: &str = "Pending";

/// Everything a renderer needs for one selection
#[derive(Debug, Clone)]
pub struct BoardView<'a> {
    /// Selection the view was built for
    pub selection: Selection,
    /// Currency plotted on the chart
    pub currency: Currency,
    /// Current table page of the selected subset
    pub table: Page<&'a PredictionRecord>,
    /// Chronological chart rows for the selected subset
    pub chart: Vec<SeriesRow>,
    /// Symbols available for the selected window and class
    pub symbols: Vec<String>,
}

impl<'a> BoardView<'a> {
    /// No records match the selection. This is a valid state, not an error.
    pub fn is_empty(&self) -> bool {
        self.table.total_items == 0
    }

    /// Table page as display rows
    pub fn table_rows(&self) -> Page<TableRow> {
        self.table.clone().map(TableRow::from)
    }
}

/// One display-ready table row; unsettled cells read "Pending"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub date: String,
    pub time: String,
    pub symbol: String,
    pub predicted_usd: String,
    pub actual_usd: String,
    pub predicted_gbp: String,
    pub actual_gbp: String,
    pub correct: String,
}

fn money(currency: Currency, value: Option<Decimal>) -> String {
    match value {
        Some(v) => format!("{}{:.2}", currency.sign(), v),
        None => PENDING.to_string(),
    }
}

impl From<&PredictionRecord> for TableRow {
    fn from(record: &PredictionRecord) -> Self {
        Self {
            date: record.timestamp.date().format("%Y-%m-%d").to_string(),
            time: record.timestamp.time().format("%H:%M:%S").to_string(),
            symbol: record.symbol.clone(),
            predicted_usd: money(Currency::Usd, Some(record.predicted(Currency::Usd))),
            actual_usd: money(Currency::Usd, record.actual(Currency::Usd)),
            predicted_gbp: money(Currency::Gbp, Some(record.predicted(Currency::Gbp))),
            actual_gbp: money(Currency::Gbp, record.actual(Currency::Gbp)),
            correct: record.correctness.symbol().to_string(),
        }
    }
}

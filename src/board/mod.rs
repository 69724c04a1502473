//! Presentation pipeline
//!
//! Recency filter → asset classifier → symbol filter → {series pivot, paginator}.
//! Every view is re-derived from the snapshot; nothing is cached between
//! selection changes.

mod view;

pub use view::{BoardView, TableRow};

use crate::classify::{AssetClass, AssetClassifier};
use crate::config::{Config, ViewConfig};
use crate::filter::RecencyWindow;
use crate::paginate::Paginator;
use crate::pivot::SeriesPivot;
use crate::record::{Currency, PredictionRecord};
use crate::selection::Selection;
use crate::telemetry::{record_latency, record_stage, LatencyMetric, StageMetric};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::time::Instant;

/// Pipeline configuration shared by every view
#[derive(Debug)]
pub struct Board {
    classifier: AssetClassifier,
    paginator: Paginator,
    pivot: SeriesPivot,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(AssetClassifier::default(), &ViewConfig::default())
    }
}

impl Board {
    pub fn new(classifier: AssetClassifier, view: &ViewConfig) -> Self {
        Self {
            classifier,
            paginator: Paginator::new(view.page_size),
            pivot: SeriesPivot::new(view.chart_currency).with_max_points(view.chart_max_points),
        }
    }

    /// Build the classifier and view settings declared in configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(AssetClassifier::from_config(&config.classifier), &config.view)
    }

    /// Plot a different currency on the chart
    pub fn with_chart_currency(mut self, currency: Currency) -> Self {
        self.pivot = self.pivot.with_currency(currency);
        self
    }

    pub fn classifier(&self) -> &AssetClassifier {
        &self.classifier
    }

    /// Records of one class inside a window, feed order preserved
    fn windowed_class<'a>(
        &self,
        records: &'a [PredictionRecord],
        window: RecencyWindow,
        class: AssetClass,
        today: NaiveDate,
    ) -> Vec<&'a PredictionRecord> {
        let recent = window.filter(records, today);
        record_stage(StageMetric::WindowKept, recent.len());
        self.classifier.partition(recent).into_class(class)
    }

    /// Selected subset: window, class and symbol filters applied, sorted by
    /// display timestamp (stable, so equal timestamps keep feed order)
    pub fn selected<'a>(
        &self,
        records: &'a [PredictionRecord],
        selection: &Selection,
        today: NaiveDate,
    ) -> Vec<&'a PredictionRecord> {
        let mut selected: Vec<&PredictionRecord> = self
            .windowed_class(records, selection.window(), selection.asset_class(), today)
            .into_iter()
            .filter(|r| selection.symbol().matches(&r.symbol))
            .collect();
        selected.sort_by_key(|r| r.timestamp);

        record_stage(StageMetric::Selected, selected.len());
        selected
    }

    /// Distinct symbols of a class inside a window, sorted
    pub fn symbols(
        &self,
        records: &[PredictionRecord],
        window: RecencyWindow,
        class: AssetClass,
        today: NaiveDate,
    ) -> Vec<String> {
        self.windowed_class(records, window, class, today)
            .into_iter()
            .map(|r| r.symbol.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Table page, chart rows and symbol options for the current selection
    pub fn view<'a>(
        &self,
        records: &'a [PredictionRecord],
        selection: &Selection,
        today: NaiveDate,
    ) -> BoardView<'a> {
        let started = Instant::now();

        let selected = self.selected(records, selection, today);
        let chart = self.pivot.pivot(selected.iter().copied());
        record_stage(StageMetric::ChartRows, chart.len());

        let table = self.paginator.page(&selected, selection.page());
        let symbols = self.symbols(records, selection.window(), selection.asset_class(), today);

        record_latency(LatencyMetric::ViewBuild, started.elapsed());

        BoardView {
            selection: selection.clone(),
            currency: self.pivot.currency(),
            table,
            chart,
            symbols,
        }
    }
}

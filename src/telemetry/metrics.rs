//! Pipeline metrics
//!
//! Recorded as structured debug events under stable metric names.

use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// Full feed fetch and decode
    FeedFetch,
    /// One pipeline recomputation (filter, classify, pivot, paginate)
    ViewBuild,
}

/// Pipeline stages whose output sizes are tracked
#[derive(Debug, Clone, Copy)]
pub enum StageMetric {
    /// Records accepted from the feed
    FeedAccepted,
    /// Feed rows rejected as malformed
    FeedRejected,
    /// Records inside the recency window
    WindowKept,
    /// Records in the selected subset
    Selected,
    /// Rows produced by the series pivot
    ChartRows,
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let metric_name = match metric {
        LatencyMetric::FeedFetch => "board_feed_fetch_latency_ms",
        LatencyMetric::ViewBuild => "board_view_build_latency_ms",
    };

    tracing::debug!(
        metric = metric_name,
        value_ms = duration.as_millis(),
        "Recording latency"
    );
}

/// Record the output size of a pipeline stage
pub fn record_stage(metric: StageMetric, count: usize) {
    let metric_name = match metric {
        StageMetric::FeedAccepted => "board_feed_records_accepted",
        StageMetric::FeedRejected => "board_feed_records_rejected",
        StageMetric::WindowKept => "board_window_records",
        StageMetric::Selected => "board_selected_records",
        StageMetric::ChartRows => "board_chart_rows",
    };

    tracing::debug!(metric = metric_name, value = count, "Recording stage size");
}

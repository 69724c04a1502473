//! Integration tests for the presentation pipeline

use chrono::{Duration, NaiveDate};
use prediction_board::board::Board;
use prediction_board::classify::AssetClass;
use prediction_board::feed::FeedSnapshot;
use prediction_board::filter::RecencyWindow;
use prediction_board::pivot::SeriesPivot;
use prediction_board::selection::{Selection, SymbolChoice};
use rust_decimal_macros::dec;
use serde_json::json;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

fn row(symbol: &str, days_ago: i64, time: &str, predicted: f64) -> serde_json::Value {
    let date = (today() - Duration::days(days_ago)).format("%Y-%m-%d").to_string();
    json!({
        "Date": date,
        "Time": time,
        "Predicted_Time": format!("{} {}", date, time),
        "Actual_Time": "Pending",
        "Stock": symbol,
        "Predicted_Close": predicted,
        "Predicted_Close_GBP": predicted * 0.78,
        "Actual_Close": "Pending",
        "Actual_Close_GBP": "Pending",
        "Correct": "Pending"
    })
}

fn snapshot(rows: Vec<serde_json::Value>) -> FeedSnapshot {
    FeedSnapshot::decode(serde_json::to_string(&rows).unwrap().as_bytes()).unwrap()
}

#[test]
fn test_duplicate_key_scenario() {
    let mut settled = row("AAPL", 0, "09:30:00", 151.0);
    settled["Actual_Close"] = json!(152);
    settled["Actual_Close_GBP"] = json!(118.56);
    settled["Correct"] = json!("✅");

    let snapshot = snapshot(vec![row("AAPL", 0, "09:30:00", 150.0), settled]);
    let board = Board::default();
    let view = board.view(&snapshot.records, &Selection::default(), today());

    assert_eq!(view.chart.len(), 1);
    let value = serde_json::to_value(&view.chart[0]).unwrap();
    assert_eq!(value["AAPL - Predicted"], 151.0);
    assert_eq!(value["AAPL - Actual"], 152.0);
}

#[test]
fn test_twenty_five_records_paginate() {
    let rows = (0..25)
        .map(|i| row("AAPL", i / 24, &format!("{:02}:00:00", i % 24), 100.0 + i as f64))
        .collect();
    let snapshot = snapshot(rows);
    let board = Board::default();

    let mut selection = Selection::default();
    selection.select_page(3);
    let view = board.view(&snapshot.records, &selection, today());
    assert_eq!(view.table.total_pages, 3);
    assert_eq!(view.table.items.len(), 5);

    selection.select_page(4);
    let view = board.view(&snapshot.records, &selection, today());
    assert!(view.table.items.is_empty());
    assert_eq!(view.table.total_pages, 3);
}

#[test]
fn test_selection_change_resets_stale_page() {
    let mut rows: Vec<serde_json::Value> = (0..25)
        .map(|i| row("AAPL", i / 24, &format!("{:02}:00:00", i % 24), 100.0))
        .collect();
    rows.push(row("BTCUSD", 0, "09:00:00", 60000.0));
    let snapshot = snapshot(rows);
    let board = Board::default();

    let mut selection = Selection::default();
    selection.select_page(3);
    selection.select_asset_class(AssetClass::Crypto);

    let view = board.view(&snapshot.records, &selection, today());
    assert_eq!(view.table.page, 1);
    assert_eq!(view.table.items.len(), 1);
    assert_eq!(view.table.items[0].symbol, "BTCUSD");
}

#[test]
fn test_select_symbol_switches_to_crypto() {
    let snapshot = snapshot(vec![
        row("AAPL", 0, "09:30:00", 150.0),
        row("BTCUSD", 0, "09:30:00", 60000.0),
    ]);
    let board = Board::default();

    let mut selection = Selection::default();
    assert_eq!(selection.asset_class(), AssetClass::Equity);
    selection.select_symbol(SymbolChoice::Only("BTCUSD".to_string()), board.classifier());
    assert_eq!(selection.asset_class(), AssetClass::Crypto);

    let view = board.view(&snapshot.records, &selection, today());
    assert_eq!(view.table.total_items, 1);
    assert_eq!(view.symbols, vec!["BTCUSD".to_string()]);
    assert_eq!(view.chart[0].predicted("BTCUSD"), Some(dec!(60000)));
    assert_eq!(view.chart[0].predicted("AAPL"), None);
}

#[test]
fn test_out_of_order_feed_renders_chronologically() {
    let snapshot = snapshot(vec![
        row("AAPL", 0, "15:00:00", 3.0),
        row("MSFT", 2, "09:30:00", 1.0),
        row("AAPL", 1, "09:30:00", 2.0),
        row("AAPL", 2, "09:30:00", 1.5),
    ]);
    let board = Board::default();
    let view = board.view(&snapshot.records, &Selection::default(), today());

    let stamps: Vec<String> = view.chart.iter().map(|r| r.timestamp.to_string()).collect();
    assert_eq!(
        stamps,
        vec!["2024-06-28 09:30", "2024-06-29 09:30", "2024-06-30 15:00"]
    );
    assert!(view
        .table
        .items
        .windows(2)
        .all(|w| w[0].timestamp <= w[1].timestamp));

    let repivoted = SeriesPivot::default().pivot_rows(&view.chart);
    assert_eq!(repivoted, view.chart);
}

#[test]
fn test_window_containment_across_snapshot() {
    let rows = [0, 1, 2, 5, 7, 8, 15, 30, 31, 60]
        .iter()
        .map(|d| row("AAPL", *d, "09:30:00", 100.0))
        .collect();
    let snapshot = snapshot(rows);
    let board = Board::default();

    let counts: Vec<usize> = RecencyWindow::ALL
        .iter()
        .map(|w| {
            let mut selection = Selection::default();
            selection.select_window(*w);
            board.selected(&snapshot.records, &selection, today()).len()
        })
        .collect();
    assert_eq!(counts, vec![2, 5, 8]);
}

#[test]
fn test_malformed_rows_do_not_reach_views() {
    let mut missing_symbol = row("AAPL", 0, "09:30:00", 1.0);
    missing_symbol.as_object_mut().unwrap().remove("Stock");

    let snapshot = snapshot(vec![row("AAPL", 0, "10:30:00", 2.0), missing_symbol]);
    assert_eq!(snapshot.rejected, 1);

    let view = Board::default().view(&snapshot.records, &Selection::default(), today());
    assert_eq!(view.table.total_items, 1);
}

#[test]
fn test_empty_feed_is_empty_view() {
    let snapshot = snapshot(vec![]);
    let view = Board::default().view(&snapshot.records, &Selection::default(), today());
    assert!(view.is_empty());
    assert!(view.chart.is_empty());
    assert!(view.symbols.is_empty());
}

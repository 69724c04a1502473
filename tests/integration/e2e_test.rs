//! End-to-end integration tests

use prediction_board::board::Board;
use prediction_board::classify::AssetClass;
use prediction_board::config::{ClassifierConfig, Config};
use prediction_board::feed::FeedSnapshot;
use prediction_board::filter::RecencyWindow;
use prediction_board::selection::{Selection, SymbolChoice};
use chrono::NaiveDate;

#[test]
fn test_config_example_parses() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert_eq!(config.view.page_size, 10);
    assert_eq!(config.view.default_window, RecencyWindow::LastWeek);
    assert_eq!(
        config.classifier,
        ClassifierConfig::Contains {
            pattern: "USD".to_string()
        }
    );
}

#[test]
fn test_lookup_rule_fixes_usd_equity() {
    // A USD-quoted equity that the substring heuristic gets wrong
    let config: Config = toml::from_str(
        r#"
        [classifier]
        rule = "lookup"
        fallback = "equity"

        [classifier.symbols]
        BTCUSD = "crypto"
        ETHUSD = "crypto"
    "#,
    )
    .unwrap();

    let body = r#"[
        {"Date": "2024-06-30", "Time": "09:30:00", "Predicted_Time": "2024-06-30 09:30:00",
         "Stock": "USDX", "Predicted_Close": 10, "Predicted_Close_GBP": 7.8},
        {"Date": "2024-06-30", "Time": "09:30:00", "Predicted_Time": "2024-06-30 09:30:00",
         "Stock": "BTCUSD", "Predicted_Close": 60000, "Predicted_Close_GBP": 46800}
    ]"#;
    let snapshot = FeedSnapshot::decode(body.as_bytes()).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();

    let board = Board::from_config(&config);
    let equity = board.symbols(
        &snapshot.records,
        RecencyWindow::LastDay,
        AssetClass::Equity,
        today,
    );
    assert_eq!(equity, vec!["USDX".to_string()]);

    let default_board = Board::default();
    let mut selection = Selection::default();
    selection.select_symbol(SymbolChoice::Only("USDX".to_string()), default_board.classifier());
    assert_eq!(selection.asset_class(), AssetClass::Crypto);
}

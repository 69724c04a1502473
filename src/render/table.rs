//! Text table formatting

use crate::board::TableRow;
use crate::paginate::Page;
use std::fmt::Write;

/// Shown when the selection matches nothing
pub const EMPTY_MESSAGE: &str = "No data available for the selected stock.";

const HEADERS: [&str; 8] = [
    "Date",
    "Time",
    "Stock",
    "Predicted (USD)",
    "Actual (USD)",
    "Predicted (GBP)",
    "Actual (GBP)",
    "Correct?",
];

fn cells(row: &TableRow) -> [&str; 8] {
    [
        row.date.as_str(),
        row.time.as_str(),
        row.symbol.as_str(),
        row.predicted_usd.as_str(),
        row.actual_usd.as_str(),
        row.predicted_gbp.as_str(),
        row.actual_gbp.as_str(),
        row.correct.as_str(),
    ]
}

/// Format a table page for CLI output
pub fn format_table(page: &Page<TableRow>) -> String {
    if page.total_items == 0 {
        return format!("{}\n", EMPTY_MESSAGE);
    }

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &page.items {
        for (width, cell) in widths.iter_mut().zip(cells(row)) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let line = |out: &mut String, values: [&str; 8]| {
        let padded: Vec<String> = values
            .iter()
            .zip(widths.iter())
            .map(|(v, w)| format!("{}{}", v, " ".repeat(w - v.chars().count())))
            .collect();
        let _ = writeln!(out, "{}", padded.join("  ").trim_end());
    };

    line(&mut out, HEADERS);
    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("  "));
    for row in &page.items {
        line(&mut out, cells(row));
    }

    let _ = writeln!(
        out,
        "\nPage {} of {} ({} predictions)",
        page.page, page.total_pages, page.total_items
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(symbol: &str) -> TableRow {
        TableRow {
            date: "2024-01-01".to_string(),
            time: "09:30:00".to_string(),
            symbol: symbol.to_string(),
            predicted_usd: "$150.00".to_string(),
            actual_usd: "Pending".to_string(),
            predicted_gbp: "£117.00".to_string(),
            actual_gbp: "Pending".to_string(),
            correct: "Pending".to_string(),
        }
    }

    #[test]
    fn test_format_empty() {
        let page: Page<TableRow> = Page {
            page: 1,
            total_pages: 0,
            total_items: 0,
            items: vec![],
        };
        assert_eq!(format_table(&page), format!("{}\n", EMPTY_MESSAGE));
    }

    #[test]
    fn test_format_rows() {
        let page = Page {
            page: 2,
            total_pages: 3,
            total_items: 25,
            items: vec![row("AAPL"), row("BTCUSD")],
        };
        let text = format_table(&page);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("Date"));
        assert!(lines[2].contains("AAPL"));
        assert!(lines[3].contains("BTCUSD"));
        assert!(text.contains("Page 2 of 3 (25 predictions)"));
    }

    #[test]
    fn test_page_past_end_still_reports_totals() {
        let page: Page<TableRow> = Page {
            page: 4,
            total_pages: 3,
            total_items: 25,
            items: vec![],
        };
        assert!(format_table(&page).contains("Page 4 of 3"));
    }
}

//! Viewer selection state machine

use crate::classify::{AssetClass, AssetClassifier};
use crate::filter::RecencyWindow;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Symbol filter: every symbol of the class, or one symbol
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolChoice {
    #[default]
    All,
    Only(String),
}

impl SymbolChoice {
    /// Whether a symbol passes this filter
    pub fn matches(&self, symbol: &str) -> bool {
        match self {
            SymbolChoice::All => true,
            SymbolChoice::Only(s) => s == symbol,
        }
    }
}

impl fmt::Display for SymbolChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolChoice::All => f.write_str("all"),
            SymbolChoice::Only(s) => f.write_str(s),
        }
    }
}

impl FromStr for SymbolChoice {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "all" {
            Ok(SymbolChoice::All)
        } else {
            Ok(SymbolChoice::Only(trimmed.to_string()))
        }
    }
}

/// Current window, asset class, symbol and table page.
///
/// Every selection event returns the table to page 1 so a page number
/// never outlives the record set it was chosen against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    window: RecencyWindow,
    asset_class: AssetClass,
    symbol: SymbolChoice,
    page: usize,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            window: RecencyWindow::LastWeek,
            asset_class: AssetClass::Equity,
            symbol: SymbolChoice::All,
            page: 1,
        }
    }
}

impl Selection {
    /// Initial state with a custom starting window
    pub fn with_window(window: RecencyWindow) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    pub fn window(&self) -> RecencyWindow {
        self.window
    }

    pub fn asset_class(&self) -> AssetClass {
        self.asset_class
    }

    pub fn symbol(&self) -> &SymbolChoice {
        &self.symbol
    }

    /// Current 1-based table page
    pub fn page(&self) -> usize {
        self.page
    }

    /// Change the recency window; class and symbol are kept
    pub fn select_window(&mut self, window: RecencyWindow) {
        self.window = window;
        self.page = 1;
    }

    /// Change the asset class; a symbol from the old class would be stale, so
    /// the symbol filter goes back to all
    pub fn select_asset_class(&mut self, class: AssetClass) {
        self.asset_class = class;
        self.symbol = SymbolChoice::All;
        self.page = 1;
    }

    /// Change the symbol filter; a specific symbol also fixes the asset class
    pub fn select_symbol(&mut self, symbol: SymbolChoice, classifier: &AssetClassifier) {
        if let SymbolChoice::Only(ref s) = symbol {
            self.asset_class = classifier.classify(s);
        }
        self.symbol = symbol;
        self.page = 1;
    }

    /// Move to a table page; page 0 is read as page 1
    pub fn select_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

//! CLI interface for prediction-board
//!
//! Provides subcommands for:
//! - `table`: Show a page of the prediction table
//! - `chart`: Emit the chart-ready series for the selection
//! - `symbols`: List symbols available for the selection
//! - `config`: Show configuration

mod chart;
mod selection;
mod symbols;
mod table;

pub use chart::ChartArgs;
pub use selection::SelectionArgs;
pub use symbols::SymbolsArgs;
pub use table::{OutputFormat, TableArgs};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "prediction-board")]
#[command(about = "Browse stock and crypto price predictions against actual closes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a page of the prediction table
    Table(TableArgs),
    /// Emit chart series as JSON
    Chart(ChartArgs),
    /// List symbols available for the selection
    Symbols(SymbolsArgs),
    /// Show configuration
    Config,
}

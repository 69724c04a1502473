//! Table command implementation

use super::SelectionArgs;
use crate::board::Board;
use crate::config::Config;
use crate::render::format_table;
use clap::{Args, ValueEnum};

/// Table output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    Table,
    /// JSON page object
    Json,
}

#[derive(Args, Debug)]
pub struct TableArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Table page, starting at 1
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Output format: table or json
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

impl TableArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let snapshot = self.selection.load(&config.feed).await?;
        let board = Board::from_config(config);

        let mut selection = self.selection.selection(config, &board);
        selection.select_page(self.page);

        let view = board.view(&snapshot.records, &selection, self.selection.today());
        let rows = view.table_rows();

        tracing::info!(
            window = %selection.window(),
            class = %selection.asset_class(),
            symbol = %selection.symbol(),
            page = rows.page,
            total_pages = rows.total_pages,
            "Rendering prediction table"
        );

        match self.format {
            OutputFormat::Table => print!("{}", format_table(&rows)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        }

        Ok(())
    }
}

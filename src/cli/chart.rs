//! Chart command implementation

use super::SelectionArgs;
use crate::board::Board;
use crate::config::Config;
use crate::record::Currency;
use crate::render::{ChartPayload, ChartSurface};
use clap::Args;

#[derive(Args, Debug)]
pub struct ChartArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Currency to plot: usd or gbp (defaults to the configured currency)
    #[arg(long)]
    pub currency: Option<Currency>,
}

impl ChartArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let snapshot = self.selection.load(&config.feed).await?;
        let mut board = Board::from_config(config);
        if let Some(currency) = self.currency {
            board = board.with_chart_currency(currency);
        }

        let selection = self.selection.selection(config, &board);
        let view = board.view(&snapshot.records, &selection, self.selection.today());

        tracing::info!(
            window = %selection.window(),
            class = %selection.asset_class(),
            symbol = %selection.symbol(),
            rows = view.chart.len(),
            "Rendering prediction chart"
        );

        let payload = ChartPayload::from_view(&view);
        let stdout = std::io::stdout();
        let mut surface = ChartSurface::new(stdout.lock());
        let mut ctx = surface.acquire();
        ctx.draw(&payload)?;
        ctx.present()?;

        Ok(())
    }
}

//! Symbols command implementation

use super::SelectionArgs;
use crate::board::Board;
use crate::config::Config;
use crate::render::EMPTY_MESSAGE;
use clap::Args;

#[derive(Args, Debug)]
pub struct SymbolsArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

impl SymbolsArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let snapshot = self.selection.load(&config.feed).await?;
        let board = Board::from_config(config);
        let selection = self.selection.selection(config, &board);

        let symbols = board.symbols(
            &snapshot.records,
            selection.window(),
            selection.asset_class(),
            self.selection.today(),
        );

        if symbols.is_empty() {
            println!("{}", EMPTY_MESSAGE);
            return Ok(());
        }

        println!("{} symbols ({}):", selection.asset_class(), selection.window());
        for symbol in symbols {
            println!("  {}", symbol);
        }

        Ok(())
    }
}

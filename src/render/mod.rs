//! Output for the excluded rendering layer
//!
//! Text tables for the terminal and the chart-ready JSON payload.

mod chart;
mod table;

pub use chart::{ChartContext, ChartPayload, ChartSurface};
pub use table::{format_table, EMPTY_MESSAGE};

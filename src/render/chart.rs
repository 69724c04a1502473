//! Chart payload and drawing context
//!
//! A [`ChartContext`] is acquired per render cycle and mutably borrows its
//! [`ChartSurface`], so a second context cannot exist until the first is
//! dropped. Frames are rebuilt from scratch on every draw.

use crate::board::BoardView;
use crate::pivot::SeriesRow;
use crate::record::Currency;
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::{self, Write};

/// Chart-ready structure handed to the renderer
#[derive(Debug, Serialize)]
pub struct ChartPayload<'v> {
    /// Currency of every plotted value
    pub currency: Currency,
    /// Symbols with a series on the chart
    pub symbols: Vec<&'v str>,
    /// One row per timestamp, oldest first
    pub rows: &'v [SeriesRow],
}

impl<'v> ChartPayload<'v> {
    pub fn from_view(view: &'v BoardView<'_>) -> Self {
        let symbols: BTreeSet<&str> = view
            .chart
            .iter()
            .flat_map(|row| row.series.keys().map(String::as_str))
            .collect();

        Self {
            currency: view.currency,
            symbols: symbols.into_iter().collect(),
            rows: &view.chart,
        }
    }
}

/// Output the chart is drawn into
pub struct ChartSurface<W: Write> {
    out: W,
    cycles: u64,
}

impl<W: Write> ChartSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, cycles: 0 }
    }

    /// Start a render cycle
    pub fn acquire(&mut self) -> ChartContext<'_, W> {
        self.cycles += 1;
        tracing::debug!(cycle = self.cycles, "Acquired chart context");
        ChartContext {
            surface: self,
            frame: Vec::new(),
        }
    }

    /// Number of render cycles started
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Drawing context for a single render cycle
pub struct ChartContext<'s, W: Write> {
    surface: &'s mut ChartSurface<W>,
    frame: Vec<u8>,
}

impl<'s, W: Write> ChartContext<'s, W> {
    /// Replace the frame with the given payload
    pub fn draw(&mut self, payload: &ChartPayload<'_>) -> serde_json::Result<()> {
        self.frame.clear();
        serde_json::to_writer_pretty(&mut self.frame, payload)
    }

    /// Write the frame to the surface and end the cycle
    pub fn present(mut self) -> io::Result<()> {
        let frame = std::mem::take(&mut self.frame);
        self.surface.out.write_all(&frame)?;
        self.surface.out.write_all(b"\n")?;
        self.surface.out.flush()
    }
}

impl<'s, W: Write> Drop for ChartContext<'s, W> {
    fn drop(&mut self) {
        tracing::debug!(cycle = self.surface.cycles, "Released chart context");
    }
}

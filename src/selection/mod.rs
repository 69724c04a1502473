//! Viewer selection
//!
//! Window, asset class and symbol choices with the consistency rules between them

mod state;

pub use state::{Selection, SymbolChoice};

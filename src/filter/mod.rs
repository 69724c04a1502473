//! Record filtering
//!
//! Narrows a feed snapshot to the records inside a trailing recency window

mod recency;

pub use recency::{RecencyWindow, UnknownWindow};

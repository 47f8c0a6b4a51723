//! Report module - terminal rendering and JSON export of analysis results

pub mod export;
pub mod heatmap;
pub mod preview;
pub mod ranking_table;
pub mod summary;

pub use export::*;
pub use heatmap::*;
pub use preview::*;
pub use ranking_table::*;
pub use summary::*;

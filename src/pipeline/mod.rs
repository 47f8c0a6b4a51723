//! Pipeline module - load, clean, correlate, rank

pub mod analysis;
pub mod cache;
pub mod cleaner;
pub mod correlation;
pub mod error;
pub mod loader;
pub mod ranking;
pub mod schema;

pub use analysis::*;
pub use cache::*;
pub use cleaner::*;
pub use correlation::*;
pub use error::*;
pub use loader::*;
pub use ranking::*;
pub use schema::*;

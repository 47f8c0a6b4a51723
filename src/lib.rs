//! fitcorr: Fitness Correlation Library
//!
//! Loads a CSV of fitness measurements, cleans it, and ranks every numeric
//! attribute by its Pearson correlation with body-fat percentage.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;

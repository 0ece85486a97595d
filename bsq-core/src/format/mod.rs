//! Text map format definitions
//!
//! A map is a header line `<rows><empty><obstacle><full>` followed by
//! `rows` lines of equal length drawn from the three-character legend.

pub mod constants;
pub mod header;

pub use header::{Legend, MapHeader};

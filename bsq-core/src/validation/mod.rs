//! Validation utilities for the map format
//!
//! This module contains pure validation functions with no I/O dependencies.

pub mod parsing;
pub mod rows;

pub use parsing::parse_row_count;
pub use rows::{validate_row, validate_row_length};

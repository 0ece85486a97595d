#![no_std]

//! BSQ Core - Biggest Square map format and solver
//!
//! This crate provides the map format, parser, solver and renderer for the
//! biggest-square problem. It performs no I/O: input is pulled through the
//! [`LineSource`] trait and output is returned as bytes.
//!
//! ```
//! use bsq_core::{parse_bytes, render, solve};
//!
//! let mut map = parse_bytes(b"3.o*\n...\n.o.\n...\n").unwrap();
//! let best = solve(&map);
//! assert_eq!(render(&mut map, &best), b"*..\n.o.\n...\n");
//! ```

extern crate alloc;

pub mod error;
pub mod format;
pub mod lines;
pub mod map;
pub mod parser;
pub mod render;
pub mod solver;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::{Legend, MapHeader};
pub use lines::SliceLines;
pub use map::Map;
pub use parser::{parse, parse_bytes};
pub use render::{paint, render};
pub use solver::{solve, BestSquare, DpTable};
pub use traits::LineSource;

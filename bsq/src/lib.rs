//! BSQ - Biggest Square solver
//!
//! Reads maps from files or standard input, finds the largest square of
//! empty cells in each and prints the map with that square filled in.
//!
//! ## Architecture
//!
//! - **bsq-core**: map format, parser, solver and renderer (no I/O)
//! - **bsq**: input sources, batch processing and the command-line tool
//!
//! ```rust,no_run
//! use bsq::{BatchRunner, Source};
//!
//! fn example() -> std::io::Result<()> {
//!     let sources = Source::from_paths(["map1.txt", "map2.txt"]);
//!     let mut runner = BatchRunner::new(std::io::stdout(), std::io::stderr());
//!     let summary = runner.run(&sources)?;
//!     println!("{} of {} maps solved", summary.succeeded, summary.total());
//!     Ok(())
//! }
//! ```

pub use bsq_core::{
    // Data model
    BestSquare, DpTable, Legend, Map,
    // Pipeline stages
    paint, parse, parse_bytes, render, solve,
    // Error handling
    FormatError,
    // Line sources
    LineSource, SliceLines,
};

pub mod batch;
pub mod error;
pub mod logging;
pub mod source;

pub use batch::{BatchRunner, FsLoader, MapLoader, RunSummary, MAP_ERROR};
pub use error::{BsqError, Result};
pub use source::{read_map, read_map_file, read_map_from, ReaderLines, Source};

//! Batch processing of several map sources
//!
//! Each source is parsed, solved and rendered on its own. A source that
//! fails produces a single `map error` line on the error sink and never stops
//! the sources after it.

use std::io::{self, Write};

use bsq_core::{render, solve, Map};
use log::debug;

use crate::source::{read_map, Source};
use crate::Result;

/// Line written for every source that cannot be solved
pub const MAP_ERROR: &str = "map error";

/// Loads the map behind a source
pub trait MapLoader {
    fn load(&mut self, source: &Source) -> Result<Map>;
}

/// Loader reading standard input and the filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl MapLoader for FsLoader {
    fn load(&mut self, source: &Source) -> Result<Map> {
        read_map(source)
    }
}

/// Outcome counts of one batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// Drives parse, solve and render over a list of sources
pub struct BatchRunner<O, E, L = FsLoader> {
    loader: L,
    out: O,
    err: E,
}

impl<O: Write, E: Write> BatchRunner<O, E, FsLoader> {
    /// Runner over the filesystem, writing maps to `out` and errors to `err`
    pub fn new(out: O, err: E) -> Self {
        Self::with_loader(FsLoader, out, err)
    }
}

impl<O: Write, E: Write, L: MapLoader> BatchRunner<O, E, L> {
    pub fn with_loader(loader: L, out: O, err: E) -> Self {
        Self { loader, out, err }
    }

    /// Process every source in order; no sources means standard input
    ///
    /// Only a failure to write output is returned as an error.
    pub fn run(&mut self, sources: &[Source]) -> io::Result<RunSummary> {
        let stdin = [Source::Stdin];
        let sources = if sources.is_empty() { &stdin[..] } else { sources };
        let mut summary = RunSummary::default();

        for source in sources {
            match self.process(source) {
                Ok(rendered) => {
                    if summary.succeeded > 0 {
                        self.out.write_all(b"\n")?;
                    }
                    self.out.write_all(&rendered)?;
                    self.out.flush()?;
                    summary.succeeded += 1;
                }
                Err(e) => {
                    debug!("{source}: {e}");
                    writeln!(self.err, "{MAP_ERROR}")?;
                    self.err.flush()?;
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Parse, solve and render one source
    pub fn process(&mut self, source: &Source) -> Result<Vec<u8>> {
        let mut map = self.loader.load(source)?;
        let (rows, cols) = map.dimensions();
        debug!("{source}: parsed {rows}x{cols} map");

        let best = solve(&map);
        if best.is_empty() {
            debug!("{source}: no empty cell, map left unchanged");
        } else {
            let (top, left) = best.top_left();
            debug!("{source}: square of size {} at ({top}, {left})", best.size);
        }

        Ok(render(&mut map, &best))
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

//! Input sources: standard input, buffered readers and memory-mapped files

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use bsq_core::format::constants::LINE_TERMINATOR;
use bsq_core::{parse, LineSource, Map};

use crate::{BsqError, Result};

/// Lines of any buffered reader
///
/// One line is held at a time; the buffer is reused between lines.
#[derive(Debug)]
pub struct ReaderLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    type Error = BsqError;

    fn next_line(&mut self) -> Result<Option<&[u8]>> {
        self.buf.clear();
        if self.reader.read_until(LINE_TERMINATOR, &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&LINE_TERMINATOR) {
            self.buf.pop();
        }
        Ok(Some(self.buf.as_slice()))
    }
}

/// Where a map is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    Path(PathBuf),
}

impl Source {
    /// Sources for the given paths, or standard input alone when there are none
    pub fn from_paths<I, P>(paths: I) -> Vec<Source>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let sources: Vec<Source> = paths
            .into_iter()
            .map(|p| Source::Path(p.into()))
            .collect();
        if sources.is_empty() {
            vec![Source::Stdin]
        } else {
            sources
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => write!(f, "<stdin>"),
            Source::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse one map from a buffered reader
pub fn read_map_from<R: BufRead>(reader: R) -> Result<Map> {
    parse(&mut ReaderLines::new(reader))
}

/// Parse one map from a file
///
/// Regular non-empty files are memory-mapped when the `mmap` feature is
/// enabled; anything else is read through a buffered reader.
pub fn read_map_file<P: AsRef<Path>>(path: P) -> Result<Map> {
    let file = File::open(path)?;

    #[cfg(feature = "mmap")]
    {
        if let Some(mmap) = mmap::map_regular_file(&file) {
            return Ok(bsq_core::parse_bytes(&mmap)?);
        }
    }

    read_map_from(BufReader::new(file))
}

/// Parse one map from a source
pub fn read_map(source: &Source) -> Result<Map> {
    match source {
        Source::Stdin => read_map_from(io::stdin().lock()),
        Source::Path(path) => read_map_file(path),
    }
}

#[cfg(feature = "mmap")]
mod mmap {
    use std::fs::File;

    use memmap2::{Mmap, MmapOptions};

    /// Map a regular, non-empty file; `None` when the file should be streamed
    pub(super) fn map_regular_file(file: &File) -> Option<Mmap> {
        let metadata = file.metadata().ok()?;
        if !metadata.is_file() || metadata.len() == 0 {
            return None;
        }

        // SAFETY: Read-only mapping, only borrowed while the map is parsed
        match unsafe { MmapOptions::new().map(file) } {
            Ok(mmap) => Some(mmap),
            Err(e) => {
                log::debug!("mmap failed, falling back to buffered read: {e}");
                None
            }
        }
    }
}

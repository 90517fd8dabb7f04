//! # Reject Sinks
//!
//! Where rejected records go: one fixed-width line per record, the raw
//! tokens followed by the diagnostic.
//!
//! ```text
//! AB12MP34       RX5                       1    17000.00 Invalid ID:    [ Car ID must be 9 characters long ]
//! └── 15 ──────┘└── 15 ──────┘└──── 12 ──┘└──── 12 ──┘
//! ```
//!
//! Two sinks exist: [`FileSink`] for real runs (the error file) and
//! [`MemorySink`] for tests and embedding. Both can be read back from the
//! start any number of times through [`RejectSink::lines`].

use std::fs::File;
use std::io::{BufRead, BufReader, LineWriter, Write};
use std::path::{Path, PathBuf};

use carlot_core::{RawRecord, Rejection};
use tracing::debug;

use crate::error::{IngestError, IngestResult};

/// Column width for ID and model.
pub const TEXT_WIDTH: usize = 15;

/// Column width for quantity and price.
pub const NUM_WIDTH: usize = 12;

/// Lines read back from a sink.
pub type SinkLines<'a> = Box<dyn Iterator<Item = IngestResult<String>> + 'a>;

/// Formats one rejected record as an error-file line.
pub fn format_reject_line(raw: &RawRecord, rejection: &Rejection) -> String {
    format!(
        "{:<tw$}{:<tw$}{:>nw$}{:>nw$} {}",
        raw.id,
        raw.model,
        raw.quantity,
        raw.price,
        rejection,
        tw = TEXT_WIDTH,
        nw = NUM_WIDTH
    )
}

/// Destination for rejected records.
pub trait RejectSink {
    /// Records one rejected line.
    fn write(&mut self, raw: &RawRecord, rejection: &Rejection) -> IngestResult<()>;

    /// Flushes anything buffered. Called once when ingest finishes.
    fn finish(&mut self) -> IngestResult<()> {
        Ok(())
    }

    /// Reads every recorded line, from the start.
    fn lines(&self) -> IngestResult<SinkLines<'_>>;
}

// =============================================================================
// File Sink
// =============================================================================

/// Writes rejects to a file, truncating it on creation.
///
/// Lines are flushed as they are written, so [`RejectSink::lines`] always
/// sees every complete line.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    writer: LineWriter<File>,
}

impl FileSink {
    /// Creates (or truncates) the error file.
    pub fn create(path: impl AsRef<Path>) -> IngestResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file =
            File::create(&path).map_err(|source| IngestError::sink_unavailable(&path, source))?;

        debug!(path = %path.display(), "Error file created");

        Ok(FileSink {
            path,
            writer: LineWriter::new(file),
        })
    }

    /// Path of the error file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RejectSink for FileSink {
    fn write(&mut self, raw: &RawRecord, rejection: &Rejection) -> IngestResult<()> {
        writeln!(self.writer, "{}", format_reject_line(raw, rejection))
            .map_err(IngestError::SinkWrite)
    }

    fn finish(&mut self) -> IngestResult<()> {
        self.writer.flush().map_err(IngestError::SinkWrite)
    }

    fn lines(&self) -> IngestResult<SinkLines<'_>> {
        let file = File::open(&self.path)
            .map_err(|source| IngestError::sink_unavailable(&self.path, source))?;

        Ok(Box::new(
            BufReader::new(file)
                .lines()
                .map(|line| line.map_err(IngestError::SinkRead)),
        ))
    }
}

// =============================================================================
// Memory Sink
// =============================================================================

/// Keeps rejects in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink::default()
    }

    /// Number of recorded lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl RejectSink for MemorySink {
    fn write(&mut self, raw: &RawRecord, rejection: &Rejection) -> IngestResult<()> {
        self.lines.push(format_reject_line(raw, rejection));
        Ok(())
    }

    fn lines(&self) -> IngestResult<SinkLines<'_>> {
        Ok(Box::new(self.lines.iter().cloned().map(Ok)))
    }
}

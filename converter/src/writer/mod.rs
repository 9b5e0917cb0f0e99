//! NeoDen4 CSV writer.
//!
//! Emits the header row and the blank marker row the NeoDen importer
//! expects, then one record per converted row.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{WriteError, WriteResult};
use crate::transform::fields::{target_fields, FIELD_MAP};
use crate::transform::row::OutputRow;

/// Streams NeoDen records to an underlying writer.
pub struct NeodenWriter<W: Write> {
    inner: csv::Writer<W>,
    rows: usize,
}

impl NeodenWriter<BufWriter<File>> {
    /// Create (or truncate) the output file and write the preamble.
    pub fn create<P: AsRef<Path>>(path: P) -> WriteResult<Self> {
        let file = File::create(path.as_ref())?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> NeodenWriter<W> {
    /// Wrap a writer and emit the header and blank marker rows.
    pub fn new(writer: W) -> WriteResult<Self> {
        let mut inner = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(writer);

        inner.write_record(target_fields())?;
        inner.write_record(std::iter::repeat("").take(FIELD_MAP.len()))?;

        Ok(Self { inner, rows: 0 })
    }

    /// Append one converted row.
    pub fn write_row(&mut self, row: &OutputRow) -> WriteResult<()> {
        self.inner.write_record(row.values())?;
        self.rows += 1;
        Ok(())
    }

    /// Data rows written so far (header and marker excluded).
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Push buffered records through to the underlying writer.
    pub fn flush(&mut self) -> WriteResult<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(self) -> WriteResult<W> {
        let mut writer = self.inner.into_inner().map_err(|e| {
            WriteError::Io(std::io::Error::new(e.error().kind(), e.error().to_string()))
        })?;
        writer.flush()?;
        Ok(writer)
    }
}

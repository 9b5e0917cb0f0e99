//! High-level conversion API: KiCad position file in, NeoDen4 CSV out.
//!
//! # Example
//!
//! ```rust,ignore
//! use kicad2neoden::convert_file;
//! use std::path::Path;
//!
//! let summary = convert_file(Path::new("board-all-pos.csv"), Path::new("neoden.csv"))?;
//! println!("Converted {} components", summary.rows);
//! ```

use serde::Serialize;
use std::io::{Read, Write};
use std::path::Path;

use super::fields::source_fields;
use super::row::convert_row;
use super::values::match_package;
use crate::error::PipelineResult;
use crate::parser::{parse_csv_file_auto, parse_reader, ParseResult};
use crate::writer::NeodenWriter;

/// What a conversion pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionSummary {
    /// Data rows written
    pub rows: usize,
    /// Detected input encoding
    pub encoding: String,
    /// Input column headers
    pub headers: Vec<String>,
    /// Footprints no package pattern recognized, in first-seen order
    pub unmatched_packages: Vec<String>,
}

/// Convert a KiCad position file into a NeoDen4 CSV file.
///
/// The input is read and decoded before the output file is created. Rows are
/// then converted and written one at a time; on failure the output holds the
/// rows written before the offending one.
pub fn convert_file(input: &Path, output: &Path) -> PipelineResult<ConversionSummary> {
    tracing::info!(input = %input.display(), "reading position file");
    let parsed = parse_csv_file_auto(input)?;

    tracing::info!(output = %output.display(), "writing NeoDen file");
    let writer = NeodenWriter::create(output)?;
    convert_parsed(parsed, writer)
}

/// Convert a KiCad position stream into a NeoDen4 CSV stream.
pub fn convert_reader<R: Read, W: Write>(reader: R, output: W) -> PipelineResult<ConversionSummary> {
    let parsed = parse_reader(reader)?;
    let writer = NeodenWriter::new(output)?;
    convert_parsed(parsed, writer)
}

/// Internal: convert already-parsed rows into the writer
fn convert_parsed<W: Write>(
    parsed: ParseResult,
    mut writer: NeodenWriter<W>,
) -> PipelineResult<ConversionSummary> {
    tracing::info!(
        encoding = %parsed.encoding,
        rows = parsed.rows.len(),
        columns = %parsed.headers.join(", "),
        "parsed position file"
    );

    let missing: Vec<&str> = source_fields()
        .into_iter()
        .filter(|field| !parsed.headers.iter().any(|h| h == field))
        .collect();
    if !missing.is_empty() {
        tracing::warn!(missing = %missing.join(", "), "required columns absent from header");
    }

    let unmatched_packages = match write_rows(&parsed, &mut writer) {
        Ok(unmatched) => unmatched,
        Err(e) => {
            // Keep the rows converted so far in the output.
            writer.flush()?;
            return Err(e);
        }
    };

    let rows = writer.rows_written();
    writer.finish()?;

    tracing::info!(rows, unmatched = unmatched_packages.len(), "conversion complete");

    Ok(ConversionSummary {
        rows,
        encoding: parsed.encoding,
        headers: parsed.headers,
        unmatched_packages,
    })
}

/// Convert and write every row, returning the unrecognized footprints.
fn write_rows<W: Write>(
    parsed: &ParseResult,
    writer: &mut NeodenWriter<W>,
) -> PipelineResult<Vec<String>> {
    let mut unmatched_packages: Vec<String> = Vec::new();

    for row in &parsed.rows {
        let converted = convert_row(row)?;
        tracing::trace!(line = row.line, values = ?converted.values(), "converted row");

        if let Some(package) = row.get("Package") {
            if match_package(package).is_none() && !unmatched_packages.iter().any(|p| p == package) {
                tracing::warn!(line = row.line, package, "footprint not recognized, passing through");
                unmatched_packages.push(package.to_string());
            }
        }

        writer.write_row(&converted)?;
    }

    Ok(unmatched_packages)
}

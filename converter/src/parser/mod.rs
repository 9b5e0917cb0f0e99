//! KiCad position file reader with encoding auto-detection.
//!
//! Turns the raw bytes of a `.csv` position export into [`InputRow`]s keyed
//! by header name. No NeoDen-specific logic here.

use std::io::Read;
use std::path::Path;

use encoding_rs::Encoding;

use crate::error::{CsvError, CsvResult};
use crate::transform::row::InputRow;

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Data rows in file order
    pub rows: Vec<InputRow>,
    /// Detected encoding label
    pub encoding: String,
    /// Column headers
    pub headers: Vec<String>,
}

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 is taken as UTF-8; anything else is handed to chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "" | "ascii" | "utf-8" | "utf8" | "utf-8-sig" => "utf-8".to_string(),
        "iso-8859-1" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to string using the specified encoding label.
///
/// A leading byte order mark is dropped.
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    let decoded = match encoding {
        "utf-8" => match std::str::from_utf8(bytes) {
            Ok(s) => s.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "input is not valid UTF-8, decoding lossily");
                String::from_utf8_lossy(bytes).into_owned()
            }
        },
        label => {
            let encoding = Encoding::for_label(label.as_bytes())
                .ok_or_else(|| CsvError::Encoding(format!("unsupported encoding '{}'", label)))?;
            let (text, _, had_errors) = encoding.decode(bytes);
            if had_errors {
                tracing::warn!(encoding = label, "input contained undecodable bytes");
            }
            text.into_owned()
        }
    };

    Ok(match decoded.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => decoded,
    })
}

/// Parse decoded CSV text into rows.
///
/// Short records are accepted; their missing trailing columns are simply
/// absent from the row. Blank lines are skipped.
pub fn parse_str(content: &str) -> CsvResult<(Vec<String>, Vec<InputRow>)> {
    if content.trim().is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(CsvError::NoHeaders);
    }

    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result.map_err(parse_error)?;
        let line = record.position().map_or(0, |p| p.line() as usize);

        rows.push(InputRow::from_pairs(
            line,
            headers.iter().map(String::as_str).zip(record.iter()),
        ));
    }

    Ok((headers, rows))
}

/// Parse CSV bytes with auto-detection of encoding.
pub fn parse_bytes_auto(bytes: &[u8]) -> CsvResult<ParseResult> {
    if bytes.is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    let (headers, rows) = parse_str(&content)?;

    Ok(ParseResult {
        rows,
        encoding,
        headers,
    })
}

/// Parse a CSV stream with auto-detection of encoding.
pub fn parse_reader<R: Read>(mut reader: R) -> CsvResult<ParseResult> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse_bytes_auto(&bytes)
}

/// Parse a KiCad position file with auto-detection of encoding.
pub fn parse_csv_file_auto<P: AsRef<Path>>(path: P) -> CsvResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes_auto(&bytes)
}

fn parse_error(err: csv::Error) -> CsvError {
    CsvError::Parse {
        line: err.position().map_or(0, |p| p.line() as usize),
        message: err.to_string(),
    }
}

//! # kicad2neoden - KiCad position file to NeoDen4 CSV
//!
//! Converts the pick-and-place position export of KiCad into the layout the
//! NeoDen4 machine's CSV importer expects.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  KiCad .pos │────▶│   Parser    │────▶│  Transform  │────▶│ NeoDen4 CSV │
//! │  (ISO/UTF8) │     │  (auto-enc) │     │ (field map) │     │  (+marker)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kicad2neoden::convert_file;
//! use std::path::Path;
//!
//! let summary = convert_file(Path::new("board-all-pos.csv"), Path::new("neoden.csv")).unwrap();
//! println!("Converted {} components", summary.rows);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`parser`] - CSV reading with encoding detection
//! - [`transform`] - Field mapping, value transforms and pipeline
//! - [`writer`] - NeoDen4 CSV output
//! - [`logging`] - Subscriber setup

// Core modules
pub mod error;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod writer;

pub mod logging;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    CsvError,
    PipelineError,
    PipelineResult,
    TransformError,
    ValueError,
    WriteError,
};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    decode_content,
    detect_encoding,
    parse_bytes_auto,
    parse_csv_file_auto,
    parse_reader,
    ParseResult,
};

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::{
    convert_file,
    convert_reader,
    convert_row,
    format_package,
    format_position,
    format_rotation,
    format_value,
    map_layer,
    mapping_for,
    match_package,
    source_fields,
    target_fields,
    ConversionSummary,
    FieldMapping,
    InputRow,
    OutputRow,
    Transform,
    FIELD_MAP,
    PACKAGE_PATTERNS,
};

// =============================================================================
// Re-exports - Writer
// =============================================================================

pub use writer::NeodenWriter;

//! Transformation module.
//!
//! This module handles KiCad to NeoDen conversion:
//! - Values: Per-field value transforms
//! - Fields: The NeoDen field mapping table
//! - Row: Single row conversion
//! - Pipeline: File-level conversion

pub mod fields;
pub mod pipeline;
pub mod row;
pub mod values;

pub use fields::{mapping_for, source_fields, target_fields, FieldMapping, Transform, FIELD_MAP};
pub use pipeline::{convert_file, convert_reader, ConversionSummary};
pub use row::{convert_row, InputRow, OutputRow};
pub use values::{
    format_package, format_position, format_rotation, format_value, map_layer, match_package,
    PACKAGE_PATTERNS,
};

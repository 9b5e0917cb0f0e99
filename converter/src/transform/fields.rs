//! NeoDen field mapping table.
//!
//! Maps each NeoDen CSV column to the KiCad column it is read from, along
//! with an optional value transform. Table order is the output column order.

use std::fmt;

use crate::error::ValueResult;

use super::values::{format_package, format_position, format_rotation, format_value, map_layer};

/// A value transform attached to a mapping entry.
#[derive(Clone, Copy)]
pub enum Transform {
    /// Total over any input.
    Text(fn(&str) -> String),
    /// Fails on input that is not a decimal number.
    Numeric(fn(&str) -> ValueResult<String>),
}

impl Transform {
    /// Apply this transform to a raw source value
    pub fn apply(&self, value: &str) -> ValueResult<String> {
        match self {
            Transform::Text(f) => Ok(f(value)),
            Transform::Numeric(f) => f(value),
        }
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Text(_) => f.write_str("Transform::Text"),
            Transform::Numeric(_) => f.write_str("Transform::Numeric"),
        }
    }
}

/// One NeoDen column and where its value comes from.
#[derive(Debug, Clone, Copy)]
pub struct FieldMapping {
    /// NeoDen column name
    pub target: &'static str,
    /// KiCad column name
    pub source: &'static str,
    pub transform: Option<Transform>,
}

impl FieldMapping {
    const fn new(target: &'static str, source: &'static str, transform: Option<Transform>) -> Self {
        Self {
            target,
            source,
            transform,
        }
    }
}

/// The NeoDen4 import layout.
pub static FIELD_MAP: [FieldMapping; 7] = [
    FieldMapping::new("Designator", "Ref", None),
    FieldMapping::new("Footprint", "Package", Some(Transform::Text(format_package))),
    FieldMapping::new("Mid X", "PosX", Some(Transform::Numeric(format_position))),
    FieldMapping::new("Mid Y", "PosY", Some(Transform::Numeric(format_position))),
    FieldMapping::new("Layer", "Side", Some(Transform::Text(map_layer))),
    FieldMapping::new("Rotation", "Rot", Some(Transform::Numeric(format_rotation))),
    FieldMapping::new("Comment", "Val", Some(Transform::Text(format_value))),
];

/// NeoDen column names in output order.
pub fn target_fields() -> impl Iterator<Item = &'static str> {
    FIELD_MAP.iter().map(|m| m.target)
}

/// KiCad columns every input row must carry.
pub fn source_fields() -> Vec<&'static str> {
    let mut fields: Vec<&'static str> = Vec::with_capacity(FIELD_MAP.len());
    for mapping in &FIELD_MAP {
        if !fields.contains(&mapping.source) {
            fields.push(mapping.source);
        }
    }
    fields
}

/// Mapping entry for a NeoDen column.
pub fn mapping_for(target: &str) -> Option<&'static FieldMapping> {
    FIELD_MAP.iter().find(|m| m.target == target)
}

//! Row conversion
//!
//! Applies the field mapping table to one KiCad row to produce one NeoDen row.

use std::collections::HashMap;

use crate::error::{TransformError, TransformResult};

use super::fields::FIELD_MAP;

/// One KiCad record, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRow {
    /// Line in the input file (1-based), used in diagnostics
    pub line: usize,
    fields: HashMap<String, String>,
}

impl InputRow {
    /// Build a row from header/value pairs.
    pub fn from_pairs<K, V, I>(line: usize, pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            line,
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

/// One NeoDen record, values in mapping table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    values: Vec<String>,
}

impl OutputRow {
    /// Value of a NeoDen column.
    pub fn get(&self, target: &str) -> Option<&str> {
        FIELD_MAP
            .iter()
            .position(|m| m.target == target)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
    }

    /// Values in output column order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Convert a KiCad row into a NeoDen row.
///
/// Fails on the first source column missing from the row, or on the first
/// value a transform rejects. The error names the NeoDen field at fault.
pub fn convert_row(row: &InputRow) -> TransformResult<OutputRow> {
    let mut values = Vec::with_capacity(FIELD_MAP.len());

    for mapping in &FIELD_MAP {
        let raw = row
            .get(mapping.source)
            .ok_or_else(|| TransformError::MissingField {
                field: mapping.source.to_string(),
                line: row.line,
            })?;

        let value = match &mapping.transform {
            Some(transform) => {
                transform
                    .apply(raw)
                    .map_err(|source| TransformError::InvalidValue {
                        field: mapping.target.to_string(),
                        value: raw.to_string(),
                        line: row.line,
                        source,
                    })?
            }
            None => raw.to_string(),
        };

        values.push(value);
    }

    Ok(OutputRow { values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValueError;

    fn kicad_row(
        reference: &str,
        package: &str,
        x: &str,
        y: &str,
        side: &str,
        rot: &str,
        val: &str,
    ) -> InputRow {
        InputRow::from_pairs(
            2,
            [
                ("Ref", reference),
                ("Val", val),
                ("Package", package),
                ("PosX", x),
                ("PosY", y),
                ("Rot", rot),
                ("Side", side),
            ],
        )
    }

    #[test]
    fn test_convert_row() {
        let row = kicad_row("R1", "R_0402_1005Metric", "10.5", "20.25", "top", "90", "4µ7");
        let out = convert_row(&row).unwrap();

        assert_eq!(
            out.values(),
            &["R1", "0402", "10.50mm", "20.25mm", "T", "90.0", "4u7"]
        );
        assert_eq!(out.get("Footprint"), Some("0402"));
        assert_eq!(out.get("Comment"), Some("4u7"));
        assert_eq!(out.get("Feeder"), None);
    }

    #[test]
    fn test_one_value_per_mapping() {
        let row = kicad_row("C1", "Fiducial_1mm", "0", "0", "bottom", "270", "10Ω");
        let out = convert_row(&row).unwrap();

        assert_eq!(out.len(), FIELD_MAP.len());
        assert_eq!(
            out.values(),
            &["C1", "Fiducial", "0.00mm", "0.00mm", "B", "-90.0", "10"]
        );
    }

    #[test]
    fn test_extra_columns_ignored() {
        let mut row = kicad_row("U1", "SOIC-8_3.9x4.9mm_P1.27mm", "1", "2", "top", "0", "NE555");
        row.insert("Comment", "ignored");
        let out = convert_row(&row).unwrap();
        assert_eq!(out.get("Comment"), Some("NE555"));
    }

    #[test]
    fn test_missing_field() {
        let row = InputRow::from_pairs(4, [("Ref", "R1"), ("Package", "R_0402_1005Metric")]);
        let err = convert_row(&row).unwrap_err();
        assert_eq!(
            err,
            TransformError::MissingField {
                field: "PosX".into(),
                line: 4
            }
        );
    }

    #[test]
    fn test_malformed_numeric_tagged_with_target() {
        let row = kicad_row("R1", "R_0402_1005Metric", "1", "2", "top", "ninety", "1k");
        let err = convert_row(&row).unwrap_err();
        assert_eq!(
            err,
            TransformError::InvalidValue {
                field: "Rotation".into(),
                value: "ninety".into(),
                line: 2,
                source: ValueError::MalformedNumeric {
                    value: "ninety".into()
                },
            }
        );
    }

    #[test]
    fn test_deterministic() {
        let row = kicad_row("R2", "R_Array_Convex_4x0402", "-3.1", "7", "top", "359.5", "10k");
        assert_eq!(convert_row(&row).unwrap(), convert_row(&row).unwrap());
    }
}

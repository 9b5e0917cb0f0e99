//! Value transforms applied to single KiCad fields.
//!
//! Every transform is a plain function from a source string to a NeoDen
//! string. The numeric ones fail on input that is not a decimal number.
//!
//! Numbers are rounded half-to-even on their exact binary value, which is
//! what the standard formatter does: `-0.125` becomes `-0.12`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ValueError, ValueResult};

/// Footprint patterns, tried in order. First match wins.
///
/// Each pattern is anchored at the start of the identifier only and exposes
/// the short package code as the `value` capture group.
pub static PACKAGE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // R_0402_1005Metric, C_0603_1608Metric_Pad1.08x0.95mm_HandSolder
        r"^\w+_(?P<value>\d+)_\d+Metric",
        r"^(?P<value>SOIC-8).*",
        r"^(?P<value>Fiducial)_.*",
        r"^R_Array_Convex_(?P<value>\d+x\d+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("package pattern must compile"))
    .collect()
});

/// Reduce a KiCad footprint name to its package code.
///
/// Identifiers no pattern recognizes are returned unchanged.
pub fn format_package(input: &str) -> String {
    match_package(input).unwrap_or(input).to_string()
}

/// Package code captured by the first matching pattern, if any.
pub fn match_package(input: &str) -> Option<&str> {
    PACKAGE_PATTERNS
        .iter()
        .find_map(|re| re.captures(input))
        .and_then(|caps| caps.name("value"))
        .map(|m| m.as_str())
}

/// Replace micro signs with `u` and drop ohm signs.
pub fn format_value(input: &str) -> String {
    input
        .chars()
        .filter_map(|c| match c {
            // MICRO SIGN, GREEK SMALL LETTER MU
            '\u{00B5}' | '\u{03BC}' => Some('u'),
            // OHM SIGN, GREEK CAPITAL LETTER OMEGA
            '\u{2126}' | '\u{03A9}' => None,
            other => Some(other),
        })
        .collect()
}

/// Millimetre coordinate with two decimals and an `mm` suffix.
pub fn format_position(input: &str) -> ValueResult<String> {
    let position = parse_decimal(input)?;
    Ok(format!("{:.2}mm", position))
}

/// Map the KiCad side to the NeoDen layer code.
///
/// `T` and `B` map to themselves so a second pass over converted output
/// leaves the layer unchanged. Anything else maps to an empty layer.
pub fn map_layer(input: &str) -> String {
    match input {
        "top" | "T" => "T",
        "bottom" | "B" => "B",
        _ => "",
    }
    .to_string()
}

/// Angle in degrees, centered on zero, with one decimal.
///
/// Angles above 180 are folded to their negative equivalent, so the output
/// lies in (-180, 180] for input in [0, 360).
pub fn format_rotation(input: &str) -> ValueResult<String> {
    let mut angle = parse_decimal(input)?;
    if angle > 180.0 {
        angle -= 360.0;
    }
    Ok(format!("{:.1}", angle))
}

fn parse_decimal(input: &str) -> ValueResult<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValueError::MalformedNumeric {
            value: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_metric_family() {
        assert_eq!(format_package("R_0402_1005Metric"), "0402");
        assert_eq!(format_package("C_0805_2012Metric"), "0805");
        assert_eq!(
            format_package("C_0603_1608Metric_Pad1.08x0.95mm_HandSolder"),
            "0603"
        );
    }

    #[test]
    fn test_package_soic() {
        assert_eq!(format_package("SOIC-8_3.9x4.9mm_P1.27mm"), "SOIC-8");
        assert_eq!(format_package("SOIC-8"), "SOIC-8");
    }

    #[test]
    fn test_package_fiducial() {
        assert_eq!(format_package("Fiducial_1mm"), "Fiducial");
        assert_eq!(format_package("Fiducial_0.75mm_Mask1.5mm"), "Fiducial");
    }

    #[test]
    fn test_package_resistor_array() {
        assert_eq!(format_package("R_Array_Convex_4x0402"), "4x0402");
        assert_eq!(format_package("R_Array_Convex_2x0603"), "2x0603");
    }

    #[test]
    fn test_package_unmatched_passthrough() {
        assert_eq!(format_package("Custom_XYZ"), "Custom_XYZ");
        assert_eq!(format_package("SOT-23"), "SOT-23");
        assert_eq!(format_package(""), "");
        assert!(match_package("Custom_XYZ").is_none());
    }

    #[test]
    fn test_package_patterns_are_prefix_anchored() {
        assert_eq!(format_package("My_Fiducial_1mm"), "My_Fiducial_1mm");
        assert_eq!(format_package("TSSOP-8_SOIC-8"), "TSSOP-8_SOIC-8");
    }

    #[test]
    fn test_package_idempotent() {
        for input in [
            "R_0402_1005Metric",
            "SOIC-8_3.9x4.9mm_P1.27mm",
            "Fiducial_1mm",
            "R_Array_Convex_4x0402",
            "Custom_XYZ",
        ] {
            let once = format_package(input);
            assert_eq!(format_package(&once), once, "input {}", input);
        }
    }

    #[test]
    fn test_value_units() {
        assert_eq!(format_value("4µ7"), "4u7");
        assert_eq!(format_value("10Ω"), "10");
        assert_eq!(format_value("4µ7Ω"), "4u7");
        assert_eq!(format_value("100nF"), "100nF");
    }

    #[test]
    fn test_value_lookalike_code_points() {
        assert_eq!(format_value("4\u{03BC}7"), "4u7");
        assert_eq!(format_value("10k\u{2126}"), "10k");
    }

    #[test]
    fn test_value_idempotent() {
        assert_eq!(format_value("4u7"), "4u7");
        let once = format_value("2µ2Ω");
        assert_eq!(format_value(&once), once);
    }

    #[test]
    fn test_position_two_decimals() {
        assert_eq!(format_position("1").unwrap(), "1.00mm");
        assert_eq!(format_position("10.5").unwrap(), "10.50mm");
        assert_eq!(format_position("20.25").unwrap(), "20.25mm");
        assert_eq!(format_position("-153.3").unwrap(), "-153.30mm");
        assert_eq!(format_position("0").unwrap(), "0.00mm");
    }

    #[test]
    fn test_position_half_to_even() {
        assert_eq!(format_position("-0.125").unwrap(), "-0.12mm");
        assert_eq!(format_position("0.375").unwrap(), "0.38mm");
    }

    #[test]
    fn test_position_tolerates_whitespace() {
        assert_eq!(format_position(" 3.5 ").unwrap(), "3.50mm");
    }

    #[test]
    fn test_position_malformed() {
        let err = format_position("abc").unwrap_err();
        assert_eq!(
            err,
            ValueError::MalformedNumeric {
                value: "abc".into()
            }
        );
        assert!(format_position("").is_err());
        assert!(format_position("NaN").is_err());
        assert!(format_position("inf").is_err());
    }

    #[test]
    fn test_layer_mapping() {
        assert_eq!(map_layer("top"), "T");
        assert_eq!(map_layer("bottom"), "B");
        assert_eq!(map_layer("left"), "");
        assert_eq!(map_layer(""), "");
        assert_eq!(map_layer("Top"), "");
    }

    #[test]
    fn test_layer_idempotent() {
        for input in ["top", "bottom", "left"] {
            let once = map_layer(input);
            assert_eq!(map_layer(&once), once, "input {}", input);
        }
    }

    #[test]
    fn test_rotation_normalization() {
        assert_eq!(format_rotation("0").unwrap(), "0.0");
        assert_eq!(format_rotation("90").unwrap(), "90.0");
        assert_eq!(format_rotation("180").unwrap(), "180.0");
        assert_eq!(format_rotation("270").unwrap(), "-90.0");
        assert_eq!(format_rotation("359.5").unwrap(), "-0.5");
        assert_eq!(format_rotation("180.5").unwrap(), "-179.5");
    }

    #[test]
    fn test_rotation_malformed() {
        assert!(matches!(
            format_rotation("ninety"),
            Err(ValueError::MalformedNumeric { .. })
        ));
    }
}

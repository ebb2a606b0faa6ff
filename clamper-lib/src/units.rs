use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::constants::{DEFAULT_FRACTION_DIGITS, PX_PER_REM};
use crate::error::{ClamperError, Result};

static UNIT_VALUE: OnceLock<Regex> = OnceLock::new();

/// First signed decimal number (ASCII digits only) followed by its
/// (possibly empty) unit tag.
fn unit_value_pattern() -> &'static Regex {
    UNIT_VALUE.get_or_init(|| {
        Regex::new(r"(-?[0-9.]+)([a-z%]*)").expect("unit value pattern is valid")
    })
}

/// Unit tag detected after a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unit {
    Px,
    Rem,
    Vw,
    /// Recognized CSS unit that depends on context (`%`, `em`, `vh`, ...).
    Relative(String),
    /// Anything else, including an empty tag.
    Other(String),
    /// No number was found at all.
    Unknown,
}

impl Unit {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "px" => Unit::Px,
            "rem" => Unit::Rem,
            "vw" => Unit::Vw,
            "%" | "em" | "vh" | "vmin" | "vmax" | "ch" | "ex" => Unit::Relative(tag.to_string()),
            other => Unit::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Unit::Px => "px",
            Unit::Rem => "rem",
            Unit::Vw => "vw",
            Unit::Relative(tag) | Unit::Other(tag) => tag,
            Unit::Unknown => "unknown",
        }
    }

    /// `px` and `rem` are the only units the clamp math understands.
    pub fn is_absolute(&self) -> bool {
        matches!(self, Unit::Px | Unit::Rem)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A number and its unit, as read from text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedUnit {
    pub unit: Unit,
    pub num: f64,
}

enum UnitMatch {
    Matched { unit: Unit, num: f64 },
    Unrecognized,
}

fn match_unit_value(value: &str) -> UnitMatch {
    let Some(caps) = unit_value_pattern().captures(value) else {
        return UnitMatch::Unrecognized;
    };
    // "1.2.3" and "." match the pattern but are not numbers
    let num = caps[1].parse::<f64>().unwrap_or(f64::NAN);
    UnitMatch::Matched {
        unit: Unit::from_tag(&caps[2]),
        num,
    }
}

/// Parses the first number in `value` and the unit tag right after it.
///
/// Never fails: text without a number yields `{ unit: Unknown, num: 0 }`,
/// so malformed sizes behave as zero-length values downstream.
///
/// # Examples
/// ```
/// use css_clamper::units::{parse_unit_value, Unit};
///
/// let parsed = parse_unit_value("-1.5rem");
/// assert_eq!(parsed.unit, Unit::Rem);
/// assert_eq!(parsed.num, -1.5);
/// assert_eq!(parse_unit_value("").unit, Unit::Unknown);
/// ```
pub fn parse_unit_value(value: &str) -> ParsedUnit {
    match match_unit_value(value) {
        UnitMatch::Matched { unit, num } => ParsedUnit { unit, num },
        UnitMatch::Unrecognized => {
            tracing::debug!(message = "Unrecognized unit value, using zero", value = ?value);
            ParsedUnit {
                unit: Unit::Unknown,
                num: 0.0,
            }
        }
    }
}

/// Strict variant of [`parse_unit_value`] that accepts only `px` and `rem`.
pub fn parse_absolute(value: &str) -> Result<ParsedUnit> {
    match match_unit_value(value) {
        UnitMatch::Matched { unit, num } if unit.is_absolute() => Ok(ParsedUnit { unit, num }),
        UnitMatch::Matched { unit, .. } => Err(ClamperError::UnsupportedUnit {
            value: value.to_string(),
            unit: unit.as_str().to_string(),
        }),
        UnitMatch::Unrecognized => Err(ClamperError::UnrecognizedValue(value.to_string())),
    }
}

fn is_rem(value: &str) -> bool {
    value.ends_with("rem")
}

pub fn px_to_rem(num: f64) -> f64 {
    num / PX_PER_REM
}

pub fn rem_to_px(num: f64) -> f64 {
    num * PX_PER_REM
}

/// Converts a unit value to pixels. Anything not ending in `rem` is taken as px.
pub fn to_px(value: &str) -> f64 {
    let num = parse_unit_value(value).num;
    let px = if is_rem(value) { rem_to_px(num) } else { num };
    to_fixed(px, DEFAULT_FRACTION_DIGITS)
}

/// Converts a unit value to rem. Anything not ending in `rem` is taken as px.
pub fn to_rem(value: &str) -> f64 {
    let num = parse_unit_value(value).num;
    let rem = if is_rem(value) { num } else { px_to_rem(num) };
    to_fixed(rem, DEFAULT_FRACTION_DIGITS)
}

/// Rounds `value` to `digits` decimal places.
///
/// Rounding works on the exact binary value, so `1.1375` (stored just below
/// the midpoint) rounds down to `1.137`, while a true midpoint such as
/// `0.3125` rounds away from zero to `0.313`. Negative zero comes back as zero.
pub fn to_fixed(value: f64, digits: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10_f64.powi(digits);
    let scaled = value * factor;
    // fused multiply-add exposes the rounding error of `scaled`
    let rounded = if value.mul_add(factor, -scaled) == 0.0 {
        scaled.round() / factor
    } else {
        let precision = usize::try_from(digits).unwrap_or(0);
        format!("{value:.precision$}").parse().unwrap_or(f64::NAN)
    };
    rounded + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_px() {
        let parsed = parse_unit_value("16px");
        assert_eq!(parsed.unit, Unit::Px);
        assert_eq!(parsed.num, 16.0);
    }

    #[test]
    fn test_parse_takes_first_number() {
        let parsed = parse_unit_value("width: 12.5rem 3px");
        assert_eq!(parsed.unit, Unit::Rem);
        assert_eq!(parsed.num, 12.5);
    }

    #[test]
    fn test_parse_relative_units_are_detected() {
        assert_eq!(parse_unit_value("50%").unit, Unit::Relative("%".into()));
        assert_eq!(parse_unit_value("2em").unit, Unit::Relative("em".into()));
        assert_eq!(parse_unit_value("10vh").unit, Unit::Relative("vh".into()));
        assert_eq!(parse_unit_value("7").unit, Unit::Other(String::new()));
    }

    #[test]
    fn test_parse_unrecognized_is_zero() {
        for value in ["", "abc", "-px"] {
            let parsed = parse_unit_value(value);
            assert_eq!(parsed.unit, Unit::Unknown, "value {value:?}");
            assert_eq!(parsed.num, 0.0);
            assert_eq!(parsed.unit.as_str(), "unknown");
        }
    }

    #[test]
    fn test_parse_non_ascii_digits_are_unrecognized() {
        for value in ["١٦px", "１６px", "৫rem"] {
            let parsed = parse_unit_value(value);
            assert_eq!(parsed.unit, Unit::Unknown, "value {value:?}");
            assert_eq!(parsed.num, 0.0);
        }
        assert_eq!(to_px("１６px"), 0.0);
    }

    #[test]
    fn test_parse_bad_number_is_nan() {
        assert!(parse_unit_value("1.2.3px").num.is_nan());
        assert!(parse_unit_value(".px").num.is_nan());
    }

    #[test]
    fn test_parse_absolute() {
        assert_eq!(parse_absolute("1.5rem").unwrap().num, 1.5);
        assert!(matches!(
            parse_absolute("50%"),
            Err(ClamperError::UnsupportedUnit { .. })
        ));
        assert!(matches!(
            parse_absolute("12"),
            Err(ClamperError::UnsupportedUnit { .. })
        ));
        assert!(matches!(
            parse_absolute("wide"),
            Err(ClamperError::UnrecognizedValue(_))
        ));
    }

    #[test]
    fn test_to_px_and_rem() {
        assert_eq!(to_px("16px"), 16.0);
        assert_eq!(to_px("1.5rem"), 24.0);
        assert_eq!(to_px("10em"), 10.0); // not rem, taken as px
        assert_eq!(to_px(""), 0.0);
        assert_eq!(to_rem("24px"), 1.5);
        assert_eq!(to_rem("1.25rem"), 1.25);
        assert_eq!(to_rem("5px"), 0.313);
    }

    #[test]
    fn test_px_rem_round_trip() {
        for px in [0.0, 1.0, 5.0, 13.37, 16.0, 100.5, -42.25] {
            let rem = to_rem(&format!("{px}px"));
            let back = to_px(&format!("{rem}rem"));
            assert!((back - px).abs() <= 0.008, "{px} -> {rem}rem -> {back}");
        }
    }

    #[test]
    fn test_to_fixed_midpoints() {
        assert_eq!(to_fixed(0.3125, 3), 0.313);
        assert_eq!(to_fixed(-0.3125, 3), -0.313);
        assert_eq!(to_fixed(1.5625, 3), 1.563);
        assert_eq!(to_fixed(18.2 / 16.0, 3), 1.137);
        assert_eq!(to_fixed(0.005 * 100.0, 2), 0.5);
    }

    #[test]
    fn test_to_fixed_negative_zero() {
        let zero = to_fixed(-0.0001, 3);
        assert_eq!(zero, 0.0);
        assert!(zero.is_sign_positive());
    }

    #[test]
    fn test_to_fixed_non_finite() {
        assert!(to_fixed(f64::NAN, 3).is_nan());
        assert_eq!(to_fixed(f64::INFINITY, 3), f64::INFINITY);
    }
}

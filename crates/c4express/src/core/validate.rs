//! Field validators
//!
//! Pure functions from raw definition text to a validated value or a
//! [`ValidationError`]. Callers decide how to log a failure and whether to
//! fall back to a default or drop the field.

use regex::Regex;
use std::sync::OnceLock;

use super::{Border, Routing, Shape, ValidationError};

fn unsigned_integer_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?\d+$").expect("valid regex"))
}

fn signed_integer_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[+-]?\d+$").expect("valid regex"))
}

fn rgb_hex_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^#[0-9a-f]{6}").expect("valid regex"))
}

/// Returns true for an optionally `+`-prefixed run of digits
pub fn is_integer(value: &str) -> bool {
    unsigned_integer_regex().is_match(value)
}

/// Parse a non-negative integer field
pub fn parse_integer(field: &'static str, value: &str) -> Result<i64, ValidationError> {
    if !is_integer(value) {
        return Err(ValidationError::not_integer(field, value));
    }
    value
        .parse()
        .map_err(|_| ValidationError::not_integer(field, value))
}

/// Parse a signed integer and clamp it to 0..=100
pub fn parse_percentage(field: &'static str, value: &str) -> Result<u8, ValidationError> {
    if !signed_integer_regex().is_match(value) {
        return Err(ValidationError::not_integer(field, value));
    }
    let parsed: i64 = value
        .parse()
        .map_err(|_| ValidationError::not_integer(field, value))?;
    // Clamped into 0..=100 so the narrowing cannot fail
    Ok(parsed.clamp(0, 100) as u8)
}

/// Accept a `#rrggbb` colour (case-insensitive prefix match), returned as given
pub fn parse_color(field: &'static str, value: &str) -> Result<String, ValidationError> {
    if rgb_hex_regex().is_match(value) {
        Ok(value.to_string())
    } else {
        Err(ValidationError::invalid_color(field, value))
    }
}

/// Parse a case-insensitive `true`/`false`
///
/// A rejected value is reported in lowercase.
pub fn parse_boolean(field: &'static str, value: &str) -> Result<bool, ValidationError> {
    let lowered = value.to_lowercase();
    match lowered.as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ValidationError::invalid_boolean(field, lowered)),
    }
}

/// Parse the relationship style `dashed` flag
pub fn parse_dashed(value: &str) -> Result<bool, ValidationError> {
    parse_boolean("dashed", value).map_err(|_| ValidationError::InvalidDashed {
        value: value.to_string(),
    })
}

pub fn parse_border(value: &str) -> Result<Border, ValidationError> {
    value.parse()
}

pub fn parse_shape(value: &str) -> Result<Shape, ValidationError> {
    value.parse()
}

pub fn parse_routing(value: &str) -> Result<Routing, ValidationError> {
    value.parse()
}

/// Split an `"x,y"` position into its two trimmed halves
pub fn split_position(value: &str) -> Result<(&str, &str), ValidationError> {
    let mut parts = value.split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(x), Some(y), None) => Ok((x.trim(), y.trim())),
        _ => Err(ValidationError::NotCoordinatePair {
            value: value.to_string(),
        }),
    }
}

/// Parse one axis of a position
pub fn parse_coordinate(axis: char, value: &str) -> Result<i64, ValidationError> {
    let invalid = || ValidationError::InvalidCoordinate {
        axis,
        value: value.to_string(),
    };
    if !is_integer(value) {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}

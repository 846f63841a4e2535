//! Boolean, integer and float parsers plus inclusive numeric bounds.

use std::fmt;

use crate::config::error::ValueError;

/// Inclusive numeric bounds attached to an option.
///
/// Either side may be open. Values outside the bounds are clamped to the
/// nearest bound rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    /// Smallest accepted value
    pub min: Option<T>,
    /// Largest accepted value
    pub max: Option<T>,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    /// Bounds closed on both sides.
    pub const fn between(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Bounds with only a lower limit.
    pub const fn at_least(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Clamps `value` into the bounds.
    ///
    /// Returns the resulting value and whether it had to be moved.
    pub fn clamp(&self, value: T) -> (T, bool) {
        if let Some(min) = self.min {
            if value < min {
                return (min, true);
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return (max, true);
            }
        }
        (value, false)
    }

    /// Whether `value` lies within the bounds.
    pub fn contains(&self, value: T) -> bool {
        !self.clamp(value).1
    }
}

impl<T: fmt::Display> fmt::Display for Bounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.min, &self.max) {
            (Some(min), Some(max)) => write!(f, "[{min}, {max}]"),
            (Some(min), None) => write!(f, ">= {min}"),
            (None, Some(max)) => write!(f, "<= {max}"),
            (None, None) => write!(f, "any"),
        }
    }
}

/// Parses a boolean.
///
/// Accepts `true/false`, `yes/no`, `on/off` and `1/0`, case-insensitively.
///
/// # Errors
///
/// Returns `ValueError::Parse` for any other text.
pub fn parse_bool(raw: &str) -> Result<bool, ValueError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ValueError::parse(
            raw,
            "bool",
            "expected one of true/false, yes/no, on/off, 1/0",
        )),
    }
}

/// Parses an optionally signed decimal integer.
///
/// # Errors
///
/// Returns `ValueError::Parse` if the text is not an integer or overflows.
pub fn parse_int(raw: &str) -> Result<i64, ValueError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| ValueError::parse(raw, "int", e.to_string()))
}

/// Parses a finite, optionally signed decimal float.
///
/// # Errors
///
/// Returns `ValueError::Parse` if the text is not a number or is not finite.
pub fn parse_float(raw: &str) -> Result<f32, ValueError> {
    let value = raw
        .trim()
        .parse::<f32>()
        .map_err(|e| ValueError::parse(raw, "float", e.to_string()))?;

    if !value.is_finite() {
        return Err(ValueError::parse(raw, "float", "value must be finite"));
    }

    Ok(value)
}

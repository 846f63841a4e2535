//! CSS style box shorthand, used for window gaps.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::scalar::parse_int;
use crate::config::error::ValueError;

const EXPECTED: &str = "gaps";

/// A quantity with one value per edge.
///
/// All four edges are always set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Gaps {
    /// Top edge
    pub top: i64,
    /// Right edge
    pub right: i64,
    /// Bottom edge
    pub bottom: i64,
    /// Left edge
    pub left: i64,
}

impl Gaps {
    /// The same value on every edge.
    pub const fn uniform(value: i64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Expands a 1, 2 or 4 value shorthand.
    ///
    /// Values are separated by commas and/or whitespace:
    /// - `a` sets every edge to `a`
    /// - `a, b` sets top and bottom to `a`, left and right to `b`
    /// - `a, b, c, d` sets top, right, bottom, left in clockwise order
    ///
    /// # Errors
    ///
    /// Returns `ValueError::Parse` for any other number of values, an empty
    /// value between commas or a value that is not an integer.
    pub fn parse(raw: &str) -> Result<Self, ValueError> {
        let mut values = Vec::with_capacity(4);
        for group in raw.split(',') {
            if group.trim().is_empty() {
                return Err(ValueError::parse(raw, EXPECTED, "empty value"));
            }
            for token in group.split_whitespace() {
                values.push(parse_int(token)?);
            }
        }

        match values.as_slice() {
            [all] => Ok(Self::uniform(*all)),
            [vertical, horizontal] => Ok(Self {
                top: *vertical,
                right: *horizontal,
                bottom: *vertical,
                left: *horizontal,
            }),
            [top, right, bottom, left] => Ok(Self {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            }),
            other => Err(ValueError::parse(
                raw,
                EXPECTED,
                format!("expected 1, 2 or 4 values, found {}", other.len()),
            )),
        }
    }
}

impl fmt::Display for Gaps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::uniform(self.top) {
            write!(f, "{}", self.top)
        } else {
            write!(
                f,
                "{},{},{},{}",
                self.top, self.right, self.bottom, self.left
            )
        }
    }
}

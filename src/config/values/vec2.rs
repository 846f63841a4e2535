//! Two component float values.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::scalar::parse_float;
use crate::config::error::ValueError;

/// A pair of floats, such as a shadow offset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Vec2 {
    /// Horizontal component
    pub x: f32,
    /// Vertical component
    pub y: f32,
}

impl Vec2 {
    /// Parses two floats separated by a comma and/or whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::Parse` unless exactly two finite numbers are given.
    pub fn parse(raw: &str) -> Result<Self, ValueError> {
        let values = raw
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(parse_float)
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            [x, y] => Ok(Self { x: *x, y: *y }),
            other => Err(ValueError::parse(
                raw,
                "vec2",
                format!("expected 2 values, found {}", other.len()),
            )),
        }
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

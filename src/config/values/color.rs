//! Single color values.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::error::ValueError;

const EXPECTED: &str = "color";

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel, 255 is fully opaque
    pub a: u8,
}

impl Color {
    /// Creates a color from its four channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self { r, g, b, a }
    }

    /// Parses one color token.
    ///
    /// Accepted forms are `rrggbb` and `rrggbbaa` (optionally prefixed with
    /// `#`), `rgb(rrggbb)`, `rgba(rrggbbaa)` and the legacy `0xAARRGGBB`.
    /// Alpha is fully opaque when the form has no alpha digits.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::Parse` for unknown forms, non-hex digits or a
    /// wrong digit count.
    pub fn parse(raw: &str) -> Result<Self, ValueError> {
        let token = raw.trim();

        if let Some(digits) = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
        {
            let argb = parse_hex(raw, digits, &[8])?;
            return Ok(Self::from_argb(argb));
        }

        if let Some(inner) = unwrap_call(token, "rgba") {
            return Self::from_hex(raw, inner, &[8]);
        }

        if let Some(inner) = unwrap_call(token, "rgb") {
            return Self::from_hex(raw, inner, &[6]);
        }

        let digits = token.strip_prefix('#').unwrap_or(token);
        Self::from_hex(raw, digits, &[6, 8])
    }

    /// Whether `token` looks like the start of a color rather than an
    /// angle or stop position.
    pub(crate) fn looks_like_color(token: &str) -> bool {
        token.starts_with("0x")
            || token.starts_with("0X")
            || token.starts_with("rgb")
            || token.starts_with('#')
            || (!token.is_empty() && token.chars().all(|c| c.is_ascii_hexdigit()))
    }

    fn from_hex(raw: &str, digits: &str, allowed_lengths: &[usize]) -> Result<Self, ValueError> {
        let packed = parse_hex(raw, digits, allowed_lengths)?;

        if digits.len() == 6 {
            let [_, r, g, b] = packed.to_be_bytes();
            Ok(Self::rgba(r, g, b, u8::MAX))
        } else {
            let [r, g, b, a] = packed.to_be_bytes();
            Ok(Self::rgba(r, g, b, a))
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgba(0, 0, 0, u8::MAX)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({:02x}{:02x}{:02x}{:02x})",
            self.r, self.g, self.b, self.a
        )
    }
}

fn unwrap_call<'a>(token: &'a str, name: &str) -> Option<&'a str> {
    token
        .strip_prefix(name)?
        .strip_prefix('(')?
        .strip_suffix(')')
        .map(str::trim)
}

fn parse_hex(raw: &str, digits: &str, allowed_lengths: &[usize]) -> Result<u32, ValueError> {
    if !allowed_lengths.contains(&digits.len()) {
        let allowed = allowed_lengths
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" or ");
        return Err(ValueError::parse(
            raw,
            EXPECTED,
            format!("expected {allowed} hex digits, found {}", digits.len()),
        ));
    }

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValueError::parse(raw, EXPECTED, "invalid hex digit"));
    }

    u32::from_str_radix(digits, 16).map_err(|e| ValueError::parse(raw, EXPECTED, e.to_string()))
}

//! Color gradients and the shared color/gradient grammar.
//!
//! A value is a whitespace separated list of color tokens. Each color may
//! be followed by a `<n>%` stop position, and the list may end with an
//! angle written as `<n>deg` or `deg <n>`.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Color, scalar::parse_float};
use crate::config::error::ValueError;

const EXPECTED: &str = "gradient";
const ANGLE_SUFFIX: &str = "deg";

/// One color of a gradient together with its position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ColorStop {
    /// Stop color
    pub color: Color,
    /// Position along the gradient in `[0, 1]`
    pub position: f32,
}

/// An ordered, non-empty list of color stops plus an angle.
///
/// A single stop is a flat color; its position is always 0 and the angle
/// has no visible effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Gradient {
    /// Color stops in order, never empty
    pub stops: Vec<ColorStop>,
    /// Direction in degrees; 0 points right and angles grow clockwise
    pub angle: f32,
}

/// Result of tokenizing a color or gradient value.
struct ParsedStops {
    stops: Vec<(Color, Option<f32>)>,
    angle: Option<f32>,
}

impl Gradient {
    /// A flat, single stop gradient.
    pub fn solid(color: Color) -> Self {
        Self {
            stops: vec![ColorStop {
                color,
                position: 0.0,
            }],
            angle: 0.0,
        }
    }

    /// A flat gradient from a packed `0xAARRGGBB` value.
    pub fn from_argb(argb: u32) -> Self {
        Self::solid(Color::from_argb(argb))
    }

    /// Whether the gradient degenerates to a single color.
    pub fn is_solid(&self) -> bool {
        self.stops.len() == 1
    }

    /// Color of the first stop.
    pub fn first_color(&self) -> Color {
        self.stops
            .first()
            .map(|stop| stop.color)
            .unwrap_or_default()
    }

    /// Parses a gradient.
    ///
    /// Without explicit positions the stops are spread evenly over `[0, 1]`.
    /// Missing positions between explicit ones are interpolated, and all
    /// positions are clamped to `[0, 1]` and kept non-decreasing.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::Parse` for malformed colors, an angle or stop
    /// position that does not follow a color, or an empty value.
    pub fn parse(raw: &str) -> Result<Self, ValueError> {
        let parsed = tokenize(raw)?;
        let positions = resolve_positions(&parsed.stops);

        let stops = parsed
            .stops
            .iter()
            .zip(positions)
            .map(|((color, _), position)| ColorStop {
                color: *color,
                position,
            })
            .collect();

        Ok(Self {
            stops,
            angle: parsed.angle.unwrap_or(0.0),
        })
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::solid(Color::default())
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let colors = self
            .stops
            .iter()
            .map(|stop| stop.color.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        if self.is_solid() {
            write!(f, "{colors}")
        } else {
            write!(f, "{colors} {}deg", self.angle)
        }
    }
}

/// Parses a value that must be exactly one color.
///
/// Uses the gradient grammar so both kinds of option accept the same
/// spelling of a color.
///
/// # Errors
///
/// Returns `ValueError::Parse` if the value is malformed or holds more than
/// one color, a stop position or an angle.
pub fn parse_color(raw: &str) -> Result<Color, ValueError> {
    let parsed = tokenize(raw)?;

    match parsed.stops.as_slice() {
        [(color, None)] if parsed.angle.is_none() => Ok(*color),
        _ => Err(ValueError::parse(
            raw,
            "color",
            "expected a single color without position or angle",
        )),
    }
}

fn tokenize(raw: &str) -> Result<ParsedStops, ValueError> {
    let mut tokens: Vec<&str> = raw.split_whitespace().collect();

    if tokens.is_empty() {
        return Err(ValueError::parse(raw, EXPECTED, "value is empty"));
    }

    let angle = take_angle(raw, &mut tokens)?;
    let mut stops: Vec<(Color, Option<f32>)> = Vec::with_capacity(tokens.len());

    for token in tokens {
        if is_angle_token(token) {
            let reason = if stops.is_empty() {
                "angle appears before any color"
            } else {
                "angle must be the last token"
            };
            return Err(ValueError::parse(raw, EXPECTED, reason));
        }

        if let Some(percent) = token.strip_suffix('%') {
            let Some((_, position)) = stops.last_mut() else {
                return Err(ValueError::parse(
                    raw,
                    EXPECTED,
                    "stop position appears before any color",
                ));
            };
            if position.is_some() {
                return Err(ValueError::parse(
                    raw,
                    EXPECTED,
                    "color has more than one stop position",
                ));
            }
            *position = Some(parse_float(percent)? / 100.0);
            continue;
        }

        stops.push((Color::parse(token)?, None));
    }

    if stops.is_empty() {
        return Err(ValueError::parse(
            raw,
            EXPECTED,
            "angle appears before any color",
        ));
    }

    Ok(ParsedStops { stops, angle })
}

/// Removes a trailing angle (`<n>deg` or `deg <n>`) from `tokens`.
fn take_angle(raw: &str, tokens: &mut Vec<&str>) -> Result<Option<f32>, ValueError> {
    let len = tokens.len();

    if let Some(number) = tokens[len - 1].strip_suffix(ANGLE_SUFFIX) {
        if !number.is_empty() {
            let angle = parse_angle(raw, number)?;
            tokens.truncate(len - 1);
            return Ok(Some(angle));
        }
    }

    if len >= 2 && tokens[len - 2] == ANGLE_SUFFIX {
        let angle = parse_angle(raw, tokens[len - 1])?;
        tokens.truncate(len - 2);
        return Ok(Some(angle));
    }

    Ok(None)
}

fn parse_angle(raw: &str, number: &str) -> Result<f32, ValueError> {
    parse_float(number).map_err(|_| ValueError::parse(raw, EXPECTED, "invalid angle"))
}

fn is_angle_token(token: &str) -> bool {
    token == ANGLE_SUFFIX || (token.ends_with(ANGLE_SUFFIX) && !Color::looks_like_color(token))
}

fn resolve_positions(stops: &[(Color, Option<f32>)]) -> Vec<f32> {
    let count = stops.len();
    if count == 1 {
        return vec![0.0];
    }

    let mut known: Vec<Option<f32>> = stops
        .iter()
        .map(|(_, position)| position.map(|p| p.clamp(0.0, 1.0)))
        .collect();

    known[0].get_or_insert(0.0);
    known[count - 1].get_or_insert(1.0);

    let mut floor = 0.0_f32;
    for position in known.iter_mut().flatten() {
        floor = floor.max(*position);
        *position = floor;
    }

    let mut resolved = Vec::with_capacity(count);
    let mut previous = (0_usize, 0.0_f32);

    for index in 0..count {
        if let Some(position) = known[index] {
            resolved.push(position);
            previous = (index, position);
            continue;
        }

        let (next_index, next_position) = known
            .iter()
            .enumerate()
            .skip(index + 1)
            .find_map(|(i, p)| p.map(|p| (i, p)))
            .unwrap_or((count - 1, 1.0));

        let (prev_index, prev_position) = previous;
        let span = (next_index - prev_index) as f32;
        let step = (index - prev_index) as f32;
        resolved.push(prev_position + (next_position - prev_position) * step / span);
    }

    resolved
}

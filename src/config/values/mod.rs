//! Typed value parsers shared by every option.

mod color;
mod gaps;
mod gradient;
mod scalar;
mod vec2;

#[cfg(test)]
mod tests;

pub use color::Color;
pub use gaps::Gaps;
pub use gradient::{ColorStop, Gradient, parse_color};
pub use scalar::{Bounds, parse_bool, parse_float, parse_int};
pub use vec2::Vec2;

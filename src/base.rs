//! Shared constants and helpers for the chart engine.

use serde::{Deserialize, Serialize};

/// An RGB color used by drawing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

pub const WHITE_COLOR: Color = Color(255, 255, 255);
pub const BLACK_COLOR: Color = Color(0, 0, 0);
pub const GREY_COLOR: Color = Color(100, 100, 100);

/// Color for bars that closed at or above their open.
pub const UP_COLOR: Color = Color(255, 75, 75);
/// Color for bars that closed below their open.
pub const DOWN_COLOR: Color = Color(0, 255, 255);

/// Stroke width for candle and volume outlines.
pub const PEN_WIDTH: f32 = 1.0;
/// Half-width of a candle/volume body in index units.
pub const BAR_WIDTH: f64 = 0.3;

/// Format a number with at most `decimal_places` decimals, collapsing to a
/// plain integer string when the fractional part is exactly zero.
pub fn format_decimal(number: f64, decimal_places: usize) -> String {
    let formatted = format!("{:.*}", decimal_places, number);
    if formatted.ends_with(&"0".repeat(decimal_places)) {
        format!("{}", number.trunc() as i64)
    } else {
        formatted
    }
}

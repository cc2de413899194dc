//! Screen-independent drawing units.
//!
//! A [`Picture`] is an ordered list of drawing commands expressed in data
//! coordinates (x = bar index, y = price or volume). The host replays the
//! commands onto its actual painting surface, applying its own data-to-pixel
//! transform.

use serde::{Deserialize, Serialize};

use crate::base::Color;
use crate::object::Icon;

/// A point in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectF {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle spanning two opposite corners, normalized so that width and
    /// height are non-negative.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self {
            x,
            y,
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }
}

/// Stroke style for outlines and line segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// One drawing primitive in data coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Rect {
        rect: RectF,
        stroke: Stroke,
        fill: Color,
    },
    Image {
        icon: Icon,
        rect: RectF,
    },
}

/// An ordered command list, the cached drawing unit of one bar or of one
/// composed window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    commands: Vec<DrawCommand>,
}

impl Picture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Append all commands of another picture, preserving order.
    pub fn extend(&mut self, other: &Picture) {
        self.commands.extend(other.commands.iter().cloned());
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

//! Bar data and per-bar annotations consumed by the chart layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Palette for overlay lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineColor {
    Yellow,
    Green,
    Blue,
    Red,
    White,
    Gray,
}

impl LineColor {
    pub fn rgb(&self) -> crate::base::Color {
        use crate::base::Color;
        match self {
            LineColor::Yellow => Color(255, 255, 0),
            LineColor::Green => Color(0, 255, 0),
            LineColor::Blue => Color(0, 0, 255),
            LineColor::Red => Color(255, 0, 0),
            LineColor::White => Color(255, 255, 255),
            LineColor::Gray => Color(128, 128, 128),
        }
    }
}

/// Known marker images. The variant maps to an image file shipped by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    SmileyFace,
}

impl Icon {
    /// File name of the image asset, resolved by the host.
    pub fn asset_file(&self) -> &'static str {
        match self {
            Icon::SmileyFace => "smiley_face.png",
        }
    }

    /// Intrinsic width/height ratio of the image.
    pub fn aspect_ratio(&self) -> f64 {
        match self {
            Icon::SmileyFace => 1.0,
        }
    }
}

/// One point of a named overlay line anchored at a bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineMark {
    pub label: String,
    pub value: f64,
    pub color: LineColor,
    /// Stroke width, 1 when not given.
    pub width: Option<u32>,
}

/// One icon marker anchored at (bar index, y).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconMark {
    pub icon: Icon,
    pub y: f64,
}

/// Optional per-bar side channel read by the overlay layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarExtra {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<LineMark>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub icons: Vec<IconMark>,
    /// Open-ended annotations not interpreted by the chart engine.
    #[serde(flatten)]
    pub other: HashMap<String, serde_json::Value>,
}

/// Candlestick bar data of a certain trading period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarData {
    pub symbol: String,
    pub datetime: DateTime<Utc>,

    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,
    pub volume: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<BarExtra>,
}

impl BarData {
    /// Create a new BarData without annotations.
    pub fn new(
        symbol: impl Into<String>,
        datetime: DateTime<Utc>,
        open_price: f64,
        high_price: f64,
        low_price: f64,
        close_price: f64,
        volume: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            datetime,
            open_price,
            high_price,
            low_price,
            close_price,
            volume,
            extra: None,
        }
    }

    /// Attach a named overlay line point to this bar.
    pub fn mark_line(&mut self, mark: LineMark) {
        self.extra.get_or_insert_with(BarExtra::default).lines.push(mark);
    }

    /// Attach an icon marker to this bar.
    pub fn mark_icon(&mut self, mark: IconMark) {
        self.extra.get_or_insert_with(BarExtra::default).icons.push(mark);
    }

    /// Overlay line points of this bar, empty when unannotated.
    pub fn lines(&self) -> &[LineMark] {
        self.extra.as_ref().map(|e| e.lines.as_slice()).unwrap_or(&[])
    }

    /// Icon markers of this bar, empty when unannotated.
    pub fn icons(&self) -> &[IconMark] {
        self.extra.as_ref().map(|e| e.icons.as_slice()).unwrap_or(&[])
    }
}

//! Overlay line chart item.
//!
//! Bars carry named line points in their `extra.lines` annotation; each named
//! label forms an independent polyline over the series. The picture of bar
//! `ix` holds the segments arriving at `ix` from `ix - 1`, so the per-bar
//! cache stays valid under panning and the one-index lookback goes through
//! the manager even when a window starts mid-series.

use crate::base::format_decimal;
use crate::item::ChartItem;
use crate::manager::BarManager;
use crate::object::BarData;
use crate::picture::{DrawCommand, Picture, Point, Stroke};

/// Draws per-label segments between consecutive annotated bars.
#[derive(Debug, Default)]
pub struct LineItem;

impl LineItem {
    pub fn new() -> Self {
        Self
    }

    /// Value of the named line at an index, `None` when the index is out of
    /// range or the label is not annotated there.
    fn get_line_value(manager: &BarManager, ix: Option<usize>, label: &str) -> Option<f64> {
        let bar = manager.get_bar(ix?)?;
        bar.lines()
            .iter()
            .find(|mark| mark.label == label)
            .map(|mark| mark.value)
    }
}

impl ChartItem for LineItem {
    fn draw_bar(&self, manager: &BarManager, ix: usize, bar: &BarData) -> Picture {
        let mut picture = Picture::new();

        for mark in bar.lines() {
            let previous_ix = ix.checked_sub(1);
            let Some(previous_value) = Self::get_line_value(manager, previous_ix, &mark.label)
            else {
                continue;
            };

            let width = mark.width.unwrap_or(1) as f32;
            picture.push(DrawCommand::Line {
                from: Point::new(ix as f64 - 1.0, previous_value),
                to: Point::new(ix as f64, mark.value),
                stroke: Stroke::new(width, mark.color.rgb()),
            });
        }

        picture
    }

    fn get_y_range(
        &self,
        manager: &BarManager,
        min_ix: Option<usize>,
        max_ix: Option<usize>,
    ) -> (f64, f64) {
        manager.get_price_range(min_ix, max_ix)
    }

    fn get_info_text(&self, manager: &BarManager, ix: usize) -> String {
        let Some(bar) = manager.get_bar(ix) else {
            return String::new();
        };

        bar.lines()
            .iter()
            .map(|mark| format!("{}: {}", mark.label, format_decimal(mark.value, 2)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// A segment at `ix` reads the previous bar's value.
    fn lookback(&self) -> usize {
        1
    }
}

//! Icon marker chart item.
//!
//! Bars carry `(icon, y)` markers in their `extra.icons` annotation. Unlike
//! the other items, the drawn size is not a pure function of bar content: the
//! icon must stay legible at any zoom level, so its index-unit width is
//! derived from the viewport scale and every picture is redrawn when that
//! scale changes.

use std::rc::Rc;

use crate::item::ChartItem;
use crate::manager::BarManager;
use crate::object::BarData;
use crate::picture::{DrawCommand, Picture, RectF};
use crate::viewport::ViewportMetrics;

/// Smallest on-screen icon edge in pixels.
pub const MIN_ICON_SIZE: f64 = 12.0;

/// Draws fixed-aspect marker images anchored at annotated bars.
pub struct IconItem {
    metrics: Rc<dyn ViewportMetrics>,
}

impl IconItem {
    pub fn new(metrics: Rc<dyn ViewportMetrics>) -> Self {
        Self { metrics }
    }

    /// Icon width in index units: one unit, scaled up when a unit renders
    /// under [`MIN_ICON_SIZE`] pixels.
    fn get_icon_width(&self) -> f64 {
        let unit_pixels = self.metrics.x_pixels_per_unit();
        if unit_pixels > 0.0 && unit_pixels < MIN_ICON_SIZE {
            MIN_ICON_SIZE / unit_pixels
        } else {
            1.0
        }
    }
}

impl ChartItem for IconItem {
    fn draw_bar(&self, _manager: &BarManager, ix: usize, bar: &BarData) -> Picture {
        let mut picture = Picture::new();

        for mark in bar.icons() {
            let w = self.get_icon_width();
            // Compensate the non-uniform axis scaling so the rendered image
            // keeps its intrinsic proportions.
            let h = w / mark.icon.aspect_ratio() * self.metrics.scale_ratio();

            picture.push(DrawCommand::Image {
                icon: mark.icon,
                rect: RectF::new(ix as f64 - w / 2.0, mark.y, w, h),
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

    fn get_info_text(&self, _manager: &BarManager, _ix: usize) -> String {
        String::new()
    }

    fn repaint_on_view_change(&self) -> bool {
        true
    }
}

//! Viewport metrics supplied by the host.
//!
//! Layers whose drawing depends on the on-screen scale (icon markers) take an
//! explicit metrics provider at construction time instead of walking up a
//! widget tree at paint time.

use std::cell::Cell;

/// Capability to report the current data-to-pixel scale of the plot area.
pub trait ViewportMetrics {
    /// On-screen pixel width of one index unit.
    fn x_pixels_per_unit(&self) -> f64;

    /// On-screen pixel height of one y unit.
    fn y_pixels_per_unit(&self) -> f64;

    /// Horizontal over vertical scale, 1.0 when the vertical scale is unset.
    fn scale_ratio(&self) -> f64 {
        let y = self.y_pixels_per_unit();
        if y <= 0.0 {
            return 1.0;
        }
        self.x_pixels_per_unit() / y
    }
}

/// Single-threaded metrics provider updated by the host on zoom or resize.
#[derive(Debug)]
pub struct PlotViewport {
    x_ppu: Cell<f64>,
    y_ppu: Cell<f64>,
}

impl PlotViewport {
    pub fn new(x_ppu: f64, y_ppu: f64) -> Self {
        Self {
            x_ppu: Cell::new(x_ppu),
            y_ppu: Cell::new(y_ppu),
        }
    }

    /// Update both scale factors.
    pub fn set_scale(&self, x_ppu: f64, y_ppu: f64) {
        self.x_ppu.set(x_ppu);
        self.y_ppu.set(y_ppu);
    }
}

impl ViewportMetrics for PlotViewport {
    fn x_pixels_per_unit(&self) -> f64 {
        self.x_ppu.get()
    }

    fn y_pixels_per_unit(&self) -> f64 {
        self.y_ppu.get()
    }
}

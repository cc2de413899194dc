//! Volume bar chart item.

use crate::base::{BAR_WIDTH, DOWN_COLOR, PEN_WIDTH, UP_COLOR};
use crate::item::ChartItem;
use crate::manager::BarManager;
use crate::object::BarData;
use crate::picture::{DrawCommand, Picture, Point, RectF, Stroke};

/// Draws one filled bar from 0 to the traded volume, colored by the price
/// movement of the same bar.
#[derive(Debug, Default)]
pub struct VolumeItem;

impl VolumeItem {
    pub fn new() -> Self {
        Self
    }
}

impl ChartItem for VolumeItem {
    fn draw_bar(&self, _manager: &BarManager, ix: usize, bar: &BarData) -> Picture {
        let mut picture = Picture::new();
        let x = ix as f64;

        let color = if bar.close_price >= bar.open_price {
            UP_COLOR
        } else {
            DOWN_COLOR
        };

        picture.push(DrawCommand::Rect {
            rect: RectF::from_corners(
                Point::new(x - BAR_WIDTH, 0.0),
                Point::new(x + BAR_WIDTH, bar.volume),
            ),
            stroke: Stroke::new(PEN_WIDTH, color),
            fill: color,
        });

        picture
    }

    fn get_y_range(
        &self,
        manager: &BarManager,
        min_ix: Option<usize>,
        max_ix: Option<usize>,
    ) -> (f64, f64) {
        manager.get_volume_range(min_ix, max_ix)
    }

    fn get_info_text(&self, manager: &BarManager, ix: usize) -> String {
        match manager.get_bar(ix) {
            Some(bar) => format!("Volume {}", bar.volume),
            None => String::new(),
        }
    }
}

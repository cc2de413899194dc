//! Candlestick chart item.

use crate::base::{
    format_decimal, BAR_WIDTH, BLACK_COLOR, DOWN_COLOR, PEN_WIDTH, UP_COLOR,
};
use crate::item::ChartItem;
use crate::manager::BarManager;
use crate::object::BarData;
use crate::picture::{DrawCommand, Picture, Point, RectF, Stroke};

/// Draws one candle per bar: a high-low shadow and an open-close body.
#[derive(Debug, Default)]
pub struct CandleItem;

impl CandleItem {
    pub fn new() -> Self {
        Self
    }
}

impl ChartItem for CandleItem {
    fn draw_bar(&self, _manager: &BarManager, ix: usize, bar: &BarData) -> Picture {
        let mut picture = Picture::new();
        let x = ix as f64;

        // Up candles are drawn hollow on the dark background.
        let (stroke, fill) = if bar.close_price >= bar.open_price {
            (Stroke::new(PEN_WIDTH, UP_COLOR), BLACK_COLOR)
        } else {
            (Stroke::new(PEN_WIDTH, DOWN_COLOR), DOWN_COLOR)
        };

        // Candle shadow
        if bar.high_price > bar.low_price {
            picture.push(DrawCommand::Line {
                from: Point::new(x, bar.high_price),
                to: Point::new(x, bar.low_price),
                stroke,
            });
        }

        // Candle body, a flat tick when the bar is a doji
        if bar.open_price == bar.close_price {
            picture.push(DrawCommand::Line {
                from: Point::new(x - BAR_WIDTH, bar.open_price),
                to: Point::new(x + BAR_WIDTH, bar.open_price),
                stroke,
            });
        } else {
            picture.push(DrawCommand::Rect {
                rect: RectF::from_corners(
                    Point::new(x - BAR_WIDTH, bar.open_price),
                    Point::new(x + BAR_WIDTH, bar.close_price),
                ),
                stroke,
                fill,
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

        [
            "Date".to_string(),
            bar.datetime.format("%Y-%m-%d").to_string(),
            String::new(),
            "Time".to_string(),
            bar.datetime.format("%H:%M").to_string(),
            String::new(),
            "Open".to_string(),
            format_decimal(bar.open_price, 2),
            String::new(),
            "High".to_string(),
            format_decimal(bar.high_price, 2),
            String::new(),
            "Low".to_string(),
            format_decimal(bar.low_price, 2),
            String::new(),
            "Close".to_string(),
            format_decimal(bar.close_price, 2),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn manager_with(bar: BarData) -> BarManager {
        let mut manager = BarManager::new();
        manager.update_history(vec![bar]).unwrap();
        manager
    }

    #[test]
    fn test_doji_draws_flat_tick_and_shadow() {
        let dt = Utc.with_ymd_and_hms(2023, 5, 1, 10, 0, 0).unwrap();
        let bar = BarData::new("TEST", dt, 10.0, 11.0, 9.0, 10.0, 100.0);
        let manager = manager_with(bar.clone());

        let picture = CandleItem::new().draw_bar(&manager, 0, &bar);
        assert_eq!(picture.len(), 2);

        match &picture.commands()[0] {
            DrawCommand::Line { from, to, .. } => {
                assert_eq!((from.y, to.y), (11.0, 9.0));
            }
            other => panic!("expected shadow line, got {:?}", other),
        }
        match &picture.commands()[1] {
            DrawCommand::Line { from, to, .. } => {
                assert_eq!(from.y, 10.0);
                assert_eq!(to.y, 10.0);
                assert_eq!(from.x, -BAR_WIDTH);
                assert_eq!(to.x, BAR_WIDTH);
            }
            other => panic!("expected flat tick, got {:?}", other),
        }
    }

    #[test]
    fn test_up_candle_is_hollow_down_is_filled() {
        let dt = Utc.with_ymd_and_hms(2023, 5, 1, 10, 0, 0).unwrap();
        let up = BarData::new("TEST", dt, 10.0, 12.0, 9.0, 11.0, 100.0);
        let manager = manager_with(up.clone());

        let picture = CandleItem::new().draw_bar(&manager, 0, &up);
        match &picture.commands()[1] {
            DrawCommand::Rect { stroke, fill, rect } => {
                assert_eq!(stroke.color, UP_COLOR);
                assert_eq!(*fill, BLACK_COLOR);
                assert_eq!(rect.y, 10.0);
                assert_eq!(rect.height, 1.0);
            }
            other => panic!("expected body rect, got {:?}", other),
        }

        let down = BarData::new("TEST", dt, 11.0, 12.0, 9.0, 10.0, 100.0);
        let picture = CandleItem::new().draw_bar(&manager, 0, &down);
        match &picture.commands()[1] {
            DrawCommand::Rect { stroke, fill, .. } => {
                assert_eq!(stroke.color, DOWN_COLOR);
                assert_eq!(*fill, DOWN_COLOR);
            }
            other => panic!("expected body rect, got {:?}", other),
        }
    }

    #[test]
    fn test_no_shadow_when_high_equals_low() {
        let dt = Utc.with_ymd_and_hms(2023, 5, 1, 10, 0, 0).unwrap();
        let bar = BarData::new("TEST", dt, 10.0, 10.0, 10.0, 10.0, 0.0);
        let manager = manager_with(bar.clone());

        let picture = CandleItem::new().draw_bar(&manager, 0, &bar);
        // Only the flat tick remains.
        assert_eq!(picture.len(), 1);
    }

    #[test]
    fn test_info_text() {
        let dt = Utc.with_ymd_and_hms(2023, 5, 1, 10, 30, 0).unwrap();
        let bar = BarData::new("TEST", dt, 10.0, 11.5, 9.0, 10.25, 100.0);
        let manager = manager_with(bar);

        let text = CandleItem::new().get_info_text(&manager, 0);
        assert!(text.starts_with("Date\n2023-05-01\n\nTime\n10:30\n"));
        assert!(text.contains("Open\n10\n"));
        assert!(text.contains("High\n11.50\n"));
        assert!(text.ends_with("Close\n10.25"));

        assert_eq!(CandleItem::new().get_info_text(&manager, 5), "");
    }
}

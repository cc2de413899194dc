//! Concrete chart items: candles, volume bars, overlay lines and icon markers.

mod candle;
mod icon;
mod line;
mod volume;

pub use candle::CandleItem;
pub use icon::{IconItem, MIN_ICON_SIZE};
pub use line::LineItem;
pub use volume::VolumeItem;

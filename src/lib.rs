//! chart_engine - an incremental candlestick charting core.
//!
//! Renders long OHLCV series as layered, cacheable drawing command lists:
//! candles, volume bars, overlay lines and icon markers share one horizontal
//! index while scaling their y-axes independently. The engine owns the bar
//! store and the per-layer render caches; the host owns windows, input and
//! actual pixel painting.
//!
//! Typical flow:
//!
//! ```
//! use chart_engine::{BarData, BarManager, CandleItem, ChartLayer};
//! use chrono::{Duration, Utc};
//!
//! let start = Utc::now();
//! let bars: Vec<BarData> = (0..100)
//!     .map(|i| {
//!         let close = 100.0 + (i as f64 * 0.1).sin();
//!         BarData::new(
//!             "BTCUSDT",
//!             start + Duration::minutes(i),
//!             close - 0.1,
//!             close + 0.5,
//!             close - 0.5,
//!             close,
//!             1000.0,
//!         )
//!     })
//!     .collect();
//!
//! let mut manager = BarManager::new();
//! manager.update_history(bars).unwrap();
//!
//! let mut candles = ChartLayer::new(CandleItem::new());
//! candles.update_history(&manager);
//!
//! // Only the exposed window is drawn; panning reuses cached bar pictures.
//! let picture = candles.render(&manager, 40, 80);
//! assert!(!picture.is_empty());
//! ```

pub mod base;
pub mod error;
pub mod item;
pub mod items;
pub mod manager;
pub mod object;
pub mod picture;
pub mod viewport;

pub use base::{format_decimal, Color, BAR_WIDTH, DOWN_COLOR, PEN_WIDTH, UP_COLOR};
pub use error::ChartError;
pub use item::{CacheStats, ChartItem, ChartLayer};
pub use items::{CandleItem, IconItem, LineItem, VolumeItem, MIN_ICON_SIZE};
pub use manager::BarManager;
pub use object::{BarData, BarExtra, Icon, IconMark, LineColor, LineMark};
pub use picture::{DrawCommand, Picture, Point, RectF, Stroke};
pub use viewport::{PlotViewport, ViewportMetrics};

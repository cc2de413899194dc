//! Chart item trait and the per-layer render cache.
//!
//! A [`ChartItem`] knows how to draw one bar into a [`Picture`] and how to
//! report its y-range and cursor text. [`ChartLayer`] wraps an item with the
//! caching logic shared by every layer: one cached picture per bar index, one
//! cached composite for the last exposed window, and dirty tracking at the
//! single-index, whole-series and forced-repaint granularities.

use tracing::{debug, trace};

use crate::manager::BarManager;
use crate::object::BarData;
use crate::picture::{Picture, RectF};

/// A visual role that converts bars into drawing units.
pub trait ChartItem {
    /// Draw the picture for one specific bar.
    fn draw_bar(&self, manager: &BarManager, ix: usize, bar: &BarData) -> Picture;

    /// Get range of y-axis with given x-axis range.
    ///
    /// If min_ix and max_ix are not specified, return the range over the
    /// whole data set.
    fn get_y_range(
        &self,
        manager: &BarManager,
        min_ix: Option<usize>,
        max_ix: Option<usize>,
    ) -> (f64, f64);

    /// Get information text to show by the cursor.
    fn get_info_text(&self, manager: &BarManager, ix: usize) -> String;

    /// How many preceding bars one bar's picture reads through the manager.
    ///
    /// Non-zero for items that connect consecutive points: amending bar `ix`
    /// then also invalidates the pictures of the following `lookback` bars.
    fn lookback(&self) -> usize {
        0
    }

    /// Whether pictures depend on the viewport scale and must all be redrawn
    /// when it changes.
    fn repaint_on_view_change(&self) -> bool {
        false
    }
}

impl<T: ChartItem + ?Sized> ChartItem for Box<T> {
    fn draw_bar(&self, manager: &BarManager, ix: usize, bar: &BarData) -> Picture {
        (**self).draw_bar(manager, ix, bar)
    }

    fn get_y_range(
        &self,
        manager: &BarManager,
        min_ix: Option<usize>,
        max_ix: Option<usize>,
    ) -> (f64, f64) {
        (**self).get_y_range(manager, min_ix, max_ix)
    }

    fn get_info_text(&self, manager: &BarManager, ix: usize) -> String {
        (**self).get_info_text(manager, ix)
    }

    fn lookback(&self) -> usize {
        (**self).lookback()
    }

    fn repaint_on_view_change(&self) -> bool {
        (**self).repaint_on_view_change()
    }
}

/// Cache activity counters, exposed for tests and diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Per-bar pictures drawn from scratch.
    pub bar_rebuilds: usize,
    /// Per-bar pictures served from the cache during composition.
    pub bar_hits: usize,
    /// Composites rebuilt.
    pub composite_builds: usize,
    /// Render calls answered with the cached composite.
    pub composite_reuses: usize,
}

/// A chart item together with its render cache.
pub struct ChartLayer<I: ChartItem> {
    item: I,
    /// Cached picture per bar index; `None` means not yet drawn.
    bar_pictures: Vec<Option<Picture>>,
    /// Composite picture for the last exposed window.
    item_picture: Option<Picture>,
    /// The half-open window the composite was built for.
    rect_area: Option<(usize, usize)>,
    /// Force redraw of every in-window bar during the next render.
    to_repaint: bool,
    stats: CacheStats,
}

impl<I: ChartItem> ChartLayer<I> {
    pub fn new(item: I) -> Self {
        Self {
            item,
            bar_pictures: Vec::new(),
            item_picture: None,
            rect_area: None,
            to_repaint: false,
            stats: CacheStats::default(),
        }
    }

    pub fn item(&self) -> &I {
        &self.item
    }

    /// React to a full history replacement: drop every cached picture.
    pub fn update_history(&mut self, manager: &BarManager) {
        self.bar_pictures.clear();
        self.bar_pictures.resize(manager.get_count(), None);
        self.item_picture = None;
        self.rect_area = None;
        debug!(count = manager.get_count(), "layer cache reset for new history");
    }

    /// React to a single bar update: invalidate the bar's index.
    pub fn update_bar(&mut self, manager: &BarManager, bar: &BarData) {
        if let Some(ix) = manager.get_index(bar.datetime) {
            self.grow_to(manager.get_count());
            self.invalidate_index(ix);
        }
    }

    /// Drop the cached picture of one index, plus the pictures of following
    /// indices that read this bar through the item's lookback. The composite
    /// is dropped when the dirty span is inside or touching its window.
    pub fn invalidate_index(&mut self, ix: usize) {
        let dirty_end = ix + self.item.lookback();
        for i in ix..=dirty_end {
            if let Some(slot) = self.bar_pictures.get_mut(i) {
                *slot = None;
            }
        }

        if let Some((min_ix, max_ix)) = self.rect_area {
            if ix <= max_ix && dirty_end + 1 >= min_ix {
                self.item_picture = None;
            }
        }
        trace!(ix, dirty_end, "bar picture invalidated");
    }

    /// Force every bar inside the next exposed window to be redrawn, even
    /// when a cached picture exists. Used when drawing depends on the
    /// viewport scale rather than on bar content alone.
    pub fn request_full_repaint(&mut self) {
        self.to_repaint = true;
    }

    /// Tell the layer the viewport scale changed. Only layers whose item
    /// draws scale-dependent pictures schedule a repaint.
    pub fn notify_view_changed(&mut self) {
        if self.item.repaint_on_view_change() {
            self.request_full_repaint();
        }
    }

    /// Compose the picture for the half-open window `[min_ix, max_ix)`.
    ///
    /// Reuses the previous composite when the window and repaint flag are
    /// unchanged; otherwise redraws only the bars whose cached picture is
    /// absent (or all of them under a forced repaint) and concatenates the
    /// per-bar pictures in index order.
    pub fn render(&mut self, manager: &BarManager, min_ix: usize, max_ix: usize) -> &Picture {
        self.grow_to(manager.get_count());

        let max_ix = max_ix.min(self.bar_pictures.len());
        let min_ix = min_ix.min(max_ix);
        let rect_area = (min_ix, max_ix);

        let reusable =
            !self.to_repaint && self.rect_area == Some(rect_area) && self.item_picture.is_some();

        if reusable {
            self.stats.composite_reuses += 1;
        } else {
            let composite = self.draw_item_picture(manager, min_ix, max_ix);
            self.item_picture = Some(composite);
            self.rect_area = Some(rect_area);
            self.to_repaint = false;
            self.stats.composite_builds += 1;
        }

        self.item_picture.get_or_insert_with(Picture::new)
    }

    /// Y-range of this layer over the given window, whole series by default.
    pub fn get_y_range(
        &self,
        manager: &BarManager,
        min_ix: Option<usize>,
        max_ix: Option<usize>,
    ) -> (f64, f64) {
        self.item.get_y_range(manager, min_ix, max_ix)
    }

    /// Cursor text of this layer for one index.
    pub fn get_info_text(&self, manager: &BarManager, ix: usize) -> String {
        self.item.get_info_text(manager, ix)
    }

    /// Full extent of the layer: x spans the bar count, y the whole-series
    /// range of the item.
    pub fn bounding_rect(&self, manager: &BarManager) -> RectF {
        let (y_min, y_max) = self.item.get_y_range(manager, None, None);
        RectF::new(0.0, y_min, manager.get_count() as f64, y_max - y_min)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.stats
    }

    /// Clear all cached data in the layer.
    pub fn clear_all(&mut self) {
        self.bar_pictures.clear();
        self.item_picture = None;
        self.rect_area = None;
        self.to_repaint = false;
    }

    fn grow_to(&mut self, count: usize) {
        if self.bar_pictures.len() < count {
            self.bar_pictures.resize(count, None);
        }
    }

    fn draw_item_picture(&mut self, manager: &BarManager, min_ix: usize, max_ix: usize) -> Picture {
        let mut composite = Picture::new();

        for ix in min_ix..max_ix {
            if self.bar_pictures[ix].is_none() || self.to_repaint {
                let picture = match manager.get_bar(ix) {
                    Some(bar) => self.item.draw_bar(manager, ix, bar),
                    None => Picture::new(),
                };
                self.bar_pictures[ix] = Some(picture);
                self.stats.bar_rebuilds += 1;
            } else {
                self.stats.bar_hits += 1;
            }

            if let Some(picture) = &self.bar_pictures[ix] {
                composite.extend(picture);
            }
        }

        composite
    }
}

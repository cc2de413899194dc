//! Bar data manager for the chart engine.
//!
//! Keeps an ordered, append-only series of bars with datetime indexing and
//! answers range queries for price and volume over index windows.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::ChartError;
use crate::object::BarData;

/// Manages bar data with datetime-based indexing.
///
/// Indices are dense and grow only at the tail: a new bar is appended at
/// index `count`, and only the most recent bar may be amended in place.
#[derive(Default)]
pub struct BarManager {
    /// Ordered list of bar data, index position is the bar index.
    bars: Vec<BarData>,
    /// Map from datetime to index.
    datetime_index_map: HashMap<DateTime<Utc>, usize>,
}

impl BarManager {
    /// Create a new empty BarManager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole store with a list of bar data.
    ///
    /// The history must be strictly increasing in datetime; otherwise the
    /// load is rejected and the store keeps its previous content.
    pub fn update_history(&mut self, history: Vec<BarData>) -> Result<(), ChartError> {
        for (ix, pair) in history.windows(2).enumerate() {
            if pair[1].datetime <= pair[0].datetime {
                return Err(ChartError::UnorderedHistory { index: ix + 1 });
            }
        }

        self.datetime_index_map.clear();
        for (ix, bar) in history.iter().enumerate() {
            self.datetime_index_map.insert(bar.datetime, ix);
        }
        self.bars = history;

        debug!(count = self.bars.len(), "bar history replaced");
        Ok(())
    }

    /// Update with a single bar and return the index it landed on.
    ///
    /// A bar whose datetime equals the last stored one amends that bar in
    /// place; a strictly greater datetime appends a new bar. A smaller
    /// datetime is rejected and leaves the store unchanged.
    pub fn update_bar(&mut self, bar: BarData) -> Result<usize, ChartError> {
        let dt = bar.datetime;

        if let Some(last_dt) = self.bars.last().map(|b| b.datetime) {
            if dt < last_dt {
                return Err(ChartError::OutOfOrderBar { last: last_dt, new: dt });
            }
            if dt == last_dt {
                let ix = self.bars.len() - 1;
                self.bars[ix] = bar;
                return Ok(ix);
            }
        }

        let ix = self.bars.len();
        self.datetime_index_map.insert(dt, ix);
        self.bars.push(bar);
        Ok(ix)
    }

    /// Get total number of bars.
    pub fn get_count(&self) -> usize {
        self.bars.len()
    }

    /// Get index for a datetime with an exact match.
    pub fn get_index(&self, dt: DateTime<Utc>) -> Option<usize> {
        self.datetime_index_map.get(&dt).copied()
    }

    /// Get datetime for an index.
    pub fn get_datetime(&self, ix: usize) -> Option<DateTime<Utc>> {
        self.bars.get(ix).map(|bar| bar.datetime)
    }

    /// Get bar data for an index, `None` when out of range.
    pub fn get_bar(&self, ix: usize) -> Option<&BarData> {
        self.bars.get(ix)
    }

    /// Get all bar data.
    pub fn get_all_bars(&self) -> &[BarData] {
        &self.bars
    }

    /// Get (min, max) price over the half-open index window.
    ///
    /// Bounds default to the whole store. Scans open/high/low/close so that
    /// amended bars with outlying opens or closes are still covered. Returns
    /// the degenerate (0.0, 0.0) for an empty store or window; callers must
    /// guard before scaling by the span.
    pub fn get_price_range(&self, min_ix: Option<usize>, max_ix: Option<usize>) -> (f64, f64) {
        let bars = self.window(min_ix, max_ix);
        if bars.is_empty() {
            return (0.0, 0.0);
        }

        let mut min_price = bars[0].low_price;
        let mut max_price = bars[0].high_price;

        for bar in bars {
            min_price = min_price.min(bar.low_price).min(bar.open_price.min(bar.close_price));
            max_price = max_price.max(bar.high_price).max(bar.open_price.max(bar.close_price));
        }

        (min_price, max_price)
    }

    /// Get (min, max) volume over the half-open index window.
    ///
    /// The minimum is pinned at 0 so volume bars always grow from the axis.
    /// Returns (0.0, 0.0) for an empty store or window.
    pub fn get_volume_range(&self, min_ix: Option<usize>, max_ix: Option<usize>) -> (f64, f64) {
        let bars = self.window(min_ix, max_ix);
        if bars.is_empty() {
            return (0.0, 0.0);
        }

        let mut max_volume = bars[0].volume;
        for bar in bars {
            max_volume = max_volume.max(bar.volume);
        }

        (0.0, max_volume)
    }

    /// Clear all data.
    pub fn clear_all(&mut self) {
        self.bars.clear();
        self.datetime_index_map.clear();
    }

    fn window(&self, min_ix: Option<usize>, max_ix: Option<usize>) -> &[BarData] {
        let min_ix = min_ix.unwrap_or(0);
        let max_ix = max_ix.unwrap_or(self.bars.len()).min(self.bars.len());
        if min_ix >= max_ix {
            return &[];
        }
        &self.bars[min_ix..max_ix]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn create_test_bar(
        datetime: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> BarData {
        BarData::new("TEST", datetime, open, high, low, close, volume)
    }

    fn minute_bars(start: DateTime<Utc>, specs: &[(f64, f64, f64, f64, f64)]) -> Vec<BarData> {
        specs
            .iter()
            .enumerate()
            .map(|(i, &(o, h, l, c, v))| {
                create_test_bar(start + Duration::minutes(i as i64), o, h, l, c, v)
            })
            .collect()
    }

    #[test]
    fn test_update_history_round_trip() {
        let mut manager = BarManager::new();
        let start = Utc::now();
        let bars = minute_bars(
            start,
            &[
                (100.0, 105.0, 95.0, 102.0, 1000.0),
                (102.0, 110.0, 98.0, 108.0, 1500.0),
                (108.0, 112.0, 106.0, 107.0, 800.0),
            ],
        );

        manager.update_history(bars.clone()).unwrap();

        assert_eq!(manager.get_count(), 3);
        for (ix, bar) in bars.iter().enumerate() {
            assert_eq!(manager.get_bar(ix), Some(bar));
            assert_eq!(manager.get_index(bar.datetime), Some(ix));
            assert_eq!(manager.get_datetime(ix), Some(bar.datetime));
        }
    }

    #[test]
    fn test_update_history_rejects_unordered() {
        let mut manager = BarManager::new();
        let start = Utc::now();
        manager
            .update_history(minute_bars(start, &[(1.0, 2.0, 0.5, 1.5, 10.0)]))
            .unwrap();

        let mut bad = minute_bars(
            start + Duration::hours(1),
            &[
                (1.0, 2.0, 0.5, 1.5, 10.0),
                (1.5, 2.5, 1.0, 2.0, 20.0),
            ],
        );
        bad[1].datetime = bad[0].datetime;

        let err = manager.update_history(bad).unwrap_err();
        assert_eq!(err, ChartError::UnorderedHistory { index: 1 });

        // Store keeps its previous content on rejection.
        assert_eq!(manager.get_count(), 1);
        assert_eq!(manager.get_datetime(0), Some(start));
    }

    #[test]
    fn test_update_bar_append_and_amend() {
        let mut manager = BarManager::new();
        let start = Utc::now();

        let first = create_test_bar(start, 100.0, 105.0, 95.0, 102.0, 1000.0);
        assert_eq!(manager.update_bar(first), Ok(0));
        assert_eq!(manager.get_count(), 1);

        // Same datetime amends in place, count unchanged.
        let amended = create_test_bar(start, 100.0, 106.0, 95.0, 104.0, 1200.0);
        assert_eq!(manager.update_bar(amended.clone()), Ok(0));
        assert_eq!(manager.get_count(), 1);
        assert_eq!(manager.get_bar(0), Some(&amended));

        // Greater datetime appends.
        let second = create_test_bar(start + Duration::minutes(1), 104.0, 108.0, 103.0, 107.0, 900.0);
        assert_eq!(manager.update_bar(second), Ok(1));
        assert_eq!(manager.get_count(), 2);
    }

    #[test]
    fn test_update_bar_rejects_out_of_order() {
        let mut manager = BarManager::new();
        let start = Utc::now();
        manager
            .update_bar(create_test_bar(start, 100.0, 105.0, 95.0, 102.0, 1000.0))
            .unwrap();

        let stale = create_test_bar(start - Duration::minutes(1), 99.0, 100.0, 98.0, 99.5, 500.0);
        let err = manager.update_bar(stale).unwrap_err();
        assert_eq!(
            err,
            ChartError::OutOfOrderBar {
                last: start,
                new: start - Duration::minutes(1),
            }
        );
        assert_eq!(manager.get_count(), 1);
    }

    #[test]
    fn test_price_range_matches_brute_force() {
        let mut manager = BarManager::new();
        let specs = [
            (100.0, 105.0, 95.0, 102.0, 1000.0),
            (102.0, 110.0, 98.0, 108.0, 1500.0),
            (108.0, 112.0, 106.0, 107.0, 800.0),
            (107.0, 109.0, 90.0, 91.0, 2000.0),
        ];
        manager.update_history(minute_bars(Utc::now(), &specs)).unwrap();

        let bounds = [None, Some(0), Some(1), Some(2), Some(3), Some(4)];
        for &lo in &bounds {
            for &hi in &bounds {
                let (min_p, max_p) = manager.get_price_range(lo, hi);
                let start = lo.unwrap_or(0);
                let end = hi.unwrap_or(specs.len()).min(specs.len());
                if start >= end {
                    assert_eq!((min_p, max_p), (0.0, 0.0));
                    continue;
                }
                let slice = &specs[start..end];
                let expect_min = slice.iter().map(|s| s.2).fold(f64::INFINITY, f64::min);
                let expect_max = slice.iter().map(|s| s.1).fold(f64::NEG_INFINITY, f64::max);
                assert_eq!(min_p, expect_min);
                assert_eq!(max_p, expect_max);
            }
        }
    }

    #[test]
    fn test_volume_range_matches_brute_force() {
        let mut manager = BarManager::new();
        let specs = [
            (100.0, 105.0, 95.0, 102.0, 1000.0),
            (102.0, 110.0, 98.0, 108.0, 1500.0),
            (108.0, 112.0, 106.0, 107.0, 800.0),
        ];
        manager.update_history(minute_bars(Utc::now(), &specs)).unwrap();

        assert_eq!(manager.get_volume_range(None, None), (0.0, 1500.0));
        assert_eq!(manager.get_volume_range(Some(2), None), (0.0, 800.0));
        assert_eq!(manager.get_volume_range(Some(0), Some(1)), (0.0, 1000.0));
    }

    #[test]
    fn test_ranges_on_empty_store_are_degenerate() {
        let manager = BarManager::new();
        assert_eq!(manager.get_price_range(None, None), (0.0, 0.0));
        assert_eq!(manager.get_volume_range(None, None), (0.0, 0.0));
    }

    #[test]
    fn test_get_bar_out_of_range() {
        let mut manager = BarManager::new();
        manager
            .update_bar(create_test_bar(Utc::now(), 1.0, 2.0, 0.5, 1.5, 10.0))
            .unwrap();
        assert!(manager.get_bar(0).is_some());
        assert!(manager.get_bar(1).is_none());
    }
}

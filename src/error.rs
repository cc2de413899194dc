//! Error types for the chart engine.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors raised by chart data mutation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// A single bar update carried a timestamp earlier than the last stored bar.
    #[error("bar timestamp {new} is earlier than last stored timestamp {last}")]
    OutOfOrderBar {
        last: DateTime<Utc>,
        new: DateTime<Utc>,
    },

    /// A bulk history load was not strictly increasing in timestamp.
    #[error("history timestamps are not strictly increasing at index {index}")]
    UnorderedHistory { index: usize },
}

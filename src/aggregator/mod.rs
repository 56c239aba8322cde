//! Metrics aggregation: query sequencing and response flattening.

pub mod daily;
pub mod record;

pub use daily::{DailyAggregator, GeographicBreakdown, TimePatterns};
pub use record::{ComparisonRecord, MetricsSnapshot, PageEntry, SourceEntry};

//! GA4 Data API client and query/response types.

pub mod client;
pub mod types;

pub use client::AnalyticsClient;
pub use types::{
    DateRange, Dimension, FilterExpression, MatchType, Metric, OrderBy, ReportRow, ReportTable,
    RunReportRequest,
};

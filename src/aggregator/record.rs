//! Flat comparison record passed from aggregation to rendering.
//!
//! The aggregator flattens several tabular responses into one value type with
//! named fields, so the renderer never deals with optional keys or positional
//! columns. Rate metrics are converted fraction -> percent here, not at render
//! time.

use crate::analytics::ReportTable;
use crate::utils::error::QueryError;
use chrono::NaiveDate;

/// Core metrics of one calendar day
///
/// An empty provider response zero-fills every field; a day with no traffic
/// and a day with no data are indistinguishable downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsSnapshot {
    pub active_users: u64,
    pub page_views: u64,
    pub sessions: u64,
    /// Engaged-session share, already converted to percent
    pub engagement_rate: f64,
    /// Seconds
    pub avg_session_duration: f64,
    /// Already converted to percent; lower is better
    pub bounce_rate: f64,
}

impl MetricsSnapshot {
    /// Build a snapshot from the core-metrics and engagement tables
    ///
    /// Column positions follow the request's metric order:
    /// core = [activeUsers, screenPageViews, sessions, engagementRate],
    /// engagement = [averageSessionDuration, bounceRate].
    pub fn from_tables(core: &ReportTable, engagement: &ReportTable) -> Result<Self, QueryError> {
        let mut snapshot = Self::default();

        if let Some(row) = core.first_row() {
            snapshot.active_users = row.metric_u64(0)?;
            snapshot.page_views = row.metric_u64(1)?;
            snapshot.sessions = row.metric_u64(2)?;
            snapshot.engagement_rate = row.metric_f64(3)? * 100.0;
        }

        if let Some(row) = engagement.first_row() {
            snapshot.avg_session_duration = row.metric_f64(0)?;
            snapshot.bounce_rate = row.metric_f64(1)? * 100.0;
        }

        Ok(snapshot)
    }
}

/// One traffic-source entry: label plus session count
#[derive(Debug, Clone, PartialEq)]
pub struct SourceEntry {
    pub source: String,
    pub sessions: u64,
}

/// One popular-page entry: title plus view count
#[derive(Debug, Clone, PartialEq)]
pub struct PageEntry {
    pub title: String,
    pub views: u64,
}

/// Day-over-day comparison assembled by the aggregator
///
/// `sources` and `popular_pages` keep the provider-supplied ordering
/// (the query itself sorts descending); they are never re-sorted here.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRecord {
    pub date: NaiveDate,
    pub current: MetricsSnapshot,
    pub previous: MetricsSnapshot,
    pub sources: Vec<SourceEntry>,
    pub popular_pages: Vec<PageEntry>,
}

impl ComparisonRecord {
    /// Map the traffic-sources table into entries, provider order preserved
    pub fn sources_from_table(table: &ReportTable) -> Result<Vec<SourceEntry>, QueryError> {
        table
            .rows
            .iter()
            .map(|row| {
                Ok(SourceEntry {
                    source: row.dimension(0).to_string(),
                    sessions: row.metric_u64(0)?,
                })
            })
            .collect()
    }

    /// Map the popular-pages table into entries, provider order preserved
    pub fn pages_from_table(table: &ReportTable) -> Result<Vec<PageEntry>, QueryError> {
        table
            .rows
            .iter()
            .map(|row| {
                Ok(PageEntry {
                    title: row.dimension(0).to_string(),
                    views: row.metric_u64(0)?,
                })
            })
            .collect()
    }
}

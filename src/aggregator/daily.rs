//! Daily metrics aggregation.
//!
//! Issues a fixed sequence of analytics queries for the target day and the day
//! before, then flattens the responses into one [`ComparisonRecord`]. The
//! core-metrics and engagement queries stay separate because the provider
//! returns a position-indexed column set per request; keeping the metric lists
//! short avoids ambiguous column mapping.

use super::record::{ComparisonRecord, MetricsSnapshot};
use crate::analytics::{
    AnalyticsClient, DateRange, FilterExpression, MatchType, OrderBy, ReportTable,
    RunReportRequest,
};
use crate::utils::config::{DEFAULT_TREND_DAYS, TOP_ENTRY_LIMIT};
use crate::utils::error::QueryError;
use chrono::{Days, NaiveDate};
use log::{debug, info};

/// Hourly and day-of-week traffic pattern pair
#[derive(Debug, Clone)]
pub struct TimePatterns {
    pub hourly: ReportTable,
    pub daily: ReportTable,
}

/// Country and city breakdown pair
#[derive(Debug, Clone)]
pub struct GeographicBreakdown {
    pub country: ReportTable,
    pub city: ReportTable,
}

/// Aggregates per-day analytics queries into comparison records
pub struct DailyAggregator {
    client: AnalyticsClient,
}

impl DailyAggregator {
    pub fn new(client: AnalyticsClient) -> Self {
        Self { client }
    }

    /// Fetch the full day-over-day comparison for `target`
    ///
    /// Six blocking queries in fixed order: core metrics for both days,
    /// traffic sources and popular pages for the target day, engagement
    /// metrics for both days. The first failure aborts the whole run; no
    /// retries, no partial results.
    pub fn fetch_daily_comparison(
        &self,
        target: NaiveDate,
    ) -> Result<ComparisonRecord, QueryError> {
        let previous = target - Days::new(1);

        info!("Aggregating metrics for {} (vs {})", target, previous);

        let current_core = self.client.run_report(&core_metrics_request(target))?;
        let previous_core = self.client.run_report(&core_metrics_request(previous))?;
        let sources = self.client.run_report(&traffic_sources_request(target))?;
        let pages = self.client.run_report(&popular_pages_request(target))?;
        let current_engagement = self.client.run_report(&engagement_request(target))?;
        let previous_engagement = self.client.run_report(&engagement_request(previous))?;

        let record = ComparisonRecord {
            date: target,
            current: MetricsSnapshot::from_tables(&current_core, &current_engagement)?,
            previous: MetricsSnapshot::from_tables(&previous_core, &previous_engagement)?,
            sources: ComparisonRecord::sources_from_table(&sources)?,
            popular_pages: ComparisonRecord::pages_from_table(&pages)?,
        };

        debug!(
            "Assembled record: {} users, {} sources, {} pages",
            record.current.active_users,
            record.sources.len(),
            record.popular_pages.len()
        );

        Ok(record)
    }

    // The queries below are standalone breakdowns, not part of the daily
    // comparison. They return the raw table; zero-fill and unit conversion
    // stay with the caller.

    /// User stats per device category
    pub fn device_breakdown(&self, date: NaiveDate) -> Result<ReportTable, QueryError> {
        self.client.run_report(&device_breakdown_request(date))
    }

    /// Per-post performance, most viewed first
    pub fn content_performance(
        &self,
        date: NaiveDate,
        limit: i64,
    ) -> Result<ReportTable, QueryError> {
        self.client
            .run_report(&content_performance_request(date, limit))
    }

    /// Per-post dwell time ranking, longest engagement first
    pub fn content_engagement(
        &self,
        date: NaiveDate,
        limit: i64,
    ) -> Result<ReportTable, QueryError> {
        self.client
            .run_report(&content_engagement_request(date, limit))
    }

    /// Channel group / source / medium breakdown, by sessions
    pub fn channel_breakdown(&self, date: NaiveDate) -> Result<ReportTable, QueryError> {
        self.client.run_report(&channel_breakdown_request(date))
    }

    /// New vs returning visitor split
    pub fn new_vs_returning(&self, date: NaiveDate) -> Result<ReportTable, QueryError> {
        self.client.run_report(&new_vs_returning_request(date))
    }

    /// Hourly and day-of-week traffic patterns over a date window
    pub fn time_patterns(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<TimePatterns, QueryError> {
        let hourly = self.client.run_report(&hourly_pattern_request(start, end))?;
        let daily = self
            .client
            .run_report(&day_of_week_pattern_request(start, end))?;

        Ok(TimePatterns { hourly, daily })
    }

    /// Country breakdown plus a city breakdown restricted to South Korea
    pub fn geographic(&self, date: NaiveDate) -> Result<GeographicBreakdown, QueryError> {
        let country = self.client.run_report(&country_breakdown_request(date))?;
        let city = self.client.run_report(&city_breakdown_request(date))?;

        Ok(GeographicBreakdown { country, city })
    }

    /// Core-metric trend over a trailing day window ending at `end`,
    /// date ascending; `days` defaults to one week
    pub fn weekly_trend(
        &self,
        end: NaiveDate,
        days: Option<u32>,
    ) -> Result<ReportTable, QueryError> {
        self.client.run_report(&weekly_trend_request(end, days))
    }

    /// Category pages only, matched by the Tistory `/category/` path pattern
    pub fn category_performance(&self, date: NaiveDate) -> Result<ReportTable, QueryError> {
        self.client.run_report(&category_performance_request(date))
    }
}

fn single_day(date: NaiveDate) -> DateRange {
    DateRange::single_day(date.format("%Y-%m-%d").to_string())
}

fn date_span(start: NaiveDate, end: NaiveDate) -> DateRange {
    DateRange {
        start_date: start.format("%Y-%m-%d").to_string(),
        end_date: end.format("%Y-%m-%d").to_string(),
    }
}

/// Core four metrics for one day
fn core_metrics_request(date: NaiveDate) -> RunReportRequest {
    RunReportRequest::metrics_only(
        single_day(date),
        &["activeUsers", "screenPageViews", "sessions", "engagementRate"],
    )
}

/// Average session duration and bounce rate for one day
fn engagement_request(date: NaiveDate) -> RunReportRequest {
    RunReportRequest::metrics_only(single_day(date), &["averageSessionDuration", "bounceRate"])
}

/// Top traffic sources by sessions for one day
fn traffic_sources_request(date: NaiveDate) -> RunReportRequest {
    RunReportRequest::metrics_only(single_day(date), &["sessions"])
        .with_dimensions(&["sessionSource"])
        .with_order(OrderBy::metric_desc("sessions"))
        .with_limit(TOP_ENTRY_LIMIT)
}

/// Top pages by views for one day
fn popular_pages_request(date: NaiveDate) -> RunReportRequest {
    RunReportRequest::metrics_only(single_day(date), &["screenPageViews"])
        .with_dimensions(&["pageTitle"])
        .with_order(OrderBy::metric_desc("screenPageViews"))
        .with_limit(TOP_ENTRY_LIMIT)
}

fn device_breakdown_request(date: NaiveDate) -> RunReportRequest {
    RunReportRequest::metrics_only(
        single_day(date),
        &["activeUsers", "sessions", "engagementRate"],
    )
    .with_dimensions(&["deviceCategory"])
}

fn content_performance_request(date: NaiveDate, limit: i64) -> RunReportRequest {
    RunReportRequest::metrics_only(
        single_day(date),
        &["screenPageViews", "userEngagementDuration", "engagementRate"],
    )
    .with_dimensions(&["pageTitle", "pagePath"])
    .with_order(OrderBy::metric_desc("screenPageViews"))
    .with_limit(limit)
}

fn content_engagement_request(date: NaiveDate, limit: i64) -> RunReportRequest {
    RunReportRequest::metrics_only(
        single_day(date),
        &["userEngagementDuration", "screenPageViews", "engagementRate"],
    )
    .with_dimensions(&["pageTitle"])
    .with_order(OrderBy::metric_desc("userEngagementDuration"))
    .with_limit(limit)
}

fn channel_breakdown_request(date: NaiveDate) -> RunReportRequest {
    RunReportRequest::metrics_only(
        single_day(date),
        &["sessions", "activeUsers", "engagementRate"],
    )
    .with_dimensions(&[
        "sessionDefaultChannelGroup",
        "sessionSource",
        "sessionMedium",
    ])
    .with_order(OrderBy::metric_desc("sessions"))
}

fn new_vs_returning_request(date: NaiveDate) -> RunReportRequest {
    RunReportRequest::metrics_only(
        single_day(date),
        &[
            "activeUsers",
            "sessions",
            "engagementRate",
            "screenPageViewsPerSession",
        ],
    )
    .with_dimensions(&["newVsReturningUser"])
}

fn hourly_pattern_request(start: NaiveDate, end: NaiveDate) -> RunReportRequest {
    RunReportRequest::metrics_only(date_span(start, end), &["activeUsers"])
        .with_dimensions(&["hour"])
        .with_order(OrderBy::dimension_asc("hour"))
}

fn day_of_week_pattern_request(start: NaiveDate, end: NaiveDate) -> RunReportRequest {
    RunReportRequest::metrics_only(date_span(start, end), &["activeUsers"])
        .with_dimensions(&["dayOfWeek"])
        .with_order(OrderBy::dimension_asc("dayOfWeek"))
}

fn country_breakdown_request(date: NaiveDate) -> RunReportRequest {
    RunReportRequest::metrics_only(
        single_day(date),
        &["activeUsers", "sessions", "engagementRate"],
    )
    .with_dimensions(&["country"])
    .with_order(OrderBy::metric_desc("activeUsers"))
    .with_limit(10)
}

fn city_breakdown_request(date: NaiveDate) -> RunReportRequest {
    RunReportRequest::metrics_only(single_day(date), &["activeUsers", "sessions"])
        .with_dimensions(&["city"])
        .with_filter(FilterExpression::string_match(
            "country",
            MatchType::Exact,
            "South Korea",
        ))
        .with_order(OrderBy::metric_desc("activeUsers"))
        .with_limit(10)
}

fn weekly_trend_request(end: NaiveDate, days: Option<u32>) -> RunReportRequest {
    let days = days.unwrap_or(DEFAULT_TREND_DAYS);
    let start = end - Days::new(u64::from(days.saturating_sub(1)));

    RunReportRequest::metrics_only(
        date_span(start, end),
        &["activeUsers", "screenPageViews", "sessions", "engagementRate"],
    )
    .with_dimensions(&["date"])
    .with_order(OrderBy::dimension_asc("date"))
}

fn category_performance_request(date: NaiveDate) -> RunReportRequest {
    RunReportRequest::metrics_only(
        single_day(date),
        &["screenPageViews", "activeUsers", "engagementRate"],
    )
    .with_dimensions(&["pagePath"])
    .with_filter(FilterExpression::string_match(
        "pagePath",
        MatchType::Contains,
        "/category/",
    ))
}

//! Types for the GA4 Data API `runReport` call.
//!
//! Request structs mirror the REST JSON shapes (camelCase); the response is
//! mapped into a typed [`ReportTable`] at this boundary so downstream code
//! never indexes positionally into untyped JSON.

use crate::utils::error::QueryError;
use serde::{Deserialize, Serialize};

/// A single-day or multi-day date range, ISO `YYYY-MM-DD` on both ends
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

impl DateRange {
    /// Range covering exactly one calendar day
    pub fn single_day(date: impl Into<String>) -> Self {
        let date = date.into();
        Self {
            start_date: date.clone(),
            end_date: date,
        }
    }
}

/// A named metric (e.g. `activeUsers`, `sessions`)
#[derive(Debug, Clone, Serialize)]
pub struct Metric {
    pub name: String,
}

impl Metric {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A named dimension (e.g. `sessionSource`, `pageTitle`)
#[derive(Debug, Clone, Serialize)]
pub struct Dimension {
    pub name: String,
}

impl Dimension {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Ordering clause, either by a metric or by a dimension
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<MetricOrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<DimensionOrderBy>,
    pub desc: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricOrderBy {
    pub metric_name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionOrderBy {
    pub dimension_name: String,
}

impl OrderBy {
    /// Order by a metric, descending
    pub fn metric_desc(metric_name: impl Into<String>) -> Self {
        Self {
            metric: Some(MetricOrderBy {
                metric_name: metric_name.into(),
            }),
            dimension: None,
            desc: true,
        }
    }

    /// Order by a dimension, ascending
    pub fn dimension_asc(dimension_name: impl Into<String>) -> Self {
        Self {
            metric: None,
            dimension: Some(DimensionOrderBy {
                dimension_name: dimension_name.into(),
            }),
            desc: false,
        }
    }
}

/// String match modes supported by the dimension filter
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchType {
    Exact,
    Contains,
}

/// Dimension filter expression (single string filter, no nesting)
#[derive(Debug, Clone, Serialize)]
pub struct FilterExpression {
    pub filter: Filter,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub field_name: String,
    pub string_filter: StringFilter,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringFilter {
    pub match_type: MatchType,
    pub value: String,
}

impl FilterExpression {
    pub fn string_match(
        field_name: impl Into<String>,
        match_type: MatchType,
        value: impl Into<String>,
    ) -> Self {
        Self {
            filter: Filter {
                field_name: field_name.into(),
                string_filter: StringFilter {
                    match_type,
                    value: value.into(),
                },
            },
        }
    }
}

/// Body of a `properties/{id}:runReport` POST
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReportRequest {
    pub date_ranges: Vec<DateRange>,
    pub metrics: Vec<Metric>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<Dimension>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order_bys: Vec<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_filter: Option<FilterExpression>,
}

impl RunReportRequest {
    /// Query with metrics only, no breakdown dimensions
    pub fn metrics_only(range: DateRange, metric_names: &[&str]) -> Self {
        Self {
            date_ranges: vec![range],
            metrics: metric_names.iter().map(|m| Metric::new(*m)).collect(),
            dimensions: Vec::new(),
            order_bys: Vec::new(),
            limit: None,
            dimension_filter: None,
        }
    }

    pub fn with_dimensions(mut self, dimension_names: &[&str]) -> Self {
        self.dimensions = dimension_names.iter().map(|d| Dimension::new(*d)).collect();
        self
    }

    pub fn with_order(mut self, order: OrderBy) -> Self {
        self.order_bys.push(order);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_filter(mut self, filter: FilterExpression) -> Self {
        self.dimension_filter = Some(filter);
        self
    }
}

/// Tabular response of a `runReport` call
///
/// GA omits the `rows` key entirely when a query matches no data,
/// hence the `#[serde(default)]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTable {
    #[serde(default)]
    pub rows: Vec<ReportRow>,
    #[serde(default)]
    pub row_count: i64,
}

impl ReportTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row, if the query returned any data
    pub fn first_row(&self) -> Option<&ReportRow> {
        self.rows.first()
    }
}

/// One response row: parallel dimension and metric value arrays,
/// positioned per the request's declared order
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    #[serde(default)]
    pub dimension_values: Vec<CellValue>,
    #[serde(default)]
    pub metric_values: Vec<CellValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CellValue {
    #[serde(default)]
    pub value: String,
}

impl ReportRow {
    /// Dimension value at `column`, empty string if out of range
    pub fn dimension(&self, column: usize) -> &str {
        self.dimension_values
            .get(column)
            .map(|c| c.value.as_str())
            .unwrap_or("")
    }

    /// Metric at `column` parsed as a non-negative integer
    pub fn metric_u64(&self, column: usize) -> Result<u64, QueryError> {
        let raw = self.metric_raw(column);
        raw.parse().map_err(|_| QueryError::MalformedValue {
            column,
            value: raw.to_string(),
        })
    }

    /// Metric at `column` parsed as a float
    pub fn metric_f64(&self, column: usize) -> Result<f64, QueryError> {
        let raw = self.metric_raw(column);
        raw.parse().map_err(|_| QueryError::MalformedValue {
            column,
            value: raw.to_string(),
        })
    }

    fn metric_raw(&self, column: usize) -> &str {
        self.metric_values
            .get(column)
            .map(|c| c.value.as_str())
            .unwrap_or("")
    }
}

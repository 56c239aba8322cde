//! HTTP client for the GA4 Data API `runReport` endpoint.

use super::types::{ReportTable, RunReportRequest};
use crate::utils::config::{ANALYTICS_API_BASE, DEFAULT_HTTP_TIMEOUT};
use crate::utils::error::QueryError;
use log::{debug, info};
use reqwest::blocking::Client;

/// Client for running analytics report queries against one property
pub struct AnalyticsClient {
    client: Client,
    base_url: String,
    property_id: String,
    access_token: String,
}

impl AnalyticsClient {
    /// Create a new analytics client for the given property
    pub fn new(
        property_id: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, QueryError> {
        let client = Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(QueryError::RequestFailed)?;

        Ok(Self {
            client,
            base_url: ANALYTICS_API_BASE.to_string(),
            property_id: property_id.into(),
            access_token: access_token.into(),
        })
    }

    /// Run one report query and map the response into a typed table
    ///
    /// Any non-success HTTP status aborts with the provider's body verbatim;
    /// no retries are attempted.
    pub fn run_report(&self, request: &RunReportRequest) -> Result<ReportTable, QueryError> {
        let url = format!(
            "{}/properties/{}:runReport",
            self.base_url, self.property_id
        );

        debug!("runReport request: {:?}", request);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(request)
            .send()
            .map_err(QueryError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::Rejected {
                status: status.as_u16(),
                message: response.text().unwrap_or_default(),
            });
        }

        let table: ReportTable = response.json().map_err(QueryError::RequestFailed)?;

        if table.is_empty() {
            debug!("runReport matched no data");
        }
        info!(
            "runReport returned {} of {} matching row(s)",
            table.rows.len(),
            table.row_count
        );

        Ok(table)
    }
}

//! Report command implementation.
//!
//! The report command:
//! 1. Fetches the day-over-day comparison from the analytics API
//! 2. Renders the block tree
//! 3. Publishes the page to Notion

use crate::aggregator::DailyAggregator;
use crate::analytics::AnalyticsClient;
use crate::notion::NotionClient;
use crate::report::render_and_publish;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;

/// Arguments for the report command
///
/// Constructed by main.rs from CLI flags and their env fallbacks.
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// GA4 property identifier (numeric)
    pub property_id: String,

    /// OAuth access token for the GA4 Data API
    pub ga_access_token: String,

    /// Notion integration token
    pub notion_token: String,

    /// Parent page the report is created under
    pub parent_page_id: String,

    /// Calendar day the report covers
    pub target_date: NaiveDate,
}

/// Execute the report command
///
/// Strictly sequential: every query and the final publish call is one
/// blocking round trip. A failure at any step aborts the run and discards
/// everything gathered so far.
pub fn execute_report(args: ReportArgs) -> Result<()> {
    info!("Generating daily report for {}", args.target_date);

    let analytics = AnalyticsClient::new(&args.property_id, &args.ga_access_token)
        .context("Failed to create analytics client")?;
    let notion = NotionClient::new(&args.notion_token, &args.parent_page_id)
        .context("Failed to create Notion client")?;

    info!("Step 1/2: Fetching daily comparison...");
    let record = DailyAggregator::new(analytics)
        .fetch_daily_comparison(args.target_date)
        .context("Failed to aggregate analytics metrics")?;

    info!("Step 2/2: Rendering and publishing report page...");
    let page = render_and_publish(&notion, &record).context("Failed to publish report page")?;

    println!("데일리 리포트가 성공적으로 생성되었습니다.");
    println!("날짜: {}", record.date);
    println!("활성 사용자: {}명", record.current.active_users);
    if let Some(url) = page.url {
        println!("페이지: {url}");
    }

    Ok(())
}

/// Validate report arguments before any network call
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.property_id.is_empty() {
        anyhow::bail!("GA property ID cannot be empty");
    }

    if !args.property_id.chars().all(|c| c.is_ascii_digit()) {
        anyhow::bail!("GA property ID must be numeric");
    }

    if args.ga_access_token.is_empty() {
        anyhow::bail!("GA access token cannot be empty");
    }

    if args.notion_token.is_empty() {
        anyhow::bail!("Notion token cannot be empty");
    }

    if args.parent_page_id.is_empty() {
        anyhow::bail!("Notion parent page ID cannot be empty");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_args() -> ReportArgs {
        ReportArgs {
            property_id: "123456789".to_string(),
            ga_access_token: "ya29.token".to_string(),
            notion_token: "secret_token".to_string(),
            parent_page_id: "0f3d9b2a".to_string(),
            target_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        }
    }

    #[test]
    fn test_validate_args_valid() {
        assert!(validate_args(&valid_args()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_property() {
        let args = ReportArgs {
            property_id: String::new(),
            ..valid_args()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_non_numeric_property() {
        let args = ReportArgs {
            property_id: "prop-123".to_string(),
            ..valid_args()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_tokens() {
        let args = ReportArgs {
            ga_access_token: String::new(),
            ..valid_args()
        };
        assert!(validate_args(&args).is_err());

        let args = ReportArgs {
            notion_token: String::new(),
            ..valid_args()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_parent_page() {
        let args = ReportArgs {
            parent_page_id: String::new(),
            ..valid_args()
        };
        assert!(validate_args(&args).is_err());
    }
}

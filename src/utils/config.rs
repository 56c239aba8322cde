//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default timeout for outbound HTTP requests
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// GA4 Data API base endpoint
pub const ANALYTICS_API_BASE: &str = "https://analyticsdata.googleapis.com/v1beta";

/// Notion REST API base endpoint
pub const NOTION_API_BASE: &str = "https://api.notion.com/v1";

/// Notion-Version header value pinned to the API revision we target
pub const NOTION_API_VERSION: &str = "2022-06-28";

/// Breakdown queries fetch only the top entries
pub const TOP_ENTRY_LIMIT: i64 = 5;

/// Default window for the weekly trend query
pub const DEFAULT_TREND_DAYS: u32 = 7;

/// Report page title, surrounding the formatted date
pub const REPORT_TITLE_PREFIX: &str = "Yeonny's BLOG ";
pub const REPORT_TITLE_SUFFIX: &str = " 리포트";

/// Emoji icon for the published page
pub const REPORT_PAGE_ICON: &str = "📊";

// Trend glyphs: up means improvement for most metrics, but the
// bounce-rate paragraph inverts them (lower bounce is better).
pub const TREND_UP: &str = "📈";
pub const TREND_DOWN: &str = "📉";

//! GA Notion Report CLI
//!
//! Fetches yesterday's Google Analytics metrics and publishes a
//! day-over-day summary page to Notion.

use anyhow::Result;
use chrono::{Days, Local, NaiveDate};
use clap::{Parser, Subcommand};
use env_logger::Env;

use ga_notion_report::commands::{execute_report, validate_args, ReportArgs};
use ga_notion_report::notion::NotionClient;

/// GA Notion Report - daily analytics summary publisher
#[derive(Parser, Debug)]
#[command(name = "ga-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch metrics and publish the daily report page
    Report {
        /// GA4 property ID
        #[arg(long, env = "GA_PROPERTY_ID")]
        property: String,

        /// OAuth access token for the GA4 Data API
        #[arg(long, env = "GA_ACCESS_TOKEN", hide_env_values = true)]
        ga_token: String,

        /// Notion integration token
        #[arg(long, env = "NOTION_TOKEN", hide_env_values = true)]
        notion_token: String,

        /// Parent page ID the report is created under
        #[arg(long, env = "NOTION_PARENT_PAGE_ID")]
        parent_page: String,

        /// Report date (YYYY-MM-DD), defaults to yesterday
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Verify the Notion integration token
    CheckToken {
        /// Notion integration token
        #[arg(long, env = "NOTION_TOKEN", hide_env_values = true)]
        notion_token: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Success and failure are distinguished by console output only;
    // the scheduler that invokes this job does not inspect exit codes.
    if let Err(err) = run(cli.command) {
        eprintln!("오류 발생: {err:#}");
    }

    Ok(())
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Report {
            property,
            ga_token,
            notion_token,
            parent_page,
            date,
        } => {
            let target_date = date.unwrap_or_else(yesterday);

            let args = ReportArgs {
                property_id: property,
                ga_access_token: ga_token,
                notion_token,
                parent_page_id: parent_page,
                target_date,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute report
            execute_report(args)?;
        }

        Commands::CheckToken { notion_token } => {
            check_token(&notion_token)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Yesterday in local time, the default report date
fn yesterday() -> NaiveDate {
    Local::now().date_naive() - Days::new(1)
}

/// Verify the Notion token against the current-user endpoint
fn check_token(notion_token: &str) -> Result<()> {
    // Parent page is not needed for the user lookup
    let client = NotionClient::new(notion_token, "")?;
    let user = client.verify_token()?;

    println!("토큰 유효성 확인 성공!");
    println!("사용자: {}", user.name.as_deref().unwrap_or("이름 없음"));

    Ok(())
}

/// Display version information
fn display_version() {
    println!("GA Notion Report v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Daily Google Analytics report publisher for Notion.");
}

//! Command implementations for the CLI.

pub mod report;

pub use report::{execute_report, validate_args, ReportArgs};

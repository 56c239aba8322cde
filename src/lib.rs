//! GA Notion Report
//!
//! Fetches yesterday's Google Analytics metrics, computes day-over-day
//! deltas, and publishes a formatted summary page to Notion.
//!
//! This crate provides the core implementation for the `ga-report` CLI tool.

pub mod aggregator;
pub mod analytics;
pub mod commands;
pub mod notion;
pub mod report;
pub mod utils;

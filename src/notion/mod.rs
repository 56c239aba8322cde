//! Notion REST client and page-creation payload types.

pub mod client;
pub mod types;

pub use client::NotionClient;
pub use types::{BotUser, CreatedPage};

//! HTTP client for the Notion REST API.

use super::types::{BotUser, CreatePageRequest, CreatedPage, Icon, Parent, Properties, TitleProperty};
use crate::report::blocks::{Block, TextRun};
use crate::utils::config::{DEFAULT_HTTP_TIMEOUT, NOTION_API_BASE, NOTION_API_VERSION};
use crate::utils::error::PublishError;
use log::{debug, info};
use reqwest::blocking::Client;

/// Client for publishing report pages under one parent page
pub struct NotionClient {
    client: Client,
    base_url: String,
    token: String,
    parent_page_id: String,
}

impl NotionClient {
    /// Create a new Notion client
    pub fn new(
        token: impl Into<String>,
        parent_page_id: impl Into<String>,
    ) -> Result<Self, PublishError> {
        let client = Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(PublishError::RequestFailed)?;

        Ok(Self {
            client,
            base_url: NOTION_API_BASE.to_string(),
            token: token.into(),
            parent_page_id: parent_page_id.into(),
        })
    }

    /// Create the report page under the configured parent
    ///
    /// Any non-success status surfaces the provider's status code and body
    /// verbatim; no retry and no cleanup are attempted (per HTTP semantics the
    /// provider creates nothing on error).
    pub fn create_report_page(
        &self,
        title: &str,
        icon_emoji: &str,
        blocks: &[Block],
    ) -> Result<CreatedPage, PublishError> {
        let request = CreatePageRequest {
            parent: Parent {
                page_id: &self.parent_page_id,
            },
            properties: Properties {
                title: TitleProperty {
                    title: vec![TextRun::plain(title)],
                },
            },
            icon: Icon::emoji(icon_emoji),
            children: blocks,
        };

        debug!("Creating page with {} child block(s)", blocks.len());

        let response = self
            .client
            .post(format!("{}/pages", self.base_url))
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_API_VERSION)
            .json(&request)
            .send()
            .map_err(PublishError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PublishError::Rejected {
                status: status.as_u16(),
                message: response.text().unwrap_or_default(),
            });
        }

        let page: CreatedPage = response.json().map_err(PublishError::RequestFailed)?;

        info!("Created page {}", page.id);

        Ok(page)
    }

    /// Check token validity against the current-user endpoint
    ///
    /// Returns the account display name on success.
    pub fn verify_token(&self) -> Result<BotUser, PublishError> {
        let response = self
            .client
            .get(format!("{}/users/me", self.base_url))
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_API_VERSION)
            .send()
            .map_err(PublishError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PublishError::Rejected {
                status: status.as_u16(),
                message: response.text().unwrap_or_default(),
            });
        }

        response.json().map_err(PublishError::RequestFailed)
    }
}

//! Request and response types for the Notion pages API.

use crate::report::blocks::{Block, TextRun};
use serde::{Deserialize, Serialize};

/// Body of a `POST /v1/pages` call
#[derive(Debug, Serialize)]
pub struct CreatePageRequest<'a> {
    pub parent: Parent<'a>,
    pub properties: Properties,
    pub icon: Icon<'a>,
    pub children: &'a [Block],
}

#[derive(Debug, Serialize)]
pub struct Parent<'a> {
    pub page_id: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Properties {
    pub title: TitleProperty,
}

#[derive(Debug, Serialize)]
pub struct TitleProperty {
    pub title: Vec<TextRun>,
}

#[derive(Debug, Serialize)]
pub struct Icon<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub emoji: &'a str,
}

impl<'a> Icon<'a> {
    pub fn emoji(glyph: &'a str) -> Self {
        Self {
            kind: "emoji",
            emoji: glyph,
        }
    }
}

/// Metadata of a successfully created page
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPage {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Account behind the integration token, from `GET /v1/users/me`
#[derive(Debug, Clone, Deserialize)]
pub struct BotUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

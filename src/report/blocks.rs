//! Notion content-block types.
//!
//! These structs serialize to the exact JSON shapes the Notion pages API
//! expects for page children: each block carries `object: "block"`, a `type`
//! tag, and a kind-specific payload holding rich-text runs.

use serde::Serialize;

/// One inline text run, plain or bold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: TextContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextContent {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotations {
    pub bold: bool,
}

impl TextRun {
    /// Unstyled text run
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            kind: "text",
            text: TextContent {
                content: content.into(),
            },
            annotations: None,
        }
    }

    /// Bold text run
    pub fn bold(content: impl Into<String>) -> Self {
        Self {
            kind: "text",
            text: TextContent {
                content: content.into(),
            },
            annotations: Some(Annotations { bold: true }),
        }
    }
}

/// Rich-text payload shared by every block kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichTextBody {
    pub rich_text: Vec<TextRun>,
}

/// One node of the published page's content tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub object: &'static str,
    #[serde(flatten)]
    pub kind: BlockKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum BlockKind {
    #[serde(rename = "paragraph")]
    Paragraph { paragraph: RichTextBody },
    #[serde(rename = "heading_3")]
    Heading3 { heading_3: RichTextBody },
    #[serde(rename = "bulleted_list_item")]
    BulletedListItem { bulleted_list_item: RichTextBody },
    #[serde(rename = "numbered_list_item")]
    NumberedListItem { numbered_list_item: RichTextBody },
}

impl Block {
    pub fn paragraph(runs: Vec<TextRun>) -> Self {
        Self {
            object: "block",
            kind: BlockKind::Paragraph {
                paragraph: RichTextBody { rich_text: runs },
            },
        }
    }

    /// Empty paragraph used as a vertical spacer
    pub fn spacer() -> Self {
        Self::paragraph(Vec::new())
    }

    pub fn heading_3(runs: Vec<TextRun>) -> Self {
        Self {
            object: "block",
            kind: BlockKind::Heading3 {
                heading_3: RichTextBody { rich_text: runs },
            },
        }
    }

    pub fn bulleted_item(runs: Vec<TextRun>) -> Self {
        Self {
            object: "block",
            kind: BlockKind::BulletedListItem {
                bulleted_list_item: RichTextBody { rich_text: runs },
            },
        }
    }

    pub fn numbered_item(runs: Vec<TextRun>) -> Self {
        Self {
            object: "block",
            kind: BlockKind::NumberedListItem {
                numbered_list_item: RichTextBody { rich_text: runs },
            },
        }
    }
}

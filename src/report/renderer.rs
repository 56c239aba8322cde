//! Deterministic report rendering.
//!
//! Turns one [`ComparisonRecord`] into the ordered block sequence of the daily
//! report page. No wall clock and no randomness enter here: the same record
//! always produces byte-identical blocks.

use super::blocks::{Block, TextRun};
use crate::aggregator::ComparisonRecord;
use crate::notion::{CreatedPage, NotionClient};
use crate::utils::config::{
    REPORT_PAGE_ICON, REPORT_TITLE_PREFIX, REPORT_TITLE_SUFFIX, TREND_DOWN, TREND_UP,
};
use crate::utils::error::PublishError;
use log::info;

/// Render the report for `record` and publish it as a new Notion page
pub fn render_and_publish(
    notion: &NotionClient,
    record: &ComparisonRecord,
) -> Result<CreatedPage, PublishError> {
    let title = page_title(record);
    let blocks = build_page_blocks(record);

    info!("Publishing report page: {}", title);

    notion.create_report_page(&title, REPORT_PAGE_ICON, &blocks)
}

/// Fixed-locale page title, e.g. `Yeonny's BLOG 2024년 03월 15일 리포트`
pub fn page_title(record: &ComparisonRecord) -> String {
    format!(
        "{}{}{}",
        REPORT_TITLE_PREFIX,
        record.date.format("%Y년 %m월 %d일"),
        REPORT_TITLE_SUFFIX
    )
}

/// Build the full ordered block sequence for the report page
pub fn build_page_blocks(record: &ComparisonRecord) -> Vec<Block> {
    let mut blocks = vec![
        Block::spacer(),
        Block::heading_3(vec![TextRun::plain("[ 오늘의 핵심 지표 ]")]),
    ];

    blocks.push(count_paragraph(
        "방문자: ",
        record.current.active_users,
        record.previous.active_users,
        "명",
    ));
    blocks.push(count_paragraph(
        "페이지 조회: ",
        record.current.page_views,
        record.previous.page_views,
        "회",
    ));
    blocks.push(count_paragraph(
        "세션 수: ",
        record.current.sessions,
        record.previous.sessions,
        "회",
    ));
    blocks.push(duration_paragraph(
        record.current.avg_session_duration,
        record.previous.avg_session_duration,
    ));
    blocks.push(engagement_paragraph(
        record.current.engagement_rate,
        record.previous.engagement_rate,
    ));
    blocks.push(bounce_paragraph(
        record.current.bounce_rate,
        record.previous.bounce_rate,
    ));
    blocks.push(Block::spacer());

    blocks.extend(traffic_source_section(record));
    blocks.extend(popular_pages_section(record));

    blocks
}

/// Paragraph for an integer-count metric with day-over-day delta
fn count_paragraph(label: &str, current: u64, previous: u64, unit: &str) -> Block {
    let delta = current as i64 - previous as i64;

    Block::paragraph(vec![
        TextRun::bold(label),
        TextRun::plain(format!("{current}{unit} ")),
        TextRun::plain(format!(
            "(전일대비 {}{unit}) {}",
            signed_count(delta),
            trend_glyph(delta >= 0)
        )),
    ])
}

/// Average dwell time, value and |delta| both shown as `M분 S초`
fn duration_paragraph(current: f64, previous: f64) -> Block {
    let delta = current - previous;
    let sign = if delta >= 0.0 { "+" } else { "-" };

    Block::paragraph(vec![
        TextRun::bold("평균 체류 시간: "),
        TextRun::plain(format!("{} ", format_duration(current))),
        TextRun::plain(format!(
            "(전일대비 {sign}{}) {}",
            format_duration(delta.abs()),
            trend_glyph(delta >= 0.0)
        )),
    ])
}

/// Engagement rate as a percentage with a signed percentage-point delta
fn engagement_paragraph(current: f64, previous: f64) -> Block {
    let delta = current - previous;

    Block::paragraph(vec![
        TextRun::bold("참여율: "),
        TextRun::plain(format!("{current:.2}% ")),
        TextRun::plain(format!(
            "(전일대비 {}%p) {}",
            signed_percent(delta),
            trend_glyph(delta >= 0.0)
        )),
    ])
}

/// Bounce rate paragraph; the glyph rule is inverted because a
/// bounce-rate increase is a regression
fn bounce_paragraph(current: f64, previous: f64) -> Block {
    let delta = current - previous;
    let prefix = if delta >= 0.0 { "+" } else { "" };

    Block::paragraph(vec![
        TextRun::bold("이탈률: "),
        TextRun::plain(format!("{current:.2}% ")),
        TextRun::plain(format!(
            "(전일대비 {prefix}{:.2}%p) {}",
            delta.abs(),
            trend_glyph(delta < 0.0)
        )),
    ])
}

/// Heading plus one bullet per traffic source, provider order preserved
fn traffic_source_section(record: &ComparisonRecord) -> Vec<Block> {
    let mut blocks = vec![Block::heading_3(vec![TextRun::plain("[ 트래픽 소스 ]")])];

    let total_sessions = record.current.sessions;

    for entry in &record.sources {
        let share = if total_sessions > 0 {
            entry.sessions as f64 / total_sessions as f64 * 100.0
        } else {
            0.0
        };

        blocks.push(Block::bulleted_item(vec![
            TextRun::bold(format!("{}:", entry.source)),
            TextRun::plain(format!(" {}회 ({share:.1}%)", entry.sessions)),
        ]));
    }

    blocks.push(Block::spacer());
    blocks
}

/// Heading plus one numbered item per popular page, provider order preserved
fn popular_pages_section(record: &ComparisonRecord) -> Vec<Block> {
    let mut blocks = vec![Block::heading_3(vec![TextRun::plain("[ 조회수 Top 5 ]")])];

    for entry in &record.popular_pages {
        blocks.push(Block::numbered_item(vec![
            TextRun::bold(format!("{}회 |", entry.views)),
            TextRun::plain(format!(" {}", entry.title)),
        ]));
    }

    blocks.push(Block::spacer());
    blocks
}

/// Signed integer delta: positive values get an explicit `+`
fn signed_count(delta: i64) -> String {
    if delta >= 0 {
        format!("+{delta}")
    } else {
        delta.to_string()
    }
}

/// Signed percentage-point delta with two decimals
fn signed_percent(delta: f64) -> String {
    if delta >= 0.0 {
        format!("+{delta:.2}")
    } else {
        format!("{delta:.2}")
    }
}

/// Whole seconds split into minutes and seconds, truncated toward zero
fn format_duration(seconds: f64) -> String {
    let total = seconds as u64;
    format!("{}분 {}초", total / 60, total % 60)
}

fn trend_glyph(up: bool) -> &'static str {
    if up {
        TREND_UP
    } else {
        TREND_DOWN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{MetricsSnapshot, PageEntry, SourceEntry};
    use crate::report::blocks::BlockKind;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    /// Concatenated text content of a block, for readable assertions
    fn block_text(block: &Block) -> String {
        let body = match &block.kind {
            BlockKind::Paragraph { paragraph } => paragraph,
            BlockKind::Heading3 { heading_3 } => heading_3,
            BlockKind::BulletedListItem { bulleted_list_item } => bulleted_list_item,
            BlockKind::NumberedListItem { numbered_list_item } => numbered_list_item,
        };
        body.rich_text
            .iter()
            .map(|run| run.text.content.as_str())
            .collect()
    }

    fn fixture_record() -> ComparisonRecord {
        ComparisonRecord {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            current: MetricsSnapshot {
                active_users: 500,
                page_views: 2000,
                sessions: 600,
                engagement_rate: 65.0,
                avg_session_duration: 125.0,
                bounce_rate: 30.0,
            },
            previous: MetricsSnapshot {
                active_users: 450,
                page_views: 1800,
                sessions: 550,
                engagement_rate: 60.0,
                avg_session_duration: 190.0,
                bounce_rate: 35.0,
            },
            sources: vec![
                SourceEntry {
                    source: "google".to_string(),
                    sessions: 300,
                },
                SourceEntry {
                    source: "direct".to_string(),
                    sessions: 200,
                },
                SourceEntry {
                    source: "naver".to_string(),
                    sessions: 100,
                },
            ],
            popular_pages: vec![
                PageEntry {
                    title: "A".to_string(),
                    views: 500,
                },
                PageEntry {
                    title: "B".to_string(),
                    views: 300,
                },
            ],
        }
    }

    #[test]
    fn test_page_title() {
        assert_eq!(
            page_title(&fixture_record()),
            "Yeonny's BLOG 2024년 03월 15일 리포트"
        );
    }

    #[test]
    fn test_count_paragraph_positive_delta() {
        let block = count_paragraph("방문자: ", 120, 100, "명");
        assert_eq!(block_text(&block), "방문자: 120명 (전일대비 +20명) 📈");
    }

    #[test]
    fn test_count_paragraph_negative_delta() {
        let block = count_paragraph("방문자: ", 80, 100, "명");
        assert_eq!(block_text(&block), "방문자: 80명 (전일대비 -20명) 📉");
    }

    #[test]
    fn test_count_paragraph_zero_delta_counts_as_up() {
        let block = count_paragraph("세션 수: ", 100, 100, "회");
        assert_eq!(block_text(&block), "세션 수: 100회 (전일대비 +0회) 📈");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(125.0), "2분 5초");
        assert_eq!(format_duration(59.0), "0분 59초");
        assert_eq!(format_duration(0.0), "0분 0초");
    }

    #[test]
    fn test_duration_paragraph_negative_delta_uses_absolute_value() {
        // 125s today vs 190s yesterday: delta is -65s, shown as -1분 5초
        let block = duration_paragraph(125.0, 190.0);
        assert_eq!(
            block_text(&block),
            "평균 체류 시간: 2분 5초 (전일대비 -1분 5초) 📉"
        );
    }

    #[test]
    fn test_engagement_paragraph() {
        let block = engagement_paragraph(65.0, 60.0);
        assert_eq!(block_text(&block), "참여율: 65.00% (전일대비 +5.00%p) 📈");

        let block = engagement_paragraph(58.5, 60.0);
        assert_eq!(block_text(&block), "참여율: 58.50% (전일대비 -1.50%p) 📉");
    }

    #[test]
    fn test_bounce_paragraph_inverted_glyph() {
        // Bounce rate up is a regression: down glyph
        let block = bounce_paragraph(35.0, 30.0);
        assert_eq!(block_text(&block), "이탈률: 35.00% (전일대비 +5.00%p) 📉");

        // Bounce rate down is an improvement: up glyph, absolute magnitude
        let block = bounce_paragraph(30.0, 35.0);
        assert_eq!(block_text(&block), "이탈률: 30.00% (전일대비 5.00%p) 📈");
    }

    #[test]
    fn test_source_share_with_zero_total_sessions() {
        let mut record = fixture_record();
        record.current.sessions = 0;
        record.sources = vec![SourceEntry {
            source: "google".to_string(),
            sessions: 0,
        }];

        let section = traffic_source_section(&record);
        assert_eq!(block_text(&section[1]), "google: 0회 (0.0%)");
    }

    #[test]
    fn test_traffic_source_section_shares() {
        let section = traffic_source_section(&fixture_record());

        assert_eq!(block_text(&section[0]), "[ 트래픽 소스 ]");
        assert_eq!(block_text(&section[1]), "google: 300회 (50.0%)");
        assert_eq!(block_text(&section[2]), "direct: 200회 (33.3%)");
        assert_eq!(block_text(&section[3]), "naver: 100회 (16.7%)");
        assert_eq!(section[4], Block::spacer());
    }

    #[test]
    fn test_popular_pages_section() {
        let section = popular_pages_section(&fixture_record());

        assert_eq!(block_text(&section[0]), "[ 조회수 Top 5 ]");
        assert_eq!(block_text(&section[1]), "500회 | A");
        assert_eq!(block_text(&section[2]), "300회 | B");
    }

    #[test]
    fn test_block_sequence_order() {
        let blocks = build_page_blocks(&fixture_record());

        // spacer, heading, 6 metric paragraphs, spacer,
        // sources heading + 3 bullets + spacer,
        // pages heading + 2 items + spacer
        assert_eq!(blocks.len(), 18);
        assert_eq!(blocks[0], Block::spacer());
        assert_eq!(block_text(&blocks[1]), "[ 오늘의 핵심 지표 ]");
        assert_eq!(block_text(&blocks[2]), "방문자: 500명 (전일대비 +50명) 📈");
        assert_eq!(blocks[8], Block::spacer());
        assert_eq!(block_text(&blocks[9]), "[ 트래픽 소스 ]");
        assert_eq!(blocks[13], Block::spacer());
        assert_eq!(block_text(&blocks[14]), "[ 조회수 Top 5 ]");
        assert_eq!(blocks[17], Block::spacer());
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let record = fixture_record();

        let first = serde_json::to_string(&build_page_blocks(&record)).unwrap();
        let second = serde_json::to_string(&build_page_blocks(&record)).unwrap();

        assert_eq!(first, second);
    }
}

use chrono::NaiveDate;
use ga_notion_report::aggregator::{ComparisonRecord, MetricsSnapshot, PageEntry, SourceEntry};
use ga_notion_report::report::blocks::{Block, BlockKind};
use ga_notion_report::report::{build_page_blocks, page_title};

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

fn march_15_record() -> ComparisonRecord {
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
            avg_session_duration: 60.0,
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
fn test_end_to_end_page_title() {
    assert_eq!(
        page_title(&march_15_record()),
        "Yeonny's BLOG 2024년 03월 15일 리포트"
    );
}

#[test]
fn test_end_to_end_metric_paragraphs() {
    let blocks = build_page_blocks(&march_15_record());
    let texts: Vec<String> = blocks.iter().map(block_text).collect();

    assert_eq!(texts[1], "[ 오늘의 핵심 지표 ]");
    assert_eq!(texts[2], "방문자: 500명 (전일대비 +50명) 📈");
    assert_eq!(texts[3], "페이지 조회: 2000회 (전일대비 +200회) 📈");
    assert_eq!(texts[4], "세션 수: 600회 (전일대비 +50회) 📈");
    assert_eq!(texts[5], "평균 체류 시간: 2분 5초 (전일대비 +1분 5초) 📈");
    assert_eq!(texts[6], "참여율: 65.00% (전일대비 +5.00%p) 📈");
    assert_eq!(texts[7], "이탈률: 30.00% (전일대비 5.00%p) 📈");
}

#[test]
fn test_end_to_end_traffic_source_shares() {
    let blocks = build_page_blocks(&march_15_record());
    let texts: Vec<String> = blocks.iter().map(block_text).collect();

    let heading = texts.iter().position(|t| t == "[ 트래픽 소스 ]").unwrap();
    assert_eq!(texts[heading + 1], "google: 300회 (50.0%)");
    assert_eq!(texts[heading + 2], "direct: 200회 (33.3%)");
    assert_eq!(texts[heading + 3], "naver: 100회 (16.7%)");
}

#[test]
fn test_end_to_end_popular_pages() {
    let blocks = build_page_blocks(&march_15_record());
    let texts: Vec<String> = blocks.iter().map(block_text).collect();

    let heading = texts.iter().position(|t| t == "[ 조회수 Top 5 ]").unwrap();
    assert_eq!(texts[heading + 1], "500회 | A");
    assert_eq!(texts[heading + 2], "300회 | B");
}

#[test]
fn test_end_to_end_sequence_starts_and_ends_with_spacer() {
    let blocks = build_page_blocks(&march_15_record());

    assert_eq!(blocks.first().unwrap(), &Block::spacer());
    assert_eq!(blocks.last().unwrap(), &Block::spacer());
}

#[test]
fn test_end_to_end_repeated_render_is_byte_identical() {
    let record = march_15_record();

    let first = serde_json::to_vec(&build_page_blocks(&record)).unwrap();
    let second = serde_json::to_vec(&build_page_blocks(&record)).unwrap();

    assert_eq!(first, second);
}

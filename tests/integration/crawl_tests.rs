//! Integration tests for the scraper
//!
//! These tests use wiremock to serve canned listing pages and exercise the
//! full fetch → extract → parse → filter → write cycle end-to-end.

use marquee::config::{
    ClientConfig, Config, OutputConfig, SelectorsConfig, SiteConfig, ThrottleConfig,
};
use marquee::{scrape, write_records};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointed at the mock server
fn create_test_config(base_url: &str, page_count: u32) -> Config {
    Config {
        site: SiteConfig {
            base_url: base_url.to_string(),
            page_count,
        },
        client: ClientConfig {
            user_agent: "MarqueeTest/1.0".to_string(),
            timeout_secs: 5,
        },
        throttle: ThrottleConfig {
            min_delay_ms: 1,
            max_delay_ms: 2, // Very short for testing
        },
        output: OutputConfig {
            csv_path: "./test_movies.csv".to_string(),
        },
        selectors: SelectorsConfig::default(),
    }
}

fn listing_page(cards: &[&str]) -> String {
    format!(
        "<html><body><div class=\"listing\">{}</div></body></html>",
        cards.concat()
    )
}

async fn mount_page(server: &MockServer, page: u32, body: String) {
    Mock::given(method("GET"))
        .and(path(format!("/page/{}", page)))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_two_page_scrape_filters_untitled_cards() {
    let mock_server = MockServer::start().await;

    // Page 1: one titled card, one untitled card
    mount_page(
        &mock_server,
        1,
        listing_page(&[
            r#"<div class="movie-item">
                <a href="/detail/1"><img src="/img/a.jpg"></a>
                <h2>A</h2>
                <span class="types">劇情</span>
                <p class="score">9.7</p>
            </div>"#,
            r#"<div class="movie-item"><p class="score">1.0</p></div>"#,
        ]),
    )
    .await;

    // Page 2: one titled card, no tags
    mount_page(
        &mock_server,
        2,
        listing_page(&[r#"<div class="movie-item">
                <a href="/detail/2"><img src="/img/b.jpg"></a>
                <h2>B</h2>
                <p class="score">7.4</p>
            </div>"#]),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), 2);
    let records = scrape(config).await.unwrap();

    // The untitled card is dropped; everything else survives in order
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].title, "A");
    assert_eq!(records[0].rating, "9.7");
    assert_eq!(records[0].types, "劇情");
    assert_eq!(records[0].page, 1);

    assert_eq!(records[1].title, "B");
    assert_eq!(records[1].rating, "7.4");
    assert_eq!(records[1].types, "");
    assert_eq!(records[1].page, 2);
}

#[tokio::test]
async fn test_failed_page_is_skipped_without_aborting() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        1,
        listing_page(&[r#"<div class="movie-item"><h2>One</h2></div>"#]),
    )
    .await;

    // Page 2 falls over server-side
    Mock::given(method("GET"))
        .and(path("/page/2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    mount_page(
        &mock_server,
        3,
        listing_page(&[r#"<div class="movie-item"><h2>Three</h2></div>"#]),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), 3);
    let records = scrape(config).await.unwrap();

    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["One", "Three"]);
    assert_eq!(records[0].page, 1);
    assert_eq!(records[1].page, 3);
}

#[tokio::test]
async fn test_all_pages_missing_yields_empty_run() {
    let mock_server = MockServer::start().await;

    // No mounted routes: every page 404s
    let config = create_test_config(&mock_server.uri(), 3);
    let records = scrape(config).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_relative_urls_resolved_against_site_base() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        1,
        listing_page(&[r#"<div class="movie-item">
                <a href="/detail/7"><img src="/img/poster.jpg"></a>
                <h2>Seven</h2>
            </div>"#]),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), 1);
    let records = scrape(config).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].detail_url,
        format!("{}/detail/7", mock_server.uri())
    );
    assert_eq!(
        records[0].image_url,
        format!("{}/img/poster.jpg", mock_server.uri())
    );
}

#[tokio::test]
async fn test_configured_user_agent_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page/1"))
        .and(header("user-agent", "MarqueeTest/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(&[
            r#"<div class="movie-item"><h2>UA</h2></div>"#,
        ])))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), 1);
    let records = scrape(config).await.unwrap();

    // The mock only matches when the header is present
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "UA");
}

#[tokio::test]
async fn test_scrape_and_write_round_trip() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        1,
        listing_page(&[r#"<div class="movie-item">
                <h2>霸王別姬</h2>
                <span class="types">劇情</span>
                <span class="types">愛情</span>
                <p class="score">9.5</p>
            </div>"#]),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), 1);
    let records = scrape(config).await.unwrap();

    let file = tempfile::NamedTempFile::new().unwrap();
    write_records(&records, file.path()).unwrap();

    let bytes = std::fs::read(file.path()).unwrap();
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);

    let mut reader = csv::Reader::from_reader(&bytes[3..]);
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][0], "霸王別姬");
    assert_eq!(&rows[0][2], "9.5");
    assert_eq!(&rows[0][3], "劇情;愛情");
    assert_eq!(&rows[0][4], "1");
}

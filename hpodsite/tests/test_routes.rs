use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use hpodi18n::{LocaleSet, Messages};
use hpodserver::Server;
use hpodsite::{FsObjectStore, RSS_CONTENT_TYPE, SiteExt, SiteSettings, SiteState};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

const FEED: &str = r#"<?xml version="1.0"?><rss version="2.0"><channel><title>Hacker Podcast</title></channel></rss>"#;

struct Site {
    _storage: TempDir,
    server: Server,
}

async fn site(total_episodes: u64, with_feed: bool) -> Site {
    let storage = TempDir::new().unwrap();
    std::fs::create_dir_all(storage.path().join("audio")).unwrap();
    std::fs::write(storage.path().join("audio/ep1.mp3"), [0xff, 0xfb, 0x90, 0x00]).unwrap();
    if with_feed {
        std::fs::write(storage.path().join("rss.xml"), FEED).unwrap();
    }

    let settings = SiteSettings {
        total_episodes,
        ..Default::default()
    };
    let state = SiteState::new(
        settings,
        LocaleSet::new(["en", "fr", "zh"], "en").unwrap(),
        Messages::embedded().unwrap(),
        Arc::new(FsObjectStore::new(storage.path())),
    );

    let mut server = Server::new("Test", "localhost", 0);
    server.add_site(state).await;
    Site {
        _storage: storage,
        server,
    }
}

async fn get(site: &Site, uri: &str, accept_language: Option<&str>) -> (StatusCode, header::HeaderMap, Vec<u8>) {
    let mut request = Request::builder().uri(uri);
    if let Some(value) = accept_language {
        request = request.header(header::ACCEPT_LANGUAGE, value);
    }
    let response = site
        .server
        .router()
        .await
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

async fn get_html(site: &Site, uri: &str, accept_language: Option<&str>) -> String {
    let (status, _, body) = get(site, uri, accept_language).await;
    assert_eq!(status, StatusCode::OK);
    String::from_utf8(body).unwrap()
}

#[tokio::test]
async fn test_lang_attribute_follows_accept_language() {
    let site = site(100, true).await;

    let html = get_html(&site, "/", Some("fr-CA,fr;q=0.9,en;q=0.8")).await;
    assert!(html.contains(r#"<html lang="fr" class="theme-orange">"#));

    let html = get_html(&site, "/", Some("en;q=0.5,zh")).await;
    assert!(html.contains(r#"<html lang="zh""#));
    assert!(html.contains("<h1>节目列表</h1>"));
}

#[tokio::test]
async fn test_missing_or_unknown_header_uses_default_locale() {
    let site = site(100, true).await;

    let html = get_html(&site, "/", None).await;
    assert!(html.contains(r#"<html lang="en""#));

    let html = get_html(&site, "/", Some("de-DE,ja;q=0.9")).await;
    assert!(html.contains(r#"<html lang="en""#));

    let html = get_html(&site, "/", Some(";;;q=abc")).await;
    assert!(html.contains(r#"<html lang="en""#));
}

#[tokio::test]
async fn test_head_carries_theme_initializer() {
    let site = site(100, true).await;
    let html = get_html(&site, "/", None).await;

    let head_end = html.find("</head>").unwrap();
    let script = html.find(r#"<script id="theme-initializer">"#).unwrap();
    assert!(script < head_end);
    assert!(html.contains(r#"localStorage.getItem("next-ui-theme")"#));
    assert!(html.contains(r#"<link rel="alternate" type="application/rss+xml""#));
}

#[tokio::test]
async fn test_page_links_preserve_other_parameters() {
    let site = site(100, true).await;
    let html = get_html(&site, "/?page=5&sort=new", None).await;

    assert!(html.contains(r#"<main id="main-scroll-container">"#));
    assert!(html.contains("Page 5 of 10"));
    // [1, …, 4, 5, 6, …, 10]
    assert!(html.contains(r#"<li><a href="/?sort=new">1</a></li>"#));
    assert!(html.contains(r#"<li data-key="ellipsis-2">"#));
    assert!(html.contains(r#"<li><a href="/?page=4&amp;sort=new">4</a></li>"#));
    assert!(html.contains(
        r#"<li><a href="/?page=5&amp;sort=new" class="active" aria-current="page">5</a></li>"#
    ));
    assert!(html.contains(r#"<li><a href="/?page=6&amp;sort=new">6</a></li>"#));
    assert!(html.contains(r#"<li data-key="ellipsis-9">"#));
    assert!(html.contains(r#"<li><a href="/?page=10&amp;sort=new">10</a></li>"#));
    assert!(!html.contains(r#">3</a>"#));
    assert!(html.contains(r#"rel="prev" aria-label="Previous page""#));
}

#[tokio::test]
async fn test_single_page_hides_pagination() {
    let site = site(4, true).await;
    let html = get_html(&site, "/", None).await;
    assert!(!html.contains("<nav"));
}

#[tokio::test]
async fn test_static_returns_raw_bytes() {
    let site = site(0, true).await;

    let (status, headers, body) = get(&site, "/static/audio/ep1.mp3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, vec![0xff, 0xfb, 0x90, 0x00]);
    assert!(headers.get(header::CONTENT_TYPE).is_none());
    assert!(headers.get(header::CACHE_CONTROL).is_none());
}

#[tokio::test]
async fn test_static_missing_object_is_empty_ok() {
    let site = site(0, true).await;

    let (status, _, body) = get(&site, "/static/audio/ep2.mp3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (status, _, body) = get(&site, "/static/audio/..%2F..%2Fsecret", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_blog_alias_serves_rss_feed() {
    let site = site(0, true).await;

    let (status, headers, rss) = get(&site, "/rss.xml", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), RSS_CONTENT_TYPE);
    assert_eq!(rss, FEED.as_bytes());

    let (status, headers, blog) = get(&site, "/blog.xml", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), RSS_CONTENT_TYPE);
    assert_eq!(blog, rss);
}

#[tokio::test]
async fn test_missing_feed_is_not_found() {
    let site = site(0, false).await;

    let (status, _, _) = get(&site, "/rss.xml", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _, _) = get(&site, "/blog.xml", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

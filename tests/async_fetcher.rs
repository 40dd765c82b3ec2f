//! Async facade over the HTTP verse source

#![cfg(feature = "http")]

mod common;

use verseslides::async_api::{add_slides, Fetcher};
use verseslides::{Error, Session, SessionConfig, Testament, VerseRequest};

fn config_for(base_url: &str) -> SessionConfig {
    SessionConfig {
        api_base_url: base_url.to_string(),
        timeout_ms: 5000,
        ..Default::default()
    }
}

#[tokio::test]
async fn fetcher_fetches_over_http() {
    let server = common::start_verse_server();
    let fetcher = Fetcher::http(config_for(&server.base_url))
        .await
        .expect("Failed to create fetcher");

    let req = VerseRequest::new("1 Corinthians", 13, 4, 8, "kjv").unwrap();
    let verses = fetcher.fetch(&req).await.expect("fetch");
    assert_eq!(verses.len(), 5);
    assert_eq!(verses[0].text, "1 Corinthians 13:4");

    let req = VerseRequest::new("1 Corinthians", 404, 1, 2, "kjv").unwrap();
    assert!(matches!(fetcher.fetch(&req).await, Err(Error::HttpStatus(404))));

    fetcher.close().await.unwrap();
}

#[tokio::test]
async fn add_slides_awaits_fetch_and_updates_session() {
    let server = common::start_verse_server();
    let config = config_for(&server.base_url);
    let fetcher = Fetcher::http(config.clone()).await.expect("fetcher");

    let mut session = Session::new(&config);
    session.set_testament(Testament::New);
    session.set_book("Matthew").unwrap();
    session.set_chapter("5");
    session.set_from_verse("3");
    session.set_to_verse("12");

    assert_eq!(add_slides(&mut session, &fetcher).await.unwrap(), 2);
    assert_eq!(session.deck().cursor(), Some(0));
    assert!(!session.is_loading());

    session.set_chapter("404");
    assert!(add_slides(&mut session, &fetcher).await.is_err());
    assert_eq!(session.deck().len(), 2);
    assert!(session.error().is_some());
}

#[tokio::test]
async fn bad_base_url_fails_on_init() {
    let res = Fetcher::http(config_for("no scheme here")).await;
    assert!(matches!(res, Err(Error::ConfigError(_))));
}

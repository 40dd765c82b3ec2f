//! Fake `bible-api.com` style server for integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tiny_http::{Header, Response, Server};

/// Verses per chapter served by the fake API
pub const CHAPTER_LEN: u32 = 30;

pub struct VerseServer {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl VerseServer {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Start a server on an ephemeral port.
///
/// Chapter numbers pick the failure mode: `404` and `500` answer with that
/// status, `998` with a body lacking a `verses` array, `999` with zero
/// verses. Any other chapter gets verses `from..=to` (capped at
/// `CHAPTER_LEN`) with text `"{book} {c}:{v}"`.
pub fn start_verse_server() -> VerseServer {
    let server = Server::http("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", server.server_addr());
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();

    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            counter.fetch_add(1, Ordering::SeqCst);
            let (status, body) = answer(request.url());
            let response = Response::from_string(body)
                .with_status_code(status)
                .with_header("Content-Type: application/json".parse::<Header>().unwrap());
            let _ = request.respond(response);
        }
    });

    VerseServer { base_url, hits }
}

fn answer(raw_url: &str) -> (u16, String) {
    let path = raw_url.split('?').next().unwrap_or("");
    let passage = path.trim_start_matches('/').replace("%20", " ");
    let Some((book_chapter, range)) = passage.rsplit_once(':') else {
        return (404, r#"{"error":"not found"}"#.into());
    };
    let book = book_chapter.trim_end_matches(|c: char| c.is_ascii_digit());
    let chapter = &book_chapter[book.len()..];
    let Some((from, to)) = range.split_once('-') else {
        return (404, r#"{"error":"not found"}"#.into());
    };
    let (Ok(from), Ok(to)) = (from.parse::<u32>(), to.parse::<u32>()) else {
        return (404, r#"{"error":"not found"}"#.into());
    };

    match chapter {
        "404" => (404, r#"{"error":"not found"}"#.into()),
        "500" => (500, "internal error".into()),
        "998" => (200, r#"{"reference":"nothing"}"#.into()),
        "999" => (200, r#"{"verses":[]}"#.into()),
        _ => {
            let verses: Vec<String> = (from..=to.min(CHAPTER_LEN))
                .map(|v| {
                    format!(
                        r#"{{"book_name":"{b}","chapter":{c},"verse":{v},"text":"{b} {c}:{v}\n"}}"#,
                        b = book,
                        c = chapter,
                        v = v
                    )
                })
                .collect();
            (200, format!(r#"{{"verses":[{}]}}"#, verses.join(",")))
        }
    }
}

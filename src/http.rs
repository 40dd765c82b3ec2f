//! Blocking HTTP verse source for `bible-api.com` style endpoints.
//!
//! A passage is requested as `GET {base}/{book}{chapter}:{from}-{to}?translation={code}`
//! and answered with a JSON object whose `verses` array holds
//! `{ "verse": n, "text": "..." }` entries. Other fields of the response are
//! ignored.

use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::verse::{VerseRecord, VerseRequest};
use crate::{Error, Result, SessionConfig, VerseSource};

#[derive(Debug, Deserialize)]
struct PassageResponse {
    verses: Vec<PassageVerse>,
}

#[derive(Debug, Deserialize)]
struct PassageVerse {
    verse: u32,
    text: String,
}

pub struct HttpVerseSource {
    client: Client,
    config: SessionConfig,
    base: Url,
}

impl HttpVerseSource {
    pub fn new(config: SessionConfig) -> Result<Self> {
        let base = Url::parse(&config.api_base_url).map_err(|e| {
            Error::ConfigError(format!("invalid API base URL '{}': {}", config.api_base_url, e))
        })?;
        if base.cannot_be_a_base() {
            return Err(Error::ConfigError(format!(
                "API base URL '{}' cannot carry a path",
                config.api_base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::InitializationError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config,
            base,
        })
    }

    /// Full request URL for `request`, with the passage percent-encoded as a
    /// single path segment.
    pub fn request_url(&self, request: &VerseRequest) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::ConfigError("API base URL cannot carry a path".into()))?
            .pop_if_empty()
            .push(&request.passage());
        url.query_pairs_mut()
            .append_pair("translation", &request.translation);
        Ok(url)
    }
}

impl VerseSource for HttpVerseSource {
    fn fetch(&self, request: &VerseRequest) -> Result<Vec<VerseRecord>> {
        let url = self.request_url(request)?;
        debug!("fetching {}", url);

        let mut builder = self.client.get(url.clone());
        for (name, value) in &self.config.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let resp = builder
            .send()
            .map_err(|e| Error::NetworkError(format!("Failed to fetch {}: {}", url, e)))?;

        let status = resp.status();
        if !status.is_success() {
            warn!("verse source answered {} for {}", status, request.reference());
            return Err(Error::HttpStatus(status.as_u16()));
        }

        let body = resp
            .text()
            .map_err(|e| Error::NetworkError(format!("Failed to read response body: {}", e)))?;

        parse_passage(&body)
    }
}

/// Decode a passage response body into trimmed verse records
pub fn parse_passage(body: &str) -> Result<Vec<VerseRecord>> {
    let parsed: PassageResponse =
        serde_json::from_str(body).map_err(|e| Error::MalformedResponse(e.to_string()))?;
    Ok(parsed
        .verses
        .into_iter()
        .map(|v| VerseRecord::new(v.verse, v.text.trim()))
        .collect())
}

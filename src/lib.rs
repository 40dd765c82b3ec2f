//! Verse Slides
//!
//! Fetches scripture passages from a verse-lookup API and paginates them into
//! responsive-reading slides: two verses for the moderator, two for the
//! congregation and a fifth read by everyone together.
//!
//! # Features
//!
//! - **HTTP source** (default, `http` feature): blocking client for a
//!   `bible-api.com` style endpoint
//! - **Deck state**: an in-memory slide deck with a cursor and navigation
//! - **Rendering**: 16:9 slide layout rasterized to PNG on demand
//!
//! # Example
//!
//! ```no_run
//! use verseslides::{Session, SessionConfig, Testament};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SessionConfig::default();
//! let source = verseslides::new_verse_source(config.clone())?;
//!
//! let mut session = Session::new(&config);
//! session.set_testament(Testament::New);
//! session.set_book("John")?;
//! session.set_chapter("3");
//! session.set_from_verse("16");
//! session.set_to_verse("21");
//! session.add_slides(&source)?;
//!
//! let shot = session.export_current(&config.render)?;
//! println!("{} bytes", shot.png_data.len());
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

pub mod error;
pub use error::{Error, Result};

pub mod canon;
pub mod deck;
pub mod paginate;
pub mod session;
pub mod slide;
pub mod source;
pub mod verse;

// Blocking HTTP adapter for the public verse-lookup API
#[cfg(feature = "http")]
pub mod http;

// Layout, paint and raster stages for slide images
pub mod rendering;

// Async-friendly fetcher (worker-thread backed)
pub mod async_api;

pub use async_api::Fetcher;
pub use canon::Testament;
pub use deck::Deck;
pub use paginate::paginate;
pub use rendering::{RenderConfig, Screenshot};
pub use session::{Action, Session, View};
pub use slide::{Role, Slide, SlideContent, SlideMetadata, SlidePosition, SlideTemplate};
pub use source::StaticVerseSource;
pub use verse::{VerseRecord, VerseRequest};

/// Configuration for a slide session
///
/// The defaults point at the public `bible-api.com` endpoint, use the King
/// James translation, and render 1280x720 slides at 2x scale.
///
/// # Examples
///
/// ```
/// let cfg = verseslides::SessionConfig::default();
/// assert_eq!(cfg.default_translation, "kjv");
/// ```
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Base URL of the verse-lookup API
    pub api_base_url: String,
    /// User agent string to send with requests
    pub user_agent: String,
    /// Timeout for verse requests in milliseconds
    pub timeout_ms: u64,
    /// Custom HTTP headers
    pub headers: HashMap<String, String>,
    /// Translation code the session form starts with
    pub default_translation: String,
    /// Slide image settings used by export
    pub render: RenderConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://bible-api.com".to_string(),
            user_agent: format!("verseslides/{}", env!("CARGO_PKG_VERSION")),
            timeout_ms: 30000,
            headers: HashMap::new(),
            default_translation: "kjv".to_string(),
            render: RenderConfig::default(),
        }
    }
}

/// Viewport dimensions (logical pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Source of verse records for a requested passage
///
/// Implementations return the verses in the order the source delivers them.
/// An empty vector is a valid answer; callers decide how to report it.
pub trait VerseSource {
    /// Fetch the verses covering `request`
    fn fetch(&self, request: &VerseRequest) -> Result<Vec<VerseRecord>>;
}

impl<S: VerseSource + ?Sized> VerseSource for &S {
    fn fetch(&self, request: &VerseRequest) -> Result<Vec<VerseRecord>> {
        (**self).fetch(request)
    }
}

impl<S: VerseSource + ?Sized> VerseSource for Box<S> {
    fn fetch(&self, request: &VerseRequest) -> Result<Vec<VerseRecord>> {
        (**self).fetch(request)
    }
}

/// Create the default verse source for `config`
#[cfg(feature = "http")]
pub fn new_verse_source(config: SessionConfig) -> Result<impl VerseSource> {
    http::HttpVerseSource::new(config)
}

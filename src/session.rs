//! Session state: the passage form, the deck and the fetch status.
//!
//! All state a slide session needs lives in [`Session`]; every user action is
//! a method on it (or an [`Action`] passed to [`Session::apply`]), so the
//! whole flow can be driven and tested without a display.
//!
//! Fetching is split into [`Session::begin_fetch`] and
//! [`Session::finish_fetch`] so a caller can await the verse source between
//! the two. While a fetch is in flight the session refuses to start another
//! one.

use log::{error, info, warn};

use crate::canon::{self, Testament};
use crate::deck::Deck;
use crate::paginate::paginate;
use crate::rendering::{self, RenderConfig, Screenshot};
use crate::slide::{Slide, SlidePosition, SlideTemplate};
use crate::verse::{VerseRecord, VerseRequest};
use crate::{Error, Result, SessionConfig, VerseSource};

/// Message shown after a failed fetch
pub const FETCH_FAILED_MESSAGE: &str = "Error fetching verses. Please try again.";
/// Message shown when the source returned no verses
pub const EMPTY_RESULT_MESSAGE: &str = "No verses found for that passage.";

/// Which panel of the preview is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Slide,
    List,
}

/// Synchronous session actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetTestament(Testament),
    SetBook(String),
    SetChapter(String),
    SetFromVerse(String),
    SetToVerse(String),
    SetTranslation(String),
    RemoveSlide(usize),
    GoToSlide(usize),
    Next,
    Prev,
    ShowList,
    ShowSlide,
}

/// One row of the slide list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub index: usize,
    pub label: String,
    pub current: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    testament: Testament,
    book: String,
    chapter: String,
    from_verse: String,
    to_verse: String,
    translation: String,
    deck: Deck,
    view: View,
    loading: bool,
    error: Option<String>,
    pending: Option<VerseRequest>,
}

impl Session {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            testament: Testament::default(),
            book: String::new(),
            chapter: String::new(),
            from_verse: String::new(),
            to_verse: String::new(),
            translation: config.default_translation.clone(),
            deck: Deck::new(),
            view: View::default(),
            loading: false,
            error: None,
            pending: None,
        }
    }

    // --- form ---

    pub fn testament(&self) -> Testament {
        self.testament
    }

    /// Books offered for the selected testament
    pub fn available_books(&self) -> &'static [&'static str] {
        self.testament.books()
    }

    /// Switch testament; a selected book from the other testament is cleared.
    pub fn set_testament(&mut self, testament: Testament) {
        self.testament = testament;
        if !self.book.is_empty() && !testament.contains(&self.book) {
            self.book.clear();
        }
    }

    pub fn book(&self) -> &str {
        &self.book
    }

    /// Select a book of the current testament (case-insensitive).
    pub fn set_book(&mut self, book: &str) -> Result<()> {
        match canon::canonical_name(book) {
            Some(name) if self.testament.contains(name) => {
                self.book = name.to_string();
                Ok(())
            }
            Some(name) => Err(Error::UnknownBook(format!(
                "{} is not in the {}",
                name, self.testament
            ))),
            None => Err(Error::UnknownBook(book.trim().to_string())),
        }
    }

    pub fn chapter(&self) -> &str {
        &self.chapter
    }

    pub fn set_chapter(&mut self, chapter: impl Into<String>) {
        self.chapter = chapter.into();
    }

    pub fn from_verse(&self) -> &str {
        &self.from_verse
    }

    pub fn set_from_verse(&mut self, verse: impl Into<String>) {
        self.from_verse = verse.into();
    }

    pub fn to_verse(&self) -> &str {
        &self.to_verse
    }

    pub fn set_to_verse(&mut self, verse: impl Into<String>) {
        self.to_verse = verse.into();
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    pub fn set_translation(&mut self, translation: impl Into<String>) {
        self.translation = translation.into();
    }

    /// Validate the form into a request without touching session state
    pub fn request(&self) -> Result<VerseRequest> {
        VerseRequest::parse(
            &self.book,
            &self.chapter,
            &self.from_verse,
            &self.to_verse,
            &self.translation,
        )
    }

    // --- fetch status ---

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Visible error message, if the last fetch did not produce slides
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a fetch: validates the form, marks the session busy and clears
    /// the previous error.
    pub fn begin_fetch(&mut self) -> Result<VerseRequest> {
        if self.loading {
            return Err(Error::Busy);
        }
        let request = match self.request() {
            Ok(r) => r,
            Err(e) => {
                self.error = Some(e.to_string());
                return Err(e);
            }
        };
        self.loading = true;
        self.error = None;
        self.pending = Some(request.clone());
        info!("fetching {} ({})", request.reference(), request.translation);
        Ok(request)
    }

    /// Finish the in-flight fetch with the source's answer.
    ///
    /// Returns the number of slides appended. Failures and empty answers
    /// leave the deck unchanged and set the visible error.
    pub fn finish_fetch(&mut self, result: Result<Vec<VerseRecord>>) -> Result<usize> {
        let request = self
            .pending
            .take()
            .ok_or_else(|| Error::Other("no verse request in progress".into()))?;
        self.loading = false;

        let verses = match result {
            Ok(v) => v,
            Err(e) if e.is_fetch_failure() => {
                warn!("fetching {} failed: {}", request.reference(), e);
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
                return Err(e);
            }
            Err(e) => {
                error!("cannot fetch {}: {}", request.reference(), e);
                self.error = Some(e.to_string());
                return Err(e);
            }
        };
        if verses.is_empty() {
            warn!("{} returned no verses", request.reference());
            self.error = Some(EMPTY_RESULT_MESSAGE.to_string());
            return Err(Error::EmptyResult);
        }

        let slides = paginate(&verses, &SlideTemplate::from(&request));
        let added = slides.len();
        self.deck.append(slides);
        self.view = View::Slide;
        self.error = None;
        info!(
            "added {} slides for {} ({} verses)",
            added,
            request.reference(),
            verses.len()
        );
        Ok(added)
    }

    /// Abandon the in-flight fetch without touching the deck.
    ///
    /// For callers whose fetch never completed (a dropped future, a
    /// timeout). Clears the busy flag so the next fetch can start; a no-op
    /// when nothing is pending.
    pub fn abort_fetch(&mut self) {
        if let Some(request) = self.pending.take() {
            warn!("fetch of {} abandoned", request.reference());
        }
        self.loading = false;
    }

    /// Fetch the form's passage from `source` and append its slides
    pub fn add_slides<S: VerseSource + ?Sized>(&mut self, source: &S) -> Result<usize> {
        let request = self.begin_fetch()?;
        let result = source.fetch(&request);
        self.finish_fetch(result)
    }

    // --- deck ---

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.deck.current()
    }

    pub fn position(&self) -> Option<SlidePosition> {
        self.deck.position()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn remove_slide(&mut self, index: usize) -> Result<()> {
        self.deck.remove_at(index).map(|_| ())
    }

    /// Jump to a slide and show it
    pub fn go_to_slide(&mut self, index: usize) -> Result<()> {
        self.deck.go_to(index)?;
        self.view = View::Slide;
        Ok(())
    }

    pub fn next(&mut self) -> bool {
        self.deck.next()
    }

    pub fn prev(&mut self) -> bool {
        self.deck.prev()
    }

    pub fn show_list(&mut self) {
        self.view = View::List;
    }

    pub fn show_slide(&mut self) {
        self.view = View::Slide;
    }

    /// Rows of the slide list, e.g. `Slide 2: John 3:21-25`
    pub fn list_entries(&self) -> Vec<ListEntry> {
        let cursor = self.deck.cursor();
        self.deck
            .slides()
            .iter()
            .enumerate()
            .map(|(index, slide)| ListEntry {
                index,
                label: format!("Slide {}: {}", index + 1, slide.reference()),
                current: cursor == Some(index),
            })
            .collect()
    }

    /// Apply a synchronous action
    pub fn apply(&mut self, action: Action) -> Result<()> {
        match action {
            Action::SetTestament(t) => self.set_testament(t),
            Action::SetBook(b) => self.set_book(&b)?,
            Action::SetChapter(c) => self.set_chapter(c),
            Action::SetFromVerse(v) => self.set_from_verse(v),
            Action::SetToVerse(v) => self.set_to_verse(v),
            Action::SetTranslation(t) => self.set_translation(t),
            Action::RemoveSlide(i) => self.remove_slide(i)?,
            Action::GoToSlide(i) => self.go_to_slide(i)?,
            Action::Next => {
                self.next();
            }
            Action::Prev => {
                self.prev();
            }
            Action::ShowList => self.show_list(),
            Action::ShowSlide => self.show_slide(),
        }
        Ok(())
    }

    // --- export ---

    /// Rasterize the displayed slide
    pub fn export_current(&self, config: &RenderConfig) -> Result<Screenshot> {
        let index = self
            .deck
            .cursor()
            .ok_or_else(|| Error::RenderError("no slides to export".into()))?;
        self.export_slide(index, config)
    }

    /// Rasterize the slide at `index`
    pub fn export_slide(&self, index: usize, config: &RenderConfig) -> Result<Screenshot> {
        let slide = self.deck.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.deck.len(),
        })?;
        rendering::render_slide(slide, SlidePosition::from_index(index, self.deck.len()), config)
    }

    /// Rasterize every slide in deck order
    pub fn export_all(&self, config: &RenderConfig) -> Result<Vec<Screenshot>> {
        if self.deck.is_empty() {
            return Err(Error::RenderError("no slides to export".into()));
        }
        (0..self.deck.len())
            .map(|i| self.export_slide(i, config))
            .collect()
    }
}

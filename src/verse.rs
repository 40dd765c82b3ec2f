//! Verse records and passage requests

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A single numbered verse as delivered by the verse source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    /// Verse number within the chapter (1-based)
    pub number: u32,
    /// Verse text, trimmed of surrounding whitespace
    pub text: String,
}

impl VerseRecord {
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// A validated passage request: one chapter, an inclusive verse range and a
/// translation code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseRequest {
    pub book: String,
    pub chapter: u32,
    pub from_verse: u32,
    pub to_verse: u32,
    pub translation: String,
}

impl VerseRequest {
    /// Build a request, rejecting empty books, zero chapters/verses and
    /// reversed ranges.
    pub fn new(
        book: &str,
        chapter: u32,
        from_verse: u32,
        to_verse: u32,
        translation: &str,
    ) -> Result<Self> {
        let book = book.trim();
        if book.is_empty() {
            return Err(Error::UnknownBook("no book selected".into()));
        }
        if chapter == 0 {
            return Err(Error::MalformedRange("chapter must be at least 1".into()));
        }
        if from_verse == 0 {
            return Err(Error::MalformedRange("verses start at 1".into()));
        }
        if from_verse > to_verse {
            return Err(Error::MalformedRange(format!(
                "from verse {} is after to verse {}",
                from_verse, to_verse
            )));
        }
        let translation = translation.trim();
        if translation.is_empty() {
            return Err(Error::MalformedRange("translation code is empty".into()));
        }
        Ok(Self {
            book: book.to_string(),
            chapter,
            from_verse,
            to_verse,
            translation: translation.to_string(),
        })
    }

    /// Build a request from raw form text (numeric fields as typed).
    pub fn parse(
        book: &str,
        chapter: &str,
        from_verse: &str,
        to_verse: &str,
        translation: &str,
    ) -> Result<Self> {
        let chapter = parse_number("chapter", chapter)?;
        let from_verse = parse_number("from verse", from_verse)?;
        let to_verse = parse_number("to verse", to_verse)?;
        Self::new(book, chapter, from_verse, to_verse, translation)
    }

    /// Passage in the API path form, e.g. `John3:16-18`
    pub fn passage(&self) -> String {
        format!(
            "{}{}:{}-{}",
            self.book, self.chapter, self.from_verse, self.to_verse
        )
    }

    /// Human-readable reference, e.g. `John 3:16-18`
    pub fn reference(&self) -> String {
        format!(
            "{} {}:{}-{}",
            self.book, self.chapter, self.from_verse, self.to_verse
        )
    }

    pub fn contains(&self, verse: u32) -> bool {
        (self.from_verse..=self.to_verse).contains(&verse)
    }
}

fn parse_number(field: &str, raw: &str) -> Result<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Error::MalformedRange(format!("{} is required", field)));
    }
    raw.parse::<u32>()
        .map_err(|_| Error::MalformedRange(format!("{} '{}' is not a whole number", field, raw)))
}

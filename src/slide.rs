//! Slide records produced by the paginator

use serde::Serialize;

use crate::verse::{VerseRecord, VerseRequest};

/// Reading role a verse is assigned to on a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Moderator,
    Congregation,
    Together,
}

impl Role {
    /// Label printed above the role's verses
    pub fn label(self) -> &'static str {
        match self {
            Role::Moderator => "[MODERATOR]",
            Role::Congregation => "[CONGREGATION]",
            Role::Together => "[TOGETHER]",
        }
    }
}

/// Verses of one slide split by reading role
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SlideContent {
    pub moderator: Vec<VerseRecord>,
    pub congregation: Vec<VerseRecord>,
    pub together: Option<VerseRecord>,
}

impl SlideContent {
    /// All verses in reading order: moderator, congregation, together
    pub fn verses(&self) -> impl Iterator<Item = &VerseRecord> {
        self.moderator
            .iter()
            .chain(self.congregation.iter())
            .chain(self.together.iter())
    }

    /// Verses paired with the role they are read by
    pub fn verses_with_roles(&self) -> impl Iterator<Item = (Role, &VerseRecord)> {
        self.moderator
            .iter()
            .map(|v| (Role::Moderator, v))
            .chain(self.congregation.iter().map(|v| (Role::Congregation, v)))
            .chain(self.together.iter().map(|v| (Role::Together, v)))
    }

    pub fn len(&self) -> usize {
        self.moderator.len() + self.congregation.len() + usize::from(self.together.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Passage details shared by every slide of one fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideTemplate {
    pub book: String,
    pub chapter: u32,
    pub translation: String,
}

impl From<&VerseRequest> for SlideTemplate {
    fn from(req: &VerseRequest) -> Self {
        Self {
            book: req.book.clone(),
            chapter: req.chapter,
            translation: req.translation.clone(),
        }
    }
}

/// Where a slide's verses come from
///
/// `from_verse` and `to_verse` are the first and last verse numbers placed on
/// the slide, whatever role they ended up in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideMetadata {
    pub book: String,
    pub chapter: u32,
    pub from_verse: u32,
    pub to_verse: u32,
    pub translation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub content: SlideContent,
    pub metadata: SlideMetadata,
}

impl Slide {
    /// Heading shown on the slide, e.g. `John 3:16-20 (kjv)`
    pub fn heading(&self) -> String {
        let m = &self.metadata;
        format!(
            "{} {}:{}-{} ({})",
            m.book, m.chapter, m.from_verse, m.to_verse, m.translation
        )
    }

    /// Reference without the translation, as used by the slide list
    pub fn reference(&self) -> String {
        let m = &self.metadata;
        format!("{} {}:{}-{}", m.book, m.chapter, m.from_verse, m.to_verse)
    }
}

/// 1-based position of a slide within its deck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidePosition {
    pub number: usize,
    pub total: usize,
}

impl SlidePosition {
    pub fn from_index(index: usize, total: usize) -> Self {
        Self {
            number: index + 1,
            total,
        }
    }

    pub fn caption(&self) -> String {
        format!("Slide {} of {}", self.number, self.total)
    }
}

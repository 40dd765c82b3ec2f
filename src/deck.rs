//! Slide deck with a cursor
//!
//! The deck is either empty (no cursor) or populated with the cursor on a
//! valid slide. Index arguments outside `0..len` are rejected with
//! [`Error::IndexOutOfRange`] and leave the deck untouched; `next`/`prev`
//! stop at the ends instead of wrapping.

use log::debug;

use crate::slide::{Slide, SlidePosition};
use crate::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct Deck {
    slides: Vec<Slide>,
    cursor: Option<usize>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Index of the displayed slide, `None` when the deck is empty
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Displayed slide
    pub fn current(&self) -> Option<&Slide> {
        self.cursor.and_then(|i| self.slides.get(i))
    }

    pub fn position(&self) -> Option<SlidePosition> {
        self.cursor
            .map(|i| SlidePosition::from_index(i, self.slides.len()))
    }

    /// Append a batch and move the cursor to its first slide.
    ///
    /// Returns that slide's index, or `None` (deck unchanged) for an empty
    /// batch.
    pub fn append(&mut self, batch: Vec<Slide>) -> Option<usize> {
        if batch.is_empty() {
            return None;
        }
        let first = self.slides.len();
        self.slides.extend(batch);
        self.cursor = Some(first);
        debug!("deck: appended {} slides, cursor -> {}", self.slides.len() - first, first);
        Some(first)
    }

    /// Delete the slide at `index`.
    ///
    /// A cursor left past the end is pulled back to the last slide; removing
    /// the only slide empties the deck.
    pub fn remove_at(&mut self, index: usize) -> Result<Slide> {
        self.check_index(index)?;
        let removed = self.slides.remove(index);
        let len = self.slides.len();
        self.cursor = match self.cursor {
            _ if len == 0 => None,
            Some(c) if c >= len => Some(len - 1),
            other => other,
        };
        debug!("deck: removed slide {}, cursor -> {:?}", index, self.cursor);
        Ok(removed)
    }

    /// Move the cursor to `index`
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.cursor = Some(index);
        Ok(())
    }

    /// Advance one slide; returns false at the last slide or on an empty deck
    pub fn next(&mut self) -> bool {
        match self.cursor {
            Some(c) if c + 1 < self.slides.len() => {
                self.cursor = Some(c + 1);
                true
            }
            _ => false,
        }
    }

    /// Step back one slide; returns false at the first slide or on an empty deck
    pub fn prev(&mut self) -> bool {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                true
            }
            _ => false,
        }
    }

    pub fn can_go_next(&self) -> bool {
        matches!(self.cursor, Some(c) if c + 1 < self.slides.len())
    }

    pub fn can_go_prev(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.slides.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.slides.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::{SlideContent, SlideMetadata};
    use crate::verse::VerseRecord;

    fn slide(n: u32) -> Slide {
        Slide {
            content: SlideContent {
                moderator: vec![VerseRecord::new(n, "text")],
                ..Default::default()
            },
            metadata: SlideMetadata {
                book: "Ruth".into(),
                chapter: 1,
                from_verse: n,
                to_verse: n,
                translation: "kjv".into(),
            },
        }
    }

    fn deck_of(n: u32) -> Deck {
        let mut deck = Deck::new();
        deck.append((1..=n).map(slide).collect());
        deck
    }

    #[test]
    fn empty_deck_has_no_cursor() {
        let mut deck = Deck::new();
        assert_eq!(deck.cursor(), None);
        assert!(deck.current().is_none());
        assert!(!deck.next());
        assert!(!deck.prev());
        assert_eq!(deck.append(Vec::new()), None);
        assert!(deck.is_empty());
    }

    #[test]
    fn append_jumps_to_first_new_slide() {
        let mut deck = deck_of(3);
        assert_eq!(deck.cursor(), Some(0));
        deck.go_to(2).unwrap();
        assert_eq!(deck.append(vec![slide(10), slide(11)]), Some(3));
        assert_eq!(deck.cursor(), Some(3));
        assert_eq!(deck.current().unwrap().metadata.from_verse, 10);
    }

    #[test]
    fn remove_clamps_cursor_past_end() {
        let mut deck = deck_of(3);
        deck.go_to(2).unwrap();
        deck.remove_at(2).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.cursor(), Some(1));
    }

    #[test]
    fn remove_before_cursor_keeps_index() {
        let mut deck = deck_of(4);
        deck.go_to(2).unwrap();
        deck.remove_at(0).unwrap();
        assert_eq!(deck.cursor(), Some(2));
    }

    #[test]
    fn removing_last_slide_empties_deck() {
        let mut deck = deck_of(1);
        deck.remove_at(0).unwrap();
        assert!(deck.is_empty());
        assert_eq!(deck.cursor(), None);
        assert!(deck.position().is_none());
    }

    #[test]
    fn out_of_range_indexes_are_rejected() {
        let mut deck = deck_of(2);
        deck.go_to(1).unwrap();
        assert!(matches!(
            deck.go_to(2),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        ));
        assert!(deck.remove_at(5).is_err());
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.cursor(), Some(1));
    }

    #[test]
    fn next_and_prev_stop_at_ends() {
        let mut deck = deck_of(2);
        assert!(!deck.prev());
        assert!(deck.next());
        assert!(!deck.next());
        assert_eq!(deck.cursor(), Some(1));
        assert!(deck.can_go_prev());
        assert!(!deck.can_go_next());
    }
}

//! Verse-to-slide pagination
//!
//! Verses are cut into consecutive runs of five. Inside a run the split is
//! fixed by position: verses 1-2 go to the moderator, 3-4 to the
//! congregation and the fifth is read together. Short runs fill the
//! moderator first, so a run of one or two verses has no congregation part
//! and only a full run has a together verse. The split never looks at verse
//! lengths or content.

use crate::slide::{Slide, SlideContent, SlideMetadata, SlideTemplate};
use crate::verse::VerseRecord;

/// Verses placed on one full slide
pub const VERSES_PER_SLIDE: usize = 5;

const MODERATOR_VERSES: usize = 2;
const CONGREGATION_VERSES: usize = 2;

/// Partition `verses` into slides.
///
/// Verse order is kept as delivered; gaps or out-of-order numbers from the
/// source are not corrected. An empty input yields no slides.
pub fn paginate(verses: &[VerseRecord], template: &SlideTemplate) -> Vec<Slide> {
    verses
        .chunks(VERSES_PER_SLIDE)
        .map(|chunk| slide_for_chunk(chunk, template))
        .collect()
}

/// Number of slides `verse_count` verses paginate into
pub fn slide_count(verse_count: usize) -> usize {
    verse_count.div_ceil(VERSES_PER_SLIDE)
}

fn slide_for_chunk(chunk: &[VerseRecord], template: &SlideTemplate) -> Slide {
    let split = chunk.len().min(MODERATOR_VERSES);
    let (moderator, rest) = chunk.split_at(split);
    let congregation = &rest[..rest.len().min(CONGREGATION_VERSES)];
    let together = if chunk.len() == VERSES_PER_SLIDE {
        chunk.last().cloned()
    } else {
        None
    };

    // chunks() never yields an empty slice
    let from_verse = chunk.first().map(|v| v.number).unwrap_or_default();
    let to_verse = chunk.last().map(|v| v.number).unwrap_or_default();

    Slide {
        content: SlideContent {
            moderator: moderator.to_vec(),
            congregation: congregation.to_vec(),
            together,
        },
        metadata: SlideMetadata {
            book: template.book.clone(),
            chapter: template.chapter,
            from_verse,
            to_verse,
            translation: template.translation.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verses(range: std::ops::RangeInclusive<u32>) -> Vec<VerseRecord> {
        range
            .map(|n| VerseRecord::new(n, format!("verse {}", n)))
            .collect()
    }

    fn template() -> SlideTemplate {
        SlideTemplate {
            book: "Genesis".into(),
            chapter: 1,
            translation: "kjv".into(),
        }
    }

    fn numbers(vs: &[VerseRecord]) -> Vec<u32> {
        vs.iter().map(|v| v.number).collect()
    }

    #[test]
    fn seven_verses_make_a_full_and_a_short_slide() {
        let slides = paginate(&verses(1..=7), &template());
        assert_eq!(slides.len(), 2);

        let first = &slides[0];
        assert_eq!(numbers(&first.content.moderator), vec![1, 2]);
        assert_eq!(numbers(&first.content.congregation), vec![3, 4]);
        assert_eq!(first.content.together.as_ref().map(|v| v.number), Some(5));
        assert_eq!((first.metadata.from_verse, first.metadata.to_verse), (1, 5));

        let second = &slides[1];
        assert_eq!(numbers(&second.content.moderator), vec![6, 7]);
        assert!(second.content.congregation.is_empty());
        assert!(second.content.together.is_none());
        assert_eq!((second.metadata.from_verse, second.metadata.to_verse), (6, 7));
    }

    #[test]
    fn short_runs_fill_moderator_then_congregation() {
        for n in 1..=4u32 {
            let slides = paginate(&verses(1..=n), &template());
            assert_eq!(slides.len(), 1);
            let c = &slides[0].content;
            assert_eq!(c.moderator.len(), (n as usize).min(2));
            assert_eq!(c.congregation.len(), (n as usize).saturating_sub(2));
            assert!(c.together.is_none());
        }
    }

    #[test]
    fn metadata_copies_template() {
        let slides = paginate(&verses(10..=12), &template());
        let m = &slides[0].metadata;
        assert_eq!(m.book, "Genesis");
        assert_eq!(m.chapter, 1);
        assert_eq!(m.translation, "kjv");
        assert_eq!((m.from_verse, m.to_verse), (10, 12));
    }

    #[test]
    fn sparse_numbers_are_kept_as_delivered() {
        let input = vec![
            VerseRecord::new(3, "c"),
            VerseRecord::new(9, "i"),
            VerseRecord::new(4, "d"),
        ];
        let slides = paginate(&input, &template());
        assert_eq!(numbers(&slides[0].content.moderator), vec![3, 9]);
        assert_eq!(slides[0].metadata.to_verse, 4);
    }

    #[test]
    fn empty_input_yields_no_slides() {
        assert!(paginate(&[], &template()).is_empty());
        assert_eq!(slide_count(0), 0);
        assert_eq!(slide_count(5), 1);
        assert_eq!(slide_count(6), 2);
    }
}

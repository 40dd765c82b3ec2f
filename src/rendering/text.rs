//! Plain-text rendering of a slide for terminals and logs

use crate::rendering::layout::wrap_text;
use crate::slide::{Role, Slide, SlidePosition};

/// A textual snapshot of a rendered slide
#[derive(Debug, Clone)]
pub struct TextSnapshot {
    /// Slide heading
    pub title: String,
    /// Role sections and caption, wrapped to the requested width
    pub text: String,
}

/// Render `slide` as stacked role sections wrapped at `width` columns
pub fn text_snapshot(slide: &Slide, position: SlidePosition, width: usize) -> TextSnapshot {
    let mut out = Vec::new();
    let content = &slide.content;

    let sections: [(Role, Vec<_>); 3] = [
        (Role::Moderator, content.moderator.iter().collect()),
        (Role::Congregation, content.congregation.iter().collect()),
        (Role::Together, content.together.iter().collect()),
    ];
    for (role, verses) in sections {
        // Together only appears on full slides
        if role == Role::Together && verses.is_empty() {
            continue;
        }
        out.push(role.label().to_string());
        for v in verses {
            let body = wrap_text(&v.text, width.saturating_sub(4).max(1));
            for (i, line) in body.iter().enumerate() {
                if i == 0 {
                    out.push(format!("{:>3} {}", v.number, line));
                } else {
                    out.push(format!("    {}", line));
                }
            }
        }
        out.push(String::new());
    }
    out.push(format!("{:>w$}", position.caption(), w = width));

    TextSnapshot {
        title: slide.heading(),
        text: out.join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paginate::paginate;
    use crate::slide::SlideTemplate;
    use crate::verse::VerseRecord;

    #[test]
    fn snapshot_lists_roles_in_reading_order() {
        let verses: Vec<VerseRecord> = (1..=5)
            .map(|n| VerseRecord::new(n, format!("text of verse {}", n)))
            .collect();
        let template = SlideTemplate {
            book: "Psalms".into(),
            chapter: 100,
            translation: "web".into(),
        };
        let slides = paginate(&verses, &template);
        let snap = text_snapshot(&slides[0], SlidePosition::from_index(0, 1), 40);

        assert_eq!(snap.title, "Psalms 100:1-5 (web)");
        let m = snap.text.find("[MODERATOR]").unwrap();
        let c = snap.text.find("[CONGREGATION]").unwrap();
        let t = snap.text.find("[TOGETHER]").unwrap();
        assert!(m < c && c < t);
        assert!(snap.text.contains("  5 text of verse 5"));
        assert!(snap.text.trim_end().ends_with("Slide 1 of 1"));
    }

    #[test]
    fn short_slide_omits_together() {
        let template = SlideTemplate {
            book: "Jude".into(),
            chapter: 1,
            translation: "kjv".into(),
        };
        let slides = paginate(&[VerseRecord::new(24, "Now unto him")], &template);
        let snap = text_snapshot(&slides[0], SlidePosition::from_index(0, 1), 40);
        assert!(snap.text.contains("[CONGREGATION]"));
        assert!(!snap.text.contains("[TOGETHER]"));
    }
}

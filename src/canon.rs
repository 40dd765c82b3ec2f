//! Testaments and their book lists

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

pub const OLD_TESTAMENT_BOOKS: [&str; 39] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
];

pub const NEW_TESTAMENT_BOOKS: [&str; 27] = [
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Testament {
    #[default]
    Old,
    New,
}

impl Testament {
    pub const ALL: [Testament; 2] = [Testament::Old, Testament::New];

    pub fn label(self) -> &'static str {
        match self {
            Testament::Old => "Old Testament",
            Testament::New => "New Testament",
        }
    }

    /// Books of this testament in canonical order
    pub fn books(self) -> &'static [&'static str] {
        match self {
            Testament::Old => &OLD_TESTAMENT_BOOKS,
            Testament::New => &NEW_TESTAMENT_BOOKS,
        }
    }

    pub fn contains(self, book: &str) -> bool {
        self.books().iter().any(|b| *b == book)
    }
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Testament {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "old" | "ot" | "old testament" => Ok(Testament::Old),
            "new" | "nt" | "new testament" => Ok(Testament::New),
            other => Err(Error::Other(format!("unknown testament '{}'", other))),
        }
    }
}

/// Testament containing `book`, if it is a canonical book name
pub fn testament_of(book: &str) -> Option<Testament> {
    Testament::ALL.into_iter().find(|t| t.contains(book))
}

/// Case-insensitive lookup returning the canonical spelling
pub fn canonical_name(book: &str) -> Option<&'static str> {
    let wanted = book.trim();
    OLD_TESTAMENT_BOOKS
        .iter()
        .chain(NEW_TESTAMENT_BOOKS.iter())
        .find(|b| b.eq_ignore_ascii_case(wanted))
        .copied()
}

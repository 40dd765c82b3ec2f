//! In-memory verse source for tests and offline use

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::verse::{VerseRecord, VerseRequest};
use crate::{Error, Result, VerseSource};

/// Serves verses from a fixed table, or fails every request with a fixed
/// HTTP status.
///
/// The table is treated as one chapter: a request returns the entries whose
/// numbers fall inside its verse range, in table order.
#[derive(Debug, Default)]
pub struct StaticVerseSource {
    verses: Vec<VerseRecord>,
    fail_status: Option<u16>,
    calls: AtomicUsize,
}

impl StaticVerseSource {
    pub fn new(verses: Vec<VerseRecord>) -> Self {
        Self {
            verses,
            ..Default::default()
        }
    }

    /// Verses `1..=count` with placeholder text
    pub fn numbered(count: u32) -> Self {
        Self::new(
            (1..=count)
                .map(|n| VerseRecord::new(n, format!("Verse {} text.", n)))
                .collect(),
        )
    }

    /// A source that answers every request with `status`
    pub fn failing(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Default::default()
        }
    }

    /// Number of fetches served so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl VerseSource for StaticVerseSource {
    fn fetch(&self, request: &VerseRequest) -> Result<Vec<VerseRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.fail_status {
            return Err(Error::HttpStatus(status));
        }
        Ok(self
            .verses
            .iter()
            .filter(|v| request.contains(v.number))
            .cloned()
            .collect())
    }
}

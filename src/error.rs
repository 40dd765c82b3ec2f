//! Error types for verse fetching, deck navigation and rendering

use thiserror::Error;

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or navigating a slide deck
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to initialize the HTTP client
    #[error("Verse source initialization failed: {0}")]
    InitializationError(String),

    /// Transport failure talking to the verse source
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The verse source answered with a non-success status
    #[error("Verse source returned HTTP {0}")]
    HttpStatus(u16),

    /// The verse source answered with a body we could not read
    #[error("Malformed verse response: {0}")]
    MalformedResponse(String),

    /// The verse source answered successfully but with zero verses
    #[error("No verses found for the requested range")]
    EmptyResult,

    /// Chapter or verse inputs are not a usable range
    #[error("Invalid verse range: {0}")]
    MalformedRange(String),

    /// Book is missing or not part of the selected testament
    #[error("Unknown book: {0}")]
    UnknownBook(String),

    /// A verse request is already in flight for this session
    #[error("A verse request is already in progress")]
    Busy,

    /// Deck index outside `0..len`
    #[error("Slide index {index} is out of range for a deck of {len} slides")]
    IndexOutOfRange { index: usize, len: usize },

    /// Failed to render a slide
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// True for the errors the session reports as a failed fetch.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Error::NetworkError(_) | Error::HttpStatus(_) | Error::MalformedResponse(_)
        )
    }
}

impl From<png::EncodingError> for Error {
    fn from(err: png::EncodingError) -> Self {
        Error::RenderError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failures_are_classified() {
        assert!(Error::HttpStatus(404).is_fetch_failure());
        assert!(Error::NetworkError("refused".into()).is_fetch_failure());
        assert!(Error::MalformedResponse("no verses".into()).is_fetch_failure());
        assert!(!Error::EmptyResult.is_fetch_failure());
        assert!(!Error::Busy.is_fetch_failure());
    }

    #[test]
    fn index_error_mentions_bounds() {
        let msg = Error::IndexOutOfRange { index: 4, len: 2 }.to_string();
        assert!(msg.contains('4'));
        assert!(msg.contains('2'));
    }
}

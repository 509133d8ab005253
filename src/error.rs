use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::io;
use thiserror::Error;

/// Failures surfaced by the search core.
///
/// Every variant is recoverable: the caller keeps its input and may retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Please enter a search query")]
    EmptyQuery,

    #[error("Query must be at least {min} characters")]
    TooShort { min: usize },

    #[error("Query is too long (max {max} characters)")]
    TooLong { max: usize },

    #[error("Browser launch blocked! Allow opendork to open a browser window.")]
    PopupBlocked,

    #[error("Unknown search engine: {0}")]
    UnknownEngine(String),

    #[error("Unknown file type: {0}")]
    UnknownFileType(String),

    #[error("Search failed: {0}")]
    NavigationFailed(String),

    #[error("A search is already in progress")]
    SearchInProgress,
}

impl SearchError {
    /// Stable machine-readable tag for this error.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::EmptyQuery => "empty_query",
            SearchError::TooShort { .. } => "too_short",
            SearchError::TooLong { .. } => "too_long",
            SearchError::PopupBlocked => "popup_blocked",
            SearchError::UnknownEngine(_) => "unknown_engine",
            SearchError::UnknownFileType(_) => "unknown_file_type",
            SearchError::NavigationFailed(_) => "navigation_failed",
            SearchError::SearchInProgress => "search_in_progress",
        }
    }
}

/// Serializes as `{"kind": "...", "message": "..."}` so JSON consumers can
/// branch on the tag instead of the display text.
impl Serialize for SearchError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SearchError", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Errors raised by a [`Navigator`](crate::navigator::Navigator) implementation.
#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("failed to launch browser: {0}")]
    Launch(#[from] io::Error),

    #[error("{0}")]
    Rejected(String),
}

#[derive(Error, Debug)]
pub enum DorkError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("An unexpected error occurred: {0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DorkError>;

//! Error types for bingovision-recog

use thiserror::Error;

/// Recognition orchestration error type
///
/// Per-cell faults (unreadable geometry, engine failures, rejected
/// results) are recorded on the cell and never surface here; only
/// precondition failures abort before any processing starts.
#[derive(Error, Debug)]
pub enum RecogError {
    /// Strike evaluation requested with no called numbers
    #[error("no called numbers supplied")]
    NoCalledNumbers,

    /// Strike evaluation requested with no cards
    #[error("no cards present")]
    NoCards,

    /// Invalid run configuration, rejected before any processing
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Recognition engine failure, reported by engine implementations
    #[error("recognition engine failure: {0}")]
    Engine(String),
}

/// Result type alias for recognition operations
pub type RecogResult<T> = std::result::Result<T, RecogError>;

//! Error types shared across the feeds, storage and language switching.

use thiserror::Error;

/// Failure while retrieving a remote document.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("could not read body of {url}: {reason}")]
    Body { url: String, reason: String },
}

/// A document was retrieved but its content is unusable.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload has no dictionary for locale `{0}`")]
    MissingLocale(&'static str),
}

/// Origin-scoped key/value storage is missing or misbehaving.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable on this platform")]
    Unavailable,

    #[error("failed reading `{key}`: {reason}")]
    Read { key: String, reason: String },

    #[error("failed writing `{key}`: {reason}")]
    Write { key: String, reason: String },

    #[error("stored value for `{key}` is not valid: {reason}")]
    Corrupt { key: String, reason: String },
}

/// One availability row that could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {reason}")]
pub struct RowError {
    pub line: usize,
    pub reason: RowErrorReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowErrorReason {
    #[error("invalid start date `{0}`")]
    StartDate(String),

    #[error("invalid end date `{0}`")]
    EndDate(String),

    #[error("price `{0}` is not a whole number")]
    Price(String),
}

/// A language switch that could not produce a usable dictionary.
#[derive(Debug, Error)]
pub enum SwitchError {
    #[error("no dictionary available for `{locale}`: {source}")]
    NoDictionary {
        locale: &'static str,
        #[source]
        source: FeedError,
    },
}

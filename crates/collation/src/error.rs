use thiserror::Error;

/// Errors raised while building a collator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollationError {
    #[error("invalid locale `{tag}`: {reason}")]
    InvalidLocale { tag: String, reason: String },
    #[error("invalid collation options: {0}")]
    InvalidOptions(String),
}

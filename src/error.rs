use collation::CollationError;
use thiserror::Error;

/// Errors surfaced by a search call.
///
/// Only collator acquisition can fail. A scan that finds nothing returns
/// `Ok(None)`, not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("collator acquisition failed: {0}")]
    Collation(#[from] CollationError),
}

impl SearchError {
    pub fn is_invalid_locale(&self) -> bool {
        matches!(self, SearchError::Collation(CollationError::InvalidLocale { .. }))
    }

    pub fn is_invalid_options(&self) -> bool {
        matches!(self, SearchError::Collation(CollationError::InvalidOptions(_)))
    }
}

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::error::CollationError;
use crate::options::{CollationOptions, ResolvedOptions};

/// Locale used when the caller names none.
pub const ROOT_LOCALE: &str = "und";

/// Locale-sensitive comparison oracle.
///
/// Implementations are immutable once built: two collators built from the
/// same locale and options compare identically, and `compare` never mutates
/// shared state, so one instance can serve many threads.
pub trait Collator: Send + Sync + fmt::Debug {
    fn compare(&self, left: &str, right: &str) -> Ordering;

    fn resolved_options(&self) -> ResolvedOptions;

    fn equals(&self, left: &str, right: &str) -> bool {
        self.compare(left, right) == Ordering::Equal
    }
}

/// Builds collators from a locale tag and options.
pub trait CollatorProvider: Send + Sync {
    /// `None` selects [`ROOT_LOCALE`].
    fn collator(
        &self,
        locale: Option<&str>,
        options: &CollationOptions,
    ) -> Result<Arc<dyn Collator>, CollationError>;
}

//! Method-call syntax for string slices.
//!
//! Nothing is installed globally; import [`LocaleIndexOf`] where you want
//! `haystack.locale_index_of(..)`.

use collation::CollationOptions;

use crate::acquire::CollatorSource;
use crate::error::SearchError;
use crate::matcher::Match;

/// Locale-aware counterpart of [`str::find`].
///
/// Builds without the `icu` feature have no collation engine to acquire
/// from, so these methods fall back to exact matching and ignore the
/// collator source and options.
pub trait LocaleIndexOf {
    /// Byte index of the leftmost locale-equivalent occurrence of `needle`.
    fn locale_index_of(
        &self,
        needle: &str,
        source: CollatorSource<'_>,
        options: &CollationOptions,
    ) -> Result<Option<usize>, SearchError> {
        Ok(self.locale_find(needle, source, options)?.map(|m| m.index))
    }

    /// Leftmost locale-equivalent occurrence of `needle` with its length.
    fn locale_find(
        &self,
        needle: &str,
        source: CollatorSource<'_>,
        options: &CollationOptions,
    ) -> Result<Option<Match>, SearchError>;
}

impl LocaleIndexOf for str {
    #[cfg(feature = "icu")]
    fn locale_find(
        &self,
        needle: &str,
        source: CollatorSource<'_>,
        options: &CollationOptions,
    ) -> Result<Option<Match>, SearchError> {
        crate::find(self, needle, source, options)
    }

    #[cfg(not(feature = "icu"))]
    fn locale_find(
        &self,
        needle: &str,
        _source: CollatorSource<'_>,
        _options: &CollationOptions,
    ) -> Result<Option<Match>, SearchError> {
        Ok(self.find(needle).map(|index| Match {
            index,
            len: needle.len(),
        }))
    }
}

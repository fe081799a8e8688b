//! Locale-aware substring search.
//!
//! Finds the leftmost span of a haystack that a locale's collation rules
//! deem equal to a needle: case-insensitive, accent-insensitive, or across
//! composed and decomposed spellings, and optionally blind to punctuation
//! and whitespace.
//!
//! ## How it works
//!
//! - A [`Collator`] (ICU4X by default) decides equivalence; this crate never
//!   folds case or normalizes text itself.
//! - A [`Segmenter`] splits both strings into grapheme clusters so a window
//!   never separates a letter from its combining marks.
//! - A [`PunctuationClassifier`] weighs clusters so windows under
//!   ignore-punctuation hold as much meaningful text as the needle, plus any
//!   amount of filler.
//! - [`LocaleSearcher`] slides that window across the haystack and returns
//!   the first span the collator accepts.
//!
//! ## Pure function guarantee
//!
//! No I/O and no global state. The [`Match`] carries everything about the
//! result, so concurrent searches never observe each other.
//!
//! ## Example
//!
//! ```
//! # #[cfg(feature = "icu")] {
//! use localefind::{find, CollationOptions, Sensitivity};
//!
//! let base = CollationOptions::new(Sensitivity::Base);
//! let found = find("here is \u{00E4} for you", "a", "en".into(), &base).unwrap();
//! assert_eq!(found.map(|m| m.index), Some(8));
//!
//! let loose = CollationOptions::default().with_ignore_punctuation(true);
//! let haystack = "a m\u{00E4}tch, (possibly!) true";
//! let found = find(haystack, "m\u{00E4}tch possibly!!", "en".into(), &loose).unwrap().unwrap();
//! assert_eq!(found.index, 1);
//! assert_eq!(found.utf16_span(haystack), Some((1, 17)));
//! # }
//! ```

mod acquire;
mod classify;
mod config;
mod error;
mod ext;
mod matcher;

pub use collation::{
    CollationError, CollationOptions, Collator, CollatorProvider, ResolvedOptions, Sensitivity,
    Usage, ROOT_LOCALE,
};
#[cfg(feature = "icu")]
pub use collation::{IcuCollator, IcuProvider};
pub use segment::{
    default_segmenter, CodePoints, GraphemeCluster, SegmentationMode, Segmenter, Segments,
};
#[cfg(feature = "graphemes")]
pub use segment::ExtendedGraphemes;

pub use crate::acquire::{acquire, CollatorSource};
pub use crate::classify::PunctuationClassifier;
pub use crate::config::{ConfigLoadError, SearchConfig};
pub use crate::error::SearchError;
pub use crate::ext::LocaleIndexOf;
pub use crate::matcher::{LocaleSearcher, Match};

/// Leftmost locale-equivalent occurrence of `needle` in `haystack`, using
/// the given provider and segmenter.
///
/// `source` names either a locale to build a collator for (with usage forced
/// to search) or a ready collator, which is used as-is and makes `options`
/// irrelevant.
pub fn find_with(
    haystack: &str,
    needle: &str,
    source: CollatorSource<'_>,
    options: &CollationOptions,
    provider: &dyn CollatorProvider,
    segmenter: &dyn Segmenter,
) -> Result<Option<Match>, SearchError> {
    let collator = acquire(source, options, provider)?;
    let searcher = LocaleSearcher::new(collator, provider, segmenter)?;
    Ok(searcher.find(haystack, needle))
}

/// [`find_with`] using the ICU4X engine and the best available segmenter.
#[cfg(feature = "icu")]
pub fn find(
    haystack: &str,
    needle: &str,
    source: CollatorSource<'_>,
    options: &CollationOptions,
) -> Result<Option<Match>, SearchError> {
    find_with(
        haystack,
        needle,
        source,
        options,
        &IcuProvider,
        default_segmenter(),
    )
}

/// Byte index of the leftmost locale-equivalent occurrence of `needle`.
#[cfg(feature = "icu")]
pub fn locale_index_of(
    haystack: &str,
    needle: &str,
    source: CollatorSource<'_>,
    options: &CollationOptions,
) -> Result<Option<usize>, SearchError> {
    Ok(find(haystack, needle, source, options)?.map(|m| m.index))
}

use std::fmt;
use std::sync::Arc;

use collation::{CollationError, CollationOptions, Collator, CollatorProvider};
use tracing::debug;

/// Where the primary collator comes from: a ready instance, or a locale to
/// build one for.
#[derive(Clone, Default)]
pub enum CollatorSource<'a> {
    /// Build for the root locale.
    #[default]
    DefaultLocale,
    /// Build for this BCP 47 tag.
    Locale(&'a str),
    /// Build for the first tag the provider accepts, in order. An empty list
    /// means the root locale.
    Locales(&'a [&'a str]),
    /// Use this collator exactly as it was configured.
    Collator(Arc<dyn Collator>),
}

impl fmt::Debug for CollatorSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollatorSource::DefaultLocale => f.write_str("DefaultLocale"),
            CollatorSource::Locale(tag) => f.debug_tuple("Locale").field(tag).finish(),
            CollatorSource::Locales(tags) => f.debug_tuple("Locales").field(tags).finish(),
            CollatorSource::Collator(collator) => {
                f.debug_tuple("Collator").field(collator).finish()
            }
        }
    }
}

impl<'a> From<&'a str> for CollatorSource<'a> {
    fn from(tag: &'a str) -> Self {
        CollatorSource::Locale(tag)
    }
}

impl<'a> From<&'a [&'a str]> for CollatorSource<'a> {
    fn from(tags: &'a [&'a str]) -> Self {
        CollatorSource::Locales(tags)
    }
}

impl From<Arc<dyn Collator>> for CollatorSource<'_> {
    fn from(collator: Arc<dyn Collator>) -> Self {
        CollatorSource::Collator(collator)
    }
}

/// Resolves `source` into a collator.
///
/// A supplied collator is returned untouched, whatever usage or sensitivity
/// it was built with. Otherwise one is built from `options` with usage forced
/// to search; `options` itself is not modified.
///
/// For a list of locales, the first error is returned when the provider
/// rejects every tag.
pub fn acquire(
    source: CollatorSource<'_>,
    options: &CollationOptions,
    provider: &dyn CollatorProvider,
) -> Result<Arc<dyn Collator>, CollationError> {
    let search = options.for_search();
    let locale = match source {
        CollatorSource::Collator(collator) => return Ok(collator),
        CollatorSource::Locales(tags) => return first_accepted(tags, &search, provider),
        CollatorSource::Locale(tag) => Some(tag),
        CollatorSource::DefaultLocale => None,
    };

    let collator = provider.collator(locale, &search)?;
    debug!(locale = ?locale, "collator_acquired");
    Ok(collator)
}

fn first_accepted(
    tags: &[&str],
    search: &CollationOptions,
    provider: &dyn CollatorProvider,
) -> Result<Arc<dyn Collator>, CollationError> {
    let mut first_err = None;
    for &tag in tags {
        match provider.collator(Some(tag), search) {
            Ok(collator) => {
                debug!(locale = %tag, "collator_acquired");
                return Ok(collator);
            }
            Err(err) => {
                debug!(locale = %tag, error = %err, "locale_rejected");
                first_err.get_or_insert(err);
            }
        }
    }
    match first_err {
        Some(err) => Err(err),
        None => provider.collator(None, search),
    }
}

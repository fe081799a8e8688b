//! ICU4X-backed collation engine.
//!
//! Option mapping onto UCA levels:
//!
//! | Sensitivity | Strength  | Case level |
//! |-------------|-----------|------------|
//! | `base`      | primary   | off        |
//! | `accent`    | secondary | off        |
//! | `case`      | primary   | on         |
//! | `variant`   | tertiary  | off        |
//!
//! `ignore_punctuation` selects shifted alternate handling, which pushes
//! punctuation and whitespace down to the quaternary level where none of the
//! strengths above look. `Usage::Search` requests the `-u-co-search`
//! tailoring. The compiled data has none, so locales whose CLDR search
//! tailoring adds primary distinctions get them restored by
//! [`SearchTailoring`](crate::tailoring::SearchTailoring).

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use icu_collator::{AlternateHandling, CaseLevel, CollatorOptions, Strength};
use icu_locid::extensions::unicode::{key, value};
use icu_locid::Locale;
use icu_provider::DataLocale;
use tracing::debug;

use crate::collator::{Collator, CollatorProvider, ROOT_LOCALE};
use crate::error::CollationError;
use crate::options::{CollationOptions, ResolvedOptions, Sensitivity, Usage};
use crate::tailoring::SearchTailoring;

/// Collator backed by `icu_collator` with compiled CLDR data.
pub struct IcuCollator {
    inner: icu_collator::Collator,
    search_tailoring: Option<SearchTailoring>,
    resolved: ResolvedOptions,
}

impl IcuCollator {
    /// Builds a collator for `locale` (root when `None`).
    pub fn try_new(locale: Option<&str>, options: &CollationOptions) -> Result<Self, CollationError> {
        let tag = locale.unwrap_or(ROOT_LOCALE);
        let mut parsed: Locale = tag.parse().map_err(|err| CollationError::InvalidLocale {
            tag: tag.to_string(),
            reason: format!("{err}"),
        })?;
        // Resolved locale is reported without the tailoring keyword we add below.
        let resolved_locale = parsed.to_string();

        if options.usage == Usage::Search {
            parsed
                .extensions
                .unicode
                .keywords
                .set(key!("co"), value!("search"));
        }

        let inner = icu_collator::Collator::try_new(&DataLocale::from(&parsed), engine_options(options))
            .map_err(|err| CollationError::InvalidLocale {
                tag: tag.to_string(),
                reason: format!("{err}"),
            })?;

        // Only strengths that ignore accents can lose the tailored letters.
        let search_tailoring = if options.usage == Usage::Search
            && options.sensitivity.ignores_accents()
        {
            SearchTailoring::detect(parsed.id.language.as_str(), |l, r| inner.compare(l, r))
        } else {
            None
        };

        let resolved = ResolvedOptions::new(resolved_locale, options);
        debug!(
            locale = %resolved.locale,
            sensitivity = %resolved.sensitivity,
            ignore_punctuation = resolved.ignore_punctuation,
            usage = %resolved.usage,
            search_tailoring_restored = search_tailoring.is_some(),
            "collator_built"
        );

        Ok(Self {
            inner,
            search_tailoring,
            resolved,
        })
    }
}

impl Collator for IcuCollator {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        match (self.inner.compare(left, right), &self.search_tailoring) {
            (Ordering::Equal, Some(tailoring)) => tailoring.break_tie(left, right),
            (ordering, _) => ordering,
        }
    }

    fn resolved_options(&self) -> ResolvedOptions {
        self.resolved.clone()
    }
}

impl fmt::Debug for IcuCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IcuCollator")
            .field("resolved", &self.resolved)
            .field("search_tailoring", &self.search_tailoring)
            .finish_non_exhaustive()
    }
}

/// [`CollatorProvider`] building [`IcuCollator`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct IcuProvider;

impl CollatorProvider for IcuProvider {
    fn collator(
        &self,
        locale: Option<&str>,
        options: &CollationOptions,
    ) -> Result<Arc<dyn Collator>, CollationError> {
        Ok(Arc::new(IcuCollator::try_new(locale, options)?))
    }
}

fn engine_options(options: &CollationOptions) -> CollatorOptions {
    let mut engine = CollatorOptions::new();
    let (strength, case_level) = match options.sensitivity {
        Sensitivity::Base => (Strength::Primary, CaseLevel::Off),
        Sensitivity::Accent => (Strength::Secondary, CaseLevel::Off),
        Sensitivity::Case => (Strength::Primary, CaseLevel::On),
        Sensitivity::Variant => (Strength::Tertiary, CaseLevel::Off),
    };
    engine.strength = Some(strength);
    engine.case_level = Some(case_level);
    engine.alternate_handling = Some(if options.ignore_punctuation {
        AlternateHandling::Shifted
    } else {
        AlternateHandling::NonIgnorable
    });
    engine
}

//! Deterministic collator for tests (feature `test-util`).
//!
//! Compares NFD-decomposed keys: accents are dropped when the sensitivity
//! ignores them, letters are lowercased when it ignores case, punctuation and
//! whitespace vanish under ignore-punctuation. German search collation keeps
//! the diaeresis at every strength, so `ä` never folds to `a` there.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::collator::{Collator, CollatorProvider, ROOT_LOCALE};
use crate::error::CollationError;
use crate::options::{CollationOptions, ResolvedOptions, Usage};
use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;

const DIAERESIS: char = '\u{0308}';

/// Compares NFD keys folded according to the resolved options.
#[derive(Debug, Clone)]
pub struct FoldCollator {
    resolved: ResolvedOptions,
}

impl FoldCollator {
    pub fn new(locale: &str, options: CollationOptions) -> Self {
        Self {
            resolved: ResolvedOptions::new(locale, &options),
        }
    }

    fn key(&self, text: &str) -> String {
        let sensitivity = self.resolved.sensitivity;
        let keep_diaeresis = self.resolved.locale == "de" && self.resolved.usage == Usage::Search;
        let mut key = String::with_capacity(text.len());
        for ch in text.nfd() {
            if self.resolved.ignore_punctuation && (ch.is_whitespace() || ch.is_punctuation()) {
                continue;
            }
            if ch.is_mark_nonspacing()
                && sensitivity.ignores_accents()
                && !(keep_diaeresis && ch == DIAERESIS)
            {
                continue;
            }
            if sensitivity.ignores_case() {
                key.extend(ch.to_lowercase());
            } else {
                key.push(ch);
            }
        }
        key
    }
}

impl Collator for FoldCollator {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        self.key(left).cmp(&self.key(right))
    }

    fn resolved_options(&self) -> ResolvedOptions {
        self.resolved.clone()
    }
}

/// Builds [`FoldCollator`]s; rejects blank or whitespace-bearing tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct FoldProvider;

impl CollatorProvider for FoldProvider {
    fn collator(
        &self,
        locale: Option<&str>,
        options: &CollationOptions,
    ) -> Result<Arc<dyn Collator>, CollationError> {
        let tag = locale.unwrap_or(ROOT_LOCALE);
        if tag.trim().is_empty() || tag.contains(char::is_whitespace) {
            return Err(CollationError::InvalidLocale {
                tag: tag.to_string(),
                reason: "blank or whitespace-bearing tag".into(),
            });
        }
        Ok(Arc::new(FoldCollator::new(tag, *options)))
    }
}

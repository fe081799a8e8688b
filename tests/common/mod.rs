//! Shared helpers for integration tests.
//!
//! The fold engine lives in `collation::testing`; see its docs for the
//! folding rules, including the German search tailoring it models.

#![allow(dead_code)]

pub use collation::testing::{FoldCollator, FoldProvider};
use localefind::CollationOptions;

/// Index-only search through the fold engine, the shape most assertions want.
pub fn fold_index_of(
    haystack: &str,
    needle: &str,
    locale: &str,
    options: CollationOptions,
) -> Option<usize> {
    localefind::find_with(
        haystack,
        needle,
        locale.into(),
        &options,
        &FoldProvider,
        localefind::default_segmenter(),
    )
    .expect("fold engine accepts the locale")
    .map(|m| m.index)
}

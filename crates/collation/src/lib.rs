//! Locale-sensitive collation for substring search.
//!
//! Search code never compares text itself; it asks a [`Collator`] whether
//! two spans are equivalent under some locale's rules. This crate defines
//! that capability and ships an ICU4X-backed engine for it.
//!
//! ## What lives here
//!
//! - [`Collator`] / [`CollatorProvider`]: the comparison oracle and its factory
//! - [`CollationOptions`]: sensitivity, ignore-punctuation, usage
//! - [`IcuCollator`] / [`IcuProvider`]: compiled-data engine (feature `icu`)
//! - [`CollationError`]: what construction can reject
//! - `testing::FoldCollator`: deterministic engine for tests (feature `test-util`)
//!
//! ## Example
//!
//! ```
//! # #[cfg(feature = "icu")] {
//! use collation::{CollationOptions, Collator, IcuCollator, Sensitivity};
//!
//! let base = IcuCollator::try_new(Some("en"), &CollationOptions::new(Sensitivity::Base)).unwrap();
//! assert!(base.equals("a", "\u{00E4}"));
//!
//! let variant = IcuCollator::try_new(Some("en"), &CollationOptions::default()).unwrap();
//! assert!(!variant.equals("a", "\u{00E4}"));
//! # }
//! ```

mod collator;
mod error;
#[cfg(feature = "icu")]
mod icu;
mod options;
#[cfg(feature = "icu")]
mod tailoring;
#[cfg(feature = "test-util")]
pub mod testing;

pub use crate::collator::{Collator, CollatorProvider, ROOT_LOCALE};
pub use crate::error::CollationError;
#[cfg(feature = "icu")]
pub use crate::icu::{IcuCollator, IcuProvider};
pub use crate::options::{CollationOptions, ResolvedOptions, Sensitivity, Usage};

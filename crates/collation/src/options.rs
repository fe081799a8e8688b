//! Collation option types.
//!
//! These mirror the knobs a locale-aware search needs from a collation
//! engine: how strict the comparison is ([`Sensitivity`]), whether
//! punctuation and whitespace take part in it, and which tailoring profile
//! ([`Usage`]) the engine should load.
//!
//! # Serialization
//!
//! Field names serialize in camelCase so option blobs written for other
//! collation APIs deserialize unchanged:
//!
//! ```json
//! { "sensitivity": "base", "ignorePunctuation": true, "usage": "search" }
//! ```
//!
//! Every field has a default, so `{}` is a valid options object.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CollationError;

/// Which differences between letters count.
///
/// Strictness grows from `Base` to `Variant`; `Accent` and `Case` each relax
/// one axis independently.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sensitivity {
    /// Only base letters differ: `a = á = A`.
    Base,
    /// Base letters and accents differ: `a ≠ á`, `a = A`.
    Accent,
    /// Base letters and case differ: `a = á`, `a ≠ A`.
    Case,
    /// Everything differs: `a ≠ á ≠ A`.
    #[default]
    Variant,
}

impl Sensitivity {
    pub fn as_str(self) -> &'static str {
        match self {
            Sensitivity::Base => "base",
            Sensitivity::Accent => "accent",
            Sensitivity::Case => "case",
            Sensitivity::Variant => "variant",
        }
    }

    /// True when `a` and `A` compare equal.
    pub fn ignores_case(self) -> bool {
        matches!(self, Sensitivity::Base | Sensitivity::Accent)
    }

    /// True when `a` and `á` compare equal.
    pub fn ignores_accents(self) -> bool {
        matches!(self, Sensitivity::Base | Sensitivity::Case)
    }
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sensitivity {
    type Err = CollationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base" => Ok(Sensitivity::Base),
            "accent" => Ok(Sensitivity::Accent),
            "case" => Ok(Sensitivity::Case),
            "variant" => Ok(Sensitivity::Variant),
            other => Err(CollationError::InvalidOptions(format!(
                "unknown sensitivity `{other}`"
            ))),
        }
    }
}

/// Tailoring profile requested from the engine.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Usage {
    /// Tailoring meant for ordering lists.
    #[default]
    Sort,
    /// Tailoring meant for matching, often more lenient than `Sort`.
    Search,
}

impl Usage {
    pub fn as_str(self) -> &'static str {
        match self {
            Usage::Sort => "sort",
            Usage::Search => "search",
        }
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Usage {
    type Err = CollationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sort" => Ok(Usage::Sort),
            "search" => Ok(Usage::Search),
            other => Err(CollationError::InvalidOptions(format!(
                "unknown usage `{other}`"
            ))),
        }
    }
}

/// Options a collator is built from. Immutable once the collator exists.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase", default)]
pub struct CollationOptions {
    pub sensitivity: Sensitivity,
    /// Punctuation and whitespace neither block nor affect a comparison.
    pub ignore_punctuation: bool,
    pub usage: Usage,
}

impl CollationOptions {
    pub fn new(sensitivity: Sensitivity) -> Self {
        Self {
            sensitivity,
            ..Self::default()
        }
    }

    pub fn with_ignore_punctuation(mut self, ignore_punctuation: bool) -> Self {
        self.ignore_punctuation = ignore_punctuation;
        self
    }

    pub fn with_usage(mut self, usage: Usage) -> Self {
        self.usage = usage;
        self
    }

    /// Copy of these options with `usage` forced to [`Usage::Search`].
    pub fn for_search(&self) -> Self {
        self.with_usage(Usage::Search)
    }
}

/// What a collator actually runs with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOptions {
    /// Canonical form of the locale the collator was built for.
    pub locale: String,
    pub sensitivity: Sensitivity,
    pub ignore_punctuation: bool,
    pub usage: Usage,
}

impl ResolvedOptions {
    pub fn new(locale: impl Into<String>, options: &CollationOptions) -> Self {
        Self {
            locale: locale.into(),
            sensitivity: options.sensitivity,
            ignore_punctuation: options.ignore_punctuation,
            usage: options.usage,
        }
    }

    pub fn options(&self) -> CollationOptions {
        CollationOptions {
            sensitivity: self.sensitivity,
            ignore_punctuation: self.ignore_punctuation,
            usage: self.usage,
        }
    }
}

//! YAML configuration for searchers.
//!
//! Lets a deployment pin the locale, collation options and segmentation in
//! a file instead of code.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! locale: de
//! options:
//!   sensitivity: base
//!   ignorePunctuation: true
//! segmentation: graphemes
//! ```
//!
//! `options` uses the same camelCase field names as serialized
//! [`CollationOptions`]. Every field except `version` may be omitted.

use std::fs;
use std::path::Path;

use collation::{CollationOptions, CollatorProvider};
use segment::SegmentationMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::acquire::{acquire, CollatorSource};
use crate::error::SearchError;
use crate::matcher::LocaleSearcher;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Searcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Configuration format version
    pub version: String,

    /// BCP 47 locale tag; the root locale when absent.
    #[serde(default)]
    pub locale: Option<String>,

    #[serde(default)]
    pub options: CollationOptions,

    #[serde(default)]
    pub segmentation: SegmentationMode,
}

impl SearchConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: SearchConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => {}
            v => return Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }

        if let Some(locale) = &self.locale {
            if locale.trim().is_empty() {
                return Err(ConfigLoadError::Validation(
                    "locale must not be blank; omit it for the root locale".to_string(),
                ));
            }
        }

        Ok(())
    }

    pub fn source(&self) -> CollatorSource<'_> {
        match self.locale.as_deref() {
            Some(tag) => CollatorSource::Locale(tag),
            None => CollatorSource::DefaultLocale,
        }
    }

    /// Builds a searcher from this configuration using `provider`.
    pub fn searcher_with(
        &self,
        provider: &dyn CollatorProvider,
    ) -> Result<LocaleSearcher<'static>, SearchError> {
        let collator = acquire(self.source(), &self.options, provider)?;
        LocaleSearcher::new(collator, provider, self.segmentation.segmenter())
    }

    /// Builds a searcher from this configuration with the ICU4X engine.
    #[cfg(feature = "icu")]
    pub fn searcher(&self) -> Result<LocaleSearcher<'static>, SearchError> {
        self.searcher_with(&collation::IcuProvider)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            locale: None,
            options: CollationOptions::default(),
            segmentation: SegmentationMode::default(),
        }
    }
}

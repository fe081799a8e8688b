//! Punctuation classification for window sizing.
//!
//! Under ignore-punctuation a needle and a matching haystack span can carry
//! different amounts of punctuation and whitespace. The matcher therefore
//! sizes windows by *weight*, the number of clusters that take part in the
//! comparison, instead of by cluster count.
//!
//! The collation engine is the only authority on what it skips, so the
//! classifier asks it: a cluster is ignorable when appending it to an anchor
//! letter leaves the anchor equal to itself under a punctuation-blind
//! collator for the same locale.
//!
//! Classification only sizes windows. The text handed to the primary
//! collator is never stripped.

use std::sync::Arc;

use collation::{CollationError, CollationOptions, Collator, CollatorProvider};
use segment::GraphemeCluster;

const ANCHOR: &str = "a";

/// Decides which clusters count toward a window's weight.
#[derive(Debug, Clone, Default)]
pub struct PunctuationClassifier {
    oracle: Option<Arc<dyn Collator>>,
}

impl PunctuationClassifier {
    /// Classifier for searches run with `collator`.
    ///
    /// When `collator` does not ignore punctuation every cluster counts and
    /// no auxiliary collator is built. Otherwise `provider` builds one for the
    /// collator's resolved locale with only ignore-punctuation set.
    pub fn for_collator(
        collator: &dyn Collator,
        provider: &dyn CollatorProvider,
    ) -> Result<Self, CollationError> {
        let resolved = collator.resolved_options();
        if !resolved.ignore_punctuation {
            return Ok(Self::counting_everything());
        }

        let options = CollationOptions::default().with_ignore_punctuation(true);
        let oracle = provider.collator(Some(&resolved.locale), &options)?;
        Ok(Self {
            oracle: Some(oracle),
        })
    }

    /// Classifier under which every cluster counts.
    pub fn counting_everything() -> Self {
        Self { oracle: None }
    }

    /// True when `cluster` contributes to a window's weight.
    pub fn is_considered(&self, cluster: &str) -> bool {
        let Some(oracle) = self.oracle.as_deref() else {
            return true;
        };
        let mut probe = String::with_capacity(ANCHOR.len() + cluster.len());
        probe.push_str(ANCHOR);
        probe.push_str(cluster);
        !oracle.equals(ANCHOR, &probe)
    }

    /// Number of considered clusters in `clusters`.
    pub fn weight<'t>(&self, clusters: impl IntoIterator<Item = GraphemeCluster<'t>>) -> usize {
        clusters
            .into_iter()
            .filter(|cluster| self.is_considered(cluster.text))
            .count()
    }
}

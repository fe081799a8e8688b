//! Grapheme window matcher.
//!
//! Scans the haystack one cluster at a time, keeping a window whose weight
//! (see [`PunctuationClassifier`]) equals the needle's. For each start
//! cluster the window is the shortest span reaching that weight, so it may
//! hold any amount of ignorable filler. Each window is compared once with the
//! primary collator; the first equal one is the leftmost match.
//!
//! Every haystack cluster is pushed once and popped at most once, so the
//! window bookkeeping is linear in the haystack and the total cost is one
//! collation comparison per start cluster.

use std::collections::VecDeque;
use std::ops::Range;
use std::sync::Arc;
use std::time::Instant;

use collation::{Collator, CollatorProvider};
use segment::{GraphemeCluster, Segmenter};
use serde::{Deserialize, Serialize};
use tracing::{debug, Level};

use crate::classify::PunctuationClassifier;
use crate::error::SearchError;

/// A located match. Offsets are UTF-8 byte offsets into the haystack.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Match {
    /// Byte offset where the matched span starts.
    pub index: usize,
    /// Byte length of the matched span, ignorable filler included.
    pub len: usize,
}

impl Match {
    pub fn end(&self) -> usize {
        self.index + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.index..self.end()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The matched text, or `None` if `haystack` is not the searched string.
    pub fn as_str<'h>(&self, haystack: &'h str) -> Option<&'h str> {
        haystack.get(self.range())
    }

    /// `(index, len)` in UTF-16 code units, for hosts that address strings
    /// that way. `None` if `haystack` is not the searched string.
    pub fn utf16_span(&self, haystack: &str) -> Option<(usize, usize)> {
        let before = haystack.get(..self.index)?;
        let matched = self.as_str(haystack)?;
        Some((
            before.encode_utf16().count(),
            matched.encode_utf16().count(),
        ))
    }
}

/// Haystack clusters currently under consideration.
#[derive(Debug, Default)]
struct Window<'h> {
    clusters: VecDeque<(GraphemeCluster<'h>, bool)>,
    weight: usize,
}

impl<'h> Window<'h> {
    fn push_back(&mut self, cluster: GraphemeCluster<'h>, considered: bool) {
        self.weight += usize::from(considered);
        self.clusters.push_back((cluster, considered));
    }

    fn pop_front(&mut self) {
        if let Some((_, considered)) = self.clusters.pop_front() {
            self.weight -= usize::from(considered);
        }
    }

    fn weight(&self) -> usize {
        self.weight
    }

    /// Byte span from the first cluster's start to the last cluster's end.
    fn span(&self) -> Option<Range<usize>> {
        let (first, _) = self.clusters.front()?;
        let (last, _) = self.clusters.back()?;
        Some(first.start..last.end())
    }
}

/// Reusable search over one collator, classifier and segmenter.
///
/// Holds no per-search state, so one searcher can serve any number of
/// threads at once.
#[derive(Clone)]
pub struct LocaleSearcher<'s> {
    collator: Arc<dyn Collator>,
    classifier: PunctuationClassifier,
    segmenter: &'s dyn Segmenter,
}

impl<'s> LocaleSearcher<'s> {
    /// Builds a searcher around `collator`, using `provider` for the
    /// auxiliary punctuation collator when `collator` ignores punctuation.
    pub fn new(
        collator: Arc<dyn Collator>,
        provider: &dyn CollatorProvider,
        segmenter: &'s dyn Segmenter,
    ) -> Result<Self, SearchError> {
        let classifier = PunctuationClassifier::for_collator(collator.as_ref(), provider)?;
        Ok(Self::with_classifier(collator, classifier, segmenter))
    }

    pub fn with_classifier(
        collator: Arc<dyn Collator>,
        classifier: PunctuationClassifier,
        segmenter: &'s dyn Segmenter,
    ) -> Self {
        Self {
            collator,
            classifier,
            segmenter,
        }
    }

    pub fn collator(&self) -> &Arc<dyn Collator> {
        &self.collator
    }

    /// Leftmost span of `haystack` the collator deems equal to `needle`.
    ///
    /// A needle with no considered clusters (empty, or only punctuation under
    /// ignore-punctuation) matches empty at index 0 of a non-empty haystack.
    pub fn find(&self, haystack: &str, needle: &str) -> Option<Match> {
        let start = Instant::now();
        let span = tracing::span!(
            Level::DEBUG,
            "localefind.find",
            needle_len = needle.len(),
            haystack_len = haystack.len()
        );
        let _guard = span.enter();

        let target_weight = self.classifier.weight(self.segmenter.segment(needle));
        if target_weight == 0 {
            let found = (!haystack.is_empty()).then_some(Match { index: 0, len: 0 });
            debug!(target_weight, found = found.is_some(), "locale_find_empty_needle");
            return found;
        }

        let mut comparisons = 0usize;
        let found = self.scan(haystack, needle, target_weight, &mut comparisons);

        let elapsed_micros = start.elapsed().as_micros();
        match found {
            Some(m) => debug!(
                target_weight,
                comparisons,
                index = m.index,
                len = m.len,
                elapsed_micros,
                "locale_find_match"
            ),
            None => debug!(target_weight, comparisons, elapsed_micros, "locale_find_miss"),
        }
        found
    }

    fn scan(
        &self,
        haystack: &str,
        needle: &str,
        target_weight: usize,
        comparisons: &mut usize,
    ) -> Option<Match> {
        let mut clusters = self.segmenter.segment(haystack);
        let mut window = Window::default();

        loop {
            // Slide the start forward one cluster; a no-op on the first pass.
            window.pop_front();

            while window.weight() < target_weight {
                let cluster = clusters.next()?;
                let considered = self.classifier.is_considered(cluster.text);
                window.push_back(cluster, considered);
            }

            let span = window.span()?;
            let candidate = haystack.get(span.clone())?;
            *comparisons += 1;
            if self.collator.equals(candidate, needle) {
                return Some(Match {
                    index: span.start,
                    len: span.len(),
                });
            }
        }
    }
}

impl std::fmt::Debug for LocaleSearcher<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleSearcher")
            .field("collator", &self.collator)
            .field("classifier", &self.classifier)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collation::testing::{FoldCollator, FoldProvider};
    use collation::{CollationOptions, Sensitivity};
    use segment::{default_segmenter, CodePoints};

    fn searcher(locale: &str, options: CollationOptions) -> LocaleSearcher<'static> {
        let collator: Arc<dyn Collator> = Arc::new(FoldCollator::new(locale, options.for_search()));
        LocaleSearcher::new(collator, &FoldProvider, default_segmenter()).expect("searcher")
    }

    fn index_of(haystack: &str, needle: &str, locale: &str, options: CollationOptions) -> Option<usize> {
        searcher(locale, options).find(haystack, needle).map(|m| m.index)
    }

    #[test]
    fn basic_positions() {
        let opts = CollationOptions::default();
        assert_eq!(index_of("abc\u{00E4}", "abc\u{00E4}", "en", opts), Some(0));
        assert_eq!(index_of("\u{00E4}bc", "\u{00E4}b", "en", opts), Some(0));
        assert_eq!(index_of("ab\u{00E4}cd", "b\u{00E4}c", "en", opts), Some(1));
        assert_eq!(index_of("abc\u{00E4}", "bc\u{00E4}", "en", opts), Some(1));
        assert_eq!(index_of("abc\u{00E4}", "\u{00E4}", "en", opts), Some(3));
        assert_eq!(index_of("\u{00E4}bc", "bd", "en", opts), None);
    }

    #[test]
    fn whole_string_matches_itself() {
        for text in ["x", "abc\u{00E4}", "a\u{0308}\u{1F600} z"] {
            let found = searcher("en", CollationOptions::default())
                .find(text, text)
                .expect("self match");
            assert_eq!(found, Match { index: 0, len: text.len() });
        }
    }

    #[test]
    fn leftmost_of_several() {
        let s = searcher("en", CollationOptions::new(Sensitivity::Base));
        assert_eq!(s.find("xAbyab", "ab").map(|m| m.index), Some(1));
        assert_eq!(s.find("xyab", "AB").map(|m| m.index), Some(2));
    }

    #[test]
    fn german_search_keeps_umlauts_apart() {
        let base = CollationOptions::new(Sensitivity::Base);
        assert_eq!(index_of("here is \u{00E4} for you", "a", "en", base), Some(8));
        assert_eq!(index_of("here is \u{00E4} for you", "a", "de", base), None);
        assert_eq!(index_of("here is A for you", "a", "de", base), Some(8));
    }

    #[test]
    fn canonical_equivalents_report_byte_offsets() {
        let s = searcher("en", CollationOptions::default());
        let haystack = "x\u{00E4}y a\u{0308}";
        let composed = s.find(haystack, "\u{00E4}").expect("composed needle");
        let decomposed = s.find(haystack, "a\u{0308}").expect("decomposed needle");
        assert_eq!(composed, decomposed);
        assert_eq!(composed, Match { index: 1, len: 2 });

        let later = s.find("yz a\u{0308}!", "\u{00E4}").expect("decomposed haystack");
        assert_eq!(later, Match { index: 3, len: 3 });
    }

    #[test]
    fn ignore_punctuation_window_spans_filler() {
        let s = searcher("en", CollationOptions::default().with_ignore_punctuation(true));
        let haystack = "a m\u{00E4}tch, (possibly!) true";
        let found = s.find(haystack, "m\u{00E4}tch possibly!!").expect("match");

        assert_eq!(found.index, 1);
        assert_eq!(found.as_str(haystack), Some(" m\u{00E4}tch, (possibly"));
        assert_eq!(found.len, 18);
        assert_eq!(found.utf16_span(haystack), Some((1, 17)));
    }

    #[test]
    fn ignore_punctuation_either_side() {
        let opts = CollationOptions::default().with_ignore_punctuation(true);
        assert_eq!(index_of("tes", "e", "en", opts), Some(1));
        assert_eq!(
            index_of("a m\u{00E4}tch, (possibly) true", "m\u{00E4}tchpossibly", "de", opts),
            Some(1)
        );
        assert_eq!(
            index_of("a m\u{00E4}tchpossibly true", "m\u{00E4}tch possibly!!", "de", opts),
            Some(1)
        );
    }

    #[test]
    fn punctuation_only_needle_matches_empty_at_start() {
        let s = searcher("en", CollationOptions::default().with_ignore_punctuation(true));
        assert_eq!(s.find("abc", "!!"), Some(Match { index: 0, len: 0 }));
        assert_eq!(s.find("abc", ""), Some(Match { index: 0, len: 0 }));
        assert_eq!(s.find("", ""), None);
        assert_eq!(s.find("", "!"), None);
    }

    #[test]
    fn needle_heavier_than_haystack_misses() {
        let s = searcher("en", CollationOptions::default().with_ignore_punctuation(true));
        assert_eq!(s.find("ab, !", "abc"), None);
        assert_eq!(s.find("", "a"), None);
    }

    #[test]
    fn code_point_fallback_misaligns_decomposed_text() {
        let collator: Arc<dyn Collator> =
            Arc::new(FoldCollator::new("en", CollationOptions::default().for_search()));
        let degraded =
            LocaleSearcher::new(collator, &FoldProvider, &CodePoints).expect("searcher");

        // Same width on both sides still works.
        assert_eq!(degraded.find("x\u{00E4}y", "\u{00E4}").map(|m| m.index), Some(1));
        // One grapheme, two code points: the window is one code point too short.
        assert_eq!(degraded.find("xa\u{0308}y", "\u{00E4}"), None);
    }

    #[test]
    fn repeated_searches_agree() {
        let s = searcher("en", CollationOptions::default().with_ignore_punctuation(true));
        let haystack = "a m\u{00E4}tch, (possibly!) true";
        let first = s.find(haystack, "possibly");
        for _ in 0..5 {
            assert_eq!(s.find(haystack, "possibly"), first);
        }
    }

    #[test]
    fn window_tracks_weight() {
        let text = "a, b";
        let mut window = Window::default();
        for cluster in CodePoints.segment(text) {
            let considered = cluster.text.chars().all(char::is_alphanumeric);
            window.push_back(cluster, considered);
        }
        assert_eq!(window.weight(), 2);
        assert_eq!(window.span(), Some(0..4));

        window.pop_front();
        assert_eq!(window.weight(), 1);
        assert_eq!(window.span(), Some(1..4));

        window.pop_front();
        window.pop_front();
        window.pop_front();
        window.pop_front();
        assert_eq!(window.weight(), 0);
        assert_eq!(window.span(), None);
    }

    #[test]
    fn utf16_span_rejects_foreign_haystack() {
        let m = Match { index: 1, len: 2 };
        assert_eq!(m.utf16_span("\u{00E4}"), None);
        assert_eq!(m.as_str("ab"), None);
    }
}

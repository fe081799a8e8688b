/// One user-perceived character and its byte offset in the segmented text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphemeCluster<'t> {
    /// The cluster text, borrowed from the segmented string.
    pub text: &'t str,
    /// Byte offset (inclusive) of the cluster in the segmented string.
    pub start: usize,
}

impl<'t> GraphemeCluster<'t> {
    /// Byte offset (exclusive) of the cluster in the segmented string.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Length of the cluster in UTF-8 bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Lazy stream of clusters produced by a [`Segmenter`].
pub type Segments<'t> = Box<dyn Iterator<Item = GraphemeCluster<'t>> + 't>;

/// Partitions text into clusters.
///
/// Implementations must be pure: the same input always yields the same
/// ordered, gapless sequence of clusters covering the whole input.
pub trait Segmenter: Send + Sync {
    fn segment<'t>(&self, text: &'t str) -> Segments<'t>;
}

/// UAX #29 extended grapheme clusters.
///
/// The default UAX #29 rules are not tailored per locale, so one instance
/// serves every locale.
#[cfg(feature = "graphemes")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtendedGraphemes;

#[cfg(feature = "graphemes")]
impl Segmenter for ExtendedGraphemes {
    fn segment<'t>(&self, text: &'t str) -> Segments<'t> {
        use unicode_segmentation::UnicodeSegmentation;

        Box::new(
            text.grapheme_indices(true)
                .map(|(start, text)| GraphemeCluster { text, start }),
        )
    }
}

/// One cluster per Unicode scalar value.
///
/// Degraded fallback for builds without grapheme segmentation. Combining
/// marks become clusters of their own, so `"a\u{0308}"` is two clusters while
/// the precomposed `"\u{00E4}"` is one.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodePoints;

impl Segmenter for CodePoints {
    fn segment<'t>(&self, text: &'t str) -> Segments<'t> {
        Box::new(text.char_indices().map(move |(start, ch)| GraphemeCluster {
            text: &text[start..start + ch.len_utf8()],
            start,
        }))
    }
}

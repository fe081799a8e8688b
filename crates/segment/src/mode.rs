use serde::{Deserialize, Serialize};

use crate::cluster::{CodePoints, Segmenter};

/// Which segmentation a search should use.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SegmentationMode {
    /// Extended grapheme clusters. Degrades to code points when the
    /// `graphemes` feature is disabled.
    #[default]
    Graphemes,
    /// One cluster per code point.
    CodePoints,
}

impl SegmentationMode {
    pub fn segmenter(self) -> &'static dyn Segmenter {
        match self {
            SegmentationMode::Graphemes => default_segmenter(),
            SegmentationMode::CodePoints => &CodePoints,
        }
    }
}

/// The best segmenter this build offers.
pub fn default_segmenter() -> &'static dyn Segmenter {
    #[cfg(feature = "graphemes")]
    {
        &crate::cluster::ExtendedGraphemes
    }
    #[cfg(not(feature = "graphemes"))]
    {
        &CodePoints
    }
}

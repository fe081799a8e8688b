//! Text segmentation for locale-aware search.
//!
//! Splits a string into the units a user perceives as single characters so a
//! search window never cuts a base letter away from its combining marks.
//!
//! ## What we provide
//!
//! - [`Segmenter`]: the capability the matcher consumes
//! - [`ExtendedGraphemes`]: UAX #29 extended grapheme clusters (feature `graphemes`)
//! - [`CodePoints`]: one cluster per `char`, the degraded fallback
//! - [`SegmentationMode`]: serializable selector for configuration files
//!
//! ## Guarantees
//!
//! Every segmenter yields clusters in order, with no gaps and no overlaps,
//! covering the whole input. Offsets are UTF-8 byte offsets into the input.
//! Segmenting the same text twice yields the same clusters.
//!
//! ## Known trade-off
//!
//! [`CodePoints`] does not know about combining sequences. `"a\u{0308}"` is one
//! grapheme but two code points, so with the fallback a decomposed `ä` and a
//! precomposed `ä` no longer occupy the same number of clusters and windows
//! sized from one will not line up with the other.

mod cluster;
mod mode;

pub use crate::cluster::{CodePoints, GraphemeCluster, Segmenter, Segments};
#[cfg(feature = "graphemes")]
pub use crate::cluster::ExtendedGraphemes;
pub use crate::mode::{default_segmenter, SegmentationMode};

pub mod blocks;
pub mod lines;
pub mod marker;

pub use blocks::{Enclosure, PairBlock, SoloBlock, locate};
pub use lines::{LineIndex, Span};
pub use marker::{AlignKind, Alignment, StartMarker, is_end_marker, parse_start_marker};

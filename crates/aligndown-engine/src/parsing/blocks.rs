use std::ops::Range;

use super::lines::{LineIndex, Span};
use super::marker::{self, AlignKind, StartMarker};

/// A located solo alignment block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoloBlock {
    pub kind: AlignKind,
    /// Tag suffix from the start marker, e.g. `#photo`.
    pub tag: Option<String>,
    /// Line of the start marker.
    pub start_line: usize,
    /// Line of the end marker.
    pub end_line: usize,
    /// Byte span from the start marker through the end marker's newline,
    /// clamped to the buffer end when the block closes the buffer.
    pub span: Span,
}

/// Two adjacent complementary column blocks forming one side-by-side
/// layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairBlock {
    /// Byte span from the first start marker through the second end
    /// marker's newline.
    pub span: Span,
    /// Byte offset of the `left` column's start marker.
    pub left_start: usize,
    /// Byte offset of the `right` column's start marker.
    pub right_start: usize,
}

/// The structural relationship between a selection and the blocks around
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enclosure {
    /// The selection is not inside any alignment block.
    None,
    /// The selection sits inside a self-contained block.
    Solo(SoloBlock),
    /// The selection sits inside a two-column pair.
    Pair(PairBlock),
}

/// Finds the block enclosing `selection`, if any.
///
/// Scans upward from the selection's first line for a start marker, giving
/// up at the first bare end marker: blocks do not nest, so an end marker
/// above the selection means the selection sits between blocks, not inside
/// one. A column block only counts when its complementary partner starts
/// on the very next line after it closes and the selection fits inside the
/// whole pair; an unpaired or unfitting column block is treated as no
/// enclosure at all. An unterminated block is likewise treated as absent
/// rather than reported as an error.
pub fn locate(index: &LineIndex<'_>, selection: &Range<usize>) -> Enclosure {
    let selection_line = index.line_of(selection.start);

    let mut found: Option<(usize, StartMarker)> = None;
    for line in (0..=selection_line).rev() {
        if let Some(m) = marker::parse_start_marker(index.line(line)) {
            found = Some((line, m));
            break;
        }
        if marker::is_end_marker(index.line(line)) {
            return Enclosure::None;
        }
    }
    let Some((start_line, start)) = found else {
        return Enclosure::None;
    };

    let Some(end_line) = end_marker_after(index, start_line) else {
        return Enclosure::None;
    };

    if start.kind.is_column() {
        return match locate_pair(index, start_line, end_line, start.kind) {
            Some(pair) if pair.span.contains_range(selection) => Enclosure::Pair(pair),
            _ => Enclosure::None,
        };
    }

    if start.kind.is_solo() {
        let span = Span {
            start: index.span(start_line).start,
            end: index.start_of_next(end_line),
        };
        if span.contains_range(selection) {
            return Enclosure::Solo(SoloBlock {
                kind: start.kind,
                tag: start.tag,
                start_line,
                end_line,
                span,
            });
        }
    }

    Enclosure::None
}

/// First bare end-marker line strictly after `start_line`, if the block is
/// closed at all.
fn end_marker_after(index: &LineIndex<'_>, start_line: usize) -> Option<usize> {
    (start_line + 1..index.line_count()).find(|&line| marker::is_end_marker(index.line(line)))
}

/// Checks whether the column block starting at `first_start` is the
/// leading half of a pair: the complementary start marker must sit on the
/// line immediately after this block's end marker, and that second block
/// must be closed too.
fn locate_pair(
    index: &LineIndex<'_>,
    first_start: usize,
    first_end: usize,
    kind: AlignKind,
) -> Option<PairBlock> {
    let complement = kind.pair_complement()?;
    let second_start = first_end + 1;
    if second_start >= index.line_count() {
        return None;
    }
    let partner = marker::parse_start_marker(index.line(second_start))?;
    if partner.kind != complement {
        return None;
    }
    let second_end = end_marker_after(index, second_start)?;

    let span = Span {
        start: index.span(first_start).start,
        end: index.start_of_next(second_end),
    };
    let (left_start, right_start) = if kind == AlignKind::Left {
        (index.span(first_start).start, index.span(second_start).start)
    } else {
        (index.span(second_start).start, index.span(first_start).start)
    };
    Some(PairBlock {
        span,
        left_start,
        right_start,
    })
}

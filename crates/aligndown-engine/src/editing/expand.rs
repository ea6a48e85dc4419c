use std::ops::Range;

use crate::parsing::lines::LineIndex;
use crate::parsing::marker;

/// Grows a selection that is not inside any block out to paragraph edges.
///
/// Both directions stop short of blank lines and marker lines, so a fresh
/// block never swallows a neighbouring block and never jumps a paragraph
/// break. The terminating newline of the last included line stays outside
/// the region.
pub fn expand_selection(index: &LineIndex<'_>, selection: &Range<usize>) -> Range<usize> {
    backward_boundary(index, selection.start)..forward_boundary(index, selection.end)
}

/// Accepts lines upward starting from the one containing `from`. The
/// boundary is the start of the last accepted line; when even that first
/// line is a marker or blank, the boundary stays at `from` itself.
fn backward_boundary(index: &LineIndex<'_>, from: usize) -> usize {
    let mut boundary = from;
    let mut line = index.line_of(from);
    loop {
        if is_paragraph_break(index.line(line)) {
            return boundary;
        }
        boundary = index.span(line).start;
        if line == 0 {
            return boundary;
        }
        line -= 1;
    }
}

/// Accepts lines downward starting from the one containing `from`. The
/// boundary is the end of the last accepted line's text, or the buffer
/// length when the scan runs off the end.
fn forward_boundary(index: &LineIndex<'_>, from: usize) -> usize {
    let mut line = index.line_of(from);
    loop {
        if line + 1 >= index.line_count() || is_paragraph_break(index.line(line + 1)) {
            return index.span(line).end;
        }
        line += 1;
    }
}

fn is_paragraph_break(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || marker::is_end_marker(trimmed)
        || marker::parse_start_marker(trimmed).is_some()
}

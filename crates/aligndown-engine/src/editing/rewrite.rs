use std::ops::Range;

use crate::editing::patch::Splice;
use crate::parsing::blocks::SoloBlock;
use crate::parsing::lines::{LineIndex, Span};
use crate::parsing::marker::{AlignKind, FENCE};

/// Rebuilds an existing solo block under a new kind.
///
/// The interior is carried over byte-for-byte and the tag suffix stays on
/// the new start marker. The run of newlines that immediately follows the
/// end marker's text — its own newline plus any blank lines — is harvested
/// separately and stitched back verbatim; cutting at the line after the
/// end marker instead would eat blank lines that belong to the text below
/// the block.
pub(crate) fn retype_block(index: &LineIndex<'_>, block: &SoloBlock, kind: AlignKind) -> Splice {
    let interior = index.slice(interior_span(index, block.start_line, block.end_line));
    let header = header(kind, block.tag.as_deref());
    let block_start = index.span(block.start_line).start;

    // Exact offset of the byte after the end marker's text, before its
    // newline.
    let after_block = index.span(block.end_line).end;
    let newline_run = index.text()[after_block..]
        .bytes()
        .take_while(|&b| b == b'\n')
        .count();

    let mut replacement =
        String::with_capacity(header.len() + interior.len() + 1 + FENCE.len() + newline_run);
    replacement.push_str(&header);
    replacement.push_str(interior);
    replacement.push('\n');
    replacement.push_str(FENCE);
    for _ in 0..newline_run {
        replacement.push('\n');
    }

    let content_start = block_start + header.len();
    Splice {
        range: block_start..after_block + newline_run,
        selection: content_start..content_start + interior.len(),
        text: replacement,
    }
}

/// Wraps a region in fresh solo markers.
///
/// The region's trimmed content becomes the block interior; whitespace at
/// the region's edges is dropped. Callers reject regions that trim to
/// nothing before getting here.
pub(crate) fn wrap_region(text: &str, region: &Range<usize>, kind: AlignKind) -> Splice {
    let content = text[region.clone()].trim();
    let header = header(kind, None);

    let mut replacement = String::with_capacity(header.len() + content.len() + 1 + FENCE.len());
    replacement.push_str(&header);
    replacement.push_str(content);
    replacement.push('\n');
    replacement.push_str(FENCE);

    let content_start = region.start + header.len();
    Splice {
        range: region.clone(),
        selection: content_start..content_start + content.len(),
        text: replacement,
    }
}

/// Removes the markers around a solo block, leaving the interior in place.
/// The newline run after the end marker is untouched, so the surrounding
/// vertical spacing survives.
pub(crate) fn strip_block(index: &LineIndex<'_>, block: &SoloBlock) -> Splice {
    let interior = index.slice(interior_span(index, block.start_line, block.end_line));
    let block_start = index.span(block.start_line).start;
    let after_block = index.span(block.end_line).end;

    Splice {
        range: block_start..after_block,
        selection: block_start..block_start + interior.len(),
        text: interior.to_string(),
    }
}

/// The byte span strictly between the two marker lines; empty when the
/// markers are adjacent.
fn interior_span(index: &LineIndex<'_>, start_line: usize, end_line: usize) -> Span {
    if end_line > start_line + 1 {
        Span {
            start: index.span(start_line + 1).start,
            end: index.span(end_line - 1).end,
        }
    } else {
        let at = index.span(start_line).end;
        Span { start: at, end: at }
    }
}

fn header(kind: AlignKind, tag: Option<&str>) -> String {
    format!("{FENCE} {kind}{}\n", tag.unwrap_or(""))
}

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::editing::expand::expand_selection;
use crate::editing::patch::{Aligned, Splice};
use crate::editing::rewrite::{retype_block, strip_block, wrap_region};
use crate::parsing::blocks::{Enclosure, locate};
use crate::parsing::lines::LineIndex;
use crate::parsing::marker::Alignment;

/// Why an edit was refused. The buffer is never touched on refusal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AlignError {
    #[error("selection is empty or covers only whitespace")]
    EmptySelection,
    #[error("column pairs can only be realigned as a whole, not from a selection inside them")]
    PairedLayoutUnsupported,
    #[error("no alignable content around the selection")]
    NoAlignableContent,
    #[error("selection is not inside an alignment block")]
    NoEnclosingBlock,
}

/// Edits that can be applied to a document.
///
/// Ranges are byte offsets into the buffer the command is compiled
/// against, on UTF-8 boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Align the selected content: retype the enclosing solo block, or
    /// wrap the surrounding paragraph in a fresh one.
    Align {
        range: Range<usize>,
        alignment: Alignment,
    },
    /// Strip the markers from the solo block enclosing the selection.
    Unalign { range: Range<usize> },
}

/// An alignment change requested by a rendering surface.
///
/// `start` and `end` are byte offsets into the UTF-8 buffer as the surface
/// last saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignRequest {
    pub start: usize,
    pub end: usize,
    pub alignment: Alignment,
}

impl From<AlignRequest> for Cmd {
    fn from(request: AlignRequest) -> Self {
        Cmd::Align {
            range: request.start..request.end,
            alignment: request.alignment,
        }
    }
}

/// Compiles a command against a buffer snapshot into a single splice.
///
/// Pure: the only output is the returned splice, which is valid for this
/// exact buffer and must be applied before any other edit.
pub(crate) fn compile_command(text: &str, cmd: &Cmd) -> Result<Splice, AlignError> {
    match cmd {
        Cmd::Align { range, alignment } => compile_align(text, range, *alignment),
        Cmd::Unalign { range } => compile_unalign(text, range),
    }
}

fn compile_align(
    text: &str,
    range: &Range<usize>,
    alignment: Alignment,
) -> Result<Splice, AlignError> {
    let selection = clamp(range, text.len());
    if text[selection.clone()].trim().is_empty() {
        return Err(AlignError::EmptySelection);
    }

    let index = LineIndex::new(text);
    match locate(&index, &selection) {
        Enclosure::Pair(_) => Err(AlignError::PairedLayoutUnsupported),
        Enclosure::Solo(block) => Ok(retype_block(&index, &block, alignment.solo_kind())),
        Enclosure::None => {
            let region = expand_selection(&index, &selection);
            if text[region.clone()].trim().is_empty() {
                return Err(AlignError::NoAlignableContent);
            }
            Ok(wrap_region(text, &region, alignment.solo_kind()))
        }
    }
}

fn compile_unalign(text: &str, range: &Range<usize>) -> Result<Splice, AlignError> {
    let selection = clamp(range, text.len());
    let index = LineIndex::new(text);
    match locate(&index, &selection) {
        Enclosure::Solo(block) => Ok(strip_block(&index, &block)),
        Enclosure::Pair(_) => Err(AlignError::PairedLayoutUnsupported),
        Enclosure::None => Err(AlignError::NoEnclosingBlock),
    }
}

/// Applies an alignment request to a buffer, returning the rewritten
/// buffer and the selection covering the affected interior content.
pub fn align(
    text: &str,
    selection: Range<usize>,
    alignment: Alignment,
) -> Result<Aligned, AlignError> {
    let splice = compile_align(text, &selection, alignment)?;
    Ok(Aligned {
        selection: splice.selection.clone(),
        text: splice.apply(text),
    })
}

fn clamp(range: &Range<usize>, len: usize) -> Range<usize> {
    let start = range.start.min(len);
    start..range.end.clamp(start, len)
}

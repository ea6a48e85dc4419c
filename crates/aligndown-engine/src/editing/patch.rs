use std::ops::Range;

/// A single contiguous replacement computed for a command.
///
/// A splice is only valid against the exact buffer snapshot it was
/// computed from; it must be applied before any other edit touches that
/// buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    /// Byte range of the old buffer to replace.
    pub range: Range<usize>,
    /// Replacement text.
    pub text: String,
    /// Selection to place over the result, in post-splice offsets.
    pub selection: Range<usize>,
}

impl Splice {
    /// Applies the splice to the buffer it was computed from.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() - self.range.len() + self.text.len());
        out.push_str(&text[..self.range.start]);
        out.push_str(&self.text);
        out.push_str(&text[self.range.end..]);
        out
    }
}

/// A rewritten buffer plus the selection to place over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aligned {
    pub text: String,
    pub selection: Range<usize>,
}

/// Result of applying a command to a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Byte ranges of the new buffer that differ from the old one.
    pub changed: Vec<Range<usize>>,
    /// Selection after the edit, in new-buffer offsets.
    pub new_selection: Range<usize>,
    /// Document version after the edit.
    pub version: u64,
}

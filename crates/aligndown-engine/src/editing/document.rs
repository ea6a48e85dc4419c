use xi_rope::Rope;
use xi_rope::delta::Builder;

use crate::editing::commands::{self, AlignError, Cmd};
use crate::editing::patch::Patch;

/// An editable document buffer with the current selection.
///
/// The rope is the single source of truth. Every edit goes through
/// [`Document::apply`]: the command is compiled against a snapshot of the
/// current buffer into one contiguous splice, the splice is applied as a
/// rope delta, and the selection moves onto the affected content. A
/// rejected command leaves buffer, selection and version untouched.
///
/// Offsets are byte offsets into the UTF-8 buffer.
#[derive(Clone)]
pub struct Document {
    buffer: Rope,
    selection: std::ops::Range<usize>,
    version: u64,
}

impl Document {
    /// Creates a document from raw bytes, which must be valid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::from_text(text))
    }

    pub fn from_text(text: &str) -> Self {
        let buffer = Rope::from(text);
        let len = buffer.len();
        Self {
            buffer,
            selection: len..len,
            version: 0,
        }
    }

    /// Current content as an owned string; byte-identical to what was
    /// loaded plus the applied edits.
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    pub fn selection(&self) -> std::ops::Range<usize> {
        self.selection.clone()
    }

    pub fn set_selection(&mut self, selection: std::ops::Range<usize>) {
        self.selection = selection;
    }

    /// Edit counter; bumps once per applied command.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Applies a command to the buffer.
    pub fn apply(&mut self, cmd: Cmd) -> Result<Patch, AlignError> {
        let text = self.text();
        let splice = commands::compile_command(&text, &cmd)?;

        let mut builder = Builder::new(self.buffer.len());
        if splice.text.is_empty() {
            builder.delete(splice.range.clone());
        } else {
            builder.replace(splice.range.clone(), Rope::from(splice.text.as_str()));
        }
        self.buffer = builder.build().apply(&self.buffer);

        self.selection = splice.selection.clone();
        self.version += 1;

        Ok(Patch {
            changed: vec![splice.range.start..splice.range.start + splice.text.len()],
            new_selection: splice.selection,
            version: self.version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::marker::Alignment;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_document_starts_with_cursor_at_end() {
        let doc = Document::from_text("hello");
        assert_eq!(doc.selection(), 5..5);
        assert_eq!(doc.version(), 0);
        assert_eq!(doc.text(), "hello");
    }

    #[test]
    fn from_bytes_rejects_invalid_utf8() {
        assert!(Document::from_bytes(&[0xff, 0xfe]).is_err());
    }

    #[test]
    fn apply_rewrites_buffer_and_moves_selection() {
        let mut doc = Document::from_text("intro\n\nHello world\n\noutro");
        let patch = doc
            .apply(Cmd::Align {
                range: 7..12,
                alignment: Alignment::Center,
            })
            .unwrap();

        assert_eq!(doc.text(), "intro\n\n::: solocenter\nHello world\n:::\n\noutro");
        assert_eq!(patch.new_selection, 22..33);
        assert_eq!(doc.selection(), 22..33);
        assert_eq!(patch.version, 1);
        assert_eq!(patch.changed, vec![7..37]);
    }

    #[test]
    fn rejected_command_changes_nothing() {
        let text = "::: left\nA\n:::\n::: right\nB\n:::";
        let mut doc = Document::from_text(text);
        let before = doc.selection();

        let result = doc.apply(Cmd::Align {
            range: 9..25,
            alignment: Alignment::Left,
        });

        assert_eq!(result, Err(AlignError::PairedLayoutUnsupported));
        assert_eq!(doc.text(), text);
        assert_eq!(doc.selection(), before);
        assert_eq!(doc.version(), 0);
    }

    #[test]
    fn versions_count_applied_edits_only() {
        let mut doc = Document::from_text("one\n\ntwo");
        doc.apply(Cmd::Align {
            range: 0..3,
            alignment: Alignment::Left,
        })
        .unwrap();
        let tail = doc.len();
        assert!(doc.apply(Cmd::Unalign { range: tail..tail }).is_err());
        doc.apply(Cmd::Unalign {
            range: doc.selection(),
        })
        .unwrap();
        assert_eq!(doc.version(), 2);
        assert_eq!(doc.text(), "one\n\ntwo");
    }
}

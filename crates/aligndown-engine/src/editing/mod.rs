/*!
 * # Alignment editing core
 *
 * Everything here turns one alignment request into one buffer
 * replacement:
 *
 * 1. The request's selection is mapped to lines and the enclosing block
 *    is located (`crate::parsing`).
 * 2. A selection inside a two-column pair is rejected outright; pairs are
 *    only ever edited as a unit.
 * 3. A selection inside a solo block retypes that block in place, keeping
 *    the interior, the `#tag` suffix, and the blank lines after the block
 *    byte-for-byte.
 * 4. A selection outside any block grows to its paragraph edges and gets
 *    wrapped in fresh markers.
 *
 * The algorithms are pure functions over `&str` snapshots: a command
 * compiles to a single [`patch::Splice`], and the caller owns buffer
 * replacement. [`document::Document`] is the stateful convenience on top,
 * holding an `xi_rope::Rope`, applying splices as deltas, and keeping the
 * selection and an edit version.
 *
 * ```rust
 * use aligndown_engine::editing::{Cmd, Document};
 * use aligndown_engine::parsing::Alignment;
 *
 * let mut doc = Document::from_bytes(b"intro\n\nHello world\n\noutro").unwrap();
 * let patch = doc
 *     .apply(Cmd::Align { range: 7..12, alignment: Alignment::Center })
 *     .unwrap();
 * assert_eq!(doc.text(), "intro\n\n::: solocenter\nHello world\n:::\n\noutro");
 * assert_eq!(patch.new_selection, 22..33);
 * ```
 */

pub mod commands;
pub mod document;
pub mod expand;
pub mod patch;
pub mod rewrite;

pub use commands::{AlignError, AlignRequest, Cmd, align};
pub use document::Document;
pub use expand::expand_selection;
pub use patch::{Aligned, Patch, Splice};

//! End-to-end behavior of the alignment engine: locating, retyping,
//! wrapping, and stripping blocks through the public API.

use aligndown_engine::{AlignError, Alignment, Cmd, Document, align};
use pretty_assertions::assert_eq;

#[test]
fn retyping_a_block_to_its_own_kind_changes_nothing() {
    let text = "intro\n\n::: sololeft\nfoo\nbar\n:::\n\ntail";
    let at = text.find("foo").unwrap();
    let done = align(text, at..at + 3, Alignment::Left).unwrap();
    assert_eq!(done.text, text);
}

#[test]
fn retyping_keeps_the_interior_byte_for_byte() {
    let text = "::: sololeft\n  spaced   content\n\ttabbed\n:::";
    let at = text.find("content").unwrap();
    let done = align(text, at..at + 7, Alignment::Right).unwrap();
    assert_eq!(done.text, "::: soloright\n  spaced   content\n\ttabbed\n:::");
    assert_eq!(&done.text[done.selection.clone()], "  spaced   content\n\ttabbed");
}

#[test]
fn blank_lines_after_the_block_survive_a_retype() {
    let text = "::: sololeft\nfoo\n:::\n\n\nbar";
    let at = text.find("foo").unwrap();
    let done = align(text, at..at + 3, Alignment::Center).unwrap();
    assert_eq!(done.text, "::: solocenter\nfoo\n:::\n\n\nbar");
}

#[test]
fn tag_suffix_survives_a_retype() {
    let text = "::: sololeft#photo\ncontent\n:::";
    let at = text.find("content").unwrap();
    let done = align(text, at..at + 7, Alignment::Right).unwrap();
    assert_eq!(done.text, "::: soloright#photo\ncontent\n:::");
}

#[test]
fn selection_spanning_both_columns_of_a_pair_is_rejected() {
    let text = "::: left\nA\n:::\n::: right\nB\n:::";
    let a = text.find('A').unwrap();
    let b = text.find('B').unwrap();
    assert_eq!(
        align(text, a..b + 1, Alignment::Center),
        Err(AlignError::PairedLayoutUnsupported)
    );
}

#[test]
fn wrapping_expands_to_the_surrounding_paragraph() {
    let text = "intro\n\nHello world\n\noutro";
    let at = text.find("Hello").unwrap();
    let done = align(text, at..at + 5, Alignment::Center).unwrap();
    assert_eq!(done.text, "intro\n\n::: solocenter\nHello world\n:::\n\noutro");
    assert_eq!(&done.text[done.selection.clone()], "Hello world");
}

#[test]
fn empty_and_whitespace_selections_are_rejected() {
    assert_eq!(
        align("some text", 4..4, Alignment::Left),
        Err(AlignError::EmptySelection)
    );
    assert_eq!(
        align("a  \n  b", 1..6, Alignment::Left),
        Err(AlignError::EmptySelection)
    );
}

#[test]
fn align_then_unalign_round_trips_the_buffer() {
    let original = "alpha\n\nsome words\n\nomega";
    let mut doc = Document::from_text(original);

    let at = original.find("some").unwrap();
    doc.apply(Cmd::Align {
        range: at..at + 4,
        alignment: Alignment::Left,
    })
    .unwrap();
    assert_eq!(doc.text(), "alpha\n\n::: sololeft\nsome words\n:::\n\nomega");

    doc.apply(Cmd::Unalign {
        range: doc.selection(),
    })
    .unwrap();
    assert_eq!(doc.text(), original);
    assert_eq!(doc.version(), 2);
}

#[test]
fn switching_alignment_twice_lands_on_the_last_kind() {
    let mut doc = Document::from_text("one paragraph");
    doc.apply(Cmd::Align {
        range: 0..3,
        alignment: Alignment::Center,
    })
    .unwrap();
    doc.apply(Cmd::Align {
        range: doc.selection(),
        alignment: Alignment::Right,
    })
    .unwrap();
    assert_eq!(doc.text(), "::: soloright\none paragraph\n:::");
}

#[test]
fn neighbouring_blocks_are_untouched_by_a_retype() {
    let text = "::: sololeft\nfirst\n:::\n\n::: solocenter\nsecond\n:::";
    let at = text.find("second").unwrap();
    let done = align(text, at..at + 6, Alignment::Left).unwrap();
    assert_eq!(done.text, "::: sololeft\nfirst\n:::\n\n::: sololeft\nsecond\n:::");
}

#[test]
fn wrapping_next_to_a_pair_leaves_the_pair_alone() {
    let text = "::: left\nA\n:::\n::: right\nB\n:::\n\nfooter line";
    let at = text.find("footer").unwrap();
    let done = align(text, at..at + 6, Alignment::Center).unwrap();
    assert_eq!(
        done.text,
        "::: left\nA\n:::\n::: right\nB\n:::\n\n::: solocenter\nfooter line\n:::"
    );
}

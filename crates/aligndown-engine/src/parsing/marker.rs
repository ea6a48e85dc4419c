use regex::Regex;
use serde::{Deserialize, Serialize};

/// The fence that opens and closes every alignment block.
pub const FENCE: &str = ":::";

/// Alignment kinds that may appear in a start marker.
///
/// The solo kinds are self-contained single-column blocks. `Left` and
/// `Right` only occur as the two halves of a side-by-side column pair.
/// `Center` is a legacy kind still recognized in documents but never
/// written by new edits; a selection inside one is treated as unenclosed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignKind {
    Left,
    Right,
    Center,
    SoloLeft,
    SoloCenter,
    SoloRight,
}

impl AlignKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AlignKind::Left => "left",
            AlignKind::Right => "right",
            AlignKind::Center => "center",
            AlignKind::SoloLeft => "sololeft",
            AlignKind::SoloCenter => "solocenter",
            AlignKind::SoloRight => "soloright",
        }
    }

    /// True for the self-contained kinds.
    pub fn is_solo(self) -> bool {
        matches!(
            self,
            AlignKind::SoloLeft | AlignKind::SoloCenter | AlignKind::SoloRight
        )
    }

    /// True for the kinds that form column pairs.
    pub fn is_column(self) -> bool {
        matches!(self, AlignKind::Left | AlignKind::Right)
    }

    /// The kind that completes a column pair, for column kinds only.
    pub fn pair_complement(self) -> Option<AlignKind> {
        match self {
            AlignKind::Left => Some(AlignKind::Right),
            AlignKind::Right => Some(AlignKind::Left),
            _ => None,
        }
    }

    fn from_keyword(word: &str) -> Option<AlignKind> {
        Some(match word {
            "left" => AlignKind::Left,
            "right" => AlignKind::Right,
            "center" => AlignKind::Center,
            "sololeft" => AlignKind::SoloLeft,
            "solocenter" => AlignKind::SoloCenter,
            "soloright" => AlignKind::SoloRight,
            _ => return None,
        })
    }
}

impl std::fmt::Display for AlignKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal alignment requested by the caller.
///
/// Requests always produce solo blocks; column pairs are never created
/// from a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    /// The marker kind written for this alignment.
    pub fn solo_kind(self) -> AlignKind {
        match self {
            Alignment::Left => AlignKind::SoloLeft,
            Alignment::Center => AlignKind::SoloCenter,
            Alignment::Right => AlignKind::SoloRight,
        }
    }
}

/// A parsed start marker line such as `::: sololeft#photo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartMarker {
    pub kind: AlignKind,
    /// Opaque `#`-prefixed suffix, carried verbatim across rewrites and
    /// never interpreted.
    pub tag: Option<String>,
}

fn start_marker_regex() -> &'static Regex {
    use std::sync::OnceLock;

    static START_MARKER: OnceLock<Regex> = OnceLock::new();
    START_MARKER.get_or_init(|| {
        Regex::new(r"^::: ?(left|right|center|sololeft|solocenter|soloright)(#.*)?$")
            .expect("Invalid start marker regex")
    })
}

/// Parses a line as a start marker.
///
/// The marker must be the whole line aside from surrounding whitespace.
/// The space after `:::` is optional on input; rewrites always emit it.
pub fn parse_start_marker(line: &str) -> Option<StartMarker> {
    let caps = start_marker_regex().captures(line.trim())?;
    let kind = AlignKind::from_keyword(&caps[1])?;
    let tag = caps.get(2).map(|m| m.as_str().to_string());
    Some(StartMarker { kind, tag })
}

/// True when the line is a bare end marker, tolerant of surrounding
/// whitespace.
pub fn is_end_marker(line: &str) -> bool {
    line.trim() == FENCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("::: left", AlignKind::Left, None)]
    #[case("::: right", AlignKind::Right, None)]
    #[case("::: center", AlignKind::Center, None)]
    #[case("::: sololeft", AlignKind::SoloLeft, None)]
    #[case("::: solocenter", AlignKind::SoloCenter, None)]
    #[case("::: soloright", AlignKind::SoloRight, None)]
    #[case(":::soloright", AlignKind::SoloRight, None)]
    #[case("  ::: solocenter  ", AlignKind::SoloCenter, None)]
    #[case("::: sololeft#photo", AlignKind::SoloLeft, Some("#photo"))]
    #[case(":::left#v2", AlignKind::Left, Some("#v2"))]
    #[case("::: soloright#", AlignKind::SoloRight, Some("#"))]
    fn parses_start_markers(
        #[case] line: &str,
        #[case] kind: AlignKind,
        #[case] tag: Option<&str>,
    ) {
        let marker = parse_start_marker(line).unwrap();
        assert_eq!(marker.kind, kind);
        assert_eq!(marker.tag.as_deref(), tag);
    }

    #[rstest]
    #[case("::: note")]
    #[case("::: leftish")]
    #[case("::::left")]
    #[case(":::")]
    #[case("::: left extra")]
    #[case("text ::: left")]
    #[case("")]
    fn rejects_non_start_markers(#[case] line: &str) {
        assert_eq!(parse_start_marker(line), None);
    }

    #[test]
    fn detects_end_marker() {
        assert!(is_end_marker(":::"));
        assert!(is_end_marker("  :::  "));
        assert!(!is_end_marker("::: left"));
        assert!(!is_end_marker("::::"));
        assert!(!is_end_marker(""));
    }

    #[test]
    fn solo_and_column_partition() {
        assert!(AlignKind::SoloCenter.is_solo());
        assert!(!AlignKind::SoloCenter.is_column());
        assert!(AlignKind::Left.is_column());
        assert!(!AlignKind::Left.is_solo());
        assert!(!AlignKind::Center.is_solo());
        assert!(!AlignKind::Center.is_column());
    }

    #[test]
    fn column_kinds_complement_each_other() {
        assert_eq!(AlignKind::Left.pair_complement(), Some(AlignKind::Right));
        assert_eq!(AlignKind::Right.pair_complement(), Some(AlignKind::Left));
        assert_eq!(AlignKind::SoloLeft.pair_complement(), None);
    }

    #[test]
    fn requests_map_to_solo_kinds() {
        assert_eq!(Alignment::Left.solo_kind(), AlignKind::SoloLeft);
        assert_eq!(Alignment::Center.solo_kind(), AlignKind::SoloCenter);
        assert_eq!(Alignment::Right.solo_kind(), AlignKind::SoloRight);
    }
}

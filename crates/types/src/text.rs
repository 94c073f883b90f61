//! Shared typesetting vocabulary: writing direction, script classes and
//! punctuation (yakumono) categories.

use serde::{Deserialize, Serialize};

/// Writing direction of a document. Only one is active at a time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Left-to-right lines stacked top-to-bottom.
    #[default]
    LrTb,
    /// Top-to-bottom columns stacked right-to-left.
    TbRl,
}

impl Direction {
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::TbRl)
    }
}

/// Coarse character classification driving font choice and glyph rotation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum Script {
    #[default]
    Latin,
    Japanese,
    Emoji,
}

impl Script {
    pub const ALL: [Script; 3] = [Script::Latin, Script::Japanese, Script::Emoji];

    /// Numeric font identifier. One font slot per script.
    pub fn font_id(self) -> u8 {
        match self {
            Script::Latin => 0,
            Script::Japanese => 1,
            Script::Emoji => 2,
        }
    }
}

/// Alignment tag. Carried through the document but not realized by layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum TextAlign {
    #[default]
    Leading,
    Center,
    Trailing,
    Justified,
}

/// How punctuation glyphs stored at full-width metrics are compacted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum PunctuationMode {
    /// Always full width.
    Whole,
    /// Always half width.
    Half,
    /// Width depends on the neighbouring punctuation.
    #[default]
    Stone,
}

/// Which part of its em cell a punctuation glyph visually occupies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum PunctuationType {
    /// Ordinary character.
    #[default]
    Whole,
    /// Closing marks (`。`, `」`) sitting in the leading half.
    FirstHalf,
    /// Opening marks (`「`) sitting in the trailing half.
    SecondHalf,
    /// Middle dot, colon and semicolon.
    Quarter,
}

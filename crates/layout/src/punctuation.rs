//! Punctuation compaction (yakumono processing).
//!
//! CJK punctuation is stored at full-width metrics but only inks half (or a
//! quarter) of its cell. Depending on the document mode and on the
//! neighbouring marks, each run gets a scale applied to its advance and an
//! offset, in font-size units, applied to its horizontal position.

use crate::context::Run;
use stone_types::{PunctuationMode, PunctuationType};

/// Classifies a character. Anything not listed is `Whole`.
pub fn classify(ch: char) -> PunctuationType {
    match ch {
        '。' | '、' | '，' | '．' | '」' | '』' | '】' | '〕' | '］' | '｝' | '）' | '〉' | '》' => {
            PunctuationType::FirstHalf
        }
        '「' | '『' | '【' | '〔' | '［' | '｛' | '（' | '〈' | '《' => {
            PunctuationType::SecondHalf
        }
        '・' | '：' | '；' => PunctuationType::Quarter,
        _ => PunctuationType::Whole,
    }
}

pub fn is_punctuation(ch: char) -> bool {
    classify(ch) != PunctuationType::Whole
}

/// Offset (font-size units) and advance scale for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PunctuationLayout {
    pub offset: f32,
    pub scale: f32,
}

impl PunctuationLayout {
    pub const FULL: PunctuationLayout = PunctuationLayout {
        offset: 0.0,
        scale: 1.0,
    };
    pub const HALF: PunctuationLayout = PunctuationLayout {
        offset: 0.0,
        scale: 0.5,
    };

    const fn shifted(offset: f32) -> Self {
        PunctuationLayout { offset, scale: 0.5 }
    }
}

/// Picks the layout for `current` given its neighbours.
///
/// In `Stone` mode the first matching rule wins, in this order:
/// closer→opener, opener→opener, quarter→opener (opener pulled back);
/// closer before closer, closer before quarter, lone quarter (halved).
/// The order is significant.
pub fn resolve(
    mode: PunctuationMode,
    prev: PunctuationType,
    current: PunctuationType,
    next: PunctuationType,
) -> PunctuationLayout {
    use PunctuationType::*;

    match mode {
        PunctuationMode::Whole => return PunctuationLayout::FULL,
        PunctuationMode::Half => return PunctuationLayout::HALF,
        PunctuationMode::Stone => {}
    }

    match (prev, current, next) {
        (_, Whole, _) => PunctuationLayout::FULL,
        (FirstHalf, SecondHalf, _) => PunctuationLayout::shifted(-0.5),
        (SecondHalf, SecondHalf, _) => PunctuationLayout::shifted(-0.5),
        (Quarter, SecondHalf, _) => PunctuationLayout::shifted(-0.25),
        (_, FirstHalf, FirstHalf) => PunctuationLayout::HALF,
        (_, FirstHalf, Quarter) => PunctuationLayout::HALF,
        (_, Quarter, _) => PunctuationLayout::HALF,
        _ => PunctuationLayout::FULL,
    }
}

/// Classifies every run and writes its offset and scale.
///
/// Runs at either end of the slice see a `Whole` neighbour.
pub fn apply(runs: &mut [Run], mode: PunctuationMode) {
    for run in runs.iter_mut() {
        run.punctuation_type = classify(run.ch);
    }

    let mut prev = PunctuationType::Whole;
    for i in 0..runs.len() {
        let current = runs[i].punctuation_type;
        let next = runs
            .get(i + 1)
            .map(|run| run.punctuation_type)
            .unwrap_or(PunctuationType::Whole);

        let layout = resolve(mode, prev, current, next);
        runs[i].punctuation_offset = layout.offset;
        runs[i].punctuation_scale = layout.scale;
        prev = current;
    }
}

/// Advance width after compaction.
pub fn adjusted_width(run: &Run) -> f32 {
    run.advance.width * run.punctuation_scale
}

/// Horizontal pen position after the punctuation offset.
pub fn adjusted_x(run: &Run, x: f32, font_size: f32) -> f32 {
    x + font_size * run.punctuation_offset
}

//! Per-document layout state: the run buffer, its tokens and the settings
//! the flows read.

use crate::config::LayoutConfig;
use crate::fonts::FontManager;
use crate::kinsoku::KinsokuRules;
use crate::unicode;
use serde::Serialize;
use stone_types::{
    Direction, Point, PunctuationMode, PunctuationType, Rect, Script, Size, TextAlign,
};

/// How a renderer should present a run's glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    Upright,
    /// Turned 90° clockwise, as Latin text inside a vertical column.
    Rotated,
}

/// One laid-out character.
///
/// `position`, `frame` and `line` are zero until a layout pass writes them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    pub ch: char,
    pub script: Script,
    pub font_id: u8,
    /// Natural size before punctuation adjustment.
    pub advance: Size,
    /// Baseline anchor in horizontal flow, cell centre in vertical flow.
    pub position: Point,
    pub frame: Rect,
    pub line: usize,
    pub token_id: usize,
    pub punctuation_type: PunctuationType,
    /// Horizontal shift in multiples of the font size.
    pub punctuation_offset: f32,
    /// Multiplier on `advance.width`.
    pub punctuation_scale: f32,
}

impl Run {
    pub fn new(ch: char, script: Script, advance: Size, token_id: usize) -> Self {
        Self {
            ch,
            script,
            font_id: script.font_id(),
            advance,
            position: Point::default(),
            frame: Rect::default(),
            line: 0,
            token_id,
            punctuation_type: PunctuationType::Whole,
            punctuation_offset: 0.0,
            punctuation_scale: 1.0,
        }
    }

    pub fn is_newline(&self) -> bool {
        unicode::is_newline(self.ch)
    }

    /// Latin letters and symbols lie on their side in vertical text; digits,
    /// Japanese and emoji stay upright.
    pub fn orientation(&self, direction: Direction) -> Orientation {
        if direction.is_vertical()
            && self.script == Script::Latin
            && !unicode::is_digit(self.ch)
        {
            Orientation::Rotated
        } else {
            Orientation::Upright
        }
    }
}

/// Contiguous, strictly increasing run indices sharing one token id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub run_ids: Vec<usize>,
}

impl Token {
    pub fn first_run(&self) -> Option<usize> {
        self.run_ids.first().copied()
    }
}

/// Owns the run and token buffers of one document.
///
/// Both buffers are discarded and rebuilt by every parse.
#[derive(Debug, Clone)]
pub struct LayoutContext {
    pub runs: Vec<Run>,
    pub tokens: Vec<Token>,

    pub font_size: f32,
    /// Multiplier on `font_size`.
    pub line_height: f32,
    pub direction: Direction,
    pub text_align: TextAlign,
    pub render_size: Size,

    pub kinsoku_enabled: bool,
    pub kinsoku_rules: KinsokuRules,
    pub punctuation_mode: PunctuationMode,

    pub fonts: FontManager,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

impl LayoutContext {
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            runs: Vec::new(),
            tokens: Vec::new(),
            font_size: config.font_size,
            line_height: config.line_height,
            direction: config.direction,
            text_align: config.text_align,
            render_size: config.render_size(),
            kinsoku_enabled: config.kinsoku,
            kinsoku_rules: KinsokuRules::default(),
            punctuation_mode: config.punctuation_mode,
            fonts: FontManager::with_overrides(&config.fonts),
        }
    }

    pub fn clear(&mut self) {
        self.runs.clear();
        self.tokens.clear();
    }

    /// Line pitch in pixels.
    pub fn line_height_px(&self) -> f32 {
        self.font_size * self.line_height
    }

    pub fn run_indexes_for_line(&self, line: usize) -> Vec<usize> {
        self.runs
            .iter()
            .enumerate()
            .filter(|(_, run)| run.line == line)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn line_count(&self) -> usize {
        self.runs.iter().map(|run| run.line + 1).max().unwrap_or(0)
    }

    /// The text of each line, newline runs excluded.
    pub fn line_texts(&self) -> Vec<String> {
        let mut lines = vec![String::new(); self.line_count()];
        for run in self.runs.iter().filter(|run| !run.is_newline()) {
            lines[run.line].push(run.ch);
        }
        lines
    }
}

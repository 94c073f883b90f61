//! Serializable view of a laid-out document.
//!
//! The snapshot is what a renderer needs to draw each glyph: where, inside
//! which frame, and whether to rotate it. The binary prints it as JSON.

use crate::error::StoneError;
use serde::Serialize;
use stone_layout::{
    Direction, LayoutEngine, Orientation, Point, PunctuationMode, Rect, Run, Script, Size,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSnapshot {
    pub ch: char,
    pub script: Script,
    pub font_id: u8,
    pub font_family: String,
    /// Font size after the script's scale.
    pub font_size: f32,
    pub position: Point,
    pub frame: Rect,
    pub line: usize,
    pub orientation: Orientation,
    pub punctuation_scale: f32,
    pub punctuation_offset: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    pub direction: Direction,
    pub punctuation_mode: PunctuationMode,
    pub render_size: Size,
    pub line_count: usize,
    pub runs: Vec<RunSnapshot>,
}

impl LayoutSnapshot {
    /// Captures every run of `engine`, newline runs included.
    pub fn capture(engine: &LayoutEngine) -> Self {
        let ctx = engine.context();
        let runs = ctx
            .runs
            .iter()
            .map(|run| {
                let family = ctx.fonts.font_family(run.script).to_string();
                let font_size = ctx.font_size * ctx.fonts.font_scale(run.script);
                RunSnapshot::new(run, family, font_size, ctx.direction)
            })
            .collect();

        Self {
            direction: ctx.direction,
            punctuation_mode: ctx.punctuation_mode,
            render_size: ctx.render_size,
            line_count: ctx.line_count(),
            runs,
        }
    }

    pub fn to_json(&self) -> Result<String, StoneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl RunSnapshot {
    fn new(run: &Run, font_family: String, font_size: f32, direction: Direction) -> Self {
        Self {
            ch: run.ch,
            script: run.script,
            font_id: run.font_id,
            font_family,
            font_size,
            position: run.position,
            frame: run.frame,
            line: run.line,
            orientation: run.orientation(direction),
            punctuation_scale: run.punctuation_scale,
            punctuation_offset: run.punctuation_offset,
        }
    }
}

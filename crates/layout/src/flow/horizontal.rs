use crate::context::{LayoutContext, Run};
use crate::kinsoku::KinsokuEngine;
use crate::punctuation;
use stone_types::{Point, Rect};

/// Pen state while filling lines left to right.
#[derive(Debug, Clone, Copy)]
struct LineCursor {
    x: f32,
    /// Baseline of the current line.
    y: f32,
    line: usize,
    line_start: usize,
}

impl LineCursor {
    fn new(font_size: f32) -> Self {
        Self {
            x: 0.0,
            y: font_size,
            line: 0,
            line_start: 0,
        }
    }

    fn new_line(&mut self, line_pitch: f32, next_start: usize) {
        self.x = 0.0;
        self.y += line_pitch;
        self.line += 1;
        self.line_start = next_start;
    }
}

/// Left-to-right, top-to-bottom flow with kinsoku and punctuation compaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HorizontalFlow;

impl HorizontalFlow {
    pub fn layout(&self, ctx: &mut LayoutContext) {
        punctuation::apply(&mut ctx.runs, ctx.punctuation_mode);

        let font_size = ctx.font_size;
        let line_pitch = ctx.line_height_px();
        let max_width = ctx.render_size.width;
        let kinsoku = KinsokuEngine::new(&ctx.kinsoku_rules, ctx.kinsoku_enabled);

        let mut cursor = LineCursor::new(font_size);
        let mut i = 0;
        while i < ctx.runs.len() {
            if ctx.runs[i].is_newline() {
                let run = &mut ctx.runs[i];
                run.position = Point::new(cursor.x, cursor.y);
                run.frame = Rect::new(cursor.x, cursor.y - font_size, 0.0, font_size);
                run.line = cursor.line;
                cursor.new_line(line_pitch, i + 1);
                i += 1;
                continue;
            }

            let width = punctuation::adjusted_width(&ctx.runs[i]);
            // A run alone on its line is placed even when it does not fit
            if cursor.x + width > max_width && i > cursor.line_start {
                let end =
                    kinsoku.adjust_line_end(&ctx.runs, &ctx.tokens, cursor.line_start, i - 1);
                log::trace!(
                    "line {} overflows at run {}, ends at run {}",
                    cursor.line,
                    i,
                    end
                );

                cursor.x = 0.0;
                for run in &mut ctx.runs[cursor.line_start..=end] {
                    place(run, &mut cursor, font_size);
                }
                cursor.new_line(line_pitch, end + 1);
                i = end + 1;
                continue;
            }

            place(&mut ctx.runs[i], &mut cursor, font_size);
            i += 1;
        }

        log::debug!(
            "Horizontal layout: {} runs on {} lines",
            ctx.runs.len(),
            ctx.line_count()
        );
    }
}

fn place(run: &mut Run, cursor: &mut LineCursor, font_size: f32) {
    let width = punctuation::adjusted_width(run);
    let x = punctuation::adjusted_x(run, cursor.x, font_size);
    run.position = Point::new(x, cursor.y);
    run.frame = Rect::new(x, cursor.y - font_size, width, font_size);
    run.line = cursor.line;
    cursor.x += width;
}

use crate::context::{LayoutContext, Run};
use crate::unicode;
use stone_types::{Point, Rect};

/// Longest digit group set horizontally inside a vertical column.
const TATE_CHU_YOKO_MAX_DIGITS: usize = 2;

/// Pen state while filling columns top to bottom.
#[derive(Debug, Clone, Copy)]
struct ColumnCursor {
    /// Left edge of the current column.
    x: f32,
    y: f32,
    line: usize,
}

impl ColumnCursor {
    fn new_column(&mut self, column_pitch: f32) {
        self.y = 0.0;
        self.x -= column_pitch;
        self.line += 1;
    }

    /// Starts a new column when `height` does not fit below the pen.
    fn fit(&mut self, height: f32, max_height: f32, column_pitch: f32) {
        if self.y + height > max_height {
            self.new_column(column_pitch);
        }
    }
}

/// Top-to-bottom, right-to-left flow.
///
/// Columns are `line_height_px` apart and start at the right edge. Digit
/// groups of one or two digits share a single upright square cell
/// (tate-chu-yoko). Kinsoku and punctuation compaction are not applied here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerticalFlow;

impl VerticalFlow {
    pub fn layout(&self, ctx: &mut LayoutContext) {
        let font_size = ctx.font_size;
        let column_pitch = ctx.line_height_px();
        let max_height = ctx.render_size.height;

        let mut cursor = ColumnCursor {
            x: ctx.render_size.width - font_size,
            y: 0.0,
            line: 0,
        };

        for run in ctx.runs.iter_mut() {
            run.punctuation_offset = 0.0;
            run.punctuation_scale = 1.0;
        }

        let mut i = 0;
        while i < ctx.runs.len() {
            if ctx.runs[i].is_newline() {
                let run = &mut ctx.runs[i];
                run.position = Point::new(cursor.x, cursor.y);
                run.frame = Rect::new(cursor.x, cursor.y, font_size, 0.0);
                run.line = cursor.line;
                cursor.new_column(column_pitch);
                i += 1;
                continue;
            }

            let group_len = digit_group_len(&ctx.runs, i);
            // A digit cell never breaks the column, even past the bottom edge.
            if group_len > 0 && group_len <= TATE_CHU_YOKO_MAX_DIGITS {
                place_tate_chu_yoko(&mut ctx.runs[i..i + group_len], &cursor, font_size);
                cursor.y += font_size;
                i += group_len;
                continue;
            }

            let height = ctx.runs[i].advance.height;
            cursor.fit(height, max_height, column_pitch);
            let run = &mut ctx.runs[i];
            run.position = Point::new(cursor.x + font_size / 2.0, cursor.y + height / 2.0);
            run.frame = Rect::new(cursor.x, cursor.y, font_size, height);
            run.line = cursor.line;
            cursor.y += height;
            i += 1;
        }

        log::debug!(
            "Vertical layout: {} runs in {} columns",
            ctx.runs.len(),
            ctx.line_count()
        );
    }
}

/// Sets `digits` side by side, centred in one square cell at the pen.
///
/// Every digit gets the whole cell as its frame; positions are the centres of
/// the individual glyphs.
fn place_tate_chu_yoko(digits: &mut [Run], cursor: &ColumnCursor, font_size: f32) {
    let total: f32 = digits.iter().map(|run| run.advance.width).sum();
    let mut pen = cursor.x + (font_size - total) / 2.0;
    let cell = Rect::new(cursor.x, cursor.y, font_size, font_size);

    for run in digits {
        run.position = Point::new(pen + run.advance.width / 2.0, cursor.y + font_size / 2.0);
        run.frame = cell;
        run.line = cursor.line;
        pen += run.advance.width;
    }
}

/// Length of the digit group starting at `index`, or 0 when `runs[index]` is
/// not the first digit of a group.
fn digit_group_len(runs: &[Run], index: usize) -> usize {
    if index > 0 && unicode::is_digit(runs[index - 1].ch) {
        return 0;
    }
    runs[index..]
        .iter()
        .take_while(|run| unicode::is_digit(run.ch))
        .count()
}

/// Whether `runs[index]` is a digit whose maximal digit group has at most two
/// digits.
pub fn is_tate_chu_yoko(runs: &[Run], index: usize) -> bool {
    let is_digit_at = |i: usize| runs.get(i).is_some_and(|run| unicode::is_digit(run.ch));
    if !is_digit_at(index) {
        return false;
    }

    let before = (0..index).rev().take_while(|&i| is_digit_at(i)).count();
    let after = (index + 1..runs.len())
        .take_while(|&i| is_digit_at(i))
        .count();
    before + 1 + after <= TATE_CHU_YOKO_MAX_DIGITS
}

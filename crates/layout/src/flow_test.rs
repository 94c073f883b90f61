#![cfg(test)]

use crate::flow::is_tate_chu_yoko;
use crate::kinsoku::KinsokuRules;
use crate::test_utils::layout_text;
use stone_types::{Direction, Point, PunctuationMode, Rect, Size};

const FS: f32 = 16.0;
// Line pitch for FS at the default 1.5 multiplier
const PITCH: f32 = 24.0;

fn horizontal(text: &str, width: f32) -> crate::LayoutEngine {
    layout_text(text, FS, width, 600.0, Direction::LrTb)
}

fn vertical(text: &str, height: f32) -> crate::LayoutEngine {
    layout_text(text, FS, 200.0, height, Direction::TbRl)
}

#[test]
fn test_horizontal_wraps_at_viewport_width() {
    // 80px holds exactly five full-width cells
    let engine = horizontal("あいうえおかきくけこ", 80.0);
    let ctx = engine.context();
    assert_eq!(ctx.line_texts(), vec!["あいうえお", "かきくけこ"]);

    let last_on_first = &ctx.runs[4];
    assert_eq!(last_on_first.position, Point::new(64.0, FS));
    assert_eq!(last_on_first.frame, Rect::new(64.0, 0.0, FS, FS));

    let first_on_second = &ctx.runs[5];
    assert_eq!(first_on_second.position, Point::new(0.0, FS + PITCH));
    assert_eq!(first_on_second.frame, Rect::new(0.0, PITCH, FS, FS));
    assert_eq!(first_on_second.line, 1);
}

#[test]
fn test_kinsoku_keeps_brackets_with_their_content() {
    // Naive wrapping would put 「 at the end of the first line and 」。 at
    // the start of the second.
    let engine = horizontal("日本語の「本」。", 80.0);
    let ctx = engine.context();
    let lines = ctx.line_texts();
    assert_eq!(lines, vec!["日", "本", "語", "の「本」。"]);

    let rules = KinsokuRules::default();
    for line in &lines {
        let first = line.chars().next().unwrap();
        let last = line.chars().last().unwrap();
        assert!(!rules.is_not_starting(first), "line starts with {first}");
        assert!(!rules.is_not_ending(last), "line ends with {last}");
    }

    // 」 is halved ahead of 。, which keeps its full cell
    let close = &ctx.runs[6];
    assert_eq!(close.punctuation_scale, 0.5);
    assert_eq!(close.frame, Rect::new(48.0, 3.0 * PITCH, 8.0, FS));
    assert_eq!(ctx.runs[7].position.x, 56.0);
}

#[test]
fn test_kinsoku_disabled_breaks_by_width_only() {
    let mut engine = horizontal("日本語の「本」。", 80.0);
    engine.set_kinsoku_enabled(false);
    assert_eq!(engine.context().line_texts(), vec!["日本語の「", "本」。"]);
}

#[test]
fn test_kinsoku_moves_run_before_not_starting_mark() {
    let mut engine = horizontal("あいうえ。かきく", 64.0);
    assert_eq!(
        engine.context().line_texts(),
        vec!["あ", "いうえ。", "かきく"]
    );

    engine.set_kinsoku_enabled(false);
    assert_eq!(engine.context().line_texts(), vec!["あいうえ", "。かきく"]);
}

#[test]
fn test_custom_kinsoku_rules() {
    let mut engine = horizontal("あいうえ。かきく", 64.0);
    engine.context_mut().kinsoku_rules = KinsokuRules::empty();
    engine.layout();
    assert_eq!(engine.context().line_texts(), vec!["あいうえ", "。かきく"]);
}

#[test]
fn test_newline_ends_line_at_pen() {
    let engine = horizontal("あいうえおか\nき", 80.0);
    let ctx = engine.context();
    assert_eq!(ctx.line_texts(), vec!["あいうえお", "か", "き"]);

    let newline = &ctx.runs[6];
    assert_eq!(newline.line, 1);
    assert_eq!(newline.position, Point::new(16.0, FS + PITCH));
    assert_eq!(newline.frame, Rect::new(16.0, PITCH, 0.0, FS));

    let after = &ctx.runs[7];
    assert_eq!(after.line, 2);
    assert_eq!(after.position, Point::new(0.0, FS + 2.0 * PITCH));
}

#[test]
fn test_consecutive_newlines_leave_empty_lines() {
    let engine = horizontal("あ\n\nい", 400.0);
    let ctx = engine.context();
    assert_eq!(ctx.line_texts(), vec!["あ", "", "い"]);
    assert_eq!(ctx.runs[3].position, Point::new(0.0, FS + 2.0 * PITCH));
}

#[test]
fn test_oversized_run_is_placed_alone() {
    let engine = horizontal("あい", 10.0);
    let ctx = engine.context();
    assert_eq!(ctx.line_texts(), vec!["あ", "い"]);
    assert_eq!(ctx.runs[1].position, Point::new(0.0, FS + PITCH));
}

#[test]
fn test_empty_text() {
    let engine = horizontal("", 80.0);
    assert!(engine.runs().is_empty());
    assert_eq!(engine.context().line_count(), 0);
}

#[test]
fn test_punctuation_modes_change_positions() {
    let mut engine = horizontal("あ。い", 400.0);
    // A lone closer keeps its cell in stone mode
    assert_eq!(engine.runs()[2].position.x, 32.0);

    // Half mode halves every advance, not just the punctuation
    engine.set_punctuation_mode(PunctuationMode::Half);
    assert_eq!(engine.runs()[1].frame, Rect::new(8.0, 0.0, 8.0, FS));
    assert_eq!(engine.runs()[2].position.x, 16.0);

    engine.set_punctuation_mode(PunctuationMode::Whole);
    assert_eq!(engine.runs()[1].frame.width, 16.0);
    assert_eq!(engine.runs()[2].position.x, 32.0);
}

#[test]
fn test_opener_after_closer_is_pulled_back() {
    let engine = horizontal("あ。「い", 400.0);
    let runs = engine.runs();
    assert_eq!(runs[1].frame, Rect::new(16.0, 0.0, 16.0, FS));
    // Drawn half a cell early, advancing half a cell
    assert_eq!(runs[2].punctuation_offset, -0.5);
    assert_eq!(runs[2].frame, Rect::new(24.0, 0.0, 8.0, FS));
    assert_eq!(runs[3].position.x, 40.0);
}

#[test]
fn test_layout_is_idempotent() {
    let mut engine = horizontal("吾輩は猫である。名前はまだ無い。\n「どこで生れたか」とんと見当がつかぬ。", 120.0);
    let first = engine.runs().to_vec();
    engine.layout();
    assert_eq!(engine.runs(), first.as_slice());
}

#[test]
fn test_lines_are_monotonic_and_share_baselines() {
    let engine = horizontal(
        "吾輩は猫である。名前はまだ無い。どこで生れたかとんと見当がつかぬ。\n何でも薄暗いじめじめした所でニャーニャー泣いていた事だけは記憶している。",
        100.0,
    );
    let ctx = engine.context();
    let mut previous = 0;
    for run in &ctx.runs {
        assert!(run.line >= previous);
        assert!(run.line <= previous + 1);
        previous = run.line;
        assert_eq!(run.position.y, FS + run.line as f32 * PITCH);
    }
    for line in 0..ctx.line_count() {
        let width: f32 = ctx
            .run_indexes_for_line(line)
            .iter()
            .map(|&i| ctx.runs[i].frame.width)
            .sum();
        assert!(width <= 100.0 || ctx.run_indexes_for_line(line).len() == 1);
    }
}

#[test]
fn test_render_size_change_reflows() {
    let mut engine = horizontal("あいうえ", 400.0);
    assert_eq!(engine.context().line_count(), 1);
    engine.set_render_size(Size::new(48.0, 600.0));
    assert_eq!(engine.context().line_texts(), vec!["あいう", "え"]);
}

#[test]
fn test_two_digits_share_one_square_cell() {
    let engine = vertical("25年", 400.0);
    let runs = engine.runs();
    let cell = Rect::new(184.0, 0.0, FS, FS);

    assert_eq!(runs[0].frame, cell);
    assert_eq!(runs[1].frame, cell);
    assert_eq!(runs[0].position, Point::new(188.0, 8.0));
    assert_eq!(runs[1].position, Point::new(196.0, 8.0));

    // The following run starts one cell down
    assert_eq!(runs[2].frame, Rect::new(184.0, FS, FS, PITCH));
    assert_eq!(runs[2].position, Point::new(192.0, FS + PITCH / 2.0));
}

#[test]
fn test_single_digit_is_centred_in_a_square_cell() {
    let engine = vertical("第7", 400.0);
    let digit = &engine.runs()[1];
    assert_eq!(digit.frame, Rect::new(184.0, PITCH, FS, FS));
    assert_eq!(digit.position, Point::new(192.0, PITCH + 8.0));
}

#[test]
fn test_long_numbers_stack() {
    let engine = vertical("123", 400.0);
    let runs = engine.runs();
    for (i, run) in runs.iter().enumerate() {
        let y = i as f32 * PITCH;
        assert_eq!(run.frame, Rect::new(184.0, y, FS, PITCH));
        assert_eq!(run.position, Point::new(192.0, y + PITCH / 2.0));
    }
}

#[test]
fn test_tate_chu_yoko_eligibility() {
    let engine = vertical("明治25年2026", 400.0);
    let runs = engine.runs();
    assert!(!is_tate_chu_yoko(runs, 0));
    assert!(is_tate_chu_yoko(runs, 2));
    assert!(is_tate_chu_yoko(runs, 3));
    assert!(!is_tate_chu_yoko(runs, 4));
    for i in 5..9 {
        assert!(!is_tate_chu_yoko(runs, i));
    }
    assert!(!is_tate_chu_yoko(runs, 42));
}

#[test]
fn test_vertical_newline_starts_next_column() {
    let engine = vertical("あ\nい", 400.0);
    let runs = engine.runs();
    assert_eq!(runs[0].frame, Rect::new(184.0, 0.0, FS, PITCH));
    assert_eq!(runs[0].position, Point::new(192.0, 12.0));

    assert_eq!(runs[1].line, 0);
    assert_eq!(runs[1].position, Point::new(184.0, PITCH));
    assert_eq!(runs[1].frame, Rect::new(184.0, PITCH, FS, 0.0));

    assert_eq!(runs[2].line, 1);
    assert_eq!(runs[2].frame, Rect::new(160.0, 0.0, FS, PITCH));
}

#[test]
fn test_vertical_column_overflow() {
    let engine = vertical("あいう", 50.0);
    let runs = engine.runs();
    assert_eq!(runs[1].frame.y, PITCH);
    assert_eq!(runs[2].line, 1);
    assert_eq!(runs[2].frame, Rect::new(160.0, 0.0, FS, PITCH));
}

#[test]
fn test_tate_chu_yoko_cell_stays_in_column() {
    let engine = vertical("あ25", 30.0);
    let runs = engine.runs();
    let cell = Rect::new(184.0, 24.0, FS, FS);
    assert_eq!(runs[1].frame, cell);
    assert_eq!(runs[2].frame, cell);
    assert_eq!(runs[1].line, 0);
    assert_eq!(runs[2].line, 0);
}

#[test]
fn test_run_after_tate_chu_yoko_cell_takes_overflow_test() {
    // The cell ends at 40, past the 30px viewport
    let engine = vertical("あ25い", 30.0);
    let runs = engine.runs();
    assert_eq!(runs[3].line, 1);
    assert_eq!(runs[3].frame, Rect::new(160.0, 0.0, FS, 24.0));
}

#[test]
fn test_run_taller_than_viewport_opens_a_new_column() {
    let engine = vertical("あ", 20.0);
    let run = &engine.runs()[0];
    assert_eq!(run.line, 1);
    assert_eq!(run.frame, Rect::new(160.0, 0.0, FS, 24.0));
}

#[test]
fn test_vertical_skips_punctuation_compaction() {
    let mut engine = horizontal("。「", 400.0);
    assert_eq!(engine.runs()[1].punctuation_scale, 0.5);

    engine.set_direction(Direction::TbRl);
    let runs = engine.runs();
    assert!(runs.iter().all(|r| r.punctuation_scale == 1.0));
    assert!(runs.iter().all(|r| r.punctuation_offset == 0.0));
    assert_eq!(runs[0].position, Point::new(192.0, 12.0));
    assert_eq!(runs[1].position, Point::new(192.0, 36.0));
}

#[test]
fn test_direction_switch_relays_existing_runs() {
    let mut engine = layout_text("あいう", FS, 200.0, 600.0, Direction::LrTb);
    let horizontal_runs = engine.runs().to_vec();
    assert_eq!(horizontal_runs[2].position, Point::new(32.0, FS));

    engine.set_direction(Direction::TbRl);
    assert_eq!(engine.flow().direction(), Direction::TbRl);
    assert_eq!(engine.runs()[2].frame, Rect::new(184.0, 2.0 * PITCH, FS, PITCH));

    engine.set_direction(Direction::LrTb);
    assert_eq!(engine.runs(), horizontal_runs.as_slice());
}

#[test]
fn test_reparse_resets_previous_text() {
    let mut engine = horizontal("あいうえおかきくけこ", 80.0);
    engine.set_text("さし").unwrap();
    assert_eq!(engine.context().line_texts(), vec!["さし"]);
    assert_eq!(engine.context().tokens.len(), 1);
}

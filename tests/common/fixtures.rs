use std::collections::HashMap;
use stone::{Direction, FontOverride, LayoutConfig, Script};

/// Mixed kana, kanji, brackets and punctuation.
pub const SOSEKI: &str = "吾輩は猫である。名前はまだ無い。\nどこで生れたかとんと見当がつかぬ。何でも薄暗いじめじめした所で「ニャーニャー」泣いていた事だけは記憶している。";

/// Dates and counts for tate-chu-yoko.
pub const DATES: &str = "明治38年1月、第1章を発表。全11章、2026年に再版。";

/// A configuration where every script is set at `font_size` exactly.
pub fn uniform_config(font_size: f32, width: f32, height: f32, direction: Direction) -> LayoutConfig {
    let fonts: HashMap<Script, FontOverride> = Script::ALL
        .iter()
        .map(|&script| {
            (
                script,
                FontOverride {
                    family: None,
                    scale: Some(1.0),
                },
            )
        })
        .collect();

    LayoutConfig {
        font_size,
        width,
        height,
        direction,
        fonts,
        ..LayoutConfig::default()
    }
}

/// Roughly `len` characters of running text.
pub fn long_text(len: usize) -> String {
    SOSEKI.chars().cycle().take(len).collect()
}

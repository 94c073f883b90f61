//! Unicode character classification.

use stone_types::Script;

type Range = (u32, u32);

const HIRAGANA: Range = (0x3040, 0x309F);
const KATAKANA: Range = (0x30A0, 0x30FF);
const KATAKANA_PHONETIC_EXTENSIONS: Range = (0x31F0, 0x31FF);
const CJK_UNIFIED: Range = (0x4E00, 0x9FFF);
const CJK_COMPATIBILITY: Range = (0x3300, 0x33FF);

const EMOTICONS: Range = (0x1F600, 0x1F64F);
const MISC_SYMBOLS_PICTOGRAPHS: Range = (0x1F300, 0x1F5FF);
const DINGBATS: Range = (0x2700, 0x27BF);

const JAPANESE_RANGES: [Range; 5] = [
    HIRAGANA,
    KATAKANA,
    KATAKANA_PHONETIC_EXTENSIONS,
    CJK_UNIFIED,
    CJK_COMPATIBILITY,
];
const EMOJI_RANGES: [Range; 3] = [EMOTICONS, MISC_SYMBOLS_PICTOGRAPHS, DINGBATS];

#[inline]
fn in_any(code: u32, ranges: &[Range]) -> bool {
    ranges
        .iter()
        .any(|&(start, end)| code >= start && code <= end)
}

/// Classifies a character into the script that picks its font.
pub fn script_of(ch: char) -> Script {
    let code = ch as u32;
    if in_any(code, &JAPANESE_RANGES) {
        Script::Japanese
    } else if in_any(code, &EMOJI_RANGES) {
        Script::Emoji
    } else {
        Script::Latin
    }
}

pub fn is_newline(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}

/// Digits eligible for tate-chu-yoko.
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

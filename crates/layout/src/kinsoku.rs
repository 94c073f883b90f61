//! Line-breaking prohibitions (kinsoku shori).
//!
//! Some characters may not start a line (closing brackets, small kana, most
//! punctuation) and some may not end one (opening brackets and quotes). When a
//! break candidate violates either rule the break retreats to the start of the
//! token owning the preceding run, never below the start of the line.

use crate::context::{Run, Token};
use std::collections::HashSet;

const NOT_STARTING: &[char] = &[
    ' ', ',', '.', '?', ':', ';', '!', ')', '）', ']', '］', '｝', '、', '〕', '〉', '》', '」',
    '』', '】', '〙', '〗', '〟', '\u{2019}', '\u{201D}', '｠', '»', 'ヽ', 'ヾ', 'ァ', 'ィ', 'ゥ',
    'ェ', 'ォ', 'ッ', 'ャ', 'ュ', 'ョ', 'ヮ', 'ヵ', 'ヶ', 'ぁ', 'ぃ', 'ぅ', 'ぇ', 'ぉ', 'っ', 'ゃ',
    'ゅ', 'ょ', 'ゎ', 'ゕ', 'ゖ', 'ㇰ', 'ㇱ', 'ㇲ', 'ㇳ', 'ㇴ', 'ㇵ', 'ㇶ', 'ㇷ', 'ㇸ', 'ㇹ', 'ㇺ',
    'ㇻ', 'ㇼ', 'ㇽ', 'ㇾ', 'ㇿ', '々', '〻', '？', '‼', '⁇', '⁈', '⁉', '。', '™',
];

const NOT_ENDING: &[char] = &[
    '(', '（', '[', '［', '｛', '〔', '〈', '《', '「', '『', '【', '〘', '〖', '〝', '\u{2018}',
    '\u{201C}', '｟', '«', '"', '\'',
];

/// Marks allowed to hang past the line end. Not enforced by the break decision yet.
const HANGING: &[char] = &['、', '。'];

/// Character membership of the three kinsoku classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KinsokuRules {
    not_starting: HashSet<char>,
    not_ending: HashSet<char>,
    hanging: HashSet<char>,
}

impl Default for KinsokuRules {
    fn default() -> Self {
        Self {
            not_starting: NOT_STARTING.iter().copied().collect(),
            not_ending: NOT_ENDING.iter().copied().collect(),
            hanging: HANGING.iter().copied().collect(),
        }
    }
}

impl KinsokuRules {
    /// Rules with every class empty.
    pub fn empty() -> Self {
        Self {
            not_starting: HashSet::new(),
            not_ending: HashSet::new(),
            hanging: HashSet::new(),
        }
    }

    pub fn with_not_starting(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.not_starting.extend(chars);
        self
    }

    pub fn is_not_starting(&self, ch: char) -> bool {
        self.not_starting.contains(&ch)
    }

    pub fn is_not_ending(&self, ch: char) -> bool {
        self.not_ending.contains(&ch)
    }

    pub fn is_hanging(&self, ch: char) -> bool {
        self.hanging.contains(&ch)
    }
}

/// Borrowed view that decides where a line may end.
#[derive(Debug, Clone, Copy)]
pub struct KinsokuEngine<'a> {
    rules: &'a KinsokuRules,
    enabled: bool,
}

impl<'a> KinsokuEngine<'a> {
    pub fn new(rules: &'a KinsokuRules, enabled: bool) -> Self {
        Self { rules, enabled }
    }

    /// Returns the last run index the line starting at `line_start` may keep,
    /// given that `candidate` was the last run that fit.
    ///
    /// The result is never below `line_start` and never above `candidate`.
    pub fn adjust_line_end(
        &self,
        runs: &[Run],
        tokens: &[Token],
        line_start: usize,
        candidate: usize,
    ) -> usize {
        if !self.enabled {
            return candidate;
        }
        if runs.get(candidate).is_some_and(Run::is_newline) {
            return candidate;
        }

        let mut end = candidate;
        while end > line_start {
            let ends_badly = runs
                .get(end)
                .is_some_and(|run| self.rules.is_not_ending(run.ch));
            let next_starts_badly = runs
                .get(end + 1)
                .is_some_and(|run| self.rules.is_not_starting(run.ch));

            if !ends_badly && !next_starts_badly {
                break;
            }

            let retreat = self.token_start_before(runs, tokens, end, line_start);
            log::trace!(
                "kinsoku: line {}..={} retreats to {} ({:?} | {:?})",
                line_start,
                end,
                retreat,
                runs.get(end).map(|r| r.ch),
                runs.get(end + 1).map(|r| r.ch)
            );
            end = retreat;
        }
        end
    }

    /// Start of the token owning `runs[end - 1]`, clamped to the line start.
    fn token_start_before(
        &self,
        runs: &[Run],
        tokens: &[Token],
        end: usize,
        line_start: usize,
    ) -> usize {
        let first = runs
            .get(end - 1)
            .and_then(|run| tokens.get(run.token_id))
            .and_then(Token::first_run)
            .unwrap_or(end - 1);
        // A stale token table must still make progress
        first.min(end - 1).max(line_start)
    }
}

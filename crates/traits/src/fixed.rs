//! Static-table metrics for environments without font files.
//!
//! Character widths are in em units. ASCII uses a Times-like proportional
//! table, East Asian wide characters and emoji take a full em, everything else
//! falls back to `average_char_width`.

use crate::metrics::{GlyphMetrics, MetricsError, MetricsProvider};
use std::collections::HashSet;

/// Ascent and descent as a fraction of the em size.
const ASCENT_EM: f32 = 0.88;
const DESCENT_EM: f32 = 0.12;

/// `ASCII_WIDTHS[i]` = width of ASCII character `(i + 32)`, covering 0x20 (space) through 0x7E (~).
#[rustfmt::skip]
static ASCII_WIDTHS: [f32; 95] = [
    // sp    !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
    0.250, 0.333, 0.408, 0.500, 0.500, 0.833, 0.778, 0.180, 0.333, 0.333, 0.500, 0.564, 0.250, 0.333, 0.250, 0.278,
    // 0     1      2      3      4      5      6      7      8      9
    0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500,
    // :     ;      <      =      >      ?      @
    0.278, 0.278, 0.564, 0.564, 0.564, 0.444, 0.921,
    // A     B      C      D      E      F      G      H      I      J      K      L      M
    0.722, 0.667, 0.667, 0.722, 0.611, 0.556, 0.722, 0.722, 0.333, 0.389, 0.722, 0.611, 0.889,
    // N     O      P      Q      R      S      T      U      V      W      X      Y      Z
    0.722, 0.722, 0.556, 0.722, 0.667, 0.556, 0.611, 0.722, 0.722, 0.944, 0.722, 0.722, 0.611,
    // [     \      ]      ^      _      `
    0.333, 0.278, 0.333, 0.469, 0.500, 0.333,
    // a     b      c      d      e      f      g      h      i      j      k      l      m
    0.444, 0.500, 0.444, 0.500, 0.444, 0.333, 0.500, 0.500, 0.278, 0.278, 0.500, 0.278, 0.778,
    // n     o      p      q      r      s      t      u      v      w      x      y      z
    0.500, 0.500, 0.500, 0.500, 0.333, 0.389, 0.278, 0.500, 0.500, 0.722, 0.500, 0.500, 0.444,
    // {     |      }      ~
    0.480, 0.200, 0.480, 0.541,
];

/// Code point ranges rendered one em wide.
static WIDE_RANGES: &[(u32, u32)] = &[
    (0x1100, 0x115F),   // Hangul Jamo
    (0x2700, 0x27BF),   // Dingbats
    (0x2E80, 0x303F),   // CJK radicals, symbols and punctuation
    (0x3040, 0x33FF),   // Kana, Bopomofo, compatibility
    (0x3400, 0x4DBF),   // CJK extension A
    (0x4E00, 0x9FFF),   // CJK unified ideographs
    (0xAC00, 0xD7A3),   // Hangul syllables
    (0xF900, 0xFAFF),   // CJK compatibility ideographs
    (0xFE30, 0xFE4F),   // CJK compatibility forms
    (0xFF01, 0xFF60),   // Fullwidth forms
    (0xFFE0, 0xFFE6),   // Fullwidth signs
    (0x1F300, 0x1F64F), // Pictographs and emoticons
];

/// Deterministic metrics provider backed by static tables.
///
/// Families listed through [`FixedMetricsProvider::with_unavailable_family`]
/// fail to measure, which lets callers exercise the fatal-configuration path.
#[derive(Debug, Clone)]
pub struct FixedMetricsProvider {
    /// Fallback width for characters outside the ASCII table and wide ranges.
    pub average_char_width: f32,
    unavailable: HashSet<String>,
}

impl Default for FixedMetricsProvider {
    fn default() -> Self {
        Self {
            average_char_width: 0.5,
            unavailable: HashSet::new(),
        }
    }
}

impl FixedMetricsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a family list as missing. Measuring with it returns `FontNotFound`.
    pub fn with_unavailable_family(mut self, family: impl Into<String>) -> Self {
        self.unavailable.insert(family.into());
        self
    }

    /// Width of `ch` in em units.
    pub fn em_width(&self, ch: char) -> f32 {
        let code = ch as u32;
        if (0x20..=0x7E).contains(&code) {
            return ASCII_WIDTHS[(code - 0x20) as usize];
        }
        if WIDE_RANGES
            .iter()
            .any(|&(start, end)| (start..=end).contains(&code))
        {
            return 1.0;
        }
        self.average_char_width
    }
}

impl MetricsProvider for FixedMetricsProvider {
    fn measure(
        &self,
        ch: char,
        font_family: &str,
        font_size: f32,
    ) -> Result<GlyphMetrics, MetricsError> {
        if self.unavailable.contains(font_family) {
            return Err(MetricsError::FontNotFound {
                family: font_family.to_string(),
            });
        }
        Ok(GlyphMetrics::from_advance(
            self.em_width(ch) * font_size,
            ASCENT_EM * font_size,
            DESCENT_EM * font_size,
        ))
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

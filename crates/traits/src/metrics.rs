//! MetricsProvider trait for abstracting glyph measurement.
//!
//! The layout engine never talks to a font rasterizer directly. It asks a
//! provider for the metrics of one character in one font family at one size,
//! and the answer must depend on those three inputs only, so callers are free
//! to memoize it.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Error type for glyph measurement.
///
/// Every variant is fatal for the parse that triggered it: substituting a
/// zero-width glyph would silently corrupt line breaking.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("No font available for family list '{family}'")]
    FontNotFound { family: String },

    #[error("Font data for '{family}' could not be parsed: {message}")]
    InvalidFontData { family: String, message: String },

    #[error("Metrics provider unavailable: {0}")]
    Unavailable(String),
}

/// Measured geometry of a single glyph, in pixels at the requested size.
///
/// Advance width plus the ink box around the pen position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlyphMetrics {
    /// Advance width.
    pub width: f32,
    pub bounding_box_left: f32,
    pub bounding_box_right: f32,
    pub bounding_box_ascent: f32,
    pub bounding_box_descent: f32,
}

impl GlyphMetrics {
    /// Metrics for a glyph whose ink box equals its advance box.
    pub fn from_advance(width: f32, ascent: f32, descent: f32) -> Self {
        Self {
            width,
            bounding_box_left: 0.0,
            bounding_box_right: width,
            bounding_box_ascent: ascent,
            bounding_box_descent: descent,
        }
    }
}

/// A source of glyph metrics.
///
/// # Implementations
///
/// - `FixedMetricsProvider`: static width tables, no font files needed
/// - `FontFileMetricsProvider` (layout crate, `system-fonts` feature): reads
///   advances and bounding boxes out of real font files
pub trait MetricsProvider: Send + Sync + Debug {
    /// Measure `ch` set in `font_family` at `font_size` pixels.
    ///
    /// `font_family` is a CSS-style family list such as
    /// `"Noto Serif JP", "Yu Mincho", serif`.
    fn measure(&self, ch: char, font_family: &str, font_size: f32)
    -> Result<GlyphMetrics, MetricsError>;

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

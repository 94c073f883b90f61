use crate::LayoutError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stone_types::{Direction, PunctuationMode, Script, Size, TextAlign};

/// Per-script font replacement. Unset fields keep the built-in mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontOverride {
    pub family: Option<String>,
    pub scale: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Base font size in pixels. Script scales multiply it.
    pub font_size: f32,
    /// Line pitch as a multiple of `font_size`.
    pub line_height: f32,
    pub direction: Direction,
    pub text_align: TextAlign,
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
    /// Enables line-start/line-end prohibitions.
    pub kinsoku: bool,
    pub punctuation_mode: PunctuationMode,
    /// The maximum number of distinct glyph measurements the metrics cache keeps
    /// before it is reset.
    ///
    /// Defaults to `10000`.
    pub cache_capacity: usize,
    pub fonts: HashMap<Script, FontOverride>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            font_size: 18.0,
            line_height: 1.5,
            direction: Direction::LrTb,
            text_align: TextAlign::Leading,
            width: 800.0,
            height: 600.0,
            kinsoku: true,
            punctuation_mode: PunctuationMode::Stone,
            cache_capacity: 10000,
            fonts: HashMap::new(),
        }
    }
}

impl LayoutConfig {
    pub fn render_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Rejects values the layout flows cannot make progress with.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "font size must be positive, got {}",
                self.font_size
            )));
        }
        if !self.line_height.is_finite() || self.line_height <= 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "line height must be positive, got {}",
                self.line_height
            )));
        }
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "viewport width must be non-negative, got {}",
                self.width
            )));
        }
        if !self.height.is_finite() || self.height < 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "viewport height must be non-negative, got {}",
                self.height
            )));
        }
        for (script, font) in &self.fonts {
            if let Some(scale) = font.scale
                && (!scale.is_finite() || scale <= 0.0)
            {
                return Err(LayoutError::InvalidConfig(format!(
                    "font scale for {:?} must be positive, got {}",
                    script, scale
                )));
            }
        }
        Ok(())
    }
}

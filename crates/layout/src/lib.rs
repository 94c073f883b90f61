use stone_traits::MetricsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Glyph measurement failed: {0}")]
    Metrics(#[from] MetricsError),
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
    #[error("Generic layout error: {0}")]
    Generic(String),
}

pub mod cache;
pub mod config;
pub mod context;
pub mod engine;
pub mod flow;
pub mod fonts;
pub mod kinsoku;
pub mod parser;
pub mod punctuation;
pub mod unicode;

pub use self::cache::{CacheStats, MetricsCache};
pub use self::config::{FontOverride, LayoutConfig};
pub use self::context::{LayoutContext, Orientation, Run, Token};
pub use self::engine::LayoutEngine;
pub use self::flow::{HorizontalFlow, LayoutFlow, VerticalFlow};
pub use self::fonts::FontManager;
#[cfg(feature = "system-fonts")]
pub use self::fonts::FontFileMetricsProvider;
pub use self::kinsoku::{KinsokuEngine, KinsokuRules};
pub use self::parser::Parser;
pub use self::punctuation::PunctuationLayout;

// Re-export shared types so callers need a single dependency
pub use stone_traits::{FixedMetricsProvider, GlyphMetrics, MetricsProvider};
pub use stone_types::{
    Direction, Point, PunctuationMode, PunctuationType, Rect, Script, Size, TextAlign,
};

#[cfg(test)]
mod flow_test;
#[cfg(test)]
mod test_utils;

use crate::config::{FontOverride, LayoutConfig};
use crate::context::LayoutContext;
use crate::engine::LayoutEngine;
use std::sync::Arc;
use stone_traits::FixedMetricsProvider;
use stone_types::{Direction, Script};

/// A configuration where every script is set at exactly `font_size`, so
/// full-width glyphs from the fixed provider are `font_size` wide.
pub fn uniform_config(font_size: f32, width: f32, height: f32, direction: Direction) -> LayoutConfig {
    let fonts = Script::ALL
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

pub fn uniform_context(font_size: f32, width: f32, height: f32) -> LayoutContext {
    LayoutContext::from_config(&uniform_config(font_size, width, height, Direction::LrTb))
}

/// Creates an engine over the fixed metrics table for testing purposes.
pub fn create_test_engine(config: &LayoutConfig) -> LayoutEngine {
    let _ = env_logger::builder().is_test(true).try_init();
    LayoutEngine::with_provider(config, Arc::new(FixedMetricsProvider::new()))
        .expect("test configuration is valid")
}

/// Lays `text` out with uniform scales and returns the engine.
pub fn layout_text(
    text: &str,
    font_size: f32,
    width: f32,
    height: f32,
    direction: Direction,
) -> LayoutEngine {
    let mut engine = create_test_engine(&uniform_config(font_size, width, height, direction));
    engine.set_text(text).expect("fixed metrics never fail");
    engine
}

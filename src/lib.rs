//! Japanese text layout.
//!
//! Text is split into one run per character, measured through a shared
//! metrics cache and placed by a horizontal (`lrTb`) or vertical (`tbRl`)
//! flow. Horizontal lines honour kinsoku prohibitions and compact CJK
//! punctuation; vertical columns set short numbers as tate-chu-yoko.

pub mod config;
pub mod error;
pub mod snapshot;

pub use config::{load_config, parse_config};
pub use error::StoneError;
pub use snapshot::{LayoutSnapshot, RunSnapshot};

pub use stone_layout::*;

use std::sync::Arc;

/// Lays `text` out with `config`, measuring through `provider`.
pub fn typeset(
    config: &LayoutConfig,
    provider: Arc<dyn MetricsProvider>,
    text: &str,
) -> Result<LayoutEngine, StoneError> {
    let mut engine = LayoutEngine::with_provider(config, provider)?;
    engine.set_text(text)?;
    Ok(engine)
}

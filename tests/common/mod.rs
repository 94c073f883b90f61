pub mod fixtures;

use std::sync::Arc;
use stone::{FixedMetricsProvider, LayoutConfig, LayoutEngine, StoneError, typeset};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Lays `text` out with the fixed width table.
pub fn typeset_fixed(config: &LayoutConfig, text: &str) -> Result<LayoutEngine, StoneError> {
    init_logging();
    typeset(config, Arc::new(FixedMetricsProvider::new()), text)
}

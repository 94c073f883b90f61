//! Loading [`LayoutConfig`] from JSON.
//!
//! Every field is optional; missing fields take their defaults. The result is
//! validated before it is returned.

use crate::error::StoneError;
use std::fs;
use std::path::Path;
use stone_layout::LayoutConfig;

pub fn parse_config(json: &str) -> Result<LayoutConfig, StoneError> {
    let config: LayoutConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<LayoutConfig, StoneError> {
    let path = path.as_ref();
    log::debug!("Loading layout configuration from {}", path.display());
    let json = fs::read_to_string(path)?;
    parse_config(&json)
}

//! TOML-backed configuration files.
//!
//! Every key is optional; missing keys take their [`CaveConfig::default`] value and
//! unknown keys are rejected. The loaded config is not validated here, since hosts
//! commonly layer command-line overrides on top before generation.

use std::fs;
use std::path::Path;

use crate::config::CaveConfig;
use crate::error::ConfigLoadError;

pub fn load_config_from_file(path: &Path) -> Result<CaveConfig, ConfigLoadError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<CaveConfig, ConfigLoadError> {
    Ok(toml::from_str(content)?)
}

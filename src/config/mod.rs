//! Configuration loading and parsing for klone.
//!
//! This module handles:
//! - TOML config file parsing
//! - Config file location (flag, environment, default path)
//! - Defaults when no config file is present

pub mod loader;
pub mod parser;
pub mod types;

pub use loader::{CONFIG_ENV_VAR, LoadedConfig, default_config_path, load_config};
pub use parser::{parse_config_file, parse_config_str};
pub use types::{Config, PathReplace};

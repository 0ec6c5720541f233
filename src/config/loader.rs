use crate::config::parser::parse_config_file;
use crate::config::types::Config;
use crate::error::{KloneError, Result};
use std::path::{Path, PathBuf};

/// Environment variable naming the config file, checked when no `--config`
/// flag is given.
pub const CONFIG_ENV_VAR: &str = "KLONE_CONFIG";

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The file this config came from. `None` means built-in defaults.
	pub source: Option<PathBuf>,
}

/// Locate and load the configuration.
///
/// Search order:
/// 1. An explicit path (the `--config` flag) — must exist
/// 2. The `KLONE_CONFIG` environment variable — must exist
/// 3. `~/.klone.toml` — defaults are used when absent
///
/// Only this loader consults the environment; the resolution pipeline takes
/// the returned `Config` as an explicit parameter.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
	if let Some(path) = explicit {
		return load_required(path);
	}

	if let Ok(path) = std::env::var(CONFIG_ENV_VAR)
		&& !path.is_empty()
	{
		return load_required(Path::new(&path));
	}

	let path = default_config_path()?;
	if path.exists() {
		let config = parse_config_file(&path)?;
		Ok(LoadedConfig {
			config,
			source: Some(path),
		})
	} else {
		Ok(LoadedConfig {
			config: Config::default(),
			source: None,
		})
	}
}

fn load_required(path: &Path) -> Result<LoadedConfig> {
	if !path.exists() {
		return Err(KloneError::ConfigNotFound {
			path: path.to_path_buf(),
		});
	}

	let config = parse_config_file(path)?;
	Ok(LoadedConfig {
		config,
		source: Some(path.to_path_buf()),
	})
}

/// Get the default path of the user's config file.
pub fn default_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(KloneError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(".klone.toml"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn test_default_config_path() {
		let path = default_config_path();
		assert!(path.is_ok());
		assert!(path.unwrap().ends_with(".klone.toml"));
	}

	#[test]
	fn test_load_explicit_missing_file() {
		let result = load_config(Some(Path::new("/nonexistent/klone.toml")));
		assert!(matches!(result, Err(KloneError::ConfigNotFound { .. })));
	}

	#[test]
	fn test_load_explicit_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, r#"base_dir = "/srv/code""#).unwrap();

		let loaded = load_config(Some(file.path())).unwrap();
		assert_eq!(loaded.config.base_dir, "/srv/code");
		assert_eq!(loaded.source.as_deref(), Some(file.path()));
	}
}

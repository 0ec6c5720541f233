use std::path::PathBuf;

/// Library-level structured errors for klone.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
///
/// The URL classification errors carry fixed, user-facing message text: the
/// binary prefixes `Error: ` and prints them verbatim on stderr.
#[derive(Debug, thiserror::Error)]
pub enum KloneError {
	#[error("Missing URL argument.")]
	MissingUrl,

	#[error("Invalid URL schema. Only git@, ssh://git@, and https:// URLs are supported.")]
	InvalidScheme { url: String },

	#[error("Missing repository path in URL: {url}")]
	MissingPath { url: String },

	#[error("Config file not found: {path}")]
	ConfigNotFound { path: PathBuf },

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid clone_command: {command:?}")]
	InvalidCloneCommand { command: String },

	#[error("path_replace pattern must not be empty")]
	EmptyReplacePattern,

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,

	#[error("Failed to create directory: {path}")]
	CreateDirFailed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Clone command not found: {command}")]
	CommandNotFound { command: String },

	#[error("Clone command failed to start: {command}")]
	CommandFailed {
		command: String,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using KloneError.
pub type Result<T> = std::result::Result<T, KloneError>;

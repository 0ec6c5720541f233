use serde::Deserialize;
use std::collections::HashMap;

/// Top-level configuration from a klone config file.
///
/// Constructed once per invocation and passed by shared reference into the
/// resolution pipeline; nothing mutates it afterwards.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
	/// Directory all clones land under. A leading `~` expands to the
	/// invoking user's home directory.
	#[serde(default = "default_base_dir")]
	pub base_dir: String,

	/// Command used to clone, as a whitespace-separated template. The
	/// source URL and destination path are appended when it runs.
	#[serde(default = "default_clone_command")]
	pub clone_command: String,

	/// Host → alias substitutions for the first destination component.
	/// Lookup is exact-string; an alias value may contain `/` to span
	/// several components.
	#[serde(default)]
	pub domain_alias: HashMap<String, String>,

	/// Literal substring substitutions applied to each path segment, in
	/// declaration order.
	#[serde(default)]
	pub path_replace: Vec<PathReplace>,
}

/// One literal pattern/replacement pair for path segments.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PathReplace {
	/// Substring to search for in each segment.
	pub pattern: String,

	/// Text substituted for the first occurrence of `pattern`.
	pub replacement: String,
}

fn default_base_dir() -> String {
	"~/workspace".to_string()
}

fn default_clone_command() -> String {
	"git clone".to_string()
}

impl Default for Config {
	fn default() -> Self {
		Self {
			base_dir: default_base_dir(),
			clone_command: default_clone_command(),
			domain_alias: HashMap::new(),
			path_replace: Vec::new(),
		}
	}
}

impl Config {
	/// Validate field values that serde cannot check structurally.
	pub fn validate(&self) -> Result<(), crate::error::KloneError> {
		if self.clone_command.split_whitespace().next().is_none() {
			return Err(crate::error::KloneError::InvalidCloneCommand {
				command: self.clone_command.clone(),
			});
		}

		for replace in &self.path_replace {
			if replace.pattern.is_empty() {
				return Err(crate::error::KloneError::EmptyReplacePattern);
			}
		}

		Ok(())
	}
}

use crate::config::Config;
use crate::error::{KloneError, Result};
use std::path::PathBuf;

/// A fully resolved clone invocation: the command template, the source URL
/// exactly as the user gave it, and the destination it lands in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClonePlan {
	/// Whitespace-split tokens of the configured clone command. Never empty.
	pub command: Vec<String>,

	/// The source URL, exactly as the user gave it.
	pub url: String,

	/// Absolute destination path for the clone.
	pub destination: PathBuf,
}

impl ClonePlan {
	/// Build a plan from the configured clone command template.
	pub fn new(config: &Config, url: &str, destination: PathBuf) -> Result<Self> {
		let command: Vec<String> = config
			.clone_command
			.split_whitespace()
			.map(str::to_string)
			.collect();

		if command.is_empty() {
			return Err(KloneError::InvalidCloneCommand {
				command: config.clone_command.clone(),
			});
		}

		Ok(Self {
			command,
			url: url.to_string(),
			destination,
		})
	}

	/// The clone command template as a single display string.
	pub fn command_line(&self) -> String {
		self.command.join(" ")
	}
}

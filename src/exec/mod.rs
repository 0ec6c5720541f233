//! Clone command execution for klone.
//!
//! This module handles:
//! - Destination parent-directory creation
//! - Spawning the resolved clone command with proper stdio handling
//! - Exit code propagation

use crate::error::{KloneError, Result};
use crate::resolve::ClonePlan;
use std::process::{Command, ExitStatus, Stdio};

/// Execute a resolved clone plan.
///
/// This function:
/// - Creates the destination's parent directories
/// - Runs `<command...> <url> <destination>` with stdin, stdout, stderr
///   passed through to the child process
/// - Returns the exit status of the child process
pub fn execute_clone(plan: &ClonePlan) -> Result<ExitStatus> {
	if let Some(parent) = plan.destination.parent() {
		std::fs::create_dir_all(parent).map_err(|source| KloneError::CreateDirFailed {
			path: parent.to_path_buf(),
			source,
		})?;
	}

	let Some((program, args)) = plan.command.split_first() else {
		return Err(KloneError::InvalidCloneCommand {
			command: plan.command_line(),
		});
	};

	let mut cmd = Command::new(program);
	cmd.args(args)
		.arg(&plan.url)
		.arg(&plan.destination)
		.stdin(Stdio::inherit())
		.stdout(Stdio::inherit())
		.stderr(Stdio::inherit());

	let status = cmd.status().map_err(|source| {
		if source.kind() == std::io::ErrorKind::NotFound {
			KloneError::CommandNotFound {
				command: program.clone(),
			}
		} else {
			KloneError::CommandFailed {
				command: program.clone(),
				source,
			}
		}
	})?;

	Ok(status)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::Config;
	use std::path::PathBuf;

	fn plan_with_command(command: &str, destination: PathBuf) -> ClonePlan {
		let config = Config {
			clone_command: command.to_string(),
			..Default::default()
		};
		ClonePlan::new(&config, "https://github.com/user/repo", destination).unwrap()
	}

	#[cfg(unix)]
	#[test]
	fn test_execute_creates_parent_dirs() {
		let temp_dir = tempfile::tempdir().unwrap();
		let destination = temp_dir.path().join("github/user/repo");

		// "true" ignores the appended url/destination arguments
		let plan = plan_with_command("true", destination.clone());
		let status = execute_clone(&plan).unwrap();

		assert!(status.success());
		assert!(destination.parent().unwrap().is_dir());
		assert!(!destination.exists());
	}

	#[cfg(unix)]
	#[test]
	fn test_execute_propagates_exit_status() {
		let temp_dir = tempfile::tempdir().unwrap();
		let plan = plan_with_command("false", temp_dir.path().join("a/b"));

		let status = execute_clone(&plan).unwrap();
		assert!(!status.success());
	}

	#[test]
	fn test_execute_command_not_found() {
		let temp_dir = tempfile::tempdir().unwrap();
		let plan = plan_with_command(
			"nonexistent_clone_tool_12345",
			temp_dir.path().join("a/b"),
		);

		let result = execute_clone(&plan);
		assert!(matches!(result, Err(KloneError::CommandNotFound { .. })));
	}
}

use crate::error::{KloneError, Result};
use std::path::{Path, PathBuf};

/// Build the absolute destination path from the configured base directory,
/// the resolved host alias, and the rewritten path segments.
pub fn compose_destination(base_dir: &str, alias: &str, segments: &[String]) -> Result<PathBuf> {
	let mut destination = expand_base_dir(base_dir)?;
	destination.push(alias);
	for segment in segments {
		destination.push(segment);
	}
	Ok(destination)
}

/// Expand a leading `~` or `~/` in the base directory to the invoking
/// user's home directory. Any other leading-`~` form (e.g. `~user/...`)
/// stays literal.
fn expand_base_dir(base_dir: &str) -> Result<PathBuf> {
	if base_dir == "~" || base_dir.starts_with("~/") {
		let home = dirs::home_dir().ok_or(KloneError::HomeDirectoryNotFound)?;
		Ok(expand_tilde(base_dir, &home))
	} else {
		Ok(PathBuf::from(base_dir))
	}
}

fn expand_tilde(path: &str, home: &Path) -> PathBuf {
	if path == "~" {
		return home.to_path_buf();
	}
	match path.strip_prefix("~/") {
		Some(rest) => home.join(rest),
		None => PathBuf::from(path),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn seg(parts: &[&str]) -> Vec<String> {
		parts.iter().map(|p| p.to_string()).collect()
	}

	#[test]
	fn test_compose_absolute_base() {
		let dest = compose_destination("/workspace", "github", &seg(&["user", "repo"])).unwrap();
		assert_eq!(dest, PathBuf::from("/workspace/github/user/repo"));
	}

	#[test]
	fn test_compose_multi_component_alias() {
		let dest =
			compose_destination("/workspace", "custom/path", &seg(&["org", "project"])).unwrap();
		assert_eq!(dest, PathBuf::from("/workspace/custom/path/org/project"));
	}

	#[test]
	fn test_compose_deep_segments() {
		let dest = compose_destination(
			"/workspace",
			"gitlab",
			&seg(&["org", "team", "sub", "project"]),
		)
		.unwrap();
		assert_eq!(dest, PathBuf::from("/workspace/gitlab/org/team/sub/project"));
	}

	#[test]
	fn test_compose_tilde_base() {
		let home = dirs::home_dir().unwrap();
		let dest = compose_destination("~/code", "github", &seg(&["user", "repo"])).unwrap();
		assert_eq!(dest, home.join("code/github/user/repo"));
	}

	#[test]
	fn test_expand_tilde_alone() {
		let home = Path::new("/home/alice");
		assert_eq!(expand_tilde("~", home), PathBuf::from("/home/alice"));
	}

	#[test]
	fn test_expand_tilde_with_rest() {
		let home = Path::new("/home/alice");
		assert_eq!(
			expand_tilde("~/workspace", home),
			PathBuf::from("/home/alice/workspace")
		);
	}

	#[test]
	fn test_expand_other_tilde_forms_stay_literal() {
		let home = Path::new("/home/alice");
		assert_eq!(expand_tilde("~bob/code", home), PathBuf::from("~bob/code"));

		let dest = compose_destination("~bob/code", "github", &seg(&["user", "repo"])).unwrap();
		assert_eq!(dest, PathBuf::from("~bob/code/github/user/repo"));
	}

	#[test]
	fn test_no_trailing_separator() {
		let dest = compose_destination("/workspace", "github", &seg(&["user", "repo"])).unwrap();
		assert!(!dest.to_string_lossy().ends_with('/'));
	}
}

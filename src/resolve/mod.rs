//! Destination and command resolution for klone.
//!
//! This module handles:
//! - Domain aliasing and path-segment rewriting
//! - Destination path composition with tilde expansion
//! - Clone command templating
//!
//! The pipeline is pure: it takes the raw URL and a parsed [`Config`] and
//! produces a [`ClonePlan`], never touching process state. Each CLI binding
//! stays a thin argument-parsing and printing wrapper around [`plan_clone`].

pub mod command;
pub mod composer;
pub mod rewriter;

pub use command::ClonePlan;
pub use composer::compose_destination;
pub use rewriter::{host_alias, rewrite_segments};

use crate::config::Config;
use crate::error::Result;
use crate::url::RepoUrl;

/// Resolve a raw URL against the config into a ready-to-run clone plan.
pub fn plan_clone(raw_url: &str, config: &Config) -> Result<ClonePlan> {
	let url = RepoUrl::parse(raw_url)?;
	let alias = host_alias(&url.host, config);
	let segments = rewrite_segments(&url.segments, config);
	let destination = compose_destination(&config.base_dir, &alias, &segments)?;

	ClonePlan::new(config, raw_url, destination)
}

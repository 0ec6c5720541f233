use crate::config::{Config, PathReplace};

/// Resolve the first destination component for a host.
///
/// An exact match in `domain_alias` wins; the alias value is used verbatim
/// and may span several path components. Without an alias the host's last
/// dot-delimited label is stripped (`github.com` → `github`,
/// `sub.github.com` → `sub.github`); a host with no dot passes through.
pub fn host_alias(host: &str, config: &Config) -> String {
	if let Some(alias) = config.domain_alias.get(host) {
		return alias.clone();
	}

	match host.rsplit_once('.') {
		Some((prefix, _)) => prefix.to_string(),
		None => host.to_string(),
	}
}

/// Apply the configured segment replacements to every path segment.
///
/// Segment count and order are preserved; a segment no pair matches passes
/// through untouched.
pub fn rewrite_segments(segments: &[String], config: &Config) -> Vec<String> {
	segments
		.iter()
		.map(|segment| rewrite_segment(segment, &config.path_replace))
		.collect()
}

/// Each pair substitutes the first occurrence of its pattern, literally.
/// Pairs run in declaration order, so later pairs see earlier pairs' output.
fn rewrite_segment(segment: &str, rules: &[PathReplace]) -> String {
	let mut current = segment.to_string();
	for rule in rules {
		current = current.replacen(&rule.pattern, &rule.replacement, 1);
	}
	current
}

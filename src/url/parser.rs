use crate::error::{KloneError, Result};
use crate::url::matcher::{Scheme, match_scheme};

/// A validated repository URL, decomposed into its routing parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoUrl {
	/// The form the raw URL matched.
	pub scheme: Scheme,

	/// The host, verbatim: subdomains preserved, no case normalization.
	pub host: String,

	/// Path segments in URL order, non-empty, with a trailing `.git`
	/// stripped from the final segment. Always at least two entries
	/// (owner, name).
	pub segments: Vec<String>,
}

impl RepoUrl {
	/// Parse and validate a raw URL string.
	///
	/// Fails with `InvalidScheme` when the input matches no supported form
	/// or has an empty host, and with `MissingPath` when the host is not
	/// followed by an owner/name path.
	pub fn parse(raw: &str) -> Result<Self> {
		let matched = match_scheme(raw).ok_or_else(|| KloneError::InvalidScheme {
			url: raw.to_string(),
		})?;

		let (host, path) = match matched.rest.split_once(matched.scheme.path_delimiter()) {
			Some((host, path)) => (host, path),
			// Recognized scheme with nothing after the host, e.g. "https://github.com".
			None => (matched.rest, ""),
		};

		if host.is_empty() {
			return Err(KloneError::InvalidScheme {
				url: raw.to_string(),
			});
		}

		let mut segments: Vec<String> = path
			.split('/')
			.filter(|segment| !segment.is_empty())
			.map(str::to_string)
			.collect();

		// Strip a trailing ".git" from the final segment only. A segment
		// that is exactly ".git" strips to nothing and is discarded.
		let stripped = segments
			.last()
			.and_then(|last| last.strip_suffix(".git"))
			.map(str::to_string);
		if let Some(stripped) = stripped {
			segments.pop();
			if !stripped.is_empty() {
				segments.push(stripped);
			}
		}

		if segments.len() < 2 {
			return Err(KloneError::MissingPath {
				url: raw.to_string(),
			});
		}

		Ok(Self {
			scheme: matched.scheme,
			host: host.to_string(),
			segments,
		})
	}
}

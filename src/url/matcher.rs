/// The URL forms klone accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
	/// `https://<host>/<path...>`
	Https,

	/// `ssh://git@<host>/<path...>`
	SshExplicit,

	/// `git@<host>:<path...>` (SCP-like shorthand)
	SshShorthand,
}

/// A raw URL split into its recognized scheme and the remainder after the
/// scheme marker (host plus path, still undelimited).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeMatch<'a> {
	/// Which supported form matched.
	pub scheme: Scheme,

	/// Everything after the scheme marker.
	pub rest: &'a str,
}

/// Match a raw URL string against the supported schemes, in order.
///
/// Returns `None` for anything outside the supported set: `ftp://`, bare
/// `http://`, `git@host` without a `:`, and other malformed input. The
/// shorthand form is only recognized when the `:` delimiter is present;
/// validating what follows the delimiter is the parser's job.
pub fn match_scheme(raw: &str) -> Option<SchemeMatch<'_>> {
	if let Some(rest) = raw.strip_prefix("https://") {
		return Some(SchemeMatch {
			scheme: Scheme::Https,
			rest,
		});
	}

	if let Some(rest) = raw.strip_prefix("ssh://git@") {
		return Some(SchemeMatch {
			scheme: Scheme::SshExplicit,
			rest,
		});
	}

	if let Some(rest) = raw.strip_prefix("git@")
		&& rest.contains(':')
	{
		return Some(SchemeMatch {
			scheme: Scheme::SshShorthand,
			rest,
		});
	}

	None
}

impl Scheme {
	/// The character separating the host from the path for this form.
	pub fn path_delimiter(self) -> char {
		match self {
			Self::Https | Self::SshExplicit => '/',
			Self::SshShorthand => ':',
		}
	}
}

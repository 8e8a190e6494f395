/// Syntactic family of a path string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
	/// Slash-separated path, absolute or relative.
	Posix,
	/// Drive-letter or backslash-separated path.
	Windows,
	/// `\\server\share` network path.
	Unc,
	/// `scheme://` locator.
	Url,
}

impl PathStyle {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Posix => "posix",
			Self::Windows => "windows",
			Self::Unc => "unc",
			Self::Url => "url",
		}
	}

	/// Preferred separator for this style.
	pub fn separator(self) -> char {
		match self {
			Self::Posix | Self::Url => '/',
			Self::Windows | Self::Unc => '\\',
		}
	}
}

/// Classify a path string without touching the filesystem.
pub fn detect_path_style(path: &str) -> PathStyle {
	if has_url_scheme(path) {
		PathStyle::Url
	} else if path.starts_with(r"\\") {
		PathStyle::Unc
	} else if has_drive_prefix(path) || path.contains('\\') {
		PathStyle::Windows
	} else {
		PathStyle::Posix
	}
}

// Single-letter schemes are drive letters (`C://x`), not URLs.
fn has_url_scheme(path: &str) -> bool {
	let Some((scheme, _)) = path.split_once("://") else {
		return false;
	};
	let mut chars = scheme.chars();
	scheme.len() >= 2
		&& chars.next().is_some_and(|c| c.is_ascii_alphabetic())
		&& chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn has_drive_prefix(path: &str) -> bool {
	match path.as_bytes() {
		[letter, b':'] => letter.is_ascii_alphabetic(),
		[letter, b':', sep, ..] => letter.is_ascii_alphabetic() && matches!(sep, b'/' | b'\\'),
		_ => false,
	}
}

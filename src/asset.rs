//! Static asset URLs (site logos and covers).
//!
//! The API reports asset locations as paths relative to the static host. [`AssetUrl`]
//! rewrites them while decoding: empty stays empty, a relative path gains the host exactly
//! once, and a value that already carries a scheme is left alone so re-decoding an encoded
//! value never double-prefixes.

// self
use crate::{_prelude::*, config::DEFAULT_STATIC_BASE};

/// Absolute asset URL rewritten from a host-relative path.
#[derive(Clone, Default)]
pub struct AssetUrl {
	url: String,
	path: Option<String>,
}
impl AssetUrl {
	/// Resolves `raw` against the production static host.
	pub fn new(raw: impl Into<String>) -> Self {
		Self::with_host(DEFAULT_STATIC_BASE, raw)
	}

	/// Resolves `raw` against `host` (no trailing slash expected).
	pub fn with_host(host: &str, raw: impl Into<String>) -> Self {
		let raw = raw.into();

		if raw.is_empty() || has_scheme(&raw) {
			return Self { url: raw, path: None };
		}

		Self { url: format!("{host}{raw}"), path: Some(raw) }
	}

	/// Re-resolves a rewritten path against another host; absolute values are kept.
	pub fn rehost(&self, host: &str) -> Self {
		match &self.path {
			Some(path) => Self::with_host(host, path.as_str()),
			None => self.clone(),
		}
	}

	/// Resolved URL, or an empty string when the API sent none.
	pub fn as_str(&self) -> &str {
		&self.url
	}

	/// Relative path as received, when the value was rewritten.
	pub fn path(&self) -> Option<&str> {
		self.path.as_deref()
	}

	/// Returns true when the API sent no asset.
	pub fn is_empty(&self) -> bool {
		self.url.is_empty()
	}

	/// Parses the resolved value, returning `None` for empty or malformed values.
	pub fn to_url(&self) -> Option<Url> {
		Url::parse(&self.url).ok()
	}
}
impl PartialEq for AssetUrl {
	fn eq(&self, other: &Self) -> bool {
		self.url == other.url
	}
}
impl Eq for AssetUrl {}
impl AsRef<str> for AssetUrl {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}
impl Debug for AssetUrl {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("AssetUrl").field(&self.url).finish()
	}
}
impl Display for AssetUrl {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.url)
	}
}
impl Serialize for AssetUrl {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.url)
	}
}
impl<'de> Deserialize<'de> for AssetUrl {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let raw = Option::<String>::deserialize(deserializer)?;

		Ok(Self::new(raw.unwrap_or_default()))
	}
}

/// Prefixes `path` with the production static host.
pub fn asset_url(path: &str) -> String {
	AssetUrl::new(path).url
}

fn has_scheme(raw: &str) -> bool {
	raw.starts_with("https://") || raw.starts_with("http://") || raw.starts_with("//")
}

//! Client configuration: API key, hosts, and transport knobs.

// std
use std::{env, time::Duration as StdDuration};
// self
use crate::{_prelude::*, error::ConfigError, secret::Secret};

/// Production API base; endpoints are appended to it verbatim.
pub const DEFAULT_API_BASE: &str = "https://sync.paybook.com/v1";
/// Production host serving site logos and covers.
pub const DEFAULT_STATIC_BASE: &str = "https://s.paybook.com";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "PAYBOOK_API_KEY";
/// Environment variable overriding [`DEFAULT_API_BASE`].
pub const ENV_API_BASE: &str = "PAYBOOK_API_BASE";
/// Environment variable overriding [`DEFAULT_STATIC_BASE`].
pub const ENV_STATIC_BASE: &str = "PAYBOOK_STATIC_BASE";
/// Environment variable holding a request timeout in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "PAYBOOK_TIMEOUT_SECS";

/// Validated configuration consumed by [`Client`](crate::client::Client).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
	/// API key appended to every request as `api_key`.
	pub api_key: Secret,
	/// API base without a trailing slash.
	pub api_base: String,
	/// Static asset host without a trailing slash.
	pub static_base: String,
	/// Per-request timeout applied by the default transport.
	pub timeout: Option<StdDuration>,
}
impl ClientConfig {
	/// Creates a new builder for the provided API key.
	pub fn builder(api_key: impl Into<Secret>) -> ClientConfigBuilder {
		ClientConfigBuilder::new(api_key)
	}

	/// Builds a configuration with production hosts.
	pub fn new(api_key: impl Into<Secret>) -> Result<Self, ConfigError> {
		Self::builder(api_key).build()
	}

	/// Loads configuration from `PAYBOOK_*` environment variables.
	pub fn from_env() -> Result<Self, ConfigError> {
		let api_key = env::var(ENV_API_KEY).map_err(|_| ConfigError::MissingApiKey)?;
		let mut builder = Self::builder(api_key);

		if let Some(base) = read_env(ENV_API_BASE)? {
			builder = builder.api_base(base);
		}
		if let Some(base) = read_env(ENV_STATIC_BASE)? {
			builder = builder.static_base(base);
		}
		if let Some(raw) = read_env(ENV_TIMEOUT_SECS)? {
			let secs = raw
				.trim()
				.parse::<u64>()
				.map_err(|_| ConfigError::InvalidEnv { name: ENV_TIMEOUT_SECS })?;

			builder = builder.timeout(StdDuration::from_secs(secs));
		}

		builder.build()
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Debug)]
pub struct ClientConfigBuilder {
	/// API key for the account.
	pub api_key: Secret,
	/// Optional API base override.
	pub api_base: Option<String>,
	/// Optional static asset host override.
	pub static_base: Option<String>,
	/// Optional request timeout.
	pub timeout: Option<StdDuration>,
}
impl ClientConfigBuilder {
	/// Creates a new builder seeded with the provided API key.
	pub fn new(api_key: impl Into<Secret>) -> Self {
		Self { api_key: api_key.into(), api_base: None, static_base: None, timeout: None }
	}

	/// Overrides the API base (sandbox or mock servers).
	pub fn api_base(mut self, base: impl Into<String>) -> Self {
		self.api_base = Some(base.into());

		self
	}

	/// Overrides the static asset host.
	pub fn static_base(mut self, base: impl Into<String>) -> Self {
		self.static_base = Some(base.into());

		self
	}

	/// Sets a per-request timeout for the default transport.
	pub fn timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		if self.api_key.expose().trim().is_empty() {
			return Err(ConfigError::MissingApiKey);
		}

		let api_base =
			normalize_base("api", self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE))?;
		let static_base =
			normalize_base("static", self.static_base.as_deref().unwrap_or(DEFAULT_STATIC_BASE))?;

		Ok(ClientConfig { api_key: self.api_key, api_base, static_base, timeout: self.timeout })
	}
}

fn normalize_base(name: &'static str, value: &str) -> Result<String, ConfigError> {
	let trimmed = value.trim().trim_end_matches('/');

	Url::parse(trimmed).map_err(|source| ConfigError::InvalidBaseUrl {
		name,
		value: value.to_owned(),
		source,
	})?;

	Ok(trimmed.to_owned())
}

fn read_env(name: &'static str) -> Result<Option<String>, ConfigError> {
	match env::var(name) {
		Ok(value) if value.trim().is_empty() => Ok(None),
		Ok(value) => Ok(Some(value)),
		Err(env::VarError::NotPresent) => Ok(None),
		Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnv { name }),
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn defaults_point_at_production_hosts() {
		let config = ClientConfig::new("key-1").expect("Config with a key should build.");

		assert_eq!(config.api_key.expose(), "key-1");
		assert_eq!(config.api_base, DEFAULT_API_BASE);
		assert_eq!(config.static_base, DEFAULT_STATIC_BASE);
		assert_eq!(config.timeout, None);
	}

	#[test]
	fn empty_api_key_is_rejected() {
		let err = ClientConfig::new("").expect_err("Empty API key must be rejected.");

		assert!(matches!(err, ConfigError::MissingApiKey));
		assert_eq!(err.to_string(), "Missing API key.");
		assert!(matches!(ClientConfig::new("   "), Err(ConfigError::MissingApiKey)));
	}

	#[test]
	fn overrides_trim_trailing_slashes() {
		let config = ClientConfig::builder("key")
			.api_base("http://127.0.0.1:8080/v1/")
			.static_base("http://127.0.0.1:8080/static/")
			.timeout(StdDuration::from_secs(5))
			.build()
			.expect("Overrides should build.");

		assert_eq!(config.api_base, "http://127.0.0.1:8080/v1");
		assert_eq!(config.static_base, "http://127.0.0.1:8080/static");
		assert_eq!(config.timeout, Some(StdDuration::from_secs(5)));
	}

	#[test]
	fn invalid_base_is_rejected() {
		let err = ClientConfig::builder("key")
			.api_base("not a url")
			.build()
			.expect_err("Relative base must be rejected.");

		assert!(matches!(err, ConfigError::InvalidBaseUrl { name: "api", .. }));
	}
}

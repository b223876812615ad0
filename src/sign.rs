//! Request signing: query parameters, the `api_key` parameter, and absolute URL resolution.
//!
//! Signing is purely additive. Relative endpoints (leading `/`) are appended to the API base
//! as plain strings so a base path such as `/v1` survives, absolute endpoints returned by the
//! API (credential status paths) are used as-is, and `api_key` is appended only when the
//! caller did not already provide one.

// self
use crate::{_prelude::*, error::ConfigError, secret::Secret};

/// Query parameter carrying the API key.
pub const API_KEY_PARAM: &str = "api_key";
/// Query parameter carrying a session token.
pub const TOKEN_PARAM: &str = "token";

const REDACTED_PARAMS: [&str; 2] = [API_KEY_PARAM, TOKEN_PARAM];

/// Ordered, multi-valued query parameters.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Query(Vec<(String, String)>);
impl Query {
	/// Creates an empty query.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a query holding a session `token`.
	pub fn token(token: &Secret) -> Self {
		Self::new().with(TOKEN_PARAM, token.expose())
	}

	/// Appends a pair, keeping existing values for the same key.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.append(key, value);

		self
	}

	/// Appends a pair in place.
	pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.0.push((key.into(), value.into()));
	}

	/// Replaces every value stored under `key` with a single value.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
		let key = key.into();

		self.0.retain(|(k, _)| *k != key);
		self.0.push((key, value.into()));
	}

	/// Returns the first value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
	}

	/// Returns true when at least one value is stored under `key`.
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.iter().any(|(k, _)| k == key)
	}

	/// Iterates pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Number of stored pairs.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if no pairs are stored.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl<K, V> FromIterator<(K, V)> for Query
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}
impl Debug for Query {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let mut map = f.debug_map();

		for (k, v) in self.iter() {
			if REDACTED_PARAMS.contains(&k) {
				map.entry(&k, &"<redacted>");
			} else {
				map.entry(&k, &v);
			}
		}

		map.finish()
	}
}

/// Appends the API key and resolves endpoints into absolute URLs.
#[derive(Clone, Debug)]
pub struct RequestSigner {
	api_key: Secret,
	api_base: String,
}
impl RequestSigner {
	/// Creates a signer for the provided key and API base (no trailing slash).
	pub fn new(api_key: Secret, api_base: impl Into<String>) -> Self {
		Self { api_key, api_base: api_base.into() }
	}

	/// Returns the API base used for relative endpoints.
	pub fn api_base(&self) -> &str {
		&self.api_base
	}

	/// Builds the absolute, signed URL for `endpoint` with the caller's `query`.
	///
	/// An empty `api_key` counts as absent, matching how the API treats blank keys.
	pub fn sign(&self, endpoint: &str, query: &Query) -> Result<Url, ConfigError> {
		let raw = if endpoint.starts_with('/') {
			format!("{}{endpoint}", self.api_base)
		} else {
			endpoint.to_owned()
		};
		let mut url = Url::parse(&raw).map_err(|source| ConfigError::InvalidEndpoint {
			endpoint: endpoint.to_owned(),
			source,
		})?;
		let existing: Vec<(String, String)> = url.query_pairs().into_owned().collect();
		let mut pairs: Vec<(&str, &str)> = existing
			.iter()
			.map(|(k, v)| (k.as_str(), v.as_str()))
			.chain(query.iter())
			.filter(|(k, v)| !(*k == API_KEY_PARAM && v.is_empty()))
			.collect();

		if !pairs.iter().any(|(k, _)| *k == API_KEY_PARAM) {
			pairs.push((API_KEY_PARAM, self.api_key.expose()));
		}

		url.set_query(None);
		url.query_pairs_mut().extend_pairs(pairs);

		Ok(url)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn signer() -> RequestSigner {
		RequestSigner::new(Secret::new("k-123"), "https://sync.paybook.com/v1")
	}

	fn pairs(url: &Url) -> Vec<(String, String)> {
		url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect()
	}

	#[test]
	fn relative_endpoints_keep_base_path() {
		let url = signer().sign("/users", &Query::new()).expect("Relative endpoint should sign.");

		assert_eq!(url.as_str(), "https://sync.paybook.com/v1/users?api_key=k-123");
	}

	#[test]
	fn api_key_is_appended_after_caller_params() {
		let query = Query::new().with("token", "t-1").with("is_test", "true");
		let url = signer().sign("/catalogues/sites", &query).expect("Query should sign.");

		assert_eq!(
			pairs(&url),
			vec![
				("token".into(), "t-1".into()),
				("is_test".into(), "true".into()),
				("api_key".into(), "k-123".into()),
			]
		);
	}

	#[test]
	fn existing_api_key_is_not_overridden() {
		let query = Query::new().with(API_KEY_PARAM, "caller-key");
		let url = signer().sign("/accounts", &query).expect("Query should sign.");

		assert_eq!(pairs(&url), vec![("api_key".into(), "caller-key".into())]);
	}

	#[test]
	fn blank_api_key_counts_as_absent() {
		let query = Query::new().with(API_KEY_PARAM, "");
		let url = signer().sign("/accounts", &query).expect("Query should sign.");

		assert_eq!(pairs(&url), vec![("api_key".into(), "k-123".into())]);
	}

	#[test]
	fn absolute_status_urls_keep_their_query() {
		let query = Query::new().with("token", "t-9");
		let url = signer()
			.sign("https://sync.paybook.com/v1/jobs/abc/status?verbose=1", &query)
			.expect("Absolute endpoint should sign.");

		assert_eq!(url.path(), "/v1/jobs/abc/status");
		assert_eq!(
			pairs(&url),
			vec![
				("verbose".into(), "1".into()),
				("token".into(), "t-9".into()),
				("api_key".into(), "k-123".into()),
			]
		);
	}

	#[test]
	fn unparsable_endpoint_is_a_config_error() {
		let err = signer()
			.sign("jobs/abc/status", &Query::new())
			.expect_err("Relative endpoints without a leading slash cannot be resolved.");

		assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
	}

	#[test]
	fn query_debug_redacts_secrets() {
		let query = Query::new().with("token", "t-1").with("id_site", "s-1");

		assert_eq!(format!("{query:?}"), "{\"token\": \"<redacted>\", \"id_site\": \"s-1\"}");
	}

	#[test]
	fn set_replaces_all_values() {
		let mut query: Query = [("a", "1"), ("a", "2"), ("b", "3")].into_iter().collect();

		query.set("a", "9");

		assert_eq!(query.get("a"), Some("9"));
		assert_eq!(query.len(), 2);
		assert!(query.contains_key("b"));
	}

	#[test]
	fn blank_api_key_in_absolute_endpoint_is_replaced() {
		let url = signer()
			.sign("https://sync.paybook.com/v1/jobs/abc/status?api_key=&verbose=1", &Query::new())
			.expect("Absolute endpoint should sign.");

		assert_eq!(
			pairs(&url),
			vec![("verbose".into(), "1".into()), ("api_key".into(), "k-123".into())]
		);
	}

	#[test]
	fn keyed_absolute_endpoint_is_left_alone() {
		let url = signer()
			.sign("https://sync.paybook.com/v1/jobs/abc/status?api_key=own", &Query::new())
			.expect("Absolute endpoint should sign.");

		assert_eq!(pairs(&url), vec![("api_key".into(), "own".into())]);
	}
}

//! Credential submission and the status history used to follow verification jobs.
//!
//! Submitting credentials starts an asynchronous verification job on the API side. The
//! returned [`AccountCredential::status`] is a path to poll, not a terminal value; every poll
//! returns the full [`StatusHistory`] observed so far, and the job finished successfully once
//! [`StatusHistory::last`] equals [`StatusCode::SUCCESS`].

// std
use std::slice::Iter;
// self
use crate::{
	_prelude::*,
	envelope::null_as_default,
	id::{CredentialId, SiteId},
	secret::Secret,
};

/// Payload for `POST /credentials`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRequest {
	/// Catalogue site the credentials belong to.
	pub id_site: SiteId,
	/// Field name to value, as described by [`CredentialField`](crate::model::CredentialField).
	pub credentials: BTreeMap<String, String>,
	/// Session token scoping the credential.
	pub token: Secret,
}
impl CredentialRequest {
	/// Creates a request with no credential fields yet.
	pub fn new(id_site: SiteId, token: Secret) -> Self {
		Self { id_site, credentials: BTreeMap::new(), token }
	}

	/// Sets a credential field.
	pub fn credential(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.credentials.insert(name.into(), value.into());

		self
	}

	/// Replaces every credential field.
	pub fn with_credentials(mut self, credentials: BTreeMap<String, String>) -> Self {
		self.credentials = credentials;

		self
	}
}
impl Debug for CredentialRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CredentialRequest")
			.field("id_site", &self.id_site)
			.field("credentials", &self.credentials.keys().collect::<Vec<_>>())
			.field("token", &self.token)
			.finish()
	}
}

/// Credential accepted by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCredential {
	/// API-assigned identifier.
	pub id_credential: CredentialId,
	/// Username echoed back (may be masked).
	#[serde(default, deserialize_with = "null_as_default")]
	pub username: String,
	/// Websocket endpoint for push updates.
	#[serde(default, deserialize_with = "null_as_default")]
	pub ws: String,
	/// Status endpoint to poll.
	#[serde(default, deserialize_with = "null_as_default")]
	pub status: String,
	/// Two-factor endpoint, when the site asks for a second factor.
	#[serde(rename = "twofa", default, deserialize_with = "null_as_default")]
	pub tfa: String,
}
impl AccountCredential {
	/// Returns true when the site requested a second factor.
	pub fn requires_twofa(&self) -> bool {
		!self.tfa.is_empty()
	}
}

/// One point-in-time observation from a status endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusCode {
	/// Job status code.
	pub code: u16,
}
impl StatusCode {
	/// Sentinel meaning "not started or unknown", reported for an empty history.
	pub const UNKNOWN: u16 = 1;
	/// Terminal success.
	pub const SUCCESS: u16 = 200;

	/// Wraps a raw code.
	pub const fn new(code: u16) -> Self {
		Self { code }
	}

	/// Returns true for [`StatusCode::SUCCESS`].
	pub const fn is_success(self) -> bool {
		self.code == Self::SUCCESS
	}
}

/// Ordered, append-only status observations in server-reported order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusHistory(Vec<StatusCode>);
impl StatusHistory {
	/// Creates an empty history.
	pub fn new() -> Self {
		Self::default()
	}

	/// Code of the most recent observation, or [`StatusCode::UNKNOWN`] when empty.
	pub fn last(&self) -> u16 {
		self.0.last().map_or(StatusCode::UNKNOWN, |status| status.code)
	}

	/// Returns true once the most recent observation is terminal success.
	pub fn is_complete(&self) -> bool {
		self.last() == StatusCode::SUCCESS
	}

	/// Appends an observation.
	pub fn push(&mut self, status: StatusCode) {
		self.0.push(status);
	}

	/// Number of observations.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when nothing has been observed.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates observations oldest first.
	pub fn iter(&self) -> Iter<'_, StatusCode> {
		self.0.iter()
	}

	/// Returns the observations as a slice.
	pub fn as_slice(&self) -> &[StatusCode] {
		&self.0
	}
}
impl From<Vec<StatusCode>> for StatusHistory {
	fn from(value: Vec<StatusCode>) -> Self {
		Self(value)
	}
}
impl FromIterator<u16> for StatusHistory {
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = u16>,
	{
		Self(iter.into_iter().map(StatusCode::new).collect())
	}
}
impl<'a> IntoIterator for &'a StatusHistory {
	type IntoIter = Iter<'a, StatusCode>;
	type Item = &'a StatusCode;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn empty_history_reports_the_sentinel() {
		let history = StatusHistory::new();

		assert_eq!(history.last(), 1);
		assert!(!history.is_complete());
	}

	#[test]
	fn last_ignores_earlier_entries() {
		let mut history: StatusHistory = [100, 200].into_iter().collect();

		assert_eq!(history.last(), 200);
		assert!(history.is_complete());

		history.push(StatusCode::new(410));

		assert_eq!(history.last(), 410);
		assert!(!history.is_complete());
		assert_eq!(history.len(), 3);
	}

	#[test]
	fn history_decodes_from_a_plain_array() {
		let history: StatusHistory =
			serde_json::from_str("[{\"code\":100},{\"code\":101,\"extra\":true},{\"code\":200}]")
				.expect("Status history should decode.");

		assert_eq!(history.iter().map(|s| s.code).collect::<Vec<_>>(), vec![100, 101, 200]);
		assert!(history.is_complete());
	}

	#[test]
	fn credential_request_encodes_token_and_fields() {
		let request = CredentialRequest::new(
			SiteId::new("site-1").expect("Site identifier should be valid."),
			Secret::new("tok-1"),
		)
		.credential("username", "test")
		.credential("password", "hunter2");
		let body = serde_json::to_value(&request).expect("Credential request should encode.");

		assert_eq!(
			body,
			serde_json::json!({
				"id_site": "site-1",
				"credentials": { "password": "hunter2", "username": "test" },
				"token": "tok-1",
			})
		);

		let debug = format!("{request:?}");

		assert!(!debug.contains("hunter2"));
		assert!(!debug.contains("tok-1"));
	}

	#[test]
	fn account_credential_maps_twofa() {
		let credential: AccountCredential = serde_json::from_str(
			"{\"id_credential\":\"c-1\",\"username\":\"***t\",\"ws\":\"wss://sync\",\"status\":\"https://sync.paybook.com/v1/jobs/j-1/status\",\"twofa\":\"\"}",
		)
		.expect("Account credential should decode.");

		assert_eq!(credential.status, "https://sync.paybook.com/v1/jobs/j-1/status");
		assert!(!credential.requires_twofa());
	}

	#[test]
	fn null_credential_fields_decode_as_empty() {
		let credential: AccountCredential = serde_json::from_str(
			"{\"id_credential\":\"c-2\",\"username\":null,\"ws\":null,\"status\":\"/jobs/j-2/status\",\"twofa\":null}",
		)
		.expect("Null credential fields should decode.");

		assert_eq!(credential.username, "");
		assert_eq!(credential.ws, "");
		assert!(!credential.requires_twofa());
	}
}

//! Sessions scope credential, account, and transaction calls to one user.

// self
use crate::{_prelude::*, id::UserId, model::User, secret::Secret};

/// Payload for `POST /sessions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRequest {
	/// User the session belongs to.
	pub id_user: UserId,
}
impl SessionRequest {
	/// Creates a request for `id_user`.
	pub fn new(id_user: UserId) -> Self {
		Self { id_user }
	}
}
impl From<&User> for SessionRequest {
	fn from(user: &User) -> Self {
		Self::new(user.id.clone())
	}
}

/// Session issued for a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
	/// Bearer token passed as the `token` query parameter.
	pub token: Secret,
	/// Encryption key material returned alongside the token.
	#[serde(default)]
	pub key: Option<String>,
	/// Initialization vector returned alongside the token.
	#[serde(default)]
	pub iv: Option<String>,
}

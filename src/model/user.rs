//! Users own sessions, credentials, and everything fetched through them.

// self
use crate::{_prelude::*, envelope::null_as_default, id::UserId};

/// Payload for `POST /users`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
	/// Display name; the API rejects empty names.
	pub name: String,
	/// Caller-side identifier for cross-referencing.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id_external: Option<String>,
}
impl NewUser {
	/// Creates a payload for `name`.
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into(), id_external: None }
	}

	/// Attaches a caller-side identifier.
	pub fn with_external_id(mut self, id: impl Into<String>) -> Self {
		self.id_external = Some(id.into());

		self
	}
}

/// User as stored by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
	/// API-assigned identifier.
	#[serde(rename = "id_user")]
	pub id: UserId,
	/// Caller-side identifier, when one was supplied.
	#[serde(default)]
	pub id_external: Option<String>,
	/// Display name.
	#[serde(default, deserialize_with = "null_as_default")]
	pub name: String,
	/// Creation time.
	#[serde(rename = "dt_create", default, with = "time::serde::timestamp::option")]
	pub created_at: Option<OffsetDateTime>,
	/// Last modification time.
	#[serde(rename = "dt_modify", default, with = "time::serde::timestamp::option")]
	pub modified_at: Option<OffsetDateTime>,
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn new_user_omits_missing_external_id() {
		let body = serde_json::to_value(NewUser::new("Mateo")).expect("NewUser should encode.");

		assert_eq!(body, serde_json::json!({ "name": "Mateo" }));

		let body = serde_json::to_value(NewUser::new("Mateo").with_external_id("ext-1"))
			.expect("NewUser should encode.");

		assert_eq!(body, serde_json::json!({ "name": "Mateo", "id_external": "ext-1" }));
	}

	#[test]
	fn user_decodes_unix_timestamps() {
		let user: User = serde_json::from_str(
			"{\"id_user\":\"5a0b\",\"id_external\":null,\"name\":\"Mateo\",\"dt_create\":1510695000,\"dt_modify\":null}",
		)
		.expect("User fixture should decode.");

		assert_eq!(user.id.as_ref(), "5a0b");
		assert_eq!(user.name, "Mateo");
		assert_eq!(user.created_at, Some(macros::datetime!(2017-11-14 21:30 UTC)));
		assert_eq!(user.modified_at, None);
	}

	#[test]
	fn null_name_decodes_as_empty() {
		let user: User = serde_json::from_str("{\"id_user\":\"5a0b\",\"name\":null}")
			.expect("Null name should decode.");

		assert!(user.name.is_empty());
		assert_eq!(user.created_at, None);
	}
}

//! Identifiers the API assigns to users, sites, credentials, and accounts.
//!
//! Several identifiers end up interpolated into request paths (`/users/{id_user}`,
//! `/credentials/{id_credential}`), so construction rejects anything that would change the
//! shape of a URL: whitespace, control characters, `/`, `?`, and `#`. Decoding goes through the
//! same check, which turns a malformed server value into a decode error at the offending field.

// std
use std::ops::Deref;
// self
use crate::_prelude::*;

const MAX_LEN: usize = 128;

macro_rules! paybook_id {
	($(#[$meta:meta])* $name:ident => $field:literal) => {
		$(#[$meta])*
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Wire field carrying this identifier.
			pub const FIELD: &'static str = $field;

			/// Validates and wraps `value`.
			pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
				let value = value.into();

				check($field, &value)?;

				Ok(Self(value))
			}

			/// Borrows the raw identifier.
			pub fn as_str(&self) -> &str {
				&self.0
			}

			/// Returns the raw identifier.
			pub fn into_inner(self) -> String {
				self.0
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &str {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(id: $name) -> Self {
				id.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				Self::new(value)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.debug_tuple(stringify!($name)).field(&self.0).finish()
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
	};
}

/// Rejected identifier, tagged with the wire field it was meant for.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum IdentifierError {
	/// Nothing to identify.
	#[error("`{field}` cannot be empty.")]
	Empty {
		/// Wire field, e.g. `id_user`.
		field: &'static str,
	},
	/// A character that would alter the request path.
	#[error("`{field}` contains {found:?}, which cannot appear in a path segment.")]
	UnsafeCharacter {
		/// Wire field, e.g. `id_user`.
		field: &'static str,
		/// First offending character.
		found: char,
	},
	/// Longer than any identifier the API hands out.
	#[error("`{field}` is longer than {max} bytes.")]
	TooLong {
		/// Wire field, e.g. `id_user`.
		field: &'static str,
		/// Maximum accepted length in bytes.
		max: usize,
	},
}

paybook_id! {
	/// User handle returned by `POST /users`.
	UserId => "id_user"
}
paybook_id! {
	/// Catalogue site.
	SiteId => "id_site"
}
paybook_id! {
	/// Bank, utility, or agency that owns one or more sites.
	SiteOrganizationId => "id_site_organization"
}
paybook_id! {
	/// Stored credential; also the handle for deleting it.
	CredentialId => "id_credential"
}
paybook_id! {
	/// Linked account.
	AccountId => "id_account"
}

fn check(field: &'static str, value: &str) -> Result<(), IdentifierError> {
	if value.is_empty() {
		return Err(IdentifierError::Empty { field });
	}
	if value.len() > MAX_LEN {
		return Err(IdentifierError::TooLong { field, max: MAX_LEN });
	}
	if let Some(found) = value
		.chars()
		.find(|c| c.is_whitespace() || c.is_control() || matches!(c, '/' | '?' | '#'))
	{
		return Err(IdentifierError::UnsafeCharacter { field, found });
	}

	Ok(())
}

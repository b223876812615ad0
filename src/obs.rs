//! Optional observability helpers for client operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `paybook.request` with the `operation`
//!   and `method` fields, plus `debug` events carrying the response status and body size.
//! - Enable `metrics` to increment the `paybook_request_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Remote operations issued by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// `POST /users`
	CreateUser,
	/// `GET /users`
	ListUsers,
	/// `DELETE /users/{id}`
	DeleteUser,
	/// `POST /sessions`
	CreateSession,
	/// `GET /sessions/{token}/verify`
	VerifySession,
	/// `DELETE /sessions/{token}`
	DeleteSession,
	/// `GET /catalogues/site_organizations`
	SiteOrganizations,
	/// `GET /catalogues/sites`
	Catalogues,
	/// `POST /credentials`
	CreateCredential,
	/// `GET /credentials`
	ListCredentials,
	/// `DELETE /credentials/{id}`
	DeleteCredential,
	/// `GET` on a credential status path.
	Status,
	/// `GET /accounts`
	Accounts,
	/// `GET /transactions`
	Transactions,
}
impl Operation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operation::CreateUser => "create_user",
			Operation::ListUsers => "list_users",
			Operation::DeleteUser => "delete_user",
			Operation::CreateSession => "create_session",
			Operation::VerifySession => "verify_session",
			Operation::DeleteSession => "delete_session",
			Operation::SiteOrganizations => "site_organizations",
			Operation::Catalogues => "catalogues",
			Operation::CreateCredential => "create_credential",
			Operation::ListCredentials => "list_credentials",
			Operation::DeleteCredential => "delete_credential",
			Operation::Status => "status",
			Operation::Accounts => "accounts",
			Operation::Transactions => "transactions",
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
	/// Entry to a client operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl Outcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Outcome::Attempt => "attempt",
			Outcome::Success => "success",
			Outcome::Failure => "failure",
		}
	}
}
impl Display for Outcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

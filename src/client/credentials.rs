//! Credential submission, listing, removal, and verification status.

// self
use crate::{
	_prelude::*,
	client::{self, Client},
	http::ApiHttpClient,
	id::CredentialId,
	model::{AccountCredential, CredentialRequest, Session, StatusHistory},
	obs::Operation,
	poll::StatusPoll,
	secret::Secret,
	sign::Query,
};

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Submits credentials for a site, starting an asynchronous verification job.
	///
	/// Follow the job through [`AccountCredential::status`] with [`Client::status`] or
	/// [`Client::poll_credential`].
	pub async fn create_credential(
		&self,
		request: &CredentialRequest,
	) -> Result<AccountCredential> {
		const OP: Operation = Operation::CreateCredential;

		client::required(OP, self.post(OP, "/credentials", request).await?)
	}

	/// Lists the credentials registered under a session (`token` query parameter).
	pub async fn credentials(&self, query: &Query) -> Result<Vec<AccountCredential>> {
		Ok(self.get(Operation::ListCredentials, "/credentials", query).await?.unwrap_or_default())
	}

	/// Removes a credential and the accounts it produced.
	pub async fn delete_credential(&self, id: &CredentialId, token: &Secret) -> Result<()> {
		let endpoint = format!("/credentials/{}", client::path_segment(id));
		let query = Query::token(token);

		self.delete::<serde_json::Value>(Operation::DeleteCredential, &endpoint, &query).await?;

		Ok(())
	}

	/// Fetches the status history behind a server-provided status path.
	///
	/// One call is one observation; the client never retries or waits. An absent payload
	/// decodes as an empty history, whose [`last`](StatusHistory::last) is the "unknown"
	/// sentinel.
	pub async fn status(&self, status_path: &str, query: &Query) -> Result<StatusHistory> {
		Ok(self.get(Operation::Status, status_path, query).await?.unwrap_or_default())
	}

	/// Starts a caller-paced poll of `credential`'s verification job under `session`.
	pub fn poll_credential(
		&self,
		credential: &AccountCredential,
		session: &Session,
	) -> StatusPoll<'_, C> {
		StatusPoll::new(self, credential.status.clone(), session.token.clone())
	}
}

//! Sessions: create, verify, delete.

// self
use crate::{
	_prelude::*,
	client::{self, Client},
	http::ApiHttpClient,
	model::{Session, SessionRequest},
	obs::Operation,
	secret::Secret,
	sign::Query,
};

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Opens a session for the user named in `request`.
	pub async fn create_session(&self, request: &SessionRequest) -> Result<Session> {
		const OP: Operation = Operation::CreateSession;

		client::required(OP, self.post(OP, "/sessions", request).await?)
	}

	/// Checks that `token` still names a live session.
	///
	/// An expired or unknown token surfaces as [`Error::Api`] with the server's message.
	pub async fn verify_session(&self, token: &Secret) -> Result<()> {
		let endpoint = format!("/sessions/{}/verify", client::path_segment(token.expose()));

		self.get::<serde_json::Value>(Operation::VerifySession, &endpoint, &Query::new()).await?;

		Ok(())
	}

	/// Ends the session identified by `token`.
	pub async fn delete_session(&self, token: &Secret) -> Result<()> {
		let endpoint = format!("/sessions/{}", client::path_segment(token.expose()));

		self.delete::<serde_json::Value>(Operation::DeleteSession, &endpoint, &Query::new())
			.await?;

		Ok(())
	}
}

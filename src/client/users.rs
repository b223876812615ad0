//! User lifecycle: create, list, delete.

// self
use crate::{
	_prelude::*,
	client::{self, Client},
	http::ApiHttpClient,
	id::UserId,
	model::{NewUser, User},
	obs::Operation,
	sign::Query,
};

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a user; the API echoes the submitted name back.
	pub async fn create_user(&self, user: &NewUser) -> Result<User> {
		const OP: Operation = Operation::CreateUser;

		client::required(OP, self.post(OP, "/users", user).await?)
	}

	/// Lists users, optionally filtered (for example by `id_external`).
	pub async fn users(&self, query: &Query) -> Result<Vec<User>> {
		Ok(self.get(Operation::ListUsers, "/users", query).await?.unwrap_or_default())
	}

	/// Deletes a user and everything linked to it.
	pub async fn delete_user(&self, id: &UserId) -> Result<()> {
		let endpoint = format!("/users/{}", client::path_segment(id));

		self.delete::<serde_json::Value>(Operation::DeleteUser, &endpoint, &Query::new()).await?;

		Ok(())
	}
}

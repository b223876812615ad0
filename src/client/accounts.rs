//! Accounts and transactions scoped to a session.

// self
use crate::{
	_prelude::*,
	client::Client,
	http::ApiHttpClient,
	model::{Account, Transaction},
	obs::Operation,
	sign::Query,
};

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists accounts; `query` must carry the session `token`.
	pub async fn accounts(&self, query: &Query) -> Result<Vec<Account>> {
		Ok(self.get(Operation::Accounts, "/accounts", query).await?.unwrap_or_default())
	}

	/// Lists transactions; `query` must carry the session `token` and may filter by account.
	pub async fn transactions(&self, query: &Query) -> Result<Vec<Transaction>> {
		Ok(self.get(Operation::Transactions, "/transactions", query).await?.unwrap_or_default())
	}
}

//! Caller-paced status polling for credential verification jobs.
//!
//! [`StatusPoll`] performs exactly one status request per [`StatusPoll::poll`] call and
//! remembers the latest [`StatusHistory`]. It never sleeps, retries, or times out: the caller
//! decides the cadence. Once terminal success ([`StatusCode::SUCCESS`]) has been observed,
//! further calls answer [`PollState::Complete`] without touching the network.
//!
//! [`StatusCode::SUCCESS`]: crate::model::StatusCode::SUCCESS

// self
use crate::{
	_prelude::*,
	client::Client,
	http::ApiHttpClient,
	model::StatusHistory,
	secret::Secret,
	sign::Query,
};

/// Result of one poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollState {
	/// The job has not reported terminal success; carries the latest code.
	Pending(u16),
	/// The latest code is [`StatusCode::SUCCESS`](crate::model::StatusCode::SUCCESS).
	Complete,
}
impl PollState {
	/// Returns true for [`PollState::Complete`].
	pub fn is_complete(self) -> bool {
		matches!(self, PollState::Complete)
	}
}

/// Poll handle bound to one status path and session token.
pub struct StatusPoll<'a, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'a Client<C>,
	status_path: String,
	query: Query,
	history: StatusHistory,
	attempts: usize,
}
impl<'a, C> StatusPoll<'a, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a poll for `status_path`, authenticated with the session `token`.
	pub fn new(client: &'a Client<C>, status_path: impl Into<String>, token: Secret) -> Self {
		Self {
			client,
			status_path: status_path.into(),
			query: Query::token(&token),
			history: StatusHistory::new(),
			attempts: 0,
		}
	}

	/// Issues one status request unless terminal success was already observed.
	///
	/// A failed request leaves the previous history untouched so the caller may poll again.
	pub async fn poll(&mut self) -> Result<PollState> {
		if self.history.is_complete() {
			return Ok(PollState::Complete);
		}

		self.attempts += 1;
		self.history = self.client.status(&self.status_path, &self.query).await?;

		Ok(self.state())
	}

	/// State derived from the latest history.
	pub fn state(&self) -> PollState {
		if self.history.is_complete() {
			PollState::Complete
		} else {
			PollState::Pending(self.history.last())
		}
	}

	/// Latest observed history.
	pub fn history(&self) -> &StatusHistory {
		&self.history
	}

	/// Most recent code, or the unknown sentinel before the first successful poll.
	pub fn last(&self) -> u16 {
		self.history.last()
	}

	/// Number of status requests issued so far.
	pub fn attempts(&self) -> usize {
		self.attempts
	}

	/// Status path being polled.
	pub fn status_path(&self) -> &str {
		&self.status_path
	}

	/// Consumes the poll and returns the latest history.
	pub fn into_history(self) -> StatusHistory {
		self.history
	}
}
impl<C> Debug for StatusPoll<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("StatusPoll")
			.field("status_path", &self.status_path)
			.field("history", &self.history)
			.field("attempts", &self.attempts)
			.finish()
	}
}

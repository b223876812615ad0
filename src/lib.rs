//! Async binding for the Paybook Sync v1 API—sign requests, decode uniform JSON envelopes, and
//! drive credential verification with caller-paced status polling.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod asset;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod id;
pub mod model;
pub mod obs;
pub mod poll;
pub mod secret;
pub mod sign;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports, fixtures, and client builders for integration tests; enabled via
	//! `cfg(test)` or the `test` crate feature.

	pub use serde_json::{Value, json};

	pub use crate::{
		_prelude::*,
		client::Client,
		config::ClientConfig,
		http::ReqwestHttpClient,
		id::{AccountId, CredentialId, SiteId, SiteOrganizationId, UserId},
		model::*,
		poll::{PollState, StatusPoll},
		secret::Secret,
		sign::Query,
	};

	/// API key used by every test client.
	pub const TEST_API_KEY: &str = "test-api-key";

	/// Client type alias used by reqwest-backed integration tests.
	pub type ReqwestTestClient = Client<ReqwestHttpClient>;

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Constructs a [`Client`] whose API base is `{server}/v1` and whose static host is
	/// `{server}/static`, so tests exercise base-path concatenation like the production host.
	pub fn build_reqwest_test_client(server_base: &str) -> ReqwestTestClient {
		let config = ClientConfig::builder(TEST_API_KEY)
			.api_base(format!("{server_base}/v1"))
			.static_base(format!("{server_base}/static"))
			.build()
			.expect("Test client configuration should build successfully.");

		Client::with_http_client(config, test_reqwest_http_client())
	}

	/// Successful envelope wrapping `payload`.
	pub fn ok_envelope(payload: Value) -> Value {
		json!({
			"rid": "rid-ok",
			"code": 200,
			"status": true,
			"errors": null,
			"message": null,
			"response": payload,
		})
	}

	/// Failed envelope carrying `message`, with every other field populated.
	pub fn failed_envelope(code: u16, message: &str) -> Value {
		json!({
			"rid": "rid-fail",
			"code": code,
			"status": false,
			"errors": null,
			"message": message,
			"response": null,
		})
	}

	/// Failed envelope shaped like the ones the live API emits for rejected input: `rid`,
	/// `errors`, and `response` are `null` and `code` is absent.
	pub fn sparse_failed_envelope(message: &str) -> Value {
		json!({
			"rid": null,
			"status": false,
			"errors": null,
			"message": message,
			"response": null,
		})
	}

	/// Session fixture used by session-scoped calls.
	pub fn session(token: &str) -> Session {
		serde_json::from_value(json!({ "token": token, "key": "k", "iv": "iv" }))
			.expect("Session fixture should decode.")
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};

pub use client::Client;
pub use config::ClientConfig;
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use model::*;
pub use poll::{PollState, StatusPoll};

//! Typed client over the Paybook Sync v1 API.
//!
//! Every operation follows the same path: sign the endpoint, hand the request to the
//! [`ApiHttpClient`], decode an [`Envelope`], and turn `status: false` into
//! [`Error::Api`]. Operations are grouped by resource in the submodules.

mod accounts;
mod catalogues;
mod credentials;
mod sessions;
mod users;

// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
// self
use crate::{
	_prelude::*,
	asset::AssetUrl,
	config::ClientConfig,
	envelope::Envelope,
	error::{DecodeError, TransportError},
	http::{ApiHttpClient, ApiRequest, ApiResponse, Method},
	obs::{self, Operation, Outcome, RequestSpan},
	sign::{Query, RequestSigner},
};
#[cfg(feature = "reqwest")] use crate::{http::ReqwestHttpClient, secret::Secret};

/// Everything except RFC 3986 unreserved characters is escaped inside a path segment.
const PATH_SEGMENT: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestApiClient = Client<ReqwestHttpClient>;

/// Paybook API client.
///
/// The client owns the transport, the validated configuration, and the request signer.
/// Cloning is cheap; clones share the transport.
pub struct Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// HTTP client used for every outbound request.
	pub http_client: Arc<C>,
	config: ClientConfig,
	signer: RequestSigner,
}
impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(config: ClientConfig, http_client: impl Into<Arc<C>>) -> Self {
		let signer = RequestSigner::new(config.api_key.clone(), config.api_base.clone());

		Self { http_client: http_client.into(), config, signer }
	}

	/// Returns the configuration the client was built with.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Returns the request signer.
	pub fn signer(&self) -> &RequestSigner {
		&self.signer
	}

	/// Resolves an asset path against the configured static host.
	pub fn asset_url(&self, path: &str) -> AssetUrl {
		AssetUrl::with_host(&self.config.static_base, path)
	}

	pub(crate) async fn get<T>(
		&self,
		operation: Operation,
		endpoint: &str,
		query: &Query,
	) -> Result<Option<T>>
	where
		T: DeserializeOwned,
	{
		self.send(operation, Method::Get, endpoint, query, None).await
	}

	pub(crate) async fn post<B, T>(
		&self,
		operation: Operation,
		endpoint: &str,
		body: &B,
	) -> Result<Option<T>>
	where
		B: ?Sized + Serialize,
		T: DeserializeOwned,
	{
		let body = serde_json::to_vec(body).map_err(Error::Encode)?;

		self.send(operation, Method::Post, endpoint, &Query::new(), Some(body)).await
	}

	pub(crate) async fn delete<T>(
		&self,
		operation: Operation,
		endpoint: &str,
		query: &Query,
	) -> Result<Option<T>>
	where
		T: DeserializeOwned,
	{
		self.send(operation, Method::Delete, endpoint, query, None).await
	}

	async fn send<T>(
		&self,
		operation: Operation,
		method: Method,
		endpoint: &str,
		query: &Query,
		body: Option<Vec<u8>>,
	) -> Result<Option<T>>
	where
		T: DeserializeOwned,
	{
		let span = RequestSpan::new(operation, method);

		obs::record_outcome(operation, Outcome::Attempt);

		let result = span
			.instrument(async move {
				let url = self.signer.sign(endpoint, query)?;
				let response = self
					.http_client
					.execute(ApiRequest { method, url, body })
					.await
					.map_err(TransportError::network)?;

				obs::record_response(response.status, response.body.len());

				let envelope = decode_envelope::<T>(&response)?;

				if !envelope.is_ok() {
					obs::record_api_failure(envelope.code, envelope.message.as_deref());
				}

				envelope.into_result()
			})
			.await;

		match &result {
			Ok(_) => obs::record_outcome(operation, Outcome::Success),
			Err(_) => obs::record_outcome(operation, Outcome::Failure),
		}

		result
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestHttpClient> {
	/// Creates a client for the production API with the default reqwest transport.
	///
	/// Fails with `Missing API key.` when `api_key` is empty.
	pub fn new(api_key: impl Into<Secret>) -> Result<Self> {
		Self::from_config(ClientConfig::new(api_key)?)
	}

	/// Creates a client from an explicit configuration, honoring its timeout.
	pub fn from_config(config: ClientConfig) -> Result<Self> {
		let http_client = ReqwestHttpClient::with_timeout(config.timeout)?;

		Ok(Self::with_http_client(config, http_client))
	}

	/// Creates a client from `PAYBOOK_*` environment variables.
	pub fn from_env() -> Result<Self> {
		Self::from_config(ClientConfig::from_env()?)
	}
}
impl<C> Clone for Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: self.http_client.clone(),
			config: self.config.clone(),
			signer: self.signer.clone(),
		}
	}
}
impl<C> Debug for Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("api_base", &self.config.api_base)
			.field("static_base", &self.config.static_base)
			.field("api_key", &self.config.api_key)
			.finish()
	}
}

/// Turns a successful-but-empty payload into [`Error::EmptyPayload`].
pub(crate) fn required<T>(operation: Operation, payload: Option<T>) -> Result<T> {
	payload.ok_or(Error::EmptyPayload { operation: operation.as_str() })
}

/// Percent-encodes a value for use as one path segment.
pub(crate) fn path_segment(value: &str) -> String {
	utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

fn decode_envelope<T>(response: &ApiResponse) -> Result<Envelope<T>>
where
	T: DeserializeOwned,
{
	let de = &mut serde_json::Deserializer::from_slice(&response.body);

	serde_path_to_error::deserialize(de)
		.map_err(|source| DecodeError::Json { source, status: response.status }.into())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn decode_envelope_reports_status_and_path() {
		let response = ApiResponse::new(502, "{\"status\":true,\"response\":{\"id_user\":7}}");
		let err = decode_envelope::<crate::model::User>(&response)
			.expect_err("Numeric id_user should fail to decode.");

		match err {
			Error::Decode(DecodeError::Json { source, status }) => {
				assert_eq!(status, 502);
				assert_eq!(source.path().to_string(), "response.id_user");
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}

	#[test]
	fn decode_envelope_rejects_non_json() {
		let response = ApiResponse::new(500, "<html>Bad Gateway</html>");

		assert!(matches!(
			decode_envelope::<serde_json::Value>(&response),
			Err(Error::Decode(DecodeError::Json { status: 500, .. }))
		));
	}

	#[test]
	fn path_segments_are_escaped() {
		assert_eq!(path_segment("abc123"), "abc123");
		assert_eq!(path_segment("a/b"), "a%2Fb");
		assert_eq!(path_segment("a b+c"), "a%20b%2Bc");
		assert_eq!(path_segment("tok-1.x_y~z"), "tok-1.x_y~z");
		assert_eq!(path_segment("ñ?#"), "%C3%B1%3F%23");
	}

	#[test]
	fn required_reports_operation() {
		let err = required::<()>(Operation::CreateUser, None).expect_err("None must fail.");

		assert_eq!(err.to_string(), "Operation `create_user` returned an empty response payload.");
	}
}

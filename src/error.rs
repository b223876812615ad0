//! Client-level error types shared across configuration, transport, and API operations.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, IO).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response body could not be decoded.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// Request body could not be serialized.
	#[error("Request body could not be serialized.")]
	Encode(#[source] serde_json::Error),

	/// The API answered with `status: false`; the display text is the server message verbatim.
	#[error("{message}")]
	Api {
		/// Envelope code reported by the API.
		code: u16,
		/// Request identifier echoed by the API (`rid`).
		request_id: String,
		/// Server-supplied failure reason.
		message: String,
	},
	/// The API reported success but omitted the resource the operation returns.
	#[error("Operation `{operation}` returned an empty response payload.")]
	EmptyPayload {
		/// Operation label (see [`Operation`](crate::obs::Operation)).
		operation: &'static str,
	},
}
impl Error {
	/// Returns the server's failure message when the error originated from an envelope.
	pub fn api_message(&self) -> Option<&str> {
		match self {
			Self::Api { message, .. } => Some(message),
			_ => None,
		}
	}
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// No API key was supplied.
	#[error("Missing API key.")]
	MissingApiKey,
	/// A configured base URL cannot be parsed.
	#[error("The {name} base URL is invalid: {value}.")]
	InvalidBaseUrl {
		/// Which base failed validation (`api` or `static`).
		name: &'static str,
		/// Raw configured value.
		value: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// A request endpoint cannot be turned into an absolute URL.
	#[error("Endpoint `{endpoint}` is not a valid URL.")]
	InvalidEndpoint {
		/// Endpoint as supplied by the caller or the API.
		endpoint: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// An environment variable holds a value that cannot be used.
	#[error("Environment variable `{name}` is invalid.")]
	InvalidEnv {
		/// Variable name.
		name: &'static str,
	},
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Response decoding failures.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// The API responded with malformed or unexpected JSON.
	#[error("API returned malformed JSON: {source}")]
	Json {
		/// Structured parsing failure, including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API: {source}")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the API: {0}")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn api_error_displays_server_message_verbatim() {
		let err = Error::Api {
			code: 400,
			request_id: "rid-1".into(),
			message: "Name is required".into(),
		};

		assert_eq!(err.to_string(), "Name is required");
		assert_eq!(err.api_message(), Some("Name is required"));
	}

	#[test]
	fn missing_api_key_message() {
		let err: Error = ConfigError::MissingApiKey.into();

		assert_eq!(err.to_string(), "Missing API key.");
		assert_eq!(err.api_message(), None);
	}

	#[test]
	fn decode_error_reports_json_path() {
		#[derive(Debug, Deserialize)]
		struct Probe {
			#[allow(dead_code)]
			code: u16,
		}

		let de = &mut serde_json::Deserializer::from_str("{\"code\":\"nope\"}");
		let source = serde_path_to_error::deserialize::<_, Probe>(de)
			.expect_err("A string code should fail to decode.");
		let err = DecodeError::Json { source, status: 200 };

		assert!(err.to_string().starts_with("API returned malformed JSON: code: invalid type"));
	}
}

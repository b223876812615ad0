//! Uniform response envelope returned by every Paybook endpoint.

// crates.io
use serde::Deserializer;
// self
use crate::_prelude::*;

/// Wrapper around every API response.
///
/// `ok` maps to the wire field `status` and `payload` to `response`. A failed envelope always
/// turns into [`Error::Api`] through [`Envelope::into_result`]; the payload may be absent
/// whatever the flag says. Scalar fields sent as `null` decode as their zero value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
	/// Request identifier assigned by the API.
	#[serde(rename = "rid", default, deserialize_with = "null_as_default")]
	pub request_id: String,
	/// Envelope code (mirrors the HTTP status the API intended).
	#[serde(default, deserialize_with = "null_as_default")]
	pub code: u16,
	/// Success flag.
	#[serde(rename = "status", default, deserialize_with = "null_as_default")]
	pub ok: bool,
	/// Opaque error details.
	#[serde(default)]
	pub errors: serde_json::Value,
	/// Human-readable failure reason.
	#[serde(default)]
	pub message: Option<String>,
	/// Resource payload.
	#[serde(rename = "response", skip_serializing_if = "Option::is_none")]
	pub payload: Option<T>,
}
impl<T> Envelope<T> {
	/// Builds a successful envelope, mostly useful for fakes and fixtures.
	pub fn success(code: u16, payload: T) -> Self {
		Self {
			request_id: String::new(),
			code,
			ok: true,
			errors: serde_json::Value::Null,
			message: None,
			payload: Some(payload),
		}
	}

	/// Builds a failed envelope carrying `message`.
	pub fn failure(code: u16, message: impl Into<String>) -> Self {
		Self {
			request_id: String::new(),
			code,
			ok: false,
			errors: serde_json::Value::Null,
			message: Some(message.into()),
			payload: None,
		}
	}

	/// Returns the success flag.
	pub fn is_ok(&self) -> bool {
		self.ok
	}

	/// Converts a failed envelope into [`Error::Api`] and otherwise yields the optional payload.
	pub fn into_result(self) -> Result<Option<T>> {
		if self.ok {
			return Ok(self.payload);
		}

		let message = self
			.message
			.unwrap_or_else(|| format!("API request failed with code {}.", self.code));

		Err(Error::Api { code: self.code, request_id: self.request_id, message })
	}
}

/// Decodes a field that the API may send as `null`, missing, or populated.
///
/// `null` yields `T::default()`; pair with `#[serde(default)]` to cover a missing key too.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

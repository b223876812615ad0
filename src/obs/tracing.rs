// self
use crate::{_prelude::*, http::Method, obs::Operation};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedRequest<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedRequest<F> = F;

/// Span wrapping one client operation.
#[derive(Clone, Debug)]
pub struct RequestSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RequestSpan {
	/// Creates a new span tagged with the provided operation + method.
	pub fn new(operation: Operation, method: Method) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"paybook.request",
				operation = operation.as_str(),
				method = method.as_str()
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (operation, method);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedRequest<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Logs the raw response shape.
///
/// Neither the URL nor the body is logged: session tokens travel in both.
pub fn record_response(status: u16, body_len: usize) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(status, body_len, "received API response");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (status, body_len);
	}
}

/// Logs a failed envelope.
pub fn record_api_failure(code: u16, message: Option<&str>) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(code, reason = message.unwrap_or_default(), "API reported a failure");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (code, message);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = RequestSpan::new(Operation::Status, Method::Get);
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}

	#[test]
	fn record_helpers_noop_safely() {
		record_response(200, 12);
		record_api_failure(400, Some("Invalid name"));
		record_api_failure(500, None);
	}
}

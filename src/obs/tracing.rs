// self
use crate::{_prelude::*, obs::Operation};

/// Entered `fbgraph.request` span; a zero-sized no-op without the `tracing` feature.
pub struct SpanGuard {
	#[cfg(feature = "tracing")]
	_entered: tracing::span::EnteredSpan,
}
impl Debug for SpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("SpanGuard")
	}
}

/// Opens and enters the span for one blocking operation.
pub fn enter_span(operation: Operation, stage: &'static str) -> SpanGuard {
	#[cfg(feature = "tracing")]
	{
		let span = tracing::info_span!("fbgraph.request", operation = operation.as_str(), stage);

		SpanGuard { _entered: span.entered() }
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (operation, stage);

		SpanGuard {}
	}
}

/// Emits a debug event describing a failed operation inside the current span.
pub fn trace_failure(error: &FacebookError) {
	#[cfg(feature = "tracing")]
	tracing::debug!(code = %error.code(), status = ?error.status(), "Graph API operation failed.");
	#[cfg(not(feature = "tracing"))]
	let _ = error;
}

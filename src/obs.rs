//! Optional observability helpers for Graph API operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `fbgraph.request` with the `operation` and
//!   `stage` (call site) fields.
//! - Enable `metrics` to increment the `fbgraph_request_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Operation kinds observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// Single or batched object reads.
	GetObject,
	/// Generic edge/action calls, including publish and delete.
	Call,
	/// Credential exchange against the token endpoint.
	TokenExchange,
	/// Messenger Send API calls.
	SendMessage,
}
impl Operation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operation::GetObject => "get_object",
			Operation::Call => "call",
			Operation::TokenExchange => "token_exchange",
			Operation::SendMessage => "send_message",
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
	/// Entry to a client operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl Outcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Outcome::Attempt => "attempt",
			Outcome::Success => "success",
			Outcome::Failure => "failure",
		}
	}
}
impl Display for Outcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `f` inside an entered span, recording attempt and outcome counters around it.
pub(crate) fn observe<T>(
	operation: Operation,
	stage: &'static str,
	f: impl FnOnce() -> Result<T>,
) -> Result<T> {
	let _span = enter_span(operation, stage);

	record_outcome(operation, Outcome::Attempt);

	let result = f();

	match &result {
		Ok(_) => record_outcome(operation, Outcome::Success),
		Err(e) => {
			trace_failure(e);
			record_outcome(operation, Outcome::Failure);
		},
	}

	result
}

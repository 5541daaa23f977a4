// self
use crate::obs::{Operation, Outcome};

/// Increments `fbgraph_request_total{operation, outcome}` on the global recorder.
pub fn record_outcome(operation: Operation, outcome: Outcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(
		"fbgraph_request_total",
		"operation" => operation.as_str(),
		"outcome" => outcome.as_str()
	)
	.increment(1);
	#[cfg(not(feature = "metrics"))]
	let _ = (operation, outcome);
}

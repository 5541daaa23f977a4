//! Redacting wrapper for access tokens and app secrets.

// self
use crate::_prelude::*;

const REDACTED: &str = "<redacted>";

/// Opaque credential string that never prints its contents.
///
/// `Debug` reports only the length so log lines can still tell an empty token from a real one.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a credential string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the raw credential for placement on the wire.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns `true` when no credential was supplied.
	pub fn is_empty(&self) -> bool {
		self.0.trim().is_empty()
	}
}
impl From<String> for TokenSecret {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for TokenSecret {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "TokenSecret({REDACTED}, len={})", self.0.len())
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(REDACTED)
	}
}

//! The single error type surfaced by every transport and façade operation.
//!
//! All failures collapse into [`FacebookError`], whose [`code`](FacebookError::code) is either
//! the remote envelope's `type`/`code` verbatim or one of the synthetic kinds
//! [`TRANSPORT_CODE`], [`PARSE_CODE`], and [`CONFIG_CODE`].

// std
use std::borrow::Cow;
// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`FacebookError`] by default.
pub type Result<T, E = FacebookError> = std::result::Result<T, E>;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Synthetic code reported for network failures and envelope-less HTTP errors.
pub const TRANSPORT_CODE: &str = "transport";
/// Synthetic code reported for bodies that cannot be decoded.
pub const PARSE_CODE: &str = "parse";
/// Synthetic code reported for local configuration and argument failures.
pub const CONFIG_CODE: &str = "config";

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum FacebookError {
	/// The remote API answered with an error envelope.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// Network failure, or a non-success status without an error envelope.
	#[error("Graph API transport failed: {message}.")]
	Transport {
		/// Human-readable failure cause.
		message: String,
		/// HTTP status code, when a response was received.
		status: Option<u16>,
		/// Underlying transport error, when available.
		#[source]
		source: Option<BoxError>,
	},
	/// A successful response carried a body that could not be decoded.
	#[error("Graph API response could not be parsed: {message}.")]
	Parse {
		/// Parser diagnostic.
		message: String,
		/// HTTP status code of the offending response.
		status: Option<u16>,
		/// Underlying decoder error, when available.
		#[source]
		source: Option<BoxError>,
	},
	/// Local configuration or argument problem detected before any I/O.
	#[error(transparent)]
	Config(#[from] ConfigError),
}
impl FacebookError {
	/// Wraps a transport-specific network error.
	pub fn transport(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Transport { message: src.to_string(), status: None, source: Some(Box::new(src)) }
	}

	/// Builds a transport error for a non-success status that carried no envelope.
	pub fn unexpected_status(status: u16) -> Self {
		Self::Transport {
			message: format!("unexpected HTTP status {status}"),
			status: Some(status),
			source: None,
		}
	}

	/// Builds a parse error from a plain diagnostic.
	pub fn parse(message: impl Into<String>, status: Option<u16>) -> Self {
		Self::Parse { message: message.into(), status, source: None }
	}

	/// Builds a parse error that keeps the decoder failure as its source.
	pub fn parse_with(src: impl 'static + Send + Sync + StdError, status: Option<u16>) -> Self {
		Self::Parse { message: src.to_string(), status, source: Some(Box::new(src)) }
	}

	/// Returns the machine-readable code.
	///
	/// Envelope errors report the remote `type` (or numeric `code` when no type is present)
	/// verbatim; local failures report one of the synthetic kinds.
	pub fn code(&self) -> Cow<'_, str> {
		match self {
			Self::Api(e) => e.code(),
			Self::Transport { .. } => Cow::Borrowed(TRANSPORT_CODE),
			Self::Parse { .. } => Cow::Borrowed(PARSE_CODE),
			Self::Config(_) => Cow::Borrowed(CONFIG_CODE),
		}
	}

	/// Returns the human-readable message without the variant prefix.
	pub fn message(&self) -> Cow<'_, str> {
		match self {
			Self::Api(e) => Cow::Borrowed(&e.message),
			Self::Transport { message, .. } | Self::Parse { message, .. } =>
				Cow::Borrowed(message),
			Self::Config(e) => Cow::Owned(e.to_string()),
		}
	}

	/// Returns the HTTP status associated with the failure, if a response was received.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Api(e) => e.status,
			Self::Transport { status, .. } | Self::Parse { status, .. } => *status,
			Self::Config(_) => None,
		}
	}

	/// Returns the envelope details when the remote API produced the failure.
	pub fn as_api(&self) -> Option<&ApiError> {
		match self {
			Self::Api(e) => Some(e),
			_ => None,
		}
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for FacebookError {
	fn from(e: ReqwestError) -> Self {
		Self::transport(e)
	}
}

/// Error details extracted from the remote `{"error": {...}}` envelope.
///
/// Only `message` and `type`/`code` form the contract; the remaining fields are kept when the
/// remote API happens to send them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
	/// Human-readable message.
	pub message: String,
	/// Error type, e.g. `OAuthException`.
	pub kind: Option<String>,
	/// Numeric error code, e.g. `190`.
	pub code: Option<i64>,
	/// Numeric error subcode.
	pub error_subcode: Option<i64>,
	/// Trace identifier useful when reporting issues upstream.
	pub fbtrace_id: Option<String>,
	/// HTTP status that accompanied the envelope.
	pub status: Option<u16>,
}
impl ApiError {
	/// Extracts an envelope from a decoded body.
	///
	/// Returns `None` unless `body` is an object with an `error` key. Both the Graph shape
	/// (`{"error": {"message", "type", "code"}}`) and the OAuth shape
	/// (`{"error": "invalid_request", "error_description": ...}`) are recognized.
	pub fn from_envelope(body: &Value, status: Option<u16>) -> Option<Self> {
		let envelope = body.as_object()?;
		let error = envelope.get("error")?;
		let parsed = match error {
			Value::Object(fields) => Self {
				message: fields
					.get("message")
					.and_then(Value::as_str)
					.map(ToOwned::to_owned)
					.unwrap_or_else(|| error.to_string()),
				kind: fields.get("type").and_then(Value::as_str).map(ToOwned::to_owned),
				code: fields.get("code").and_then(as_i64),
				error_subcode: fields.get("error_subcode").and_then(as_i64),
				fbtrace_id: fields.get("fbtrace_id").and_then(Value::as_str).map(ToOwned::to_owned),
				status,
			},
			Value::String(kind) => Self {
				message: envelope
					.get("error_description")
					.and_then(Value::as_str)
					.unwrap_or(kind.as_str())
					.to_owned(),
				kind: Some(kind.to_owned()),
				code: None,
				error_subcode: None,
				fbtrace_id: None,
				status,
			},
			other => Self {
				message: other.to_string(),
				kind: None,
				code: None,
				error_subcode: None,
				fbtrace_id: None,
				status,
			},
		};

		Some(parsed)
	}

	/// Returns the envelope `type`, falling back to the numeric `code`, then `unknown`.
	pub fn code(&self) -> Cow<'_, str> {
		match (&self.kind, self.code) {
			(Some(kind), _) => Cow::Borrowed(kind),
			(None, Some(code)) => Cow::Owned(code.to_string()),
			(None, None) => Cow::Borrowed("unknown"),
		}
	}
}
impl Display for ApiError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Graph API returned {}: {}", self.code(), self.message)
	}
}
impl StdError for ApiError {}

/// Configuration and argument failures raised before a request is sent.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// User access token is empty.
	#[error("Access token must not be empty.")]
	EmptyAccessToken,
	/// Application identifier is empty.
	#[error("Application id must not be empty.")]
	EmptyAppId,
	/// Application secret is empty.
	#[error("Application secret must not be empty.")]
	EmptyAppSecret,
	/// Object path is empty.
	#[error("Object path must not be empty.")]
	EmptyPath,
	/// Object path carries a query or fragment component.
	#[error("Object path `{path}` must not contain `?` or `#`.")]
	InvalidPath {
		/// Offending path.
		path: String,
	},
	/// Base URL cannot be used as an API root.
	#[error("Base URL `{url}` is invalid: {reason}.")]
	InvalidBaseUrl {
		/// Offending URL.
		url: String,
		/// Validation failure description.
		reason: &'static str,
	},
	/// API version segment is malformed.
	#[error("API version `{version}` must be a single non-empty path segment.")]
	InvalidApiVersion {
		/// Offending version string.
		version: String,
	},
	/// Base URL string could not be parsed.
	#[error("Base URL could not be parsed.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// JSON request body could not be encoded.
	#[error("Request body could not be encoded.")]
	RequestBody {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
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
	pub fn http_client_build(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

fn as_i64(value: &Value) -> Option<i64> {
	match value {
		Value::Number(n) => n.as_i64(),
		Value::String(s) => s.parse().ok(),
		_ => None,
	}
}

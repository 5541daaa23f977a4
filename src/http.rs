//! Transport primitives for Graph API calls.
//!
//! The module exposes [`GraphHttpClient`] alongside the owned [`GraphRequest`] and
//! [`GraphResponse`] types so downstream crates can plug in custom HTTP stacks (or test doubles)
//! without touching the error-mapping layer. Requests arrive fully encoded: the query string is
//! already part of the URL and bodies carry their content type.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")] use reqwest::header::CONTENT_TYPE;
// self
use crate::_prelude::*;

/// Media type used for form-encoded bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
/// Media type used for JSON bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP verbs issued by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
	/// Read an object or edge.
	Get,
	/// Publish to an edge or invoke an action.
	Post,
	/// Remove an object.
	Delete,
}
impl Method {
	/// Returns the uppercase verb.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Delete => "DELETE",
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Encoded request body plus its media type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestBody {
	/// Value for the `Content-Type` header.
	pub content_type: &'static str,
	/// Encoded payload.
	pub bytes: Vec<u8>,
}

/// Fully encoded outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphRequest {
	/// HTTP verb.
	pub method: Method,
	/// Target URL, including any query string.
	pub url: Url,
	/// Optional body; `None` for GET and DELETE.
	pub body: Option<RequestBody>,
}

/// Raw response captured by the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body bytes.
	pub body: Vec<u8>,
}
impl GraphResponse {
	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Abstraction over blocking HTTP stacks capable of executing Graph API requests.
///
/// The trait is the client's only dependency on an HTTP implementation. Implementations must
/// perform exactly one round trip per call and must not retry; timeouts and connection failures
/// are reported through [`GraphHttpClient::TransportError`] and surface to callers as
/// `transport` failures.
pub trait GraphHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Executes `request` and returns the status plus body of the response.
	///
	/// Non-success statuses are not errors at this layer; they must be returned as responses so
	/// the error envelope can be inspected.
	fn execute(&self, request: GraphRequest) -> Result<GraphResponse, Self::TransportError>;
}

/// Thin wrapper around the blocking [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing blocking reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client whose requests give up after `timeout`.
	pub fn with_timeout(
		timeout: std::time::Duration,
	) -> Result<Self, crate::error::ConfigError> {
		Ok(Self(ReqwestClient::builder().timeout(timeout).build()?))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl GraphHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: GraphRequest) -> Result<GraphResponse, Self::TransportError> {
		let method = match request.method {
			Method::Get => reqwest::Method::GET,
			Method::Post => reqwest::Method::POST,
			Method::Delete => reqwest::Method::DELETE,
		};
		let mut builder = self.0.request(method, request.url);

		if let Some(body) = request.body {
			builder = builder.header(CONTENT_TYPE, body.content_type).body(body.bytes);
		}

		let response = builder.send()?;
		let status = response.status().as_u16();
		let body = response.bytes()?.to_vec();

		Ok(GraphResponse { status, body })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn success_range_is_2xx_only() {
		let response = |status| GraphResponse { status, body: Vec::new() };

		assert!(response(200).is_success());
		assert!(response(204).is_success());
		assert!(!response(199).is_success());
		assert!(!response(302).is_success());
		assert!(!response(400).is_success());
	}

	#[test]
	fn methods_render_uppercase() {
		assert_eq!(Method::Get.to_string(), "GET");
		assert_eq!(Method::Post.as_str(), "POST");
		assert_eq!(Method::Delete.as_str(), "DELETE");
	}
}

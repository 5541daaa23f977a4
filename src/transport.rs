//! Request/response/error-mapping layer shared by every client.
//!
//! [`Transport`] turns a method, path, and parameter map into one HTTP round trip and maps the
//! outcome onto [`FacebookError`]:
//!
//! - a JSON body containing an `error` key becomes [`FacebookError::Api`] whatever the status;
//! - a non-success status without an envelope becomes a `transport` failure;
//! - an undecodable body on a success status becomes a `parse` failure;
//! - anything the HTTP stack reports (DNS, TLS, timeouts) becomes a `transport` failure.

// crates.io
use serde::de::DeserializeOwned;
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	client::GraphObject,
	config::GraphConfig,
	error::{ApiError, ConfigError},
	http::{
		FORM_CONTENT_TYPE, GraphHttpClient, GraphRequest, GraphResponse, JSON_CONTENT_TYPE, Method,
		RequestBody,
	},
	params::Params,
};

/// Name of the parameter carrying the bearer credential.
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Endpoint configuration paired with the HTTP client that reaches it.
pub struct Transport<C>
where
	C: GraphHttpClient,
{
	config: GraphConfig,
	http_client: Arc<C>,
}
impl<C> Transport<C>
where
	C: GraphHttpClient,
{
	/// Creates a transport for `config` that sends every request through `http_client`.
	pub fn new(config: GraphConfig, http_client: impl Into<Arc<C>>) -> Self {
		Self { config, http_client: http_client.into() }
	}

	/// Returns the endpoint configuration.
	pub fn config(&self) -> &GraphConfig {
		&self.config
	}

	/// Returns the shared HTTP client.
	pub fn http_client(&self) -> &Arc<C> {
		&self.http_client
	}

	/// Performs one round trip and returns the decoded JSON body.
	///
	/// `params` travel in the query string for GET/DELETE and in a form body for POST. When
	/// `access_token` is supplied it is injected as the `access_token` parameter unless the caller
	/// already set one.
	pub fn request(
		&self,
		method: Method,
		path: &str,
		params: &Params,
		access_token: Option<&TokenSecret>,
	) -> Result<Value> {
		let response = self.execute(method, path, params, access_token)?;

		decode(&response)
	}

	/// Performs one round trip and returns the raw response without decoding it.
	pub fn execute(
		&self,
		method: Method,
		path: &str,
		params: &Params,
		access_token: Option<&TokenSecret>,
	) -> Result<GraphResponse> {
		let request = self.build_request(method, path, params, access_token)?;

		self.dispatch(request)
	}

	/// POSTs `body` as JSON, with `query` (plus the injected token) in the query string.
	pub fn send_json<B>(
		&self,
		path: &str,
		query: &Params,
		body: &B,
		access_token: Option<&TokenSecret>,
	) -> Result<Value>
	where
		B: ?Sized + Serialize,
	{
		let mut request = self.build_request(Method::Get, path, query, access_token)?;
		let bytes =
			serde_json::to_vec(body).map_err(|source| ConfigError::RequestBody { source })?;

		request.method = Method::Post;
		request.body = Some(RequestBody { content_type: JSON_CONTENT_TYPE, bytes });

		let response = self.dispatch(request)?;

		decode(&response)
	}

	fn build_request(
		&self,
		method: Method,
		path: &str,
		params: &Params,
		access_token: Option<&TokenSecret>,
	) -> Result<GraphRequest> {
		let mut url = self.config.endpoint(path)?;
		let mut params = params.clone();

		if let Some(token) = access_token {
			params.insert_default(ACCESS_TOKEN_PARAM, token.expose());
		}

		let pairs = params.to_pairs();
		let body = match method {
			Method::Post => {
				let encoded =
					form_urlencoded::Serializer::new(String::new()).extend_pairs(&pairs).finish();

				Some(RequestBody { content_type: FORM_CONTENT_TYPE, bytes: encoded.into_bytes() })
			},
			Method::Get | Method::Delete => {
				if !pairs.is_empty() {
					url.query_pairs_mut().extend_pairs(&pairs);
				}

				None
			},
		};

		Ok(GraphRequest { method, url, body })
	}

	fn dispatch(&self, request: GraphRequest) -> Result<GraphResponse> {
		self.http_client.execute(request).map_err(FacebookError::transport)
	}
}
impl<C> Clone for Transport<C>
where
	C: GraphHttpClient,
{
	fn clone(&self) -> Self {
		Self { config: self.config.clone(), http_client: Arc::clone(&self.http_client) }
	}
}
impl<C> Debug for Transport<C>
where
	C: GraphHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Transport").field("config", &self.config).finish()
	}
}

/// Maps a raw response onto a JSON value or a [`FacebookError`].
pub fn decode(response: &GraphResponse) -> Result<Value> {
	let status = Some(response.status);

	match serde_json::from_slice::<Value>(&response.body) {
		Ok(body) => {
			if let Some(api) = ApiError::from_envelope(&body, status) {
				return Err(api.into());
			}
			if !response.is_success() {
				return Err(FacebookError::unexpected_status(response.status));
			}

			Ok(body)
		},
		Err(e) if response.is_success() => Err(FacebookError::parse_with(e, status)),
		Err(_) => Err(FacebookError::unexpected_status(response.status)),
	}
}

/// Deserializes a decoded body into `T`, reporting the failing field path as a `parse` error.
pub fn decode_as<T>(body: Value) -> Result<T>
where
	T: DeserializeOwned,
{
	serde_path_to_error::deserialize(body).map_err(|e| FacebookError::parse_with(e, None))
}

/// Requires a decoded body to be a JSON object.
pub fn expect_object(body: Value) -> Result<GraphObject> {
	match body {
		Value::Object(object) => Ok(object),
		other => Err(FacebookError::parse(
			format!("expected a JSON object, found {}", json_kind(&other)),
			None,
		)),
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

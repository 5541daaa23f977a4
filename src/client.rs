//! Authenticated Graph API façade shared by user- and application-scoped clients.
//!
//! [`GraphClient`] carries every read/write operation as a provided method; implementors only
//! supply their [`Transport`] and the credential to inject. [`UserClient`] passes a caller-owned
//! token through unchanged, while [`AppClient`] derives its token from an app id/secret exchange.

pub mod app;
pub mod user;

pub use app::*;
pub use user::*;

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, TokenSecret},
	http::{GraphHttpClient, Method},
	obs::{self, Operation},
	params::Params,
	transport::{self, Transport},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Generic decoded object returned by a successful call.
pub type GraphObject = Map<String, Value>;

/// Path of the credential exchange endpoint.
pub const TOKEN_EXCHANGE_PATH: &str = "oauth/access_token";

#[cfg(feature = "reqwest")]
/// User client specialized for the crate's default reqwest transport.
pub type ReqwestUserClient = UserClient<ReqwestHttpClient>;
#[cfg(feature = "reqwest")]
/// App client specialized for the crate's default reqwest transport.
pub type ReqwestAppClient = AppClient<ReqwestHttpClient>;

/// Shared capability of every authenticated client.
///
/// Failures from the transport propagate unchanged; no operation retries or translates errors.
pub trait GraphClient {
	/// HTTP stack used by the client.
	type Http: GraphHttpClient;

	/// Returns the transport requests are sent through.
	fn transport(&self) -> &Transport<Self::Http>;

	/// Returns the credential injected into every request.
	///
	/// Implementations that derive their token may perform an exchange here.
	fn access_token(&self) -> Result<TokenSecret>;

	/// Fetches a single object, e.g. `me`, `817129783203`, or `0xKirill/picture`.
	fn get_object(&self, path: &str) -> Result<GraphObject> {
		self.get_object_with(path, &Params::new())
	}

	/// Fetches a single object with extra parameters such as `fields`.
	fn get_object_with(&self, path: &str, params: &Params) -> Result<GraphObject> {
		obs::observe(Operation::GetObject, "get_object", || {
			let token = self.access_token()?;

			fetch_object(self, Method::Get, path, params, &token)
		})
	}

	/// Fetches several objects, keyed by each distinct input path.
	///
	/// Issues one request per distinct path; the first failure aborts the batch and is returned
	/// unchanged, so a partially populated map is never produced.
	fn get_objects<I, P>(&self, paths: I) -> Result<BTreeMap<String, GraphObject>>
	where
		Self: Sized,
		I: IntoIterator<Item = P>,
		P: Into<String>,
	{
		self.get_objects_with(paths, &Params::new())
	}

	/// Batched variant of [`GraphClient::get_object_with`].
	fn get_objects_with<I, P>(&self, paths: I, params: &Params) -> Result<BTreeMap<String, GraphObject>>
	where
		Self: Sized,
		I: IntoIterator<Item = P>,
		P: Into<String>,
	{
		let paths = paths.into_iter().map(Into::into).collect::<BTreeSet<String>>();

		if paths.is_empty() {
			return Ok(BTreeMap::new());
		}

		obs::observe(Operation::GetObject, "get_objects", || {
			let token = self.access_token()?;
			let mut objects = BTreeMap::new();

			for path in paths {
				let object = fetch_object(self, Method::Get, &path, params, &token)?;

				objects.insert(path, object);
			}

			Ok(objects)
		})
	}

	/// Generic escape hatch for edges and actions.
	///
	/// Returns the decoded body as-is: actions may answer with a bare `true` and some edges with
	/// a top-level array, so no object shape is imposed.
	fn call(&self, path: &str, method: Method, params: &Params) -> Result<Value> {
		obs::observe(Operation::Call, "call", || {
			let token = self.access_token()?;

			self.transport().request(method, path, params, Some(&token))
		})
	}

	/// Reads the `connection` edge of `object`, e.g. `me` + `friends`.
	fn get_connections(
		&self,
		object: &str,
		connection: &str,
		params: &Params,
	) -> Result<Value> {
		self.call(&edge_path(object, connection), Method::Get, params)
	}

	/// Publishes to the `connection` edge of `object`, e.g. `me` + `feed`.
	fn publish(&self, object: &str, connection: &str, params: &Params) -> Result<Value> {
		self.call(&edge_path(object, connection), Method::Post, params)
	}

	/// Deletes `object`, returning the success flag reported by the API.
	///
	/// Both the bare `true` and the `{"success": true}` response shapes are accepted.
	fn delete(&self, object: &str) -> Result<bool> {
		obs::observe(Operation::Call, "delete", || {
			let token = self.access_token()?;
			let body = self.transport().request(Method::Delete, object, &Params::new(), Some(&token))?;

			match body.as_object().map_or(Some(&body), |fields| fields.get("success")) {
				Some(Value::Bool(success)) => Ok(*success),
				_ => Err(FacebookError::parse(format!("unexpected delete response: {body}"), None)),
			}
		})
	}
}

/// Exchanges `params` at the token endpoint and parses either response shape.
pub(crate) fn exchange_token<C>(transport: &Transport<C>, params: &Params) -> Result<AccessToken>
where
	C: GraphHttpClient,
{
	let issued_at = OffsetDateTime::now_utc();
	let response = transport.execute(Method::Get, TOKEN_EXCHANGE_PATH, params, None)?;

	match transport::decode(&response) {
		Ok(body) => AccessToken::from_json(body, issued_at, Some(response.status)),
		Err(err @ FacebookError::Parse { .. }) =>
			AccessToken::from_form(&response.body, issued_at).ok_or(err),
		Err(err) => Err(err),
	}
}

fn fetch_object<G>(
	client: &G,
	method: Method,
	path: &str,
	params: &Params,
	token: &TokenSecret,
) -> Result<GraphObject>
where
	G: ?Sized + GraphClient,
{
	let body = client.transport().request(method, path, params, Some(token))?;

	transport::expect_object(body)
}

fn edge_path(object: &str, connection: &str) -> String {
	format!("{}/{}", object.trim_end_matches('/'), connection.trim_start_matches('/'))
}

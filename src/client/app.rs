//! Application-scoped client: app id/secret exchanged for an app access token.

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, AppCredentials, TokenSecret},
	client::{self, GraphClient},
	config::GraphConfig,
	http::{GraphHttpClient, Method},
	obs::{self, Operation},
	params::Params,
	transport::Transport,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Client acting on behalf of an application.
///
/// Graph operations use the cached app token, exchanging credentials on first use. The cache is
/// a single slot: concurrent exchanges race and the last write wins.
pub struct AppClient<C>
where
	C: GraphHttpClient,
{
	transport: Transport<C>,
	credentials: AppCredentials,
	token: RwLock<Option<AccessToken>>,
}
impl<C> AppClient<C>
where
	C: GraphHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn from_transport(credentials: AppCredentials, transport: Transport<C>) -> Self {
		Self { transport, credentials, token: RwLock::new(None) }
	}

	/// Creates a client for `config` backed by a custom HTTP stack.
	pub fn with_http_client(
		app_id: impl Into<String>,
		app_secret: impl Into<String>,
		config: GraphConfig,
		http_client: impl Into<Arc<C>>,
	) -> Result<Self> {
		let credentials = AppCredentials::new(app_id, app_secret)?;

		Ok(Self::from_transport(credentials, Transport::new(config, http_client)))
	}

	/// Returns the application credentials.
	pub fn credentials(&self) -> &AppCredentials {
		&self.credentials
	}

	/// Exchanges the app credentials for a fresh token and caches it.
	///
	/// Always performs the exchange, overwriting whatever was cached; use
	/// [`AppClient::app_access_token`] to reuse a cached token instead.
	pub fn get_app_access_token(&self) -> Result<AccessToken> {
		obs::observe(Operation::TokenExchange, "get_app_access_token", || {
			let params = Params::new()
				.with("client_id", self.credentials.app_id.as_str())
				.with("client_secret", self.credentials.app_secret.expose())
				.with("grant_type", "client_credentials");
			let token = client::exchange_token(&self.transport, &params)?;

			*self.token.write() = Some(token.clone());

			Ok(token)
		})
	}

	/// Returns the cached token while it has not expired, exchanging otherwise.
	pub fn app_access_token(&self) -> Result<AccessToken> {
		match self.cached_access_token() {
			Some(token) if !token.is_expired() => Ok(token),
			_ => self.get_app_access_token(),
		}
	}

	/// Returns the cached token, if an exchange has happened.
	pub fn cached_access_token(&self) -> Option<AccessToken> {
		self.token.read().clone()
	}

	/// Reads app insights, optionally narrowed to one metric (e.g. `application_canvas_views/day`).
	pub fn analytics(&self, metric: Option<&str>, params: &Params) -> Result<Value> {
		let path = match metric {
			Some(metric) => format!("{}/insights/{}", self.credentials.app_id, metric),
			None => format!("{}/insights", self.credentials.app_id),
		};

		self.call(&path, Method::Get, params)
	}

	/// Lists the test users attached to the application.
	pub fn test_users(&self, params: &Params) -> Result<Value> {
		self.call(&self.test_users_path(), Method::Get, params)
	}

	/// Creates a test user; the response carries its `id`, `access_token`, and login details.
	pub fn create_test_user(&self, user: &TestUser) -> Result<Value> {
		self.call(&self.test_users_path(), Method::Post, &user.to_params())
	}

	fn test_users_path(&self) -> String {
		format!("{}/accounts/test-users", self.credentials.app_id)
	}
}
#[cfg(feature = "reqwest")]
impl AppClient<ReqwestHttpClient> {
	/// Creates a client for the public Graph API using the default reqwest transport.
	pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Result<Self> {
		Self::with_config(app_id, app_secret, GraphConfig::default())
	}

	/// Creates a client for `config` using the default reqwest transport.
	pub fn with_config(
		app_id: impl Into<String>,
		app_secret: impl Into<String>,
		config: GraphConfig,
	) -> Result<Self> {
		Self::with_http_client(app_id, app_secret, config, ReqwestHttpClient::default())
	}
}
impl<C> GraphClient for AppClient<C>
where
	C: GraphHttpClient,
{
	type Http = C;

	fn transport(&self) -> &Transport<C> {
		&self.transport
	}

	fn access_token(&self) -> Result<TokenSecret> {
		self.app_access_token().map(|token| token.secret)
	}
}
impl<C> Debug for AppClient<C>
where
	C: GraphHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AppClient")
			.field("transport", &self.transport)
			.field("credentials", &self.credentials)
			.field("token_cached", &self.token.read().is_some())
			.finish()
	}
}

/// Parameters for [`AppClient::create_test_user`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestUser {
	/// Whether the app is installed for the new user.
	pub installed: bool,
	/// Display name; also used for the generated email address.
	pub name: Option<String>,
	/// Locale such as `en_US`.
	pub locale: Option<String>,
	/// Extended permissions granted when `installed` is set.
	pub permissions: Vec<String>,
}
impl TestUser {
	/// Sets the display name.
	pub fn named(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());

		self
	}

	/// Sets the locale.
	pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
		self.locale = Some(locale.into());

		self
	}

	/// Adds granted permissions.
	pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.permissions.extend(permissions.into_iter().map(Into::into));

		self
	}

	fn to_params(&self) -> Params {
		let mut params = Params::new().with("installed", self.installed);

		if let Some(name) = &self.name {
			params.insert("name", name.as_str());
		}
		if let Some(locale) = &self.locale {
			params.insert("locale", locale.as_str());
		}
		if !self.permissions.is_empty() {
			params.insert("permissions", self.permissions.join(","));
		}

		params
	}
}
impl Default for TestUser {
	fn default() -> Self {
		Self { installed: true, name: None, locale: None, permissions: Vec::new() }
	}
}

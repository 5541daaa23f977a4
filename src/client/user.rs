//! User-scoped client: a caller-supplied access token passed through unchanged.

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, AppCredentials, TokenSecret},
	client::{self, GraphClient},
	config::GraphConfig,
	error::ConfigError,
	http::GraphHttpClient,
	obs::{self, Operation},
	params::Params,
	transport::Transport,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Client acting on behalf of a user (or page) with a pre-obtained access token.
///
/// The token is not validated beyond being non-empty; an invalid or expired token is only
/// detected when the remote API rejects a call.
pub struct UserClient<C>
where
	C: GraphHttpClient,
{
	transport: Transport<C>,
	access_token: TokenSecret,
}
impl<C> UserClient<C>
where
	C: GraphHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn from_transport(access_token: impl Into<String>, transport: Transport<C>) -> Result<Self> {
		let access_token = TokenSecret::new(access_token);

		if access_token.is_empty() {
			return Err(ConfigError::EmptyAccessToken.into());
		}

		Ok(Self { transport, access_token })
	}

	/// Creates a client for `config` backed by a custom HTTP stack.
	pub fn with_http_client(
		access_token: impl Into<String>,
		config: GraphConfig,
		http_client: impl Into<Arc<C>>,
	) -> Result<Self> {
		Self::from_transport(access_token, Transport::new(config, http_client))
	}

	/// Returns the token injected into every request.
	pub fn token(&self) -> &TokenSecret {
		&self.access_token
	}

	/// Exchanges the current short-lived token for a long-lived one.
	///
	/// The client keeps using its original token; build a new client from the returned value to
	/// switch credentials.
	pub fn extend_access_token(&self, credentials: &AppCredentials) -> Result<AccessToken> {
		obs::observe(Operation::TokenExchange, "extend_access_token", || {
			let params = Params::new()
				.with("grant_type", "fb_exchange_token")
				.with("client_id", credentials.app_id.as_str())
				.with("client_secret", credentials.app_secret.expose())
				.with("fb_exchange_token", self.access_token.expose());

			client::exchange_token(&self.transport, &params)
		})
	}
}
#[cfg(feature = "reqwest")]
impl UserClient<ReqwestHttpClient> {
	/// Creates a client for the public Graph API using the default reqwest transport.
	pub fn new(access_token: impl Into<String>) -> Result<Self> {
		Self::with_config(access_token, GraphConfig::default())
	}

	/// Creates a client for `config` using the default reqwest transport.
	pub fn with_config(access_token: impl Into<String>, config: GraphConfig) -> Result<Self> {
		Self::with_http_client(access_token, config, ReqwestHttpClient::default())
	}
}
impl<C> GraphClient for UserClient<C>
where
	C: GraphHttpClient,
{
	type Http = C;

	fn transport(&self) -> &Transport<C> {
		&self.transport
	}

	fn access_token(&self) -> Result<TokenSecret> {
		Ok(self.access_token.clone())
	}
}
impl<C> Debug for UserClient<C>
where
	C: GraphHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("UserClient")
			.field("transport", &self.transport)
			.field("access_token", &self.access_token)
			.finish()
	}
}

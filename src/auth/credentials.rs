//! Application credentials exchanged for app access tokens.

// self
use crate::{_prelude::*, auth::TokenSecret, error::ConfigError};

/// Application identifier and secret pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppCredentials {
	/// Public application identifier.
	pub app_id: String,
	/// Application secret; redacted in debug output.
	pub app_secret: TokenSecret,
}
impl AppCredentials {
	/// Validates and wraps an application id/secret pair.
	pub fn new(
		app_id: impl Into<String>,
		app_secret: impl Into<String>,
	) -> Result<Self, ConfigError> {
		let app_id = app_id.into();
		let app_secret = TokenSecret::new(app_secret);

		if app_id.is_empty() {
			return Err(ConfigError::EmptyAppId);
		}
		if app_secret.is_empty() {
			return Err(ConfigError::EmptyAppSecret);
		}

		Ok(Self { app_id, app_secret })
	}
}

#![allow(dead_code)]

// crates.io
use httpmock::{Mock, prelude::*};
// self
use fbgraph::{
	client::{AppClient, UserClient},
	config::GraphConfig,
	http::ReqwestHttpClient,
};

pub const USER_TOKEN: &str = "AAACEdEose0cBA";
pub const APP_ID: &str = "390492104572701";
pub const APP_SECRET: &str = "5afa25cc2f4a7a1f";

pub fn config_for(server: &MockServer) -> GraphConfig {
	GraphConfig::builder()
		.base_url_str(&server.base_url())
		.expect("Mock server URL should parse.")
		.build()
		.expect("Mock server config should validate.")
}

pub fn user_client(server: &MockServer) -> UserClient<ReqwestHttpClient> {
	UserClient::with_config(USER_TOKEN, config_for(server))
		.expect("User client should build against the mock server.")
}

pub fn app_client(server: &MockServer) -> AppClient<ReqwestHttpClient> {
	AppClient::with_config(APP_ID, APP_SECRET, config_for(server))
		.expect("App client should build against the mock server.")
}

/// Registers a token endpoint answering with a JSON token.
pub fn mock_app_token<'a>(server: &'a MockServer, token: &str) -> Mock<'a> {
	let body = serde_json::json!({ "access_token": token, "token_type": "bearer" });

	server.mock(|when, then| {
		when.method(GET)
			.path("/oauth/access_token")
			.query_param("client_id", APP_ID)
			.query_param("client_secret", APP_SECRET)
			.query_param("grant_type", "client_credentials");
		then.status(200).json_body(body);
	})
}

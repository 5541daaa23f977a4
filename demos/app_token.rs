//! Demonstrates the application flow: exchanging an app id/secret for an app token, reusing it
//! for insights, and forcing a refetch.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
// self
use fbgraph::{config::GraphConfig, prelude::*};

const APP_ID: &str = "390492104572701";

fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start();
	let exchange = server.mock(|when, then| {
		when.method(GET)
			.path("/oauth/access_token")
			.query_param("grant_type", "client_credentials")
			.query_param("client_id", APP_ID);
		then.status(200).body("access_token=390492104572701%7Cdemo&expires=5183999");
	});
	let insights = server.mock(|when, then| {
		when.method(GET).path(format!("/{APP_ID}/insights"));
		then.status(200).json_body(json!({ "data": [{ "name": "application_active_users" }] }));
	});
	let config = GraphConfig::builder().base_url_str(&server.base_url())?.build()?;
	let client = ReqwestAppClient::with_config(APP_ID, "demo-secret", config)?;
	let insights_body = client.analytics(None, &Params::new())?;

	println!("Insights: {insights_body}.");

	if let Some(token) = client.cached_access_token() {
		println!("Cached app token expires at {:?}.", token.expires_at);
	}

	let refreshed = client.get_app_access_token()?;

	println!("Refetched app token of type {:?}.", refreshed.token_type);

	exchange.assert_calls(2);
	insights.assert();

	Ok(())
}

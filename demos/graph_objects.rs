//! Demonstrates reading single and batched objects with a user access token, plus how a remote
//! error envelope surfaces through [`FacebookError`].

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
// self
use fbgraph::{config::GraphConfig, prelude::*};

fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start();
	let me = server.mock(|when, then| {
		when.method(GET).path("/me").query_param("access_token", "demo-user-token");
		then.status(200).json_body(json!({ "id": "123", "name": "Test User" }));
	});
	let page = server.mock(|when, then| {
		when.method(GET).path("/cocacola");
		then.status(200).json_body(json!({ "id": "40796308305", "name": "Coca-Cola" }));
	});
	let _expired = server.mock(|when, then| {
		when.method(GET).path("/me/friends");
		then.status(400).json_body(json!({
			"error": { "message": "Session has expired.", "type": "OAuthException", "code": 190 }
		}));
	});
	let config = GraphConfig::builder().base_url_str(&server.base_url())?.build()?;
	let client = ReqwestUserClient::with_config("demo-user-token", config)?;
	let objects = client.get_objects(["me", "cocacola"])?;

	for (path, object) in &objects {
		println!("{path}: {}.", object.get("name").unwrap_or(&json!(null)));
	}

	match client.get_connections("me", "friends", &Params::new()) {
		Ok(friends) => println!("Unexpected friends: {friends:?}."),
		Err(e) => println!("Graph API refused the call: {} ({}).", e.message(), e.code()),
	}

	me.assert();
	page.assert();

	Ok(())
}

mod common;

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use common::*;
use fbgraph::{
	client::{AppClient, GraphClient, TestUser},
	params::Params,
};

#[test]
fn second_exchange_overwrites_cache() {
	let server = MockServer::start();
	let client = app_client(&server);
	let mut first = mock_app_token(&server, "app|first");
	let token = client.get_app_access_token().expect("First exchange should succeed.");

	assert_eq!(token.expose(), "app|first");
	first.assert_calls(1);
	first.delete();

	let second = mock_app_token(&server, "app|second");
	let token = client.get_app_access_token().expect("Second exchange should succeed.");

	second.assert_calls(1);
	assert_eq!(token.expose(), "app|second");
	assert_eq!(
		client.cached_access_token().expect("Cache should hold the latest token.").expose(),
		"app|second",
	);
}

#[test]
fn reads_after_a_refetch_use_the_new_token() {
	let server = MockServer::start();
	let client = app_client(&server);
	let mut first = mock_app_token(&server, "app|first");

	client.get_app_access_token().expect("First exchange should succeed.");
	first.delete();

	let second = mock_app_token(&server, "app|second");

	client.get_app_access_token().expect("Second exchange should succeed.");

	let read = server.mock(|when, then| {
		when.method(GET).path("/1").query_param("access_token", "app|second");
		then.status(200).json_body(json!({ "id": "1" }));
	});
	let objects = client.get_objects(["1"]).expect("Read with the new token should succeed.");

	read.assert_calls(1);
	second.assert_calls(1);
	assert_eq!(objects["1"].get("id"), Some(&json!("1")));
}

#[test]
fn graph_calls_reuse_the_cached_token() {
	let server = MockServer::start();
	let client = app_client(&server);
	let exchange = mock_app_token(&server, "app|token");
	let insights = server.mock(|when, then| {
		when.method(GET)
			.path(format!("/{APP_ID}/insights/application_active_users"))
			.query_param("access_token", "app|token")
			.query_param("period", "day");
		then.status(200).json_body(json!({ "data": [] }));
	});

	assert!(client.cached_access_token().is_none());

	for _ in 0..2 {
		client
			.analytics(Some("application_active_users"), &Params::new().with("period", "day"))
			.expect("Insights read should succeed.");
	}

	exchange.assert_calls(1);
	insights.assert_calls(2);
}

#[test]
fn url_encoded_token_shape_is_accepted() {
	let server = MockServer::start();
	let _mock = server.mock(|when, then| {
		when.method(GET).path("/oauth/access_token");
		then.status(200).header("content-type", "text/plain").body("access_token=390492104572701%7Cabc");
	});
	let token = app_client(&server).get_app_access_token().expect("Legacy shape should parse.");

	assert_eq!(token.expose(), "390492104572701|abc");
	assert_eq!(token.expires_at, None);
}

#[test]
fn bad_credentials_surface_the_envelope() {
	let server = MockServer::start();
	let _mock = server.mock(|when, then| {
		when.method(GET).path("/oauth/access_token");
		then.status(400).json_body(json!({
			"error": {
				"message": "Error validating client secret.",
				"type": "OAuthException",
				"code": 1,
			}
		}));
	});
	let client = app_client(&server);
	let err = client.get_object("me").expect_err("Bad secret should fail the lazy exchange.");

	assert_eq!(err.code(), "OAuthException");
	assert_eq!(err.message(), "Error validating client secret.");
	assert!(client.cached_access_token().is_none());
}

#[test]
fn test_users_list_and_create() {
	let server = MockServer::start();
	let _exchange = mock_app_token(&server, "app|token");
	let list = server.mock(|when, then| {
		when.method(GET).path(format!("/{APP_ID}/accounts/test-users"));
		then.status(200).json_body(json!({ "data": [{ "id": "100", "access_token": "t" }] }));
	});
	let create = server.mock(|when, then| {
		when.method(POST)
			.path(format!("/{APP_ID}/accounts/test-users"))
			.form_urlencoded_tuple("installed", "true")
			.form_urlencoded_tuple("name", "Serg Ivanov")
			.form_urlencoded_tuple("access_token", "app|token");
		then.status(200).json_body(json!({ "id": "101", "login_url": "https://example.com/login" }));
	});
	let client = app_client(&server);
	let users = client.test_users(&Params::new()).expect("Listing test users should succeed.");
	let created = client
		.create_test_user(&TestUser::default().named("Serg Ivanov"))
		.expect("Creating a test user should succeed.");

	list.assert();
	create.assert();
	assert!(users.get("data").is_some_and(|data| data.is_array()));
	assert_eq!(created.get("id"), Some(&json!("101")));
}

#[test]
fn empty_credentials_are_rejected_at_construction() {
	assert_eq!(AppClient::new("", APP_SECRET).expect_err("Empty id should fail.").code(), "config");
	assert_eq!(AppClient::new(APP_ID, "").expect_err("Empty secret should fail.").code(), "config");
}

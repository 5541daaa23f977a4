//! Contract tests over an in-memory HTTP stack: no sockets, exact request inspection.

// std
use std::{collections::VecDeque, io, sync::Arc};
// crates.io
use parking_lot::Mutex;
// self
use fbgraph::{
	client::{AppClient, GraphClient, UserClient},
	config::GraphConfig,
	http::{GraphHttpClient, GraphRequest, GraphResponse, Method},
	params::Params,
};

#[derive(Default)]
struct FakeHttpClient {
	replies: Mutex<VecDeque<GraphResponse>>,
	requests: Mutex<Vec<GraphRequest>>,
}
impl FakeHttpClient {
	fn reply(self, status: u16, body: &str) -> Self {
		self.replies.lock().push_back(GraphResponse { status, body: body.as_bytes().to_vec() });

		self
	}

	fn urls(&self) -> Vec<String> {
		self.requests.lock().iter().map(|request| request.url.to_string()).collect()
	}
}
impl GraphHttpClient for FakeHttpClient {
	type TransportError = io::Error;

	fn execute(&self, request: GraphRequest) -> Result<GraphResponse, io::Error> {
		self.requests.lock().push(request);
		self.replies
			.lock()
			.pop_front()
			.ok_or_else(|| io::Error::new(io::ErrorKind::TimedOut, "request timed out"))
	}
}

fn user(http: &Arc<FakeHttpClient>) -> UserClient<FakeHttpClient> {
	UserClient::with_http_client("user-token", GraphConfig::default(), Arc::clone(http))
		.expect("User client should build.")
}

fn app(http: &Arc<FakeHttpClient>) -> AppClient<FakeHttpClient> {
	AppClient::with_http_client("42", "s3cret", GraphConfig::default(), Arc::clone(http))
		.expect("App client should build.")
}

#[test]
fn caller_token_overrides_injected_one() {
	let http = Arc::new(FakeHttpClient::default().reply(200, r#"{"id":"1"}"#));

	user(&http)
		.get_object_with("me", &Params::new().with("access_token", "page-token"))
		.expect("Read should succeed.");

	assert_eq!(http.urls(), ["https://graph.facebook.com/me?access_token=page-token"]);
}

#[test]
fn timeout_surfaces_as_transport_error() {
	let http = Arc::new(FakeHttpClient::default());
	let err = user(&http).get_object("me").expect_err("Exhausted replies time out.");

	assert_eq!(err.code(), "transport");
	assert_eq!(err.message(), "request timed out");
}

#[test]
fn invalid_path_is_rejected_without_io() {
	let http = Arc::new(FakeHttpClient::default());
	let err = user(&http).get_object("me?fields=id").expect_err("Query in path should fail.");

	assert_eq!(err.code(), "config");
	assert!(http.urls().is_empty());
}

#[test]
fn app_token_fetch_then_reuse() {
	let http = Arc::new(
		FakeHttpClient::default()
			.reply(200, r#"{"access_token":"42|app","token_type":"bearer","expires_in":3600}"#)
			.reply(200, r#"{"id":"1"}"#)
			.reply(200, r#"{"id":"2"}"#),
	);
	let client = app(&http);

	client.get_object("1").expect("First read should succeed.");
	client.get_object("2").expect("Second read should succeed.");

	let urls = http.urls();

	assert_eq!(urls.len(), 3);
	assert!(urls[0].starts_with("https://graph.facebook.com/oauth/access_token?"));
	assert!(urls[0].contains("grant_type=client_credentials"));
	assert!(!urls[0].contains("access_token="));
	assert_eq!(urls[1], "https://graph.facebook.com/1?access_token=42%7Capp");
	assert_eq!(urls[2], "https://graph.facebook.com/2?access_token=42%7Capp");
}

#[test]
fn app_access_token_reuses_until_explicit_refetch() {
	let http = Arc::new(
		FakeHttpClient::default()
			.reply(200, r#"{"access_token":"first"}"#)
			.reply(200, r#"{"access_token":"second"}"#),
	);
	let client = app(&http);

	assert_eq!(client.app_access_token().expect("Exchange should succeed.").expose(), "first");
	assert_eq!(client.app_access_token().expect("Cached token should be reused.").expose(), "first");
	assert_eq!(client.get_app_access_token().expect("Refetch should succeed.").expose(), "second");
	assert_eq!(http.urls().len(), 2);
}

#[test]
fn refetched_token_is_injected_into_later_reads() {
	let http = Arc::new(
		FakeHttpClient::default()
			.reply(200, r#"{"access_token":"first"}"#)
			.reply(200, "access_token=second")
			.reply(200, r#"{"id":"1"}"#),
	);
	let client = app(&http);

	client.get_app_access_token().expect("First exchange should succeed.");
	client.get_app_access_token().expect("Second exchange should succeed.");
	client.get_objects(["1"]).expect("Read should succeed.");

	assert_eq!(http.urls()[2], "https://graph.facebook.com/1?access_token=second");
}

#[test]
fn delete_accepts_bare_boolean() {
	let http = Arc::new(FakeHttpClient::default().reply(200, "true"));

	assert!(user(&http).delete("123_456").expect("Delete should succeed."));
	assert_eq!(http.requests.lock()[0].method, Method::Delete);
}

#[test]
fn envelope_on_success_status_still_fails() {
	let http = Arc::new(FakeHttpClient::default().reply(
		200,
		r#"{"error":{"message":"Unknown path components","type":"OAuthException","code":2500}}"#,
	));
	let err = user(&http).call("me/nothing", Method::Get, &Params::new()).expect_err("Envelope wins.");

	assert_eq!(err.code(), "OAuthException");
}

//! Access tokens issued by the token-exchange endpoint.
//!
//! The exchange endpoint has answered in two shapes over its lifetime: a JSON object
//! (`{"access_token": "...", "token_type": "bearer", "expires_in": 5183999}`) and a URL-encoded
//! body (`access_token=...&expires=5183999`). Both are accepted.

// crates.io
use url::form_urlencoded;
// self
use crate::{_prelude::*, auth::TokenSecret};

/// Access token plus the metadata returned alongside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessToken {
	/// Token secret; callers must avoid logging it.
	pub secret: TokenSecret,
	/// Token type reported by the endpoint, typically `bearer`.
	pub token_type: Option<String>,
	/// Instant at which the token was received.
	pub issued_at: OffsetDateTime,
	/// Expiry instant derived from `expires_in`/`expires`, if the endpoint reported one.
	pub expires_at: Option<OffsetDateTime>,
}
impl AccessToken {
	/// Wraps a bare token value with no expiry metadata.
	pub fn new(secret: impl Into<String>) -> Self {
		Self {
			secret: TokenSecret::new(secret),
			token_type: None,
			issued_at: OffsetDateTime::now_utc(),
			expires_at: None,
		}
	}

	/// Returns the token string. Callers must avoid logging it.
	pub fn expose(&self) -> &str {
		self.secret.expose()
	}

	/// Returns `true` if the token carries an expiry that is at or before `instant`.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		self.expires_at.is_some_and(|expires_at| instant >= expires_at)
	}

	/// Convenience helper that checks expiry using the current UTC instant.
	pub fn is_expired(&self) -> bool {
		self.is_expired_at(OffsetDateTime::now_utc())
	}

	/// Builds a token from a decoded JSON exchange response.
	///
	/// Accepts an object with an `access_token` field or a bare JSON string.
	pub fn from_json(body: Value, issued_at: OffsetDateTime, status: Option<u16>) -> Result<Self> {
		if let Value::String(token) = body {
			return Self::from_parts(token, None, None, issued_at, status);
		}

		let payload: TokenPayload = serde_path_to_error::deserialize(body)
			.map_err(|e| FacebookError::parse_with(e, status))?;
		let expires_in = match payload.expires_in.or(payload.expires) {
			Some(ExpiresIn::Seconds(secs)) => Some(secs),
			Some(ExpiresIn::Text(raw)) => Some(raw.trim().parse().map_err(|_| {
				FacebookError::parse(format!("expires_in `{raw}` is not an integer"), status)
			})?),
			None => None,
		};

		Self::from_parts(
			payload.access_token,
			payload.token_type,
			expires_in,
			issued_at,
			status,
		)
	}

	/// Builds a token from a URL-encoded exchange response.
	///
	/// Returns `None` when the body carries no `access_token` pair.
	pub fn from_form(body: &[u8], issued_at: OffsetDateTime) -> Option<Self> {
		let mut token = None;
		let mut token_type = None;
		let mut expires_in = None;
		let mut expires = None;

		for (key, value) in form_urlencoded::parse(body) {
			match &*key {
				"access_token" => token = Some(value.into_owned()),
				"token_type" => token_type = Some(value.into_owned()),
				"expires_in" => expires_in = value.trim().parse::<i64>().ok(),
				"expires" => expires = value.trim().parse::<i64>().ok(),
				_ => {},
			}
		}

		Self::from_parts(token?, token_type, expires_in.or(expires), issued_at, None).ok()
	}

	fn from_parts(
		token: String,
		token_type: Option<String>,
		expires_in: Option<i64>,
		issued_at: OffsetDateTime,
		status: Option<u16>,
	) -> Result<Self> {
		if token.trim().is_empty() {
			return Err(FacebookError::parse("token response carried an empty access_token", status));
		}

		let expires_at = expires_in
			.filter(|secs| *secs > 0)
			.and_then(|secs| issued_at.checked_add(Duration::seconds(secs)));

		Ok(Self {
			secret: TokenSecret::new(token),
			token_type,
			issued_at,
			expires_at,
		})
	}
}

#[derive(Deserialize)]
struct TokenPayload {
	access_token: String,
	#[serde(default)]
	token_type: Option<String>,
	#[serde(default)]
	expires_in: Option<ExpiresIn>,
	#[serde(default)]
	expires: Option<ExpiresIn>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ExpiresIn {
	Seconds(i64),
	Text(String),
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	use time::macros::datetime;
	// self
	use super::*;

	const ISSUED_AT: OffsetDateTime = datetime!(2024-03-01 12:00 UTC);

	#[test]
	fn json_payload_tracks_expiry() {
		let token = AccessToken::from_json(
			json!({ "access_token": "app|token", "token_type": "bearer", "expires_in": 3600 }),
			ISSUED_AT,
			Some(200),
		)
		.expect("JSON token payload should parse.");

		assert_eq!(token.expose(), "app|token");
		assert_eq!(token.token_type.as_deref(), Some("bearer"));
		assert_eq!(token.expires_at, Some(datetime!(2024-03-01 13:00 UTC)));
		assert!(!token.is_expired_at(datetime!(2024-03-01 12:59 UTC)));
		assert!(token.is_expired_at(datetime!(2024-03-01 13:00 UTC)));
	}

	#[test]
	fn json_payload_accepts_legacy_expires_string() {
		let token = AccessToken::from_json(
			json!({ "access_token": "legacy", "expires": "60" }),
			ISSUED_AT,
			None,
		)
		.expect("Legacy expires field should parse.");

		assert_eq!(token.expires_at, Some(datetime!(2024-03-01 12:01 UTC)));
	}

	#[test]
	fn json_payload_prefers_expires_in_over_legacy_field() {
		let token = AccessToken::from_json(
			json!({ "access_token": "both", "expires_in": 3600, "expires": "60" }),
			ISSUED_AT,
			Some(200),
		)
		.expect("Both expiry fields together should parse.");

		assert_eq!(token.expires_at, Some(datetime!(2024-03-01 13:00 UTC)));
	}

	#[test]
	fn bare_json_string_is_a_token() {
		let token = AccessToken::from_json(json!("scalar-token"), ISSUED_AT, None)
			.expect("Scalar token should parse.");

		assert_eq!(token.expose(), "scalar-token");
		assert_eq!(token.expires_at, None);
	}

	#[test]
	fn json_payload_without_token_reports_field_path() {
		let err = AccessToken::from_json(json!({ "token_type": "bearer" }), ISSUED_AT, Some(200))
			.expect_err("Missing access_token should fail.");

		assert_eq!(err.code(), "parse");
		assert!(err.message().contains("access_token"));
	}

	#[test]
	fn form_payload_parses_legacy_shape() {
		let token = AccessToken::from_form(b"access_token=123%7Cabc&expires=5183999", ISSUED_AT)
			.expect("URL-encoded token should parse.");

		assert_eq!(token.expose(), "123|abc");
		assert_eq!(token.expires_at, Some(ISSUED_AT + Duration::seconds(5_183_999)));
		assert!(AccessToken::from_form(b"not a token", ISSUED_AT).is_none());
		assert!(AccessToken::from_form(b"access_token=", ISSUED_AT).is_none());
	}

	#[test]
	fn non_positive_expiry_means_no_expiry() {
		let token = AccessToken::from_form(b"access_token=abc&expires=0", ISSUED_AT)
			.expect("Token with zero expiry should parse.");

		assert_eq!(token.expires_at, None);
		assert!(!token.is_expired_at(datetime!(2099-01-01 0:00 UTC)));
	}
}

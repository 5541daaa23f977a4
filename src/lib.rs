//! Blocking Graph API client with user and application token flows plus a uniform error type.
//!
//! The crate is split into a transport layer ([`transport`], built on the [`http`] abstraction)
//! and a façade ([`client`]) whose [`GraphClient`](client::GraphClient) capability is shared by
//! [`UserClient`](client::UserClient) and [`AppClient`](client::AppClient). Every failure,
//! whether it came from the network, a malformed body, or the remote error envelope, surfaces as
//! a single [`FacebookError`](error::FacebookError).

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod messenger;
pub mod obs;
pub mod params;
pub mod transport;

/// Convenience re-exports for downstream callers.
pub mod prelude {
	#[cfg(feature = "reqwest")]
	pub use crate::client::{ReqwestAppClient, ReqwestUserClient};
	pub use crate::{
		auth::{AccessToken, AppCredentials, TokenSecret},
		client::{AppClient, GraphClient, GraphObject, UserClient},
		config::GraphConfig,
		error::{FacebookError, Result},
		http::Method,
		params::{ParamValue, Params},
	};
}

mod _prelude {
	pub use std::{
		collections::{BTreeMap, BTreeSet},
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Error as ReqwestError, blocking::Client as ReqwestClient};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map, Value};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{FacebookError, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use serde_json;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};

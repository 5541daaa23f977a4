//! Endpoint configuration shared by every client.

// self
use crate::{_prelude::*, error::ConfigError};

/// Public Graph API root used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://graph.facebook.com/";

/// Validated endpoint configuration: base URL plus an optional API version segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphConfig {
	/// API root; always ends with `/`.
	pub base_url: Url,
	/// Optional version segment such as `v19.0`, inserted before every path.
	pub api_version: Option<String>,
}
impl GraphConfig {
	/// Returns a builder seeded with [`DEFAULT_BASE_URL`].
	pub fn builder() -> GraphConfigBuilder {
		GraphConfigBuilder::default()
	}

	/// Resolves an object or edge path against the configured root.
	///
	/// Leading and trailing slashes are ignored so `"/me"` and `"me"` address the same object.
	/// The path is appended segment by segment, so the result always stays under the configured
	/// root: empty, `.` and `..` segments are rejected, and text such as `page:123` or
	/// `https://host` is never read as a scheme.
	pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
		let relative = path.trim_matches('/');

		if relative.is_empty() {
			return Err(ConfigError::EmptyPath);
		}
		if relative.contains(['?', '#'])
			|| relative.split('/').any(|segment| matches!(segment, "" | "." | ".."))
		{
			return Err(ConfigError::InvalidPath { path: path.to_owned() });
		}

		let mut url = self.base_url.clone();

		url.path_segments_mut()
			.map_err(|_| ConfigError::InvalidBaseUrl {
				url: self.base_url.to_string(),
				reason: "URL cannot be used as a base",
			})?
			.pop_if_empty()
			.extend(self.api_version.as_deref())
			.extend(relative.split('/'));

		Ok(url)
	}
}
impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			base_url: Url::parse(DEFAULT_BASE_URL).expect("Default base URL must parse."),
			api_version: None,
		}
	}
}

/// Builder for [`GraphConfig`] values.
#[derive(Debug, Default)]
pub struct GraphConfigBuilder {
	/// Overrides the API root.
	pub base_url: Option<Url>,
	/// Version segment to prepend to every path.
	pub api_version: Option<String>,
}
impl GraphConfigBuilder {
	/// Sets the API root.
	pub fn base_url(mut self, url: Url) -> Self {
		self.base_url = Some(url);

		self
	}

	/// Parses and sets the API root.
	pub fn base_url_str(mut self, url: &str) -> Result<Self, ConfigError> {
		let parsed = Url::parse(url).map_err(|source| ConfigError::InvalidEndpoint { source })?;

		self.base_url = Some(parsed);

		Ok(self)
	}

	/// Sets the version segment, e.g. `v19.0`.
	pub fn api_version(mut self, version: impl Into<String>) -> Self {
		self.api_version = Some(version.into());

		self
	}

	/// Validates the configuration.
	pub fn build(self) -> Result<GraphConfig, ConfigError> {
		let base_url = match self.base_url {
			Some(url) => normalize_base_url(url)?,
			None => GraphConfig::default().base_url,
		};
		let api_version = self.api_version.map(normalize_version).transpose()?;

		Ok(GraphConfig { base_url, api_version })
	}
}

fn normalize_base_url(mut url: Url) -> Result<Url, ConfigError> {
	let reason = if !matches!(url.scheme(), "http" | "https") {
		Some("scheme must be http or https")
	} else if url.cannot_be_a_base() {
		Some("URL cannot be used as a base")
	} else if url.query().is_some() || url.fragment().is_some() {
		Some("query and fragment are not allowed")
	} else {
		None
	};

	if let Some(reason) = reason {
		return Err(ConfigError::InvalidBaseUrl { url: url.to_string(), reason });
	}
	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());

		url.set_path(&path);
	}

	Ok(url)
}

fn normalize_version(version: String) -> Result<String, ConfigError> {
	let trimmed = version.trim_matches('/');

	if trimmed.is_empty() || trimmed.contains(['/', '?', '#']) {
		return Err(ConfigError::InvalidApiVersion { version });
	}

	Ok(trimmed.to_owned())
}

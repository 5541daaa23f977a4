//! Request parameters sent as a query string or form body.

// self
use crate::_prelude::*;

/// Primitive parameter value accepted by the Graph API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
	/// Boolean, rendered as `true`/`false`.
	Bool(bool),
	/// Signed integer.
	Integer(i64),
	/// Floating-point number.
	Float(f64),
	/// Free-form text.
	Text(String),
}
impl Display for ParamValue {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Bool(value) => Display::fmt(value, f),
			Self::Integer(value) => Display::fmt(value, f),
			Self::Float(value) => Display::fmt(value, f),
			Self::Text(value) => f.write_str(value),
		}
	}
}
impl From<bool> for ParamValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}
impl From<i32> for ParamValue {
	fn from(value: i32) -> Self {
		Self::Integer(value.into())
	}
}
impl From<i64> for ParamValue {
	fn from(value: i64) -> Self {
		Self::Integer(value)
	}
}
impl From<u32> for ParamValue {
	fn from(value: u32) -> Self {
		Self::Integer(value.into())
	}
}
impl From<f64> for ParamValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}
impl From<&str> for ParamValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_owned())
	}
}
impl From<String> for ParamValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

/// Ordered parameter map keyed by parameter name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Params(BTreeMap<String, ParamValue>);
impl Params {
	/// Creates an empty parameter map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces a parameter, returning the updated map.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
		self.insert(key, value);

		self
	}

	/// Adds or replaces a parameter in place.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
		self.0.insert(key.into(), value.into());
	}

	/// Adds a parameter only when no value is present for `key`.
	pub fn insert_default(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
		self.0.entry(key.into()).or_insert_with(|| value.into());
	}

	/// Returns the value stored for `key`.
	pub fn get(&self, key: &str) -> Option<&ParamValue> {
		self.0.get(key)
	}

	/// Returns `true` when `key` is present.
	pub fn contains(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Returns `true` when no parameters are set.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over the parameters in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value))
	}

	/// Renders every parameter as a `(key, value)` string pair.
	pub fn to_pairs(&self) -> Vec<(String, String)> {
		self.0.iter().map(|(key, value)| (key.clone(), value.to_string())).collect()
	}
}
impl<K, V> FromIterator<(K, V)> for Params
where
	K: Into<String>,
	V: Into<ParamValue>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self(iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
	}
}
impl<K, V, const N: usize> From<[(K, V); N]> for Params
where
	K: Into<String>,
	V: Into<ParamValue>,
{
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

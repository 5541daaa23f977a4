//! Structured templates and the buttons they carry.

// self
use crate::_prelude::*;

/// Height of the in-conversation webview.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebviewHeightRatio {
	/// Smallest sheet.
	Compact,
	/// Three quarters of the screen.
	Tall,
	/// Full screen; the API default.
	Full,
}

/// Link opened in the Messenger webview.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlButton {
	/// Button label, up to 20 characters.
	pub title: String,
	/// Target URL; must be HTTPS when `messenger_extensions` is set.
	pub url: String,
	/// Webview height.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub webview_height_ratio: Option<WebviewHeightRatio>,
	/// Enables the Messenger Extensions SDK inside the webview.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub messenger_extensions: Option<bool>,
	/// URL for clients without extension support.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fallback_url: Option<String>,
	/// Set to `hide` to remove the webview share button.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub webview_share_button: Option<String>,
}
impl UrlButton {
	/// Creates a button opening `url` at the default height.
	pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			url: url.into(),
			webview_height_ratio: None,
			messenger_extensions: None,
			fallback_url: None,
			webview_share_button: None,
		}
	}

	/// Sets the webview height.
	pub fn with_height(mut self, ratio: WebviewHeightRatio) -> Self {
		self.webview_height_ratio = Some(ratio);

		self
	}
}

/// Call-to-action attached to a template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Button {
	/// Opens a URL.
	#[serde(rename = "web_url")]
	Url(UrlButton),
	/// Sends `payload` to the postback webhook.
	#[serde(rename = "postback")]
	Postback {
		/// Button label, up to 20 characters.
		title: String,
		/// Developer data echoed to the webhook, up to 1000 characters.
		payload: String,
	},
	/// Dials a phone number in `+16505551234` form.
	#[serde(rename = "phone_number")]
	Call {
		/// Button label, up to 20 characters.
		title: String,
		/// Number to dial.
		payload: String,
	},
	/// Starts account linking at `url`.
	#[serde(rename = "account_link")]
	LogIn {
		/// HTTPS authentication callback.
		url: String,
	},
	/// Unlinks the recipient's account.
	#[serde(rename = "account_unlink")]
	LogOut,
}
impl Button {
	/// Creates a URL button.
	pub fn url(title: impl Into<String>, url: impl Into<String>) -> Self {
		Self::Url(UrlButton::new(title, url))
	}

	/// Creates a postback button.
	pub fn postback(title: impl Into<String>, payload: impl Into<String>) -> Self {
		Self::Postback { title: title.into(), payload: payload.into() }
	}

	/// Creates a call button.
	pub fn call(title: impl Into<String>, number: impl Into<String>) -> Self {
		Self::Call { title: title.into(), payload: number.into() }
	}
}

/// URL opened when a template element itself is tapped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "web_url")]
pub struct DefaultAction {
	/// Target URL.
	pub url: String,
	/// Webview height.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub webview_height_ratio: Option<WebviewHeightRatio>,
	/// Enables the Messenger Extensions SDK inside the webview.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub messenger_extensions: Option<bool>,
	/// URL for clients without extension support.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fallback_url: Option<String>,
}
impl DefaultAction {
	/// Opens `url` at the default height.
	pub fn new(url: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			webview_height_ratio: None,
			messenger_extensions: None,
			fallback_url: None,
		}
	}
}

/// One card of a generic or list template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
	/// Card title, up to 80 characters.
	pub title: String,
	/// Card subtitle, up to 80 characters.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub subtitle: Option<String>,
	/// Card image.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image_url: Option<String>,
	/// Action taken when the card is tapped.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub default_action: Option<DefaultAction>,
	/// Up to three buttons.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub buttons: Vec<Button>,
}
impl Element {
	/// Creates a card with only a title.
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			subtitle: None,
			image_url: None,
			default_action: None,
			buttons: Vec::new(),
		}
	}

	/// Sets the subtitle.
	pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
		self.subtitle = Some(subtitle.into());

		self
	}

	/// Sets the image.
	pub fn image_url(mut self, url: impl Into<String>) -> Self {
		self.image_url = Some(url.into());

		self
	}

	/// Sets the tap action.
	pub fn default_action(mut self, action: DefaultAction) -> Self {
		self.default_action = Some(action);

		self
	}

	/// Appends a button.
	pub fn button(mut self, button: Button) -> Self {
		self.buttons.push(button);

		self
	}
}

/// Rendering of the first list item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopElementStyle {
	/// Plain list item.
	Compact,
	/// Cover item.
	Large,
}

/// Structured message payload, discriminated by `template_type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "template_type", rename_all = "snake_case")]
pub enum Template {
	/// Horizontal carousel of up to ten cards.
	Generic {
		/// Cards.
		elements: Vec<Element>,
	},
	/// Text with one to three buttons.
	Button {
		/// Text shown above the buttons, up to 640 characters.
		text: String,
		/// Call-to-action buttons.
		buttons: Vec<Button>,
	},
	/// Vertical list of two to four items.
	List {
		/// Items.
		elements: Vec<Element>,
		/// Rendering of the first item.
		#[serde(default, skip_serializing_if = "Option::is_none")]
		top_element_style: Option<TopElementStyle>,
		/// At most one button under the list.
		#[serde(default, skip_serializing_if = "Vec::is_empty")]
		buttons: Vec<Button>,
	},
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn generic_template_tags_buttons_and_actions() {
		let template = Template::Generic {
			elements: vec![
				Element::new("Classic White T-Shirt")
					.subtitle("Soft white cotton t-shirt.")
					.default_action(DefaultAction::new("https://shop.example/white"))
					.button(Button::Url(
						UrlButton::new("View", "https://shop.example/white")
							.with_height(WebviewHeightRatio::Tall),
					))
					.button(Button::postback("Buy", "BUY_WHITE")),
			],
		};

		assert_eq!(
			serde_json::to_value(&template).expect("Template should serialize."),
			json!({
				"template_type": "generic",
				"elements": [{
					"title": "Classic White T-Shirt",
					"subtitle": "Soft white cotton t-shirt.",
					"default_action": { "type": "web_url", "url": "https://shop.example/white" },
					"buttons": [
						{
							"type": "web_url",
							"title": "View",
							"url": "https://shop.example/white",
							"webview_height_ratio": "tall",
						},
						{ "type": "postback", "title": "Buy", "payload": "BUY_WHITE" },
					],
				}],
			}),
		);
	}

	#[test]
	fn button_template_round_trips_every_button_kind() {
		let template = Template::Button {
			text: "What do you want to do next?".into(),
			buttons: vec![
				Button::call("Call us", "+16505551234"),
				Button::LogIn { url: "https://shop.example/login".into() },
				Button::LogOut,
			],
		};
		let value = serde_json::to_value(&template).expect("Template should serialize.");

		assert_eq!(value["template_type"], "button");
		assert_eq!(
			value["buttons"][0],
			json!({ "type": "phone_number", "title": "Call us", "payload": "+16505551234" }),
		);
		assert_eq!(value["buttons"][2], json!({ "type": "account_unlink" }));
		assert_eq!(
			serde_json::from_value::<Template>(value).expect("Template should deserialize."),
			template,
		);
	}
}

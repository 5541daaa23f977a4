//! Message bodies: text, media, templates, and quick replies.

// self
use crate::{_prelude::*, messenger::Template};

/// Media kind carried by an [`Attachment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
	/// Image file.
	Image,
	/// Audio clip.
	Audio,
	/// Video clip.
	Video,
	/// Arbitrary file.
	File,
	/// Structured template.
	Template,
}

/// Source of a media attachment: a fetchable URL or a saved asset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaPayload {
	/// URL the platform downloads the media from.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
	/// Id of a previously uploaded reusable asset.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub attachment_id: Option<String>,
	/// Marks an uploaded asset as sendable to other recipients.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub is_reusable: Option<bool>,
}

/// Attachment payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttachmentPayload {
	/// Structured template, recognized by its `template_type`.
	Template(Template),
	/// Image, audio, video, or file source.
	Media(MediaPayload),
}

/// Rich media or template attachment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
	/// Attachment kind.
	#[serde(rename = "type")]
	pub kind: AttachmentKind,
	/// Media source or template body.
	pub payload: AttachmentPayload,
}
impl Attachment {
	/// Attaches media fetched from `url`.
	pub fn from_url(kind: AttachmentKind, url: impl Into<String>, is_reusable: bool) -> Self {
		let payload = MediaPayload {
			url: Some(url.into()),
			is_reusable: is_reusable.then_some(true),
			..Default::default()
		};

		Self { kind, payload: AttachmentPayload::Media(payload) }
	}

	/// Attaches a previously uploaded reusable asset.
	pub fn from_id(kind: AttachmentKind, attachment_id: impl Into<String>) -> Self {
		let payload =
			MediaPayload { attachment_id: Some(attachment_id.into()), ..Default::default() };

		Self { kind, payload: AttachmentPayload::Media(payload) }
	}

	/// Attaches a structured template.
	pub fn template(template: Template) -> Self {
		Self { kind: AttachmentKind::Template, payload: AttachmentPayload::Template(template) }
	}
}

/// What a quick reply button collects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickReplyKind {
	/// Text button with a postback payload.
	Text,
	/// Asks for the recipient's location.
	Location,
	/// Asks for the phone number tied to the account.
	UserPhoneNumber,
	/// Asks for the email tied to the account.
	UserEmail,
}

/// Button shown above the composer until the recipient taps one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReply {
	/// Reply kind.
	pub content_type: QuickReplyKind,
	/// Label; required for text replies, up to 20 characters.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	/// Postback data; required for text replies, up to 1000 characters.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub payload: Option<String>,
	/// Icon for text replies, at least 24x24 pixels.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image_url: Option<String>,
}
impl QuickReply {
	/// Creates a text reply.
	pub fn text(title: impl Into<String>, payload: impl Into<String>) -> Self {
		Self {
			content_type: QuickReplyKind::Text,
			title: Some(title.into()),
			payload: Some(payload.into()),
			image_url: None,
		}
	}

	/// Creates a reply collecting `kind` with no label.
	pub fn collect(kind: QuickReplyKind) -> Self {
		Self { content_type: kind, title: None, payload: None, image_url: None }
	}

	/// Sets the icon.
	pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
		self.image_url = Some(image_url.into());

		self
	}
}

/// Message body: text or an attachment, with optional quick replies and metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
	/// Plain text, up to 2000 characters.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub text: Option<String>,
	/// Media or template attachment.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub attachment: Option<Attachment>,
	/// Up to thirteen quick replies.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub quick_replies: Vec<QuickReply>,
	/// Developer-defined string echoed back in webhooks.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub metadata: Option<String>,
}
impl Message {
	/// Creates a text message.
	pub fn text(text: impl Into<String>) -> Self {
		Self { text: Some(text.into()), ..Default::default() }
	}

	/// Creates an attachment message.
	pub fn attachment(attachment: Attachment) -> Self {
		Self { attachment: Some(attachment), ..Default::default() }
	}

	/// Appends a quick reply.
	pub fn quick_reply(mut self, reply: QuickReply) -> Self {
		self.quick_replies.push(reply);

		self
	}
}

//! Messenger Send API: page-scoped messages posted as JSON to `me/messages`.
//!
//! [`SendRequest`] models the request envelope, [`message`] the bodies (text, media, quick
//! replies), and [`template`] the structured templates with their buttons.

pub mod message;
pub mod template;

pub use message::*;
pub use template::*;

// self
use crate::{
	_prelude::*,
	client::GraphClient,
	http::Method,
	obs::{self, Operation},
	params::Params,
	transport,
};

/// Path messages are posted to.
pub const SEND_PATH: &str = "me/messages";
/// Path listing the message tags available to the page.
pub const MESSAGE_TAGS_PATH: &str = "page_message_tags";

/// Addressing mode of a [`Recipient`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientTarget {
	/// Page-scoped user id.
	Id(String),
	/// Phone number in `+1(212)555-2368` form; requires customer matching.
	PhoneNumber(String),
	/// `user_ref` issued by the checkbox plugin.
	UserRef(String),
}

/// Name hint improving phone-number matching.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientName {
	/// Given name.
	pub first_name: String,
	/// Family name.
	pub last_name: String,
}

/// Message recipient; exactly one addressing mode per request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
	/// Addressing mode.
	#[serde(flatten)]
	pub target: RecipientTarget,
	/// Only honoured alongside [`RecipientTarget::PhoneNumber`].
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<RecipientName>,
}
impl Recipient {
	/// Addresses a page-scoped user id.
	pub fn id(id: impl Into<String>) -> Self {
		Self { target: RecipientTarget::Id(id.into()), name: None }
	}

	/// Addresses a phone number.
	pub fn phone_number(number: impl Into<String>) -> Self {
		Self { target: RecipientTarget::PhoneNumber(number.into()), name: None }
	}

	/// Addresses a checkbox plugin `user_ref`.
	pub fn user_ref(user_ref: impl Into<String>) -> Self {
		Self { target: RecipientTarget::UserRef(user_ref.into()), name: None }
	}

	/// Attaches a name hint for phone-number matching.
	pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
		self.name = Some(RecipientName { first_name: first_name.into(), last_name: last_name.into() });

		self
	}
}

/// Policy category the message is sent under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessagingType {
	/// Reply to a received message.
	Response,
	/// Proactive message inside the standard window.
	Update,
	/// Message outside the standard window; requires a [`MessageTag`].
	MessageTag,
}

/// Use case allowing a message outside the standard window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageTag {
	/// Emergency or utility alert.
	CommunityAlert,
	/// Reminder of an event the recipient will attend.
	ConfirmedEventReminder,
	/// Non-promotional subscription content.
	NonPromotionalSubscription,
	/// A requested pairing was found.
	PairingUpdate,
	/// Status change of an application.
	ApplicationUpdate,
	/// Change to account settings.
	AccountUpdate,
	/// Update on an existing transaction.
	PaymentUpdate,
	/// Confirmation of financial activity.
	PersonalFinanceUpdate,
	/// Shipping status change.
	ShippingUpdate,
	/// Change to an existing reservation.
	ReservationUpdate,
	/// Update to a customer service issue.
	IssueResolution,
	/// Change to an existing appointment.
	AppointmentUpdate,
	/// In-game progression or live event.
	GameEvent,
	/// Change to a transportation reservation.
	TransportationUpdate,
	/// New bot functionality.
	FeatureFunctionalityUpdate,
	/// Update for an event the recipient holds a ticket to.
	TicketUpdate,
}

/// Typing indicator or read receipt; sent without a message body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderAction {
	/// Show the typing bubble.
	TypingOn,
	/// Hide the typing bubble.
	TypingOff,
	/// Show the seen confirmation.
	MarkSeen,
}

/// Push notification behaviour on the recipient's device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
	/// Sound or vibration.
	Regular,
	/// On-screen notification only.
	SilentPush,
	/// No notification.
	NoPush,
}

/// JSON body of a Send API call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendRequest {
	/// Policy category; absent on sender actions.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub messaging_type: Option<MessagingType>,
	/// Addressee.
	pub recipient: Recipient,
	/// Message body; mutually exclusive with `sender_action`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message: Option<Message>,
	/// Sender action; mutually exclusive with `message`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sender_action: Option<SenderAction>,
	/// Push behaviour; the API defaults to regular.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub notification_type: Option<NotificationType>,
	/// Required with [`MessagingType::MessageTag`].
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tag: Option<MessageTag>,
}
impl SendRequest {
	/// Creates a request delivering `message` to `recipient`.
	pub fn message(messaging_type: MessagingType, recipient: Recipient, message: Message) -> Self {
		Self {
			messaging_type: Some(messaging_type),
			recipient,
			message: Some(message),
			sender_action: None,
			notification_type: None,
			tag: None,
		}
	}

	/// Creates a request carrying only `recipient` and `action`.
	pub fn action(recipient: Recipient, action: SenderAction) -> Self {
		Self {
			messaging_type: None,
			recipient,
			message: None,
			sender_action: Some(action),
			notification_type: None,
			tag: None,
		}
	}

	/// Sets the message tag and switches the messaging type to [`MessagingType::MessageTag`].
	pub fn tagged(mut self, tag: MessageTag) -> Self {
		self.messaging_type = Some(MessagingType::MessageTag);
		self.tag = Some(tag);

		self
	}

	/// Sets the push behaviour.
	pub fn with_notification(mut self, notification_type: NotificationType) -> Self {
		self.notification_type = Some(notification_type);

		self
	}
}

/// Response to a delivered message.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SendResponse {
	/// Page-scoped id of the recipient.
	#[serde(default)]
	pub recipient_id: Option<String>,
	/// Id of the delivered message; absent for sender actions.
	#[serde(default)]
	pub message_id: Option<String>,
}

/// Sends `request` on behalf of the page whose token `client` carries.
pub fn send_message<G>(client: &G, request: &SendRequest) -> Result<SendResponse>
where
	G: ?Sized + GraphClient,
{
	obs::observe(Operation::SendMessage, "send_message", || {
		let token = client.access_token()?;
		let body = client.transport().send_json(SEND_PATH, &Params::new(), request, Some(&token))?;

		transport::decode_as(body)
	})
}

/// Lists the message tags the page may use.
pub fn page_message_tags<G>(client: &G) -> Result<Value>
where
	G: ?Sized + GraphClient,
{
	client.call(MESSAGE_TAGS_PATH, Method::Get, &Params::new())
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn text_message_omits_unset_fields() {
		let request = SendRequest::message(
			MessagingType::Response,
			Recipient::id("1254459154682919"),
			Message::text("hello, world!"),
		);

		assert_eq!(
			serde_json::to_value(&request).expect("Request should serialize."),
			json!({
				"messaging_type": "RESPONSE",
				"recipient": { "id": "1254459154682919" },
				"message": { "text": "hello, world!" },
			}),
		);
	}

	#[test]
	fn tagged_attachment_switches_messaging_type() {
		let request = SendRequest::message(
			MessagingType::Update,
			Recipient::user_ref("ref-1"),
			Message::attachment(Attachment::from_url(
				AttachmentKind::Image,
				"https://example.com/cat.png",
				true,
			)),
		)
		.tagged(MessageTag::AccountUpdate)
		.with_notification(NotificationType::SilentPush);

		assert_eq!(
			serde_json::to_value(&request).expect("Request should serialize."),
			json!({
				"messaging_type": "MESSAGE_TAG",
				"recipient": { "user_ref": "ref-1" },
				"message": {
					"attachment": {
						"type": "image",
						"payload": { "url": "https://example.com/cat.png", "is_reusable": true },
					},
				},
				"notification_type": "SILENT_PUSH",
				"tag": "ACCOUNT_UPDATE",
			}),
		);
	}

	#[test]
	fn sender_action_carries_only_recipient() {
		let request = SendRequest::action(Recipient::id("42"), SenderAction::MarkSeen);

		assert_eq!(
			serde_json::to_value(&request).expect("Request should serialize."),
			json!({ "recipient": { "id": "42" }, "sender_action": "mark_seen" }),
		);
	}

	#[test]
	fn phone_recipient_carries_name_hint() {
		let recipient = Recipient::phone_number("+1(212)555-2368").with_name("John", "Doe");
		let value = serde_json::to_value(&recipient).expect("Recipient should serialize.");

		assert_eq!(
			value,
			json!({
				"phone_number": "+1(212)555-2368",
				"name": { "first_name": "John", "last_name": "Doe" },
			}),
		);
		assert_eq!(
			serde_json::from_value::<Recipient>(value).expect("Recipient should deserialize."),
			recipient,
		);
	}

	#[test]
	fn generic_template_message_nests_under_attachment() {
		let request = SendRequest::message(
			MessagingType::Response,
			Recipient::id("42"),
			Message::attachment(Attachment::template(Template::Generic {
				elements: vec![Element::new("Welcome!").button(Button::postback("Start", "START"))],
			})),
		);
		let value = serde_json::to_value(&request).expect("Request should serialize.");

		assert_eq!(
			value["message"]["attachment"],
			json!({
				"type": "template",
				"payload": {
					"template_type": "generic",
					"elements": [{
						"title": "Welcome!",
						"buttons": [{ "type": "postback", "title": "Start", "payload": "START" }],
					}],
				},
			}),
		);
	}
}

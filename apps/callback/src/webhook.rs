//! Serde model of the platform callback payload.

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CallbackPayload {
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    #[serde(default)]
    pub r#type: Option<String>,
    #[serde(default)]
    pub reply_token: Option<String>,
    #[serde(default)]
    pub message: Option<MessageContent>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MessageContent {
    #[serde(default)]
    pub r#type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Reply address and text of a text-message event.
#[derive(Debug, PartialEq)]
pub struct TextMessage<'a> {
    pub reply_token: &'a str,
    pub text: &'a str,
}

/// Returns the reply token and text when `event` is a text message.
/// Follow/unfollow/postback events and non-text messages yield `None`.
pub fn text_message(event: &WebhookEvent) -> Option<TextMessage<'_>> {
    if let Some(kind) = event.r#type.as_deref() {
        if kind != "message" {
            tracing::debug!(event_type = ?kind, "ignoring non-message event");
            return None;
        }
    }

    let message = event.message.as_ref()?;
    if message.r#type.as_deref() != Some("text") {
        tracing::debug!(message_type = ?message.r#type, "ignoring non-text message");
        return None;
    }

    let reply_token = event.reply_token.as_deref()?;
    let text = message.text.as_deref()?;
    Some(TextMessage { reply_token, text })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_callback_payload() {
        let raw = r#"{"events":[{"replyToken":"abc123","message":{"type":"text","text":"hello"}}]}"#;
        let payload: CallbackPayload = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.events.len(), 1);

        let selected = text_message(&payload.events[0]).expect("text event");
        assert_eq!(
            selected,
            TextMessage {
                reply_token: "abc123",
                text: "hello"
            }
        );
    }

    #[test]
    fn parses_full_event_shape() {
        let raw = r#"{
            "destination": "U0000",
            "events": [{
                "type": "message",
                "mode": "active",
                "timestamp": 1700000000000,
                "replyToken": "tok-1",
                "source": {"type": "user", "userId": "U1234"},
                "message": {"id": "444", "type": "text", "text": "good morning"}
            }]
        }"#;
        let payload: CallbackPayload = serde_json::from_str(raw).unwrap();
        let selected = text_message(&payload.events[0]).expect("text event");
        assert_eq!(selected.reply_token, "tok-1");
        assert_eq!(selected.text, "good morning");
    }

    #[test]
    fn skips_non_message_events() {
        let event = WebhookEvent {
            r#type: Some("follow".into()),
            reply_token: Some("tok-2".into()),
            message: None,
        };
        assert!(text_message(&event).is_none());
    }

    #[test]
    fn skips_non_text_messages() {
        let event = WebhookEvent {
            r#type: Some("message".into()),
            reply_token: Some("tok-3".into()),
            message: Some(MessageContent {
                r#type: Some("sticker".into()),
                text: None,
            }),
        };
        assert!(text_message(&event).is_none());
    }

    #[test]
    fn skips_events_without_reply_token() {
        let event = WebhookEvent {
            r#type: Some("message".into()),
            reply_token: None,
            message: Some(MessageContent {
                r#type: Some("text".into()),
                text: Some("hi".into()),
            }),
        };
        assert!(text_message(&event).is_none());
    }

    #[test]
    fn empty_body_has_no_events() {
        let payload: CallbackPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.events.is_empty());
    }
}

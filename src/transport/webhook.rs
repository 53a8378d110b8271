use serde::Deserialize;

use crate::domain::{WebhookData, WebhookPayload};
use crate::error::TextbeltError;

#[derive(Debug, Clone, Deserialize)]
struct WebhookJsonPayload {
    #[serde(rename = "conversationId")]
    conversation_id: String,
    #[serde(rename = "fromNumber")]
    from_number: String,
    text: String,
    #[serde(default)]
    data: Option<String>,
}

/// Decode an *authenticated* webhook body into a [`WebhookPayload`].
///
/// Callers must have checked the signature first; this function performs no
/// authentication of its own.
pub fn decode_webhook_payload(body: &str) -> Result<WebhookPayload, TextbeltError> {
    let parsed: WebhookJsonPayload =
        serde_json::from_str(body).map_err(TextbeltError::from_json)?;

    let data = parsed
        .data
        .map(WebhookData::new)
        .transpose()
        .map_err(TextbeltError::decode)?;

    Ok(WebhookPayload {
        conversation_id: parsed.conversation_id,
        from_number: parsed.from_number,
        text: parsed.text,
        data,
    })
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorCategory;

    use super::*;

    #[test]
    fn decode_parses_documented_payload() {
        let json = r#"{"conversationId":"123456","fromNumber":"+1555123456","text":"Here is my reply","data":"my custom data"}"#;
        let payload = decode_webhook_payload(json).unwrap();
        assert_eq!(payload.conversation_id, "123456");
        assert_eq!(payload.from_number, "+1555123456");
        assert_eq!(payload.text, "Here is my reply");
        assert_eq!(payload.data.as_ref().unwrap().as_str(), "my custom data");
    }

    #[test]
    fn decode_allows_missing_data() {
        let json = r#"{"conversationId":"1","fromNumber":"+1555123456","text":"ok"}"#;
        let payload = decode_webhook_payload(json).unwrap();
        assert_eq!(payload.data, None);
    }

    #[test]
    fn decode_rejects_missing_required_field() {
        let json = r#"{"fromNumber":"+1555123456","text":"ok"}"#;
        let err = decode_webhook_payload(json).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Decode);
    }

    #[test]
    fn decode_enforces_data_length_limit() {
        let long = "x".repeat(101);
        let json = format!(
            r#"{{"conversationId":"1","fromNumber":"+1555123456","text":"ok","data":"{long}"}}"#
        );
        let err = decode_webhook_payload(&json).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Decode);
    }
}

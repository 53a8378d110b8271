use serde::Deserialize;

use crate::domain::{MessageText, RawPhoneNumber, SenderName, SmsRequest, SmsResponse, WebhookData, WebhookUrl};
use crate::error::TextbeltError;

use super::WireId;

#[derive(Debug, Clone, Deserialize)]
struct SendSmsJsonResponse {
    success: bool,
    #[serde(rename = "quotaRemaining")]
    quota_remaining: u64,
    #[serde(default, rename = "textId")]
    text_id: Option<WireId>,
    #[serde(default)]
    error: Option<String>,
}

pub fn encode_send_sms_form(request: &SmsRequest) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();

    params.push((
        RawPhoneNumber::FIELD.to_owned(),
        request.phone().raw().to_owned(),
    ));
    params.push((
        MessageText::FIELD.to_owned(),
        request.message().as_str().to_owned(),
    ));
    if let Some(sender) = request.sender.as_ref() {
        params.push((SenderName::FIELD.to_owned(), sender.as_str().to_owned()));
    }
    if let Some(url) = request.reply_webhook_url.as_ref() {
        params.push((WebhookUrl::FIELD.to_owned(), url.as_str().to_owned()));
    }
    if let Some(data) = request.webhook_data.as_ref() {
        params.push((WebhookData::FIELD.to_owned(), data.as_str().to_owned()));
    }

    params
}

pub fn decode_send_sms_json_response(body: &str) -> Result<SmsResponse, TextbeltError> {
    let parsed: SendSmsJsonResponse =
        serde_json::from_str(body).map_err(TextbeltError::from_json)?;

    Ok(SmsResponse {
        success: parsed.success,
        quota_remaining: parsed.quota_remaining,
        text_id: parsed.text_id.map(WireId::into_string),
        error: parsed.error,
    })
}

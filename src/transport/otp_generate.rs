use serde::Deserialize;

use crate::domain::{
    MessageText, OtpGenerateRequest, OtpGenerateResponse, OtpLength, OtpLifetimeSeconds,
    RawPhoneNumber, UserId,
};
use crate::error::TextbeltError;

use super::WireId;

#[derive(Debug, Clone, Deserialize)]
struct OtpGenerateJsonResponse {
    success: bool,
    #[serde(default, rename = "textId")]
    text_id: Option<WireId>,
    #[serde(rename = "quotaRemaining")]
    quota_remaining: u64,
    otp: String,
}

pub fn encode_otp_generate_form(request: &OtpGenerateRequest) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();

    params.push((
        RawPhoneNumber::FIELD.to_owned(),
        request.phone().raw().to_owned(),
    ));
    params.push((
        UserId::FIELD.to_owned(),
        request.user_id().as_str().to_owned(),
    ));
    if let Some(message) = request.message.as_ref() {
        params.push((MessageText::FIELD.to_owned(), message.as_str().to_owned()));
    }
    if let Some(lifetime) = request.lifetime {
        params.push((
            OtpLifetimeSeconds::FIELD.to_owned(),
            lifetime.value().to_string(),
        ));
    }
    if let Some(length) = request.length {
        params.push((OtpLength::FIELD.to_owned(), length.value().to_string()));
    }

    params
}

pub fn decode_otp_generate_json_response(
    body: &str,
) -> Result<OtpGenerateResponse, TextbeltError> {
    let parsed: OtpGenerateJsonResponse =
        serde_json::from_str(body).map_err(TextbeltError::from_json)?;

    Ok(OtpGenerateResponse {
        success: parsed.success,
        text_id: parsed.text_id.map(WireId::into_string),
        quota_remaining: parsed.quota_remaining,
        otp: parsed.otp,
    })
}

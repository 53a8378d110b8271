//! Transport layer: wire-format details (form encoding and JSON decoding).

mod otp_generate;
mod otp_verify;
mod quota;
mod send_sms;
mod sms_status;
mod webhook;

pub use otp_generate::{decode_otp_generate_json_response, encode_otp_generate_form};
pub use otp_verify::{decode_otp_verify_json_response, encode_otp_verify_query};
pub use quota::decode_credit_balance_json_response;
pub use send_sms::{decode_send_sms_json_response, encode_send_sms_form};
pub use sms_status::decode_sms_status_json_response;
pub use webhook::decode_webhook_payload;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
/// Textbelt is loose about id encoding; accept both JSON strings and numbers.
pub(crate) enum WireId {
    String(String),
    Number(serde_json::Number),
}

impl WireId {
    pub(crate) fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }
}

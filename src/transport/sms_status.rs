use serde::Deserialize;

use crate::domain::{DeliveryStatus, SmsStatusResponse};
use crate::error::TextbeltError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
enum WireStatus {
    Delivered,
    Sent,
    Sending,
    Failed,
    Unknown,
}

impl From<WireStatus> for DeliveryStatus {
    fn from(value: WireStatus) -> Self {
        match value {
            WireStatus::Delivered => Self::Delivered,
            WireStatus::Sent => Self::Sent,
            WireStatus::Sending => Self::Sending,
            WireStatus::Failed => Self::Failed,
            WireStatus::Unknown => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct SmsStatusJsonResponse {
    status: WireStatus,
}

pub fn decode_sms_status_json_response(body: &str) -> Result<SmsStatusResponse, TextbeltError> {
    let parsed: SmsStatusJsonResponse =
        serde_json::from_str(body).map_err(TextbeltError::from_json)?;

    Ok(SmsStatusResponse {
        status: parsed.status.into(),
    })
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorCategory;

    use super::*;

    #[test]
    fn decode_parses_all_documented_statuses() {
        let cases = [
            ("DELIVERED", DeliveryStatus::Delivered),
            ("SENT", DeliveryStatus::Sent),
            ("SENDING", DeliveryStatus::Sending),
            ("FAILED", DeliveryStatus::Failed),
            ("UNKNOWN", DeliveryStatus::Unknown),
        ];

        for (wire, expected) in cases {
            let json = format!(r#"{{"status": "{wire}"}}"#);
            let response = decode_sms_status_json_response(&json).unwrap();
            assert_eq!(response.status, expected);
        }
    }

    #[test]
    fn decode_rejects_unknown_status_as_decode_error() {
        let err = decode_sms_status_json_response(r#"{"status": "LOST"}"#).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Decode);
    }
}

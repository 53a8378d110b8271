use serde::Deserialize;

use crate::domain::{OtpCode, OtpVerifyRequest, OtpVerifyResponse, UserId};
use crate::error::TextbeltError;

#[derive(Debug, Clone, Deserialize)]
struct OtpVerifyJsonResponse {
    success: bool,
    #[serde(rename = "isValidOtp")]
    is_valid_otp: bool,
}

pub fn encode_otp_verify_query(request: &OtpVerifyRequest) -> Vec<(String, String)> {
    vec![
        (OtpCode::FIELD.to_owned(), request.otp().as_str().to_owned()),
        (
            UserId::FIELD.to_owned(),
            request.user_id().as_str().to_owned(),
        ),
    ]
}

pub fn decode_otp_verify_json_response(body: &str) -> Result<OtpVerifyResponse, TextbeltError> {
    let parsed: OtpVerifyJsonResponse =
        serde_json::from_str(body).map_err(TextbeltError::from_json)?;

    Ok(OtpVerifyResponse {
        success: parsed.success,
        is_valid_otp: parsed.is_valid_otp,
    })
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorCategory;

    use super::*;

    #[test]
    fn encode_emits_query_pairs() {
        let request = OtpVerifyRequest::new(
            OtpCode::new("671651").unwrap(),
            UserId::new("user-42").unwrap(),
        );
        assert_eq!(
            encode_otp_verify_query(&request),
            vec![
                ("otp".to_owned(), "671651".to_owned()),
                ("userid".to_owned(), "user-42".to_owned()),
            ]
        );
    }

    #[test]
    fn decode_parses_documented_response() {
        let json = r#"{"success": true, "isValidOtp": true}"#;
        let response = decode_otp_verify_json_response(json).unwrap();
        assert!(response.success);
        assert!(response.is_valid_otp);

        let json = r#"{"success": true, "isValidOtp": false}"#;
        let response = decode_otp_verify_json_response(json).unwrap();
        assert!(!response.is_valid_otp);
    }

    #[test]
    fn decode_requires_wire_field_name() {
        let err =
            decode_otp_verify_json_response(r#"{"success": true, "is_valid_otp": true}"#)
                .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Decode);
    }
}

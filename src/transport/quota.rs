use serde::Deserialize;

use crate::domain::CreditBalanceResponse;
use crate::error::TextbeltError;

#[derive(Debug, Clone, Deserialize)]
struct CreditBalanceJsonResponse {
    success: bool,
    #[serde(rename = "quotaRemaining")]
    quota_remaining: u64,
}

pub fn decode_credit_balance_json_response(
    body: &str,
) -> Result<CreditBalanceResponse, TextbeltError> {
    let parsed: CreditBalanceJsonResponse =
        serde_json::from_str(body).map_err(TextbeltError::from_json)?;

    Ok(CreditBalanceResponse {
        success: parsed.success,
        quota_remaining: parsed.quota_remaining,
    })
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorCategory;

    use super::*;

    #[test]
    fn decode_parses_documented_response() {
        let json = r#"{"success": true, "quotaRemaining": 98}"#;
        let response = decode_credit_balance_json_response(json).unwrap();
        assert!(response.success);
        assert_eq!(response.quota_remaining, 98);
    }

    #[test]
    fn decode_classifies_non_json_as_transport() {
        let err = decode_credit_balance_json_response("quota: lots").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Transport);
    }
}

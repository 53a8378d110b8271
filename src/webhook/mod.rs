//! Webhook verification: authenticity and freshness of inbound reply calls.
//!
//! Textbelt signs every reply webhook request with
//! `HMAC-SHA256(key = api key, message = timestamp ++ body)` and sends the
//! hex signature and the timestamp as headers. [`verify`] re-derives the
//! signature and only decodes the body once it matches.
//!
//! A stale timestamp or a mismatched signature is an ordinary negative
//! outcome (`Ok(None)`), not an error: it means the request was forged or
//! replayed, which is exactly what verification exists to detect. Errors are
//! reserved for genuine faults, such as an unparsable timestamp header or an
//! authenticated body that fails schema validation.
//!
//! Verification is stateless. An exact replay of a genuine request within
//! the freshness window re-validates successfully; callers that need replay
//! protection must track seen signatures themselves.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domain::{ApiKey, UnixTimestamp, WebhookPayload};
use crate::error::TextbeltError;
use crate::transport::decode_webhook_payload;

type HmacSha256 = Hmac<Sha256>;

/// Maximum accepted age of a webhook timestamp, in seconds (15 minutes).
///
/// An age of exactly this many seconds is still accepted.
pub const FRESHNESS_WINDOW_SECS: i64 = 900;

/// Compute the hex-encoded signature Textbelt would produce for this
/// timestamp and body.
///
/// Exposed for tests and for emulating the webhook sender.
pub fn sign(api_key: &ApiKey, timestamp: &str, raw_body: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(api_key.as_str().as_bytes())
        .expect("HMAC accepts keys of any size");
    mac.update(timestamp.as_bytes());
    mac.update(raw_body.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verify an inbound webhook request against the current system clock.
///
/// `timestamp` and `signature` are the raw `X-textbelt-timestamp` and
/// `X-textbelt-signature` header values; `raw_body` is the unmodified
/// request body text.
///
/// Returns `Ok(Some(payload))` for an authentic, fresh request,
/// `Ok(None)` for a stale or mis-signed one, and an error when the
/// timestamp header is unparsable or an authenticated body does not match
/// the payload schema.
pub fn verify(
    api_key: &ApiKey,
    timestamp: &str,
    signature: &str,
    raw_body: &str,
) -> Result<Option<WebhookPayload>, TextbeltError> {
    verify_at(api_key, now(), timestamp, signature, raw_body)
}

/// [`verify`] against an explicit current time.
pub fn verify_at(
    api_key: &ApiKey,
    now: UnixTimestamp,
    timestamp: &str,
    signature: &str,
    raw_body: &str,
) -> Result<Option<WebhookPayload>, TextbeltError> {
    let sent_at = UnixTimestamp::parse(timestamp)?;

    // Reject stale replays before spending the HMAC computation. Future
    // timestamps (negative age) pass; only age beyond the window rejects.
    if sent_at.age_at(now) > FRESHNESS_WINDOW_SECS {
        return Ok(None);
    }

    if !signature_matches(api_key, timestamp, raw_body, signature) {
        return Ok(None);
    }

    // The body is authenticated at this point, so a malformed payload is an
    // application fault rather than a forgery.
    decode_webhook_payload(raw_body).map(Some)
}

/// Constant-time signature comparison via `Mac::verify_slice`.
///
/// A supplied value that is not valid hex cannot match any signature and is
/// treated as an ordinary mismatch.
fn signature_matches(api_key: &ApiKey, timestamp: &str, raw_body: &str, supplied: &str) -> bool {
    let Ok(supplied) = hex::decode(supplied) else {
        return false;
    };

    let mut mac = HmacSha256::new_from_slice(api_key.as_str().as_bytes())
        .expect("HMAC accepts keys of any size");
    mac.update(timestamp.as_bytes());
    mac.update(raw_body.as_bytes());
    mac.verify_slice(&supplied).is_ok()
}

fn now() -> UnixTimestamp {
    use std::time::{SystemTime, UNIX_EPOCH};

    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or(0);
    UnixTimestamp::new(secs)
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorCategory;

    use super::*;

    const BODY: &str = r#"{"conversationId":"123456","fromNumber":"+1555123456","text":"Here is my reply","data":"my custom data"}"#;

    fn key() -> ApiKey {
        ApiKey::new("test_api_key").unwrap()
    }

    fn now() -> UnixTimestamp {
        UnixTimestamp::new(1_700_000_000)
    }

    #[test]
    fn fresh_signed_request_verifies_with_exact_fields() {
        let timestamp = (now().value() - 300).to_string();
        let signature = sign(&key(), &timestamp, BODY);

        let payload = verify_at(&key(), now(), &timestamp, &signature, BODY)
            .unwrap()
            .expect("payload");
        assert_eq!(payload.conversation_id, "123456");
        assert_eq!(payload.from_number, "+1555123456");
        assert_eq!(payload.text, "Here is my reply");
        assert_eq!(payload.data.as_ref().unwrap().as_str(), "my custom data");
    }

    #[test]
    fn stale_request_is_rejected_even_with_valid_signature() {
        let timestamp = (now().value() - 901).to_string();
        let signature = sign(&key(), &timestamp, BODY);

        let outcome = verify_at(&key(), now(), &timestamp, &signature, BODY).unwrap();
        assert_eq!(outcome, None);
    }

    #[test]
    fn age_of_exactly_the_window_is_accepted() {
        let timestamp = (now().value() - FRESHNESS_WINDOW_SECS).to_string();
        let signature = sign(&key(), &timestamp, BODY);

        let outcome = verify_at(&key(), now(), &timestamp, &signature, BODY).unwrap();
        assert!(outcome.is_some());
    }

    #[test]
    fn extreme_timestamps_cannot_bypass_the_freshness_window() {
        // The header may carry any i64; the age computation must not wrap
        // an astronomically stale timestamp into a fresh-looking one.
        let timestamp = i64::MIN.to_string();
        let signature = sign(&key(), &timestamp, BODY);
        let outcome = verify_at(&key(), now(), &timestamp, &signature, BODY).unwrap();
        assert_eq!(outcome, None);

        // The far-future extreme stays on the accepted side (no lower bound
        // on age), still subject to the signature check.
        let timestamp = i64::MAX.to_string();
        let signature = sign(&key(), &timestamp, BODY);
        let outcome = verify_at(&key(), now(), &timestamp, &signature, BODY).unwrap();
        assert!(outcome.is_some());
    }

    #[test]
    fn future_timestamp_is_accepted() {
        let timestamp = (now().value() + 60).to_string();
        let signature = sign(&key(), &timestamp, BODY);

        let outcome = verify_at(&key(), now(), &timestamp, &signature, BODY).unwrap();
        assert!(outcome.is_some());
    }

    #[test]
    fn wrong_signature_is_rejected() {
        let timestamp = (now().value() - 300).to_string();
        let signature = sign(&ApiKey::new("other_key").unwrap(), &timestamp, BODY);

        let outcome = verify_at(&key(), now(), &timestamp, &signature, BODY).unwrap();
        assert_eq!(outcome, None);
    }

    #[test]
    fn mutated_body_is_rejected_with_original_signature() {
        let timestamp = (now().value() - 300).to_string();
        let signature = sign(&key(), &timestamp, BODY);
        let mutated = BODY.replacen("Here", "here", 1);
        assert_ne!(mutated, BODY);

        let outcome = verify_at(&key(), now(), &timestamp, &signature, &mutated).unwrap();
        assert_eq!(outcome, None);
    }

    #[test]
    fn non_hex_signature_is_an_ordinary_mismatch() {
        let timestamp = (now().value() - 300).to_string();

        let outcome = verify_at(&key(), now(), &timestamp, "not-hex!", BODY).unwrap();
        assert_eq!(outcome, None);
    }

    #[test]
    fn unparsable_timestamp_is_a_domain_error() {
        let err = verify_at(&key(), now(), "yesterday", "irrelevant", BODY).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Domain);
    }

    #[test]
    fn authenticated_malformed_body_is_a_decode_error() {
        let body = r#"{"fromNumber":"+1555123456"}"#;
        let timestamp = (now().value() - 300).to_string();
        let signature = sign(&key(), &timestamp, body);

        let err = verify_at(&key(), now(), &timestamp, &signature, body).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Decode);
    }

    #[test]
    fn system_clock_variant_accepts_a_fresh_request() {
        let timestamp = super::now().value().to_string();
        let signature = sign(&key(), &timestamp, BODY);

        let outcome = verify(&key(), &timestamp, &signature, BODY).unwrap();
        assert!(outcome.is_some());
    }
}

//! Typed Rust client for the Textbelt SMS/OTP HTTP API.
//!
//! The design follows three layers: a domain layer of strong types, a
//! transport layer for wire-format details, and a small client layer
//! orchestrating requests. Two parts carry real contracts and get most of
//! the attention: the [`webhook`] verifier (HMAC-SHA256 authenticity plus a
//! 15-minute freshness window for inbound reply callbacks) and the error
//! normalizer ([`TextbeltError`], the single error surface for every
//! operation).
//!
//! ```rust,no_run
//! use textbelt::{ApiKey, MessageText, RawPhoneNumber, SmsRequest, TextbeltClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), textbelt::TextbeltError> {
//!     let client = TextbeltClient::new(ApiKey::new("...")?)?;
//!     let request = SmsRequest::new(
//!         RawPhoneNumber::new("+15551234567")?,
//!         MessageText::new("Hello from Rust")?,
//!     );
//!     let response = client.send_sms(request).await?;
//!     println!("sent: {:?}", response.text_id);
//!     Ok(())
//! }
//! ```
//!
//! Verifying an inbound reply webhook:
//!
//! ```rust,no_run
//! # use textbelt::{ApiKey, TextbeltClient};
//! # fn handle(client: &TextbeltClient, timestamp: &str, signature: &str, body: &str)
//! #     -> Result<(), textbelt::TextbeltError> {
//! match client.verify_webhook(timestamp, signature, body)? {
//!     Some(payload) => println!("reply from {}: {}", payload.from_number, payload.text),
//!     None => println!("forged or stale webhook, dropping"),
//! }
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod error;
mod transport;
pub mod webhook;

pub use client::{HttpStatusError, RetryPolicy, TextbeltClient, TextbeltClientBuilder};
pub use domain::{
    ApiKey, CreditBalanceResponse, DeliveryStatus, MessageText, OtpCode, OtpGenerateRequest,
    OtpGenerateResponse, OtpLength, OtpLifetimeSeconds, OtpVerifyRequest, OtpVerifyResponse,
    PhoneNumber, RawPhoneNumber, SenderName, SmsRequest, SmsResponse, SmsStatusResponse, TextId,
    UnixTimestamp, UserId, ValidationError, WebhookData, WebhookPayload, WebhookUrl,
};
pub use error::{ErrorCategory, TextbeltError};

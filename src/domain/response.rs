use crate::domain::value::WebhookData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Delivery state of a sent text as reported by `GET /status/{textId}`.
pub enum DeliveryStatus {
    /// Carrier has confirmed sending.
    Delivered,
    /// Sent to carrier but confirmation receipt not available.
    Sent,
    /// Queued or dispatched to carrier.
    Sending,
    /// Not received.
    Failed,
    /// Could not determine status.
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsResponse {
    pub success: bool,
    pub quota_remaining: u64,
    pub text_id: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsStatusResponse {
    pub status: DeliveryStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpGenerateResponse {
    pub success: bool,
    pub text_id: Option<String>,
    pub quota_remaining: u64,
    /// Generated verification code; empty on failure.
    pub otp: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpVerifyResponse {
    pub success: bool,
    pub is_valid_otp: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditBalanceResponse {
    pub success: bool,
    pub quota_remaining: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Reply webhook body, produced only by successful webhook verification.
///
/// Holding one of these means the signature checked out; never construct it
/// from an unverified request body.
pub struct WebhookPayload {
    /// Id of the original text that began the conversation.
    pub conversation_id: String,
    /// Phone number of the user that sent the reply.
    pub from_number: String,
    /// Message content of the reply.
    pub text: String,
    /// Custom data set when the original SMS was sent.
    pub data: Option<WebhookData>,
}

//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{OtpGenerateRequest, OtpVerifyRequest, SmsRequest};
pub use response::{
    CreditBalanceResponse, DeliveryStatus, OtpGenerateResponse, OtpVerifyResponse, SmsResponse,
    SmsStatusResponse, WebhookPayload,
};
pub use validation::ValidationError;
pub use value::{
    ApiKey, MessageText, OtpCode, OtpLength, OtpLifetimeSeconds, PhoneNumber, RawPhoneNumber,
    SenderName, TextId, UnixTimestamp, UserId, WebhookData, WebhookUrl,
};

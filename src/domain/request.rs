use crate::domain::value::{
    MessageText, OtpCode, OtpLength, OtpLifetimeSeconds, RawPhoneNumber, SenderName, UserId,
    WebhookData, WebhookUrl,
};

#[derive(Debug, Clone)]
/// Request to send an SMS (`POST /text`).
///
/// When `reply_webhook_url` is set, Textbelt delivers recipient replies to
/// that URL; `webhook_data` is echoed back verbatim in those callbacks.
pub struct SmsRequest {
    phone: RawPhoneNumber,
    message: MessageText,
    pub sender: Option<SenderName>,
    pub reply_webhook_url: Option<WebhookUrl>,
    pub webhook_data: Option<WebhookData>,
}

impl SmsRequest {
    /// Create a request with the two required fields; optional fields start unset.
    pub fn new(phone: RawPhoneNumber, message: MessageText) -> Self {
        Self {
            phone,
            message,
            sender: None,
            reply_webhook_url: None,
            webhook_data: None,
        }
    }

    /// Set the sender name.
    pub fn sender(mut self, sender: SenderName) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Set the reply webhook URL.
    pub fn reply_webhook_url(mut self, url: WebhookUrl) -> Self {
        self.reply_webhook_url = Some(url);
        self
    }

    /// Set the custom webhook data.
    pub fn webhook_data(mut self, data: WebhookData) -> Self {
        self.webhook_data = Some(data);
        self
    }

    pub fn phone(&self) -> &RawPhoneNumber {
        &self.phone
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }
}

#[derive(Debug, Clone)]
/// Request to generate and send a one-time password (`POST /otp/generate`).
///
/// A custom `message` may contain the `$OTP` placeholder, which Textbelt
/// replaces with the generated code.
pub struct OtpGenerateRequest {
    phone: RawPhoneNumber,
    user_id: UserId,
    pub message: Option<MessageText>,
    pub lifetime: Option<OtpLifetimeSeconds>,
    pub length: Option<OtpLength>,
}

impl OtpGenerateRequest {
    /// Create a request with the two required fields; optional fields start unset.
    pub fn new(phone: RawPhoneNumber, user_id: UserId) -> Self {
        Self {
            phone,
            user_id,
            message: None,
            lifetime: None,
            length: None,
        }
    }

    /// Replace the default OTP message template.
    pub fn message(mut self, message: MessageText) -> Self {
        self.message = Some(message);
        self
    }

    /// Set the OTP validity period.
    pub fn lifetime(mut self, lifetime: OtpLifetimeSeconds) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    /// Set the OTP digit count.
    pub fn length(mut self, length: OtpLength) -> Self {
        self.length = Some(length);
        self
    }

    pub fn phone(&self) -> &RawPhoneNumber {
        &self.phone
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

#[derive(Debug, Clone)]
/// Request to verify a user-supplied one-time password (`GET /otp/verify`).
///
/// `user_id` must match the one used when the OTP was generated.
pub struct OtpVerifyRequest {
    otp: OtpCode,
    user_id: UserId,
}

impl OtpVerifyRequest {
    pub fn new(otp: OtpCode, user_id: UserId) -> Self {
        Self { otp, user_id }
    }

    pub fn otp(&self) -> &OtpCode {
        &self.otp
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

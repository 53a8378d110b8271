use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Textbelt API key (`key`).
///
/// Invariant: non-empty after trimming. Doubles as the HMAC-SHA256 key for
/// webhook verification, so treat it as a secret; `Debug` redacts the value.
pub struct ApiKey(String);

impl ApiKey {
    /// Form field name used by Textbelt (`key`).
    pub const FIELD: &'static str = "key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number as sent to Textbelt (`phone`).
///
/// Invariant: non-empty after trimming. This type does not normalize; if you
/// want E.164 normalization, parse into [`PhoneNumber`] and convert it into
/// [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Form field name used by Textbelt (`phone`).
    pub const FIELD: &'static str = "phone";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to Textbelt.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to a normalized raw value (E.164).
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Form field name used by Textbelt (`phone`).
    pub const FIELD: &'static str = "phone";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Text message content (`message`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Form field name used by Textbelt (`message`).
    pub const FIELD: &'static str = "message";

    /// Create a validated [`MessageText`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Name of the entity sending the SMS (`sender`).
///
/// Invariant: non-empty after trimming.
pub struct SenderName(String);

impl SenderName {
    /// Form field name used by Textbelt (`sender`).
    pub const FIELD: &'static str = "sender";

    /// Create a validated [`SenderName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Reply webhook URL (`replyWebhookUrl`).
///
/// Invariant: parses as an absolute URL. Textbelt calls this URL when the
/// recipient replies to the message.
pub struct WebhookUrl(url::Url);

impl WebhookUrl {
    /// Form field name used by Textbelt (`replyWebhookUrl`).
    pub const FIELD: &'static str = "replyWebhookUrl";

    /// Create a validated [`WebhookUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        let parsed = url::Url::parse(trimmed).map_err(|_| ValidationError::InvalidUrl {
            input: trimmed.to_owned(),
        })?;
        Ok(Self(parsed))
    }

    /// The URL in serialized form.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The parsed URL from the `url` crate.
    pub fn as_url(&self) -> &url::Url {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Custom data echoed back in the reply webhook payload (`webhookData`).
///
/// Invariant: at most 100 characters.
pub struct WebhookData(String);

impl WebhookData {
    /// Form field name used by Textbelt (`webhookData`).
    pub const FIELD: &'static str = "webhookData";

    /// Maximum allowed length in characters.
    pub const MAX_LEN: usize = 100;

    /// Create a validated [`WebhookData`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let len = value.chars().count();
        if len > Self::MAX_LEN {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: Self::MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(value))
    }

    /// Borrow the data as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Caller-chosen user identifier for OTP flows (`userid`).
///
/// Invariant: non-empty after trimming.
pub struct UserId(String);

impl UserId {
    /// Form field name used by Textbelt (`userid`).
    pub const FIELD: &'static str = "userid";

    /// Create a validated [`UserId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated user id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// One-time password entered by the user (`otp`).
///
/// Invariant: non-empty after trimming.
pub struct OtpCode(String);

impl OtpCode {
    /// Form field name used by Textbelt (`otp`).
    pub const FIELD: &'static str = "otp";

    /// Create a validated [`OtpCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Identifier of a sent text as returned by Textbelt (`textId`).
///
/// Invariant: non-empty after trimming.
pub struct TextId(String);

impl TextId {
    /// Response/path field name used by Textbelt (`textId`).
    pub const FIELD: &'static str = "textId";

    /// Create a validated [`TextId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// OTP validity period in seconds (`lifetime`).
///
/// Invariant: non-zero. Textbelt defaults to 180 seconds when omitted.
pub struct OtpLifetimeSeconds(u32);

impl OtpLifetimeSeconds {
    /// Form field name used by Textbelt (`lifetime`).
    pub const FIELD: &'static str = "lifetime";

    /// Create a validated lifetime value.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::Zero { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Get the underlying number of seconds.
    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Number of digits in a generated OTP (`length`).
///
/// Invariant: non-zero. Textbelt defaults to 6 digits when omitted.
pub struct OtpLength(u8);

impl OtpLength {
    /// Form field name used by Textbelt (`length`).
    pub const FIELD: &'static str = "length";

    /// Create a validated length value.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::Zero { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Get the underlying digit count.
    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unix timestamp in seconds.
///
/// Webhook requests carry this as the string-encoded `X-textbelt-timestamp`
/// header; see [`UnixTimestamp::parse`].
pub struct UnixTimestamp(i64);

impl UnixTimestamp {
    /// Header name used by Textbelt (`X-textbelt-timestamp`).
    pub const HEADER: &'static str = "X-textbelt-timestamp";

    /// Create a timestamp value (no range validation is performed).
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Parse the string-encoded header form.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, ValidationError> {
        let input = input.as_ref();
        let trimmed = input.trim();
        trimmed
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidTimestamp {
                input: input.to_owned(),
            })
    }

    /// Get the underlying timestamp in seconds.
    pub fn value(self) -> i64 {
        self.0
    }

    /// Seconds elapsed between this timestamp and `later` (negative when
    /// this timestamp lies in the future).
    ///
    /// Saturates at the i64 bounds; the header value is attacker-controlled
    /// and may sit anywhere in the integer range.
    pub fn age_at(self, later: UnixTimestamp) -> i64 {
        later.0.saturating_sub(self.0)
    }
}

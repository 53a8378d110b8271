//! Error normalization: one categorized error surface for every operation.
//!
//! All public client methods return [`TextbeltError`]; callers never see a
//! raw `reqwest` or `serde_json` error. The category tells the caller which
//! kind of failure occurred, and the original cause stays attached for
//! inspection via [`std::error::Error::source`].

use std::error::Error as StdError;
use std::fmt;

use crate::domain::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Failure taxonomy for [`TextbeltError`].
pub enum ErrorCategory {
    /// Caller supplied invalid input (e.g. an unparsable webhook timestamp).
    Domain,
    /// A remote response or authenticated webhook body failed to match the
    /// expected schema.
    Decode,
    /// Network/HTTP-level failure, including non-2xx statuses and non-JSON
    /// bodies where JSON was expected.
    Transport,
    /// Anything uncategorized.
    Unexpected,
}

impl ErrorCategory {
    fn message(self) -> &'static str {
        match self {
            Self::Domain => "invalid input error occurred",
            Self::Decode => "validation error occurred",
            Self::Transport => "transport error occurred",
            Self::Unexpected => "unexpected error occurred",
        }
    }
}

/// The only error type returned by this crate's public API.
///
/// Wraps the original failure (when there is one) together with its concrete
/// type name, so diagnostics keep pointing at the real source:
///
/// ```text
/// transport error occurred (Type = textbelt::client::HttpStatusError | Message = unexpected HTTP status: 500)
/// ```
pub struct TextbeltError {
    category: ErrorCategory,
    message: &'static str,
    cause: Option<Box<dyn StdError + Send + Sync>>,
    cause_type: Option<&'static str>,
}

impl TextbeltError {
    fn wrap<E>(category: ErrorCategory, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            category,
            message: category.message(),
            cause: Some(Box::new(cause)),
            cause_type: Some(std::any::type_name::<E>()),
        }
    }

    /// Wrap a caller-input failure as [`ErrorCategory::Domain`].
    pub fn domain<E>(cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::wrap(ErrorCategory::Domain, cause)
    }

    /// Wrap a schema/validation failure as [`ErrorCategory::Decode`].
    pub fn decode<E>(cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::wrap(ErrorCategory::Decode, cause)
    }

    /// Wrap a network/HTTP failure as [`ErrorCategory::Transport`].
    pub fn transport<E>(cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::wrap(ErrorCategory::Transport, cause)
    }

    /// Wrap any other failure as [`ErrorCategory::Unexpected`].
    pub fn unexpected<E>(cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::wrap(ErrorCategory::Unexpected, cause)
    }

    /// Normalize a JSON error from response decoding.
    ///
    /// Shape mismatches (`Category::Data`) mean the remote answered with
    /// well-formed JSON that does not match the expected record, a [decode]
    /// failure. Everything else (syntax, premature EOF, I/O) means the body
    /// was not the JSON we were promised, a [transport] failure.
    ///
    /// [decode]: ErrorCategory::Decode
    /// [transport]: ErrorCategory::Transport
    pub fn from_json(cause: serde_json::Error) -> Self {
        match cause.classify() {
            serde_json::error::Category::Data => Self::decode(cause),
            _ => Self::transport(cause),
        }
    }

    /// The failure category.
    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    /// The fixed per-category message (without cause details).
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// The wrapped cause, if any.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Type name of the wrapped cause, captured at wrap time.
    pub fn cause_type(&self) -> Option<&'static str> {
        self.cause_type
    }
}

impl fmt::Display for TextbeltError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.cause, self.cause_type) {
            (Some(cause), Some(cause_type)) => {
                write!(
                    f,
                    "{} (Type = {} | Message = {})",
                    self.message, cause_type, cause
                )
            }
            _ => f.write_str(self.message),
        }
    }
}

impl fmt::Debug for TextbeltError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextbeltError")
            .field("category", &self.category)
            .field("message", &self.message)
            .field("cause", &self.cause)
            .finish()
    }
}

impl StdError for TextbeltError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| &**cause as &(dyn StdError + 'static))
    }
}

impl From<ValidationError> for TextbeltError {
    fn from(value: ValidationError) -> Self {
        Self::domain(value)
    }
}

impl From<reqwest::Error> for TextbeltError {
    fn from(value: reqwest::Error) -> Self {
        Self::transport(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("boom")]
    struct Boom;

    #[test]
    fn display_embeds_cause_type_and_message() {
        let err = TextbeltError::transport(Boom);
        assert_eq!(
            err.to_string(),
            "transport error occurred (Type = textbelt::error::tests::Boom | Message = boom)"
        );
    }

    #[test]
    fn categories_carry_fixed_messages() {
        assert_eq!(
            TextbeltError::domain(Boom).message(),
            "invalid input error occurred"
        );
        assert_eq!(
            TextbeltError::decode(Boom).message(),
            "validation error occurred"
        );
        assert_eq!(
            TextbeltError::transport(Boom).message(),
            "transport error occurred"
        );
        assert_eq!(
            TextbeltError::unexpected(Boom).message(),
            "unexpected error occurred"
        );
    }

    #[test]
    fn source_exposes_wrapped_cause() {
        let err = TextbeltError::unexpected(Boom);
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "boom");
        assert!(err.cause().unwrap().downcast_ref::<Boom>().is_some());
    }

    #[test]
    fn validation_errors_map_to_domain() {
        let err = TextbeltError::from(ValidationError::Empty { field: "phone" });
        assert_eq!(err.category(), ErrorCategory::Domain);
        assert!(err.to_string().contains("phone must not be empty"));
    }

    #[test]
    fn json_data_errors_map_to_decode() {
        let cause = serde_json::from_str::<u64>(r#""text""#).unwrap_err();
        let err = TextbeltError::from_json(cause);
        assert_eq!(err.category(), ErrorCategory::Decode);
    }

    #[test]
    fn json_syntax_errors_map_to_transport() {
        let cause = serde_json::from_str::<u64>("<html>").unwrap_err();
        let err = TextbeltError::from_json(cause);
        assert_eq!(err.category(), ErrorCategory::Transport);
    }

    #[test]
    fn propagation_does_not_rewrap() {
        fn inner() -> Result<(), TextbeltError> {
            Err(TextbeltError::transport(Boom))
        }

        fn outer() -> Result<(), TextbeltError> {
            inner()?;
            Ok(())
        }

        let err = outer().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Transport);
        assert!(err.cause().unwrap().downcast_ref::<Boom>().is_some());
        assert!(!err.to_string().contains("Type = textbelt::error::TextbeltError"));
    }
}

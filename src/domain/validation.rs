use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    TooLong { field: &'static str, max: usize, actual: usize },
    Zero { field: &'static str },
    InvalidPhoneNumber { input: String },
    InvalidUrl { input: String },
    InvalidTimestamp { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} too long: {actual} characters (max {max})")
            }
            Self::Zero { field } => write!(f, "{field} must be greater than zero"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidUrl { input } => write!(f, "invalid url: {input}"),
            Self::InvalidTimestamp { input } => write!(f, "invalid unix timestamp: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

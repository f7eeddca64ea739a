use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DesklineError {
    // Configuration errors
    ConfigError(String),

    // Endpoint errors
    UrlParseError(String),
    InvalidProtocol(String),

    // Numeric errors
    InvalidShorthand(String),
}

impl fmt::Display for DesklineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            Self::UrlParseError(msg) => write!(f, "URL parse error: {}", msg),
            Self::InvalidProtocol(proto) => write!(f, "Unsupported protocol: {}", proto),
            Self::InvalidShorthand(msg) => write!(f, "Invalid numeric shorthand: {}", msg),
        }
    }
}

impl Error for DesklineError {}

impl From<url::ParseError> for DesklineError {
    fn from(err: url::ParseError) -> Self {
        DesklineError::UrlParseError(err.to_string())
    }
}

// Generic result type for Deskline
pub type Result<T> = std::result::Result<T, DesklineError>;

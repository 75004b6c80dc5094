// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Fetch(FetchError),
}

/// Specific failure modes of the accounts request.
/// Every variant surfaces to the user the same way: one alert carrying
/// the `Display` text.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Connection refused, DNS failure, reset, or a malformed request.
    Transport(String),

    /// The request did not complete within the configured timeout.
    Timeout,

    /// The server answered with a non-success status code.
    Status { code: u16, reason: Option<String> },

    /// The body was not a JSON array of accounts.
    Deserialization(String),

    /// The owning view went away before the response arrived.
    Cancelled,
}

impl FetchError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "error-fetch-transport",
            FetchError::Timeout => "error-fetch-timeout",
            FetchError::Status { .. } => "error-fetch-status",
            FetchError::Deserialization(_) => "error-fetch-deserialization",
            FetchError::Cancelled => "error-fetch-cancelled",
        }
    }

    /// Whether this error came from the transport layer rather than the payload.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            FetchError::Transport(_) | FetchError::Timeout | FetchError::Status { .. }
        )
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "{}", msg),
            FetchError::Timeout => write!(f, "Request timed out"),
            FetchError::Status { code, reason } => match reason {
                Some(reason) => write!(f, "HTTP status: {} {}", code, reason),
                None => write!(f, "HTTP status: {}", code),
            },
            FetchError::Deserialization(msg) => write!(f, "Invalid response body: {}", msg),
            FetchError::Cancelled => write!(f, "Request cancelled"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = err.status() {
            FetchError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().map(str::to_string),
            }
        } else if err.is_decode() {
            FetchError::Deserialization(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Deserialization(err.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

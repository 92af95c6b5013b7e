//! Scan trigger error type.

use std::fmt;

/// Why a scan trigger did not reach a `200 OK`.
#[derive(Debug)]
pub enum ScanError {
    /// Base URL, username, or password is missing or empty; no request was sent.
    NotConfigured,
    /// The configured base URL does not form a valid endpoint URL.
    InvalidUrl(url::ParseError),
    /// Curl reported an error (timeout, connection refused, DNS, ...).
    Transport(curl::Error),
    /// Server answered with something other than 200.
    Status(u32),
}

impl ScanError {
    /// True for failures that involved the network (as opposed to local configuration).
    pub fn is_network(&self) -> bool {
        matches!(self, ScanError::Transport(_) | ScanError::Status(_))
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::NotConfigured => write!(f, "server credentials not configured"),
            ScanError::InvalidUrl(e) => write!(f, "invalid server URL: {}", e),
            ScanError::Transport(e) => write!(f, "{}", e),
            ScanError::Status(code) => write!(f, "HTTP {}", code),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::InvalidUrl(e) => Some(e),
            ScanError::Transport(e) => Some(e),
            ScanError::NotConfigured | ScanError::Status(_) => None,
        }
    }
}

impl From<curl::Error> for ScanError {
    fn from(e: curl::Error) -> Self {
        ScanError::Transport(e)
    }
}

impl From<url::ParseError> for ScanError {
    fn from(e: url::ParseError) -> Self {
        ScanError::InvalidUrl(e)
    }
}

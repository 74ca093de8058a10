use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Controller answered with a status other than 200.
    Status(u16),
    /// Request exceeded the per-call timeout.
    Timeout,
    Http(reqwest::Error),
    Decode(serde_json::Error),
    InvalidMode(u8),
    /// Zone has no known state yet; refresh first.
    StateUnknown(u16),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Status(code) => write!(f, "error calling API, got HTTP status {code}"),
            Error::Timeout => write!(f, "timeout on API request"),
            Error::Http(e) => write!(f, "HTTP error: {e}"),
            Error::Decode(e) => write!(f, "invalid JSON from controller: {e}"),
            Error::InvalidMode(code) => write!(f, "invalid operation mode code: {code}"),
            Error::StateUnknown(zone) => write!(f, "zone {zone} state unknown, refresh first"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(e) => Some(e),
            Error::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Error::Timeout
        } else {
            Error::Http(e)
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

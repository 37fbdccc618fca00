use std::fmt;

/// Failure of a call to the notes service.
///
/// This is the only error kind that crosses the service boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The service answered with a non-2xx status
    Status { status: u16, context: &'static str },
    /// The request never produced a response (connect, DNS, IO)
    Network(String),
    /// The response body was not the expected JSON
    Decode(String),
}

impl TransportError {
    /// HTTP status, when the failure carried one
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Status { status, context } => {
                write!(f, "Failed to {}: {}", context, status)
            }
            TransportError::Network(msg) => write!(f, "network error: {}", msg),
            TransportError::Decode(msg) => write!(f, "invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for TransportError {}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            TransportError::Decode(e.to_string())
        } else {
            TransportError::Network(e.to_string())
        }
    }
}

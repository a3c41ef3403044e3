use thiserror::Error;

/// Errors that can occur while relaying messages
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("Missing x-agent-token header")]
    MissingCredential,

    #[error("Invalid token")]
    InvalidCredential,

    #[error("Missing \"to\" or \"message\" in request body")]
    InvalidRequest,

    #[error("Unknown agent: {0}")]
    UnknownRecipient(String),
}

impl RelayError {
    /// Stable machine-readable category for API responses
    pub fn code(&self) -> &'static str {
        match self {
            RelayError::MissingCredential => "missing_credential",
            RelayError::InvalidCredential => "invalid_credential",
            RelayError::InvalidRequest => "invalid_request",
            RelayError::UnknownRecipient(_) => "unknown_recipient",
        }
    }
}

pub type RelayResult<T> = Result<T, RelayError>;

use thiserror::Error;

/// Failure of a call to the statistics API.
///
/// Missing or null fields in a successful payload are not errors: they are
/// defaulted during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatisticsError {
    #[error("invalid API url: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("failed to deserialize response body: {0}")]
    Decode(String),
}

impl StatisticsError {
    pub fn status(&self) -> Option<u16> {
        match self {
            StatisticsError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

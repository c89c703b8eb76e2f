//! Domain-specific error types.

use thiserror::Error;

/// Failure to deliver one alert to one recipient
///
/// Never surfaced to the caller of a dispatch; each one is folded into the
/// recipient's `failed` outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Send timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    #[error("Message rejected: {message}")]
    Rejected { message: String },
}

impl DeliveryError {
    /// Create a transport error from any displayable cause
    pub fn transport(message: impl Into<String>) -> Self {
        DeliveryError::Transport {
            message: message.into(),
        }
    }

    /// Create a rejection error from any displayable cause
    pub fn rejected(message: impl Into<String>) -> Self {
        DeliveryError::Rejected {
            message: message.into(),
        }
    }
}

pub type DeliveryResult<T> = Result<T, DeliveryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_error_messages() {
        assert_eq!(
            DeliveryError::transport("connection reset").to_string(),
            "Transport error: connection reset"
        );
        assert_eq!(
            DeliveryError::Timeout { seconds: 10 }.to_string(),
            "Send timed out after 10 seconds"
        );
        assert_eq!(
            DeliveryError::rejected("body too long").to_string(),
            "Message rejected: body too long"
        );
    }
}

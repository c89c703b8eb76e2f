//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Kiddoo SOS backend.
//! It provides the concrete SMS transports the dispatch service delivers
//! alerts through.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **SMS**: SMS service integrations (Twilio) and a mock for development
//! - **Adapter**: Bridge from SMS services to the core `AlertTransport` trait
//!
//! ## Features
//!
//! - `twilio-sms`: Enable Twilio SMS service (default)

use sos_core::errors::DeliveryError;

/// SMS service module - External SMS providers
pub mod sms;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),

    /// Message refused before reaching the provider
    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

impl From<InfrastructureError> for DeliveryError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::InvalidMessage(message) => DeliveryError::Rejected { message },
            InfrastructureError::Sms(message)
            | InfrastructureError::Config(message)
            | InfrastructureError::General(message) => DeliveryError::Transport { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infrastructure_error_to_delivery_error() {
        let rejected: DeliveryError =
            InfrastructureError::InvalidMessage("too long".to_string()).into();
        assert_eq!(rejected, DeliveryError::rejected("too long"));

        let transport: DeliveryError = InfrastructureError::Sms("HTTP 503".to_string()).into();
        assert_eq!(transport.to_string(), "Transport error: HTTP 503");
    }
}

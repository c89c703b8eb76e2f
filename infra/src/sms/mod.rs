//! SMS Service Module
//!
//! This module provides SMS service implementations for delivering SOS
//! alerts. It includes a Twilio provider and a mock implementation for
//! development.
//!
//! ## Features
//!
//! - **SMS Service Trait**: Common interface for all SMS providers
//! - **Mock Implementation**: Log output for development
//! - **Twilio Support**: Production SMS via Twilio API
//! - **Transport Adapter**: Exposes a provider as the core `AlertTransport`
//! - **Security**: Phone number masking in logs

use std::sync::Arc;

use sos_core::services::dispatch::AlertTransport;
use sos_shared::config::sms::{MOCK_PROVIDER, TWILIO_PROVIDER};
use sos_shared::SmsConfig;

pub mod mock_sms;
pub mod sms_service;
pub mod transport_adapter;

// Twilio SMS service (feature-gated)
#[cfg(feature = "twilio-sms")]
pub mod twilio;

// Re-export commonly used types
pub use mock_sms::MockSmsService;
pub use sms_service::SmsService;
pub use transport_adapter::SmsAlertTransport;

#[cfg(feature = "twilio-sms")]
pub use twilio::{TwilioConfig, TwilioSmsService};

#[cfg(test)]
mod tests;

/// Create an SMS service based on configuration
///
/// Returns the Twilio service when the provider is `twilio` and its
/// credentials are complete. Every other case degrades to the mock service
/// with a single warning; startup never fails on SMS settings.
pub fn create_sms_service(config: &SmsConfig) -> Box<dyn SmsService> {
    match config.provider.as_str() {
        MOCK_PROVIDER => {
            tracing::info!("SMS provider set to mock, alerts will only be logged");
            Box::new(MockSmsService::new())
        }
        #[cfg(feature = "twilio-sms")]
        TWILIO_PROVIDER => match TwilioSmsService::from_sms_config(config) {
            Ok(service) => Box::new(service),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Twilio SMS service not configured, falling back to mock SMS service"
                );
                Box::new(MockSmsService::new())
            }
        },
        _ => {
            tracing::warn!(
                provider = %config.provider,
                "Unknown SMS provider, using mock implementation"
            );
            Box::new(MockSmsService::new())
        }
    }
}

/// Create the process-wide alert transport for the dispatch service
pub fn create_alert_transport(config: &SmsConfig) -> Arc<dyn AlertTransport> {
    Arc::new(SmsAlertTransport::new(create_sms_service(config)))
}

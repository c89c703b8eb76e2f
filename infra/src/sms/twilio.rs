//! Twilio SMS Service Implementation
//!
//! This module provides SMS sending capabilities using the Twilio API.
//! It implements the SmsService trait for production alert delivery.
//!
//! Each send is a single attempt. The caller bounds it with a timeout and
//! records failures; nothing is retried here.

use async_trait::async_trait;
use tracing::{debug, error, info};
use twilio::{Client, OutboundMessage};

use sos_shared::utils::phone::{
    is_valid_international_phone, mask_phone_number, normalize_phone_number,
};
use sos_shared::SmsConfig;

use crate::sms::sms_service::SmsService;
use crate::InfrastructureError;

/// Longest body Twilio accepts, in characters
pub const MAX_MESSAGE_CHARS: usize = 1600;

/// Twilio SMS service configuration
#[derive(Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (must be a Twilio phone number in E.164 format)
    pub from_number: String,
}

impl std::fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("from_number", &mask_phone_number(&self.from_number))
            .finish()
    }
}

impl TwilioConfig {
    /// Build from the loaded SMS settings
    ///
    /// Fails when any credential is missing or the sender number is not E.164.
    pub fn from_sms_config(config: &SmsConfig) -> Result<Self, InfrastructureError> {
        let missing = config.missing_settings();
        if !missing.is_empty() {
            return Err(InfrastructureError::Config(format!(
                "missing {}",
                missing.join(", ")
            )));
        }

        let (Some(account_sid), Some(auth_token), Some(from_number)) = (
            config.account_sid.clone(),
            config.auth_token.clone(),
            config.from_number.clone(),
        ) else {
            return Err(InfrastructureError::Config(
                "incomplete Twilio credentials".to_string(),
            ));
        };

        if !is_valid_international_phone(&from_number) {
            return Err(InfrastructureError::Config(
                "TWILIO_PHONE_NUMBER must be in E.164 format (e.g., +15551234567)".to_string(),
            ));
        }

        Ok(Self {
            account_sid,
            auth_token,
            from_number: normalize_phone_number(&from_number),
        })
    }
}

/// Twilio SMS service implementation
pub struct TwilioSmsService {
    client: Client,
    config: TwilioConfig,
}

impl TwilioSmsService {
    /// Create a new Twilio SMS service
    pub fn new(config: TwilioConfig) -> Result<Self, InfrastructureError> {
        let client = Client::new(&config.account_sid, &config.auth_token);

        info!(
            from = %mask_phone_number(&config.from_number),
            "Twilio SMS service initialized"
        );

        Ok(Self { client, config })
    }

    /// Create from the loaded SMS settings
    pub fn from_sms_config(config: &SmsConfig) -> Result<Self, InfrastructureError> {
        Self::new(TwilioConfig::from_sms_config(config)?)
    }

    /// Sender number used for every message
    pub fn from_number(&self) -> &str {
        &self.config.from_number
    }
}

/// Check a body against the provider limit before any network call
pub fn check_message_length(message: &str) -> Result<(), InfrastructureError> {
    let length = message.chars().count();
    if length > MAX_MESSAGE_CHARS {
        return Err(InfrastructureError::InvalidMessage(format!(
            "Message exceeds maximum length of {} characters ({})",
            MAX_MESSAGE_CHARS, length
        )));
    }
    Ok(())
}

#[async_trait]
impl SmsService for TwilioSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        check_message_length(message)?;

        let to = normalize_phone_number(phone_number);
        let masked = mask_phone_number(&to);

        debug!(
            phone = %masked,
            message_length = message.chars().count(),
            "Sending SMS via Twilio"
        );

        let outbound = OutboundMessage::new(&self.config.from_number, &to, message);
        match self.client.send_message(outbound).await {
            Ok(response) => {
                info!(
                    phone = %masked,
                    sid = %response.sid,
                    "SMS sent successfully via Twilio"
                );
                Ok(response.sid)
            }
            Err(e) => {
                error!(
                    phone = %masked,
                    error = %e,
                    "Failed to send SMS via Twilio"
                );
                Err(InfrastructureError::Sms(format!("Twilio request failed: {}", e)))
            }
        }
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sms_config(sid: Option<&str>, token: Option<&str>, from: Option<&str>) -> SmsConfig {
        SmsConfig {
            provider: "twilio".to_string(),
            account_sid: sid.map(str::to_string),
            auth_token: token.map(str::to_string),
            from_number: from.map(str::to_string),
        }
    }

    #[test]
    fn test_config_from_complete_settings() {
        let config = TwilioConfig::from_sms_config(&sms_config(
            Some("ACtest"),
            Some("secret"),
            Some("+1 (555) 123-4567"),
        ))
        .unwrap();

        assert_eq!(config.account_sid, "ACtest");
        assert_eq!(config.from_number, "+15551234567");
    }

    #[test]
    fn test_config_reports_missing_settings() {
        let err = TwilioConfig::from_sms_config(&sms_config(Some("ACtest"), None, None))
            .unwrap_err();
        let message = err.to_string();

        assert!(message.contains("TWILIO_AUTH_TOKEN"));
        assert!(message.contains("TWILIO_PHONE_NUMBER"));
    }

    #[test]
    fn test_config_requires_e164_sender() {
        let err = TwilioConfig::from_sms_config(&sms_config(
            Some("ACtest"),
            Some("secret"),
            Some("5551234567"),
        ))
        .unwrap_err();

        assert!(err.to_string().contains("E.164"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = TwilioConfig {
            account_sid: "ACtest".to_string(),
            auth_token: "super-secret".to_string(),
            from_number: "+15551234567".to_string(),
        };
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("super-secret"));
        assert!(!rendered.contains("+15551234567"));
    }

    #[test]
    fn test_message_length_limit() {
        assert!(check_message_length(&"a".repeat(MAX_MESSAGE_CHARS)).is_ok());

        let err = check_message_length(&"a".repeat(MAX_MESSAGE_CHARS + 1)).unwrap_err();
        assert!(matches!(err, InfrastructureError::InvalidMessage(_)));
    }
}

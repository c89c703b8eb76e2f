//! SMS provider configuration
//!
//! Credentials come from the environment. Absence of any of them is not an
//! error: the transport factory degrades to the mock provider.

use serde::{Deserialize, Serialize};

use super::env_non_empty;

/// Provider name that forces the mock transport
pub const MOCK_PROVIDER: &str = "mock";

/// Provider name for the Twilio transport
pub const TWILIO_PROVIDER: &str = "twilio";

/// SMS service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// SMS service provider ("twilio", "mock")
    pub provider: String,
    /// Provider account identifier (Twilio Account SID)
    pub account_sid: Option<String>,
    /// Provider auth token
    #[serde(skip_serializing)]
    pub auth_token: Option<String>,
    /// Sender phone number
    pub from_number: Option<String>,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: TWILIO_PROVIDER.to_string(),
            account_sid: None,
            auth_token: None,
            from_number: None,
        }
    }
}

impl SmsConfig {
    /// Load from `SMS_PROVIDER`, `TWILIO_ACCOUNT_SID`, `TWILIO_AUTH_TOKEN` and
    /// `TWILIO_PHONE_NUMBER` (`TWILIO_FROM_NUMBER` is accepted as an alias)
    pub fn from_env() -> Self {
        Self {
            provider: env_non_empty("SMS_PROVIDER")
                .map(|p| p.to_lowercase())
                .unwrap_or_else(|| TWILIO_PROVIDER.to_string()),
            account_sid: env_non_empty("TWILIO_ACCOUNT_SID"),
            auth_token: env_non_empty("TWILIO_AUTH_TOKEN"),
            from_number: env_non_empty("TWILIO_PHONE_NUMBER")
                .or_else(|| env_non_empty("TWILIO_FROM_NUMBER")),
        }
    }

    /// Whether the mock provider was requested explicitly
    pub fn is_mock_requested(&self) -> bool {
        self.provider == MOCK_PROVIDER
    }

    /// Whether account id and auth token are both present and non-blank
    pub fn has_credentials(&self) -> bool {
        is_present(&self.account_sid) && is_present(&self.auth_token)
    }

    /// Names of the settings that are missing for live delivery
    pub fn missing_settings(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !is_present(&self.account_sid) {
            missing.push("TWILIO_ACCOUNT_SID");
        }
        if !is_present(&self.auth_token) {
            missing.push("TWILIO_AUTH_TOKEN");
        }
        if !is_present(&self.from_number) {
            missing.push("TWILIO_PHONE_NUMBER");
        }
        missing
    }
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().map(|v| !v.trim().is_empty()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_credentials() {
        let config = SmsConfig::default();
        assert!(!config.has_credentials());
        assert!(!config.is_mock_requested());
        assert_eq!(
            config.missing_settings(),
            vec!["TWILIO_ACCOUNT_SID", "TWILIO_AUTH_TOKEN", "TWILIO_PHONE_NUMBER"]
        );
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let config = SmsConfig {
            provider: TWILIO_PROVIDER.to_string(),
            account_sid: Some("ACtest".to_string()),
            auth_token: Some("  ".to_string()),
            from_number: Some("+15551234567".to_string()),
        };
        assert!(!config.has_credentials());
        assert_eq!(config.missing_settings(), vec!["TWILIO_AUTH_TOKEN"]);
    }

    #[test]
    fn test_auth_token_is_not_serialized() {
        let config = SmsConfig {
            provider: TWILIO_PROVIDER.to_string(),
            account_sid: Some("ACtest".to_string()),
            auth_token: Some("secret".to_string()),
            from_number: Some("+15551234567".to_string()),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}

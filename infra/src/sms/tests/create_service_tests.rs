//! Unit tests for SMS service creation

use sos_core::services::dispatch::TransportMode;
use sos_shared::SmsConfig;

use crate::sms::{create_alert_transport, create_sms_service};

fn config(provider: &str, sid: Option<&str>, token: Option<&str>, from: Option<&str>) -> SmsConfig {
    SmsConfig {
        provider: provider.to_string(),
        account_sid: sid.map(str::to_string),
        auth_token: token.map(str::to_string),
        from_number: from.map(str::to_string),
    }
}

#[test]
fn test_create_mock_service() {
    let service = create_sms_service(&config("mock", Some("ACtest"), Some("secret"), Some("+15551234567")));
    assert_eq!(service.provider_name(), "Mock");
    assert!(service.is_mock());
}

#[test]
fn test_create_unknown_provider_fallback() {
    let service = create_sms_service(&config("carrier-pigeon", None, None, None));
    assert_eq!(service.provider_name(), "Mock");
}

#[test]
fn test_missing_credentials_fall_back_to_mock() {
    let transport = create_alert_transport(&config("twilio", None, None, None));
    assert_eq!(transport.mode(), TransportMode::Mock);

    let transport = create_alert_transport(&config("twilio", Some("ACtest"), Some("secret"), None));
    assert_eq!(transport.mode(), TransportMode::Mock);
}

#[test]
fn test_non_e164_sender_falls_back_to_mock() {
    let transport =
        create_alert_transport(&config("twilio", Some("ACtest"), Some("secret"), Some("5551234567")));
    assert_eq!(transport.mode(), TransportMode::Mock);
}

#[cfg(feature = "twilio-sms")]
#[test]
fn test_complete_credentials_select_live_transport() {
    let transport = create_alert_transport(&config(
        "twilio",
        Some("ACtest"),
        Some("secret"),
        Some("+15551234567"),
    ));

    assert_eq!(transport.mode(), TransportMode::Live);
    assert_eq!(transport.provider_name(), "Twilio");
}

//! Integration tests for the dispatch workflow through the public API

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use sos_core::errors::{DeliveryError, DeliveryResult};
use sos_core::services::dispatch::{
    AlertTransport, DispatchService, DispatchServiceConfig, SosTriggerRequest, TransportMode,
};
use sos_core::DeliveryStatus;
use sos_shared::config::dispatch::parse_fallback_contacts;
use sos_shared::DispatchConfig;

/// Live transport recording every message and rejecting one number
struct RecordingTransport {
    reject: &'static str,
    messages: Mutex<Vec<(String, String)>>,
}

impl RecordingTransport {
    fn new(reject: &'static str) -> Self {
        Self {
            reject,
            messages: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AlertTransport for RecordingTransport {
    async fn send_alert(&self, phone: &str, body: &str) -> DeliveryResult<String> {
        self.messages
            .lock()
            .unwrap()
            .push((phone.to_string(), body.to_string()));
        if phone == self.reject {
            return Err(DeliveryError::rejected("unreachable handset"));
        }
        Ok(format!("SM-{}", phone.trim_start_matches('+')))
    }

    fn mode(&self) -> TransportMode {
        TransportMode::Live
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}

#[tokio::test]
async fn test_configured_fallback_and_label() {
    let dispatch_config = DispatchConfig {
        fallback_contacts: parse_fallback_contacts(
            r#"[{"name": "School Office", "phone": "+15550001111"}, "+15550002222"]"#,
        ),
        alert_label: "CAMP ALERT".to_string(),
        ..DispatchConfig::default()
    };
    let transport = Arc::new(RecordingTransport::new("+15550002222"));
    let service = DispatchService::new(
        transport.clone(),
        DispatchServiceConfig::from(&dispatch_config),
    );

    let request: SosTriggerRequest = serde_json::from_value(json!({
        "user_location": {"address": "Cabin 4, Lakeside Camp"},
        "user_info": {"name": "Sam"}
    }))
    .unwrap();
    let report = service.trigger_sos(request).await;

    assert!(report.sos_triggered);
    assert_eq!(report.contacts_notified[0].name, "School Office");
    assert_eq!(report.contacts_notified[0].status, DeliveryStatus::Sent);
    assert_eq!(report.contacts_notified[0].sid.as_deref(), Some("SM-15550001111"));
    assert_eq!(report.contacts_notified[1].status, DeliveryStatus::Failed);
    assert_eq!(
        report.contacts_notified[1].error.as_deref(),
        Some("Message rejected: unreachable handset")
    );

    let messages = transport.messages.lock().unwrap();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].1.starts_with("CAMP ALERT: Sam needs support."));
    assert!(messages[0].1.contains("Address: Cabin 4, Lakeside Camp."));
}

#[tokio::test]
async fn test_report_serializes_for_clients() {
    let service = DispatchService::new(
        Arc::new(RecordingTransport::new("")),
        DispatchServiceConfig::default(),
    );

    let report = service
        .trigger_sos(
            serde_json::from_value(json!({
                "emergency_contacts": ["Emergency Contact 1", {"name": "Mom", "phone": "+15551234567"}]
            }))
            .unwrap(),
        )
        .await;
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["contacts_notified"][0]["status"], "skipped");
    assert!(value["contacts_notified"][0].get("sid").is_none());
    assert_eq!(value["contacts_notified"][1]["status"], "sent");
    assert!(value["contacts_notified"][1].get("error").is_none());
    assert_eq!(value["user_location"], serde_json::Value::Null);
}

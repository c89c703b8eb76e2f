use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::contact::Contact;

/// Format of every timestamp in a dispatch report
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format the instant a dispatch was triggered
pub fn format_dispatch_timestamp(instant: DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Result of one delivery attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// Accepted by the live provider
    Sent,
    /// Recorded by the mock transport
    MockSent,
    /// Not attempted because the phone failed validation
    Skipped,
    /// Attempted and rejected or timed out
    Failed,
}

impl DeliveryStatus {
    /// Whether this status counts as a notified contact
    pub fn is_notified(&self) -> bool {
        matches!(self, DeliveryStatus::Sent | DeliveryStatus::MockSent)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Sent => "sent",
            DeliveryStatus::MockSent => "mock_sent",
            DeliveryStatus::Skipped => "skipped",
            DeliveryStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery record for one contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryOutcome {
    pub name: String,
    pub phone: String,
    pub status: DeliveryStatus,
    pub timestamp: String,
    /// Provider message id, present only when `status` is `sent`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    /// Failure reason, present only when `status` is `skipped` or `failed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeliveryOutcome {
    fn new(contact: Contact, status: DeliveryStatus, timestamp: &str) -> Self {
        Self {
            name: contact.name,
            phone: contact.phone,
            status,
            timestamp: timestamp.to_string(),
            sid: None,
            error: None,
        }
    }

    pub fn sent(contact: Contact, timestamp: &str, sid: impl Into<String>) -> Self {
        Self {
            sid: Some(sid.into()),
            ..Self::new(contact, DeliveryStatus::Sent, timestamp)
        }
    }

    pub fn mock_sent(contact: Contact, timestamp: &str) -> Self {
        Self::new(contact, DeliveryStatus::MockSent, timestamp)
    }

    pub fn skipped(contact: Contact, timestamp: &str, reason: impl Into<String>) -> Self {
        Self {
            error: Some(reason.into()),
            ..Self::new(contact, DeliveryStatus::Skipped, timestamp)
        }
    }

    pub fn failed(contact: Contact, timestamp: &str, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::new(contact, DeliveryStatus::Failed, timestamp)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn contact() -> Contact {
        Contact {
            name: "Mom".to_string(),
            phone: "+15551234567".to_string(),
        }
    }

    #[test]
    fn test_timestamp_format() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(format_dispatch_timestamp(instant), "2024-03-09 07:05:01");
    }

    #[test]
    fn test_notified_statuses() {
        assert!(DeliveryStatus::Sent.is_notified());
        assert!(DeliveryStatus::MockSent.is_notified());
        assert!(!DeliveryStatus::Skipped.is_notified());
        assert!(!DeliveryStatus::Failed.is_notified());
    }

    #[test]
    fn test_sent_outcome_serialization() {
        let outcome = DeliveryOutcome::sent(contact(), "2024-01-01 00:00:00", "SM123");
        let value = serde_json::to_value(&outcome).unwrap();

        assert_eq!(
            value,
            json!({
                "name": "Mom",
                "phone": "+15551234567",
                "status": "sent",
                "timestamp": "2024-01-01 00:00:00",
                "sid": "SM123"
            })
        );
    }

    #[test]
    fn test_optional_fields_omitted() {
        let mock = serde_json::to_value(DeliveryOutcome::mock_sent(contact(), "t")).unwrap();
        assert_eq!(mock["status"], "mock_sent");
        assert!(mock.get("sid").is_none());
        assert!(mock.get("error").is_none());

        let skipped =
            serde_json::to_value(DeliveryOutcome::skipped(contact(), "t", "Invalid phone number format"))
                .unwrap();
        assert_eq!(skipped["status"], "skipped");
        assert_eq!(skipped["error"], "Invalid phone number format");
        assert!(skipped.get("sid").is_none());
    }
}

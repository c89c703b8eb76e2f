use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::{DeliveryOutcome, DeliveryStatus};

pub const INITIATED_MESSAGE: &str = "Emergency response sequence initiated";
pub const NOTHING_DELIVERED_MESSAGE: &str =
    "Emergency alert failed or skipped due to invalid contacts";
pub const NO_CONTACTS_MESSAGE: &str =
    "No emergency contacts found in profile. Please add contacts to enable SOS alerts.";
pub const NO_ACTION_MESSAGE: &str = "No emergency action required";

/// Summary of one SOS dispatch
///
/// `user_location` and `user_info` echo the request values unchanged,
/// `null` when the request omitted them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchReport {
    pub sos_triggered: bool,
    pub contacts_notified: Vec<DeliveryOutcome>,
    pub message: String,
    pub timestamp: String,
    pub user_location: Option<Value>,
    pub user_info: Option<Value>,
}

impl DispatchReport {
    /// Summarize the outcomes of a dispatch, one per resolved contact in input order
    pub fn from_outcomes(
        outcomes: Vec<DeliveryOutcome>,
        timestamp: String,
        user_location: Option<Value>,
        user_info: Option<Value>,
    ) -> Self {
        let any_notified = outcomes.iter().any(|outcome| outcome.status.is_notified());
        let message = if any_notified {
            INITIATED_MESSAGE
        } else {
            NOTHING_DELIVERED_MESSAGE
        };

        Self {
            sos_triggered: any_notified,
            contacts_notified: outcomes,
            message: message.to_string(),
            timestamp,
            user_location,
            user_info,
        }
    }

    /// Report for a request that resolved to an empty contact list
    pub fn no_contacts(
        timestamp: String,
        user_location: Option<Value>,
        user_info: Option<Value>,
    ) -> Self {
        Self {
            sos_triggered: false,
            contacts_notified: Vec::new(),
            message: NO_CONTACTS_MESSAGE.to_string(),
            timestamp,
            user_location,
            user_info,
        }
    }

    /// Number of contacts that were sent or mock-sent
    pub fn notified_count(&self) -> usize {
        self.contacts_notified
            .iter()
            .filter(|outcome| outcome.status.is_notified())
            .count()
    }

    /// Number of outcomes with the given status
    pub fn count_with_status(&self, status: DeliveryStatus) -> usize {
        self.contacts_notified
            .iter()
            .filter(|outcome| outcome.status == status)
            .count()
    }
}

/// Response for a request that does not need an alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoActionReport {
    pub sos_triggered: bool,
    pub message: String,
}

impl Default for NoActionReport {
    fn default() -> Self {
        Self {
            sos_triggered: false,
            message: NO_ACTION_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Contact;
    use serde_json::json;

    fn contact(phone: &str) -> Contact {
        Contact {
            name: "Contact".to_string(),
            phone: phone.to_string(),
        }
    }

    #[test]
    fn test_any_notified_contact_initiates_response() {
        let report = DispatchReport::from_outcomes(
            vec![
                DeliveryOutcome::skipped(contact("12"), "t", "Invalid phone number format"),
                DeliveryOutcome::sent(contact("+15551234567"), "t", "SM1"),
            ],
            "t".to_string(),
            None,
            None,
        );

        assert!(report.sos_triggered);
        assert_eq!(report.message, INITIATED_MESSAGE);
        assert_eq!(report.notified_count(), 1);
        assert_eq!(report.count_with_status(DeliveryStatus::Skipped), 1);
    }

    #[test]
    fn test_nothing_delivered_message() {
        let report = DispatchReport::from_outcomes(
            vec![DeliveryOutcome::failed(contact("+15551234567"), "t", "boom")],
            "t".to_string(),
            None,
            None,
        );

        assert!(!report.sos_triggered);
        assert_eq!(report.message, NOTHING_DELIVERED_MESSAGE);
        assert_eq!(report.notified_count(), 0);
    }

    #[test]
    fn test_triggered_iff_any_contact_notified() {
        let sent = || DeliveryOutcome::sent(contact("+15551234567"), "t", "SM1");
        let mock_sent = || DeliveryOutcome::mock_sent(contact("+15551234567"), "t");
        let skipped = || DeliveryOutcome::skipped(contact("12"), "t", "Invalid phone number format");
        let failed = || DeliveryOutcome::failed(contact("+15557654321"), "t", "boom");

        let cases: Vec<(Vec<DeliveryOutcome>, bool)> = vec![
            (vec![skipped()], false),
            (vec![failed()], false),
            (vec![skipped(), failed(), skipped()], false),
            (vec![sent()], true),
            (vec![mock_sent()], true),
            (vec![skipped(), skipped(), sent()], true),
            (vec![failed(), mock_sent()], true),
        ];

        for (outcomes, expected) in cases {
            let any_notified = outcomes.iter().any(|o| o.status.is_notified());
            let report = DispatchReport::from_outcomes(outcomes, "t".to_string(), None, None);

            assert_eq!(report.sos_triggered, expected);
            assert_eq!(report.sos_triggered, any_notified);
            assert_eq!(report.sos_triggered, report.notified_count() > 0);
            let expected_message = if expected {
                INITIATED_MESSAGE
            } else {
                NOTHING_DELIVERED_MESSAGE
            };
            assert_eq!(report.message, expected_message);
        }
    }

    #[test]
    fn test_no_contacts_report_shape() {
        let report = DispatchReport::no_contacts(
            "2024-01-01 00:00:00".to_string(),
            Some(json!({"address": "1 Main St"})),
            None,
        );
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["sos_triggered"], false);
        assert_eq!(value["contacts_notified"], json!([]));
        assert_eq!(value["message"], NO_CONTACTS_MESSAGE);
        assert_eq!(value["user_location"], json!({"address": "1 Main St"}));
        assert_eq!(value["user_info"], Value::Null);
    }

    #[test]
    fn test_no_action_report() {
        let value = serde_json::to_value(NoActionReport::default()).unwrap();
        assert_eq!(
            value,
            json!({"sos_triggered": false, "message": "No emergency action required"})
        );
    }
}

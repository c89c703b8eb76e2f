//! Main dispatch service implementation

use chrono::Utc;
use futures_util::stream::{self, StreamExt};
use std::sync::Arc;

use sos_shared::utils::phone::{is_plausible_phone_number, mask_phone_number};

use crate::domain::entities::{
    format_dispatch_timestamp, ContactInput, DeliveryOutcome, Location, RequesterInfo,
    DEFAULT_CONTACT_NAME, MOCK_CONTACT_NAME,
};
use crate::domain::value_objects::{DispatchReport, NoActionReport};
use crate::errors::{DeliveryError, DeliveryResult};

use super::composer::MessageComposer;
use super::config::DispatchServiceConfig;
use super::traits::{AlertTransport, TransportMode};
use super::types::SosTriggerRequest;

/// Error recorded for a contact whose phone fails validation
pub const INVALID_PHONE_REASON: &str = "Invalid phone number format";

/// Dispatch service fanning one SOS trigger out to every emergency contact
pub struct DispatchService {
    /// Transport shared by all dispatches of this process
    transport: Arc<dyn AlertTransport>,
    /// Alert body composer
    composer: MessageComposer,
    /// Service configuration
    config: DispatchServiceConfig,
}

impl DispatchService {
    /// Create a new dispatch service
    ///
    /// # Arguments
    ///
    /// * `transport` - Live or mock transport, fixed for the service lifetime
    /// * `config` - Service configuration
    pub fn new(transport: Arc<dyn AlertTransport>, config: DispatchServiceConfig) -> Self {
        let composer = MessageComposer::from_config(&config);
        Self {
            transport,
            composer,
            config,
        }
    }

    /// Whether alerts go to a real SMS provider
    pub fn is_live(&self) -> bool {
        self.transport.mode() == TransportMode::Live
    }

    /// Name of the underlying transport provider
    pub fn provider_name(&self) -> &str {
        self.transport.provider_name()
    }

    /// Response for a request that needs no alert
    pub fn no_action(&self) -> NoActionReport {
        NoActionReport::default()
    }

    /// Send the SOS alert to every emergency contact
    ///
    /// This method:
    /// 1. Resolves contacts, falling back to the configured list
    /// 2. Composes one alert body with one timestamp
    /// 3. Reads the transport mode once for the whole dispatch
    /// 4. Delivers to every contact concurrently, each independently
    /// 5. Summarizes the outcomes in input order
    ///
    /// Never fails: invalid contacts and transport errors become outcomes.
    pub async fn trigger_sos(&self, request: SosTriggerRequest) -> DispatchReport {
        let SosTriggerRequest {
            emergency_contacts,
            user_location,
            user_info,
        } = request;

        tracing::warn!(
            event = "sos_triggered",
            "SOS triggered, emergency protocol activated"
        );

        let timestamp = format_dispatch_timestamp(Utc::now());
        let contacts = self.resolve_contacts(emergency_contacts);

        if contacts.is_empty() {
            tracing::warn!(
                event = "sos_no_contacts",
                "No emergency contacts available, nothing dispatched"
            );
            return DispatchReport::no_contacts(timestamp, user_location, user_info);
        }

        let requester = RequesterInfo::from_value(user_info.as_ref());
        let location = user_location.as_ref().and_then(Location::from_value);
        let body = self
            .composer
            .compose(&requester.name, &timestamp, location.as_ref());
        let mode = self.transport.mode();

        tracing::info!(
            event = "sos_dispatch_started",
            requester_uid = %requester.uid,
            contacts = contacts.len(),
            mode = ?mode,
            provider = self.transport.provider_name(),
            has_location = location.is_some(),
            "Dispatching SOS alert"
        );

        let outcomes = self.fan_out(&contacts, mode, &body, &timestamp).await;
        let report = DispatchReport::from_outcomes(outcomes, timestamp, user_location, user_info);

        tracing::info!(
            event = "sos_dispatch_completed",
            requester_uid = %requester.uid,
            total = report.contacts_notified.len(),
            notified = report.notified_count(),
            sos_triggered = report.sos_triggered,
            "SOS dispatch completed"
        );

        report
    }

    fn resolve_contacts(&self, provided: Option<Vec<ContactInput>>) -> Vec<ContactInput> {
        match provided {
            Some(contacts) if !contacts.is_empty() => contacts,
            _ => {
                if !self.config.fallback_contacts.is_empty() {
                    tracing::info!(
                        event = "sos_fallback_contacts",
                        count = self.config.fallback_contacts.len(),
                        "No contacts in request, using configured fallback list"
                    );
                }
                self.config.fallback_contacts.clone()
            }
        }
    }

    /// Deliver to all contacts with bounded concurrency, keeping input order
    async fn fan_out(
        &self,
        contacts: &[ContactInput],
        mode: TransportMode,
        body: &str,
        timestamp: &str,
    ) -> Vec<DeliveryOutcome> {
        let mut slots: Vec<Option<DeliveryOutcome>> = (0..contacts.len()).map(|_| None).collect();

        let mut deliveries = stream::iter(0..contacts.len())
            .map(|index| {
                let contact = &contacts[index];
                async move { (index, self.deliver(contact, mode, body, timestamp).await) }
            })
            .buffer_unordered(self.config.max_concurrent_sends.max(1));

        while let Some((index, outcome)) = deliveries.next().await {
            slots[index] = Some(outcome);
        }

        slots.into_iter().flatten().collect()
    }

    async fn deliver(
        &self,
        input: &ContactInput,
        mode: TransportMode,
        body: &str,
        timestamp: &str,
    ) -> DeliveryOutcome {
        match mode {
            TransportMode::Mock => {
                let contact = input.normalize(MOCK_CONTACT_NAME);
                if let Err(e) = self.send_with_timeout(&contact.phone, body).await {
                    tracing::warn!(
                        phone = %mask_phone_number(&contact.phone),
                        error = %e,
                        event = "sos_mock_send_error",
                        "Mock transport reported an error, recording as mock-sent"
                    );
                }
                DeliveryOutcome::mock_sent(contact, timestamp)
            }
            TransportMode::Live => {
                let contact = input.normalize(DEFAULT_CONTACT_NAME);
                let masked = mask_phone_number(&contact.phone);

                if !is_plausible_phone_number(&contact.phone) {
                    tracing::warn!(
                        phone = %masked,
                        event = "sos_contact_skipped",
                        "Skipping contact with invalid phone number"
                    );
                    return DeliveryOutcome::skipped(contact, timestamp, INVALID_PHONE_REASON);
                }

                match self.send_with_timeout(&contact.phone, body).await {
                    Ok(sid) => {
                        tracing::info!(
                            phone = %masked,
                            sid = %sid,
                            event = "sos_alert_sent",
                            "SOS alert sent"
                        );
                        DeliveryOutcome::sent(contact, timestamp, sid)
                    }
                    Err(e) => {
                        tracing::error!(
                            phone = %masked,
                            error = %e,
                            event = "sos_alert_failed",
                            "Failed to send SOS alert"
                        );
                        DeliveryOutcome::failed(contact, timestamp, e.to_string())
                    }
                }
            }
        }
    }

    async fn send_with_timeout(&self, phone: &str, body: &str) -> DeliveryResult<String> {
        let limit = self.config.send_timeout;
        match tokio::time::timeout(limit, self.transport.send_alert(phone, body)).await {
            Ok(result) => result,
            Err(_) => Err(DeliveryError::Timeout {
                seconds: limit.as_secs(),
            }),
        }
    }
}

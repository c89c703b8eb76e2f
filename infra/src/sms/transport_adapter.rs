//! SMS Alert Transport Adapter
//!
//! This module provides an adapter that implements the core `AlertTransport`
//! trait for any SMS service, bridging the infrastructure implementations
//! with the dispatch service.

use async_trait::async_trait;

use sos_core::errors::DeliveryResult;
use sos_core::services::dispatch::{AlertTransport, TransportMode};

use crate::sms::sms_service::SmsService;

/// Adapter that implements the core `AlertTransport` for an SMS service
pub struct SmsAlertTransport {
    inner: Box<dyn SmsService>,
    mode: TransportMode,
}

impl SmsAlertTransport {
    /// Wrap an SMS service; its mode follows `SmsService::is_mock`
    pub fn new(inner: Box<dyn SmsService>) -> Self {
        let mode = if inner.is_mock() {
            TransportMode::Mock
        } else {
            TransportMode::Live
        };
        Self { inner, mode }
    }

    /// Check the wrapped service
    pub async fn is_available(&self) -> bool {
        self.inner.is_available().await
    }
}

#[async_trait]
impl AlertTransport for SmsAlertTransport {
    async fn send_alert(&self, phone: &str, body: &str) -> DeliveryResult<String> {
        Ok(self.inner.send_sms(phone, body).await?)
    }

    fn mode(&self) -> TransportMode {
        self.mode
    }

    fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}

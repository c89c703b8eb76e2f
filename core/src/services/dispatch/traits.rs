//! Transport interface the dispatch service delivers alerts through

use async_trait::async_trait;
use serde::Serialize;

use crate::errors::DeliveryResult;

/// Delivery mode, fixed for the lifetime of a transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Messages go to a real SMS provider
    Live,
    /// Messages are only logged
    Mock,
}

/// Trait for SMS delivery of alert bodies
#[async_trait]
pub trait AlertTransport: Send + Sync {
    /// Send one alert body to one phone, returning the provider message id
    async fn send_alert(&self, phone: &str, body: &str) -> DeliveryResult<String>;
    /// Delivery mode of this transport
    fn mode(&self) -> TransportMode;
    /// Provider name for logs and health reporting
    fn provider_name(&self) -> &str;
}

//! Configuration for the dispatch service

use std::time::Duration;

use sos_shared::config::dispatch::{
    DEFAULT_ALERT_LABEL, DEFAULT_MAP_URL_TEMPLATE, DEFAULT_MAX_CONCURRENT_SENDS,
    DEFAULT_MAX_MESSAGE_CHARS, DEFAULT_SEND_TIMEOUT_SECS,
};
use sos_shared::DispatchConfig;

use crate::domain::entities::ContactInput;

/// Configuration for the dispatch service
#[derive(Debug, Clone)]
pub struct DispatchServiceConfig {
    /// Contacts used when a request supplies none
    pub fallback_contacts: Vec<ContactInput>,
    /// Leading label of every alert body
    pub alert_label: String,
    /// Map link with `{lat}` and `{lng}` placeholders
    pub map_url_template: String,
    /// Character budget for one alert body
    pub max_message_chars: usize,
    /// Upper bound on sends in flight for one dispatch
    pub max_concurrent_sends: usize,
    /// Deadline for a single send
    pub send_timeout: Duration,
}

impl Default for DispatchServiceConfig {
    fn default() -> Self {
        Self {
            fallback_contacts: Vec::new(),
            alert_label: DEFAULT_ALERT_LABEL.to_string(),
            map_url_template: DEFAULT_MAP_URL_TEMPLATE.to_string(),
            max_message_chars: DEFAULT_MAX_MESSAGE_CHARS,
            max_concurrent_sends: DEFAULT_MAX_CONCURRENT_SENDS,
            send_timeout: Duration::from_secs(DEFAULT_SEND_TIMEOUT_SECS),
        }
    }
}

impl From<&DispatchConfig> for DispatchServiceConfig {
    fn from(config: &DispatchConfig) -> Self {
        Self {
            fallback_contacts: config
                .fallback_contacts
                .iter()
                .cloned()
                .map(ContactInput::from_value)
                .collect(),
            alert_label: config.alert_label.clone(),
            map_url_template: config.map_url_template.clone(),
            max_message_chars: config.max_message_chars,
            max_concurrent_sends: config.max_concurrent_sends.max(1),
            send_timeout: Duration::from_secs(config.send_timeout_secs),
        }
    }
}

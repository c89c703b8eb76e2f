//! SOS dispatch configuration

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{env_non_empty, env_parse_or};

/// Default prefix of every alert body
pub const DEFAULT_ALERT_LABEL: &str = "KIDDOO SOS ALERT";

/// Default map link template, `{lat}` and `{lng}` are substituted
pub const DEFAULT_MAP_URL_TEMPLATE: &str = "https://maps.google.com/?q={lat},{lng}";

/// Single GSM-7 SMS segment length
pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 160;

pub const DEFAULT_MAX_CONCURRENT_SENDS: usize = 8;

pub const DEFAULT_SEND_TIMEOUT_SECS: u64 = 10;

/// Dispatch behavior configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DispatchConfig {
    /// Contacts used when a request carries none, as raw JSON entries
    #[serde(default)]
    pub fallback_contacts: Vec<Value>,

    /// Prefix of the alert body
    #[serde(default = "default_alert_label")]
    pub alert_label: String,

    /// Map link template with `{lat}` and `{lng}` placeholders
    #[serde(default = "default_map_url_template")]
    pub map_url_template: String,

    /// Target maximum length of the alert body in characters
    #[serde(default = "default_max_message_chars")]
    pub max_message_chars: usize,

    /// Maximum sends in flight for one dispatch
    #[serde(default = "default_max_concurrent_sends")]
    pub max_concurrent_sends: usize,

    /// Timeout of a single send attempt in seconds
    #[serde(default = "default_send_timeout_secs")]
    pub send_timeout_secs: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            fallback_contacts: Vec::new(),
            alert_label: default_alert_label(),
            map_url_template: default_map_url_template(),
            max_message_chars: default_max_message_chars(),
            max_concurrent_sends: default_max_concurrent_sends(),
            send_timeout_secs: default_send_timeout_secs(),
        }
    }
}

impl DispatchConfig {
    /// Load from the `SOS_*` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            fallback_contacts: env_non_empty("SOS_FALLBACK_CONTACTS")
                .map(|raw| parse_fallback_contacts(&raw))
                .unwrap_or_default(),
            alert_label: env_non_empty("SOS_ALERT_LABEL").unwrap_or(defaults.alert_label),
            map_url_template: env_non_empty("SOS_MAP_URL_TEMPLATE")
                .unwrap_or(defaults.map_url_template),
            max_message_chars: env_parse_or("SOS_MAX_MESSAGE_CHARS", defaults.max_message_chars),
            max_concurrent_sends: env_parse_or(
                "SOS_MAX_CONCURRENT_SENDS",
                defaults.max_concurrent_sends,
            )
            .max(1),
            send_timeout_secs: env_parse_or("SOS_SEND_TIMEOUT_SECS", defaults.send_timeout_secs),
        }
    }
}

/// Parse a JSON array of contacts; anything else yields an empty list
pub fn parse_fallback_contacts(raw: &str) -> Vec<Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(contacts)) => contacts,
        Ok(_) => {
            tracing::warn!("SOS_FALLBACK_CONTACTS is not a JSON array, ignoring it");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(error = %e, "SOS_FALLBACK_CONTACTS is not valid JSON, ignoring it");
            Vec::new()
        }
    }
}

fn default_alert_label() -> String {
    DEFAULT_ALERT_LABEL.to_string()
}

fn default_map_url_template() -> String {
    DEFAULT_MAP_URL_TEMPLATE.to_string()
}

fn default_max_message_chars() -> usize {
    DEFAULT_MAX_MESSAGE_CHARS
}

fn default_max_concurrent_sends() -> usize {
    DEFAULT_MAX_CONCURRENT_SENDS
}

fn default_send_timeout_secs() -> u64 {
    DEFAULT_SEND_TIMEOUT_SECS
}

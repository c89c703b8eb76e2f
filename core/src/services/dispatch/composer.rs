//! Alert body composition within a single SMS segment

use super::config::DispatchServiceConfig;
use crate::domain::entities::{Location, DEFAULT_REQUESTER_NAME};

const CLOSING_SENTENCE: &str = " Please check on them.";
const ELLIPSIS: &str = "...";

/// Shortest length an address is cut to, ellipsis included
const MIN_ADDRESS_CHARS: usize = 8;
/// Shortest length a requester name is cut to, ellipsis included
const MIN_NAME_CHARS: usize = 4;

/// Builds the plain-text alert body sent to every contact of a dispatch
#[derive(Debug, Clone)]
pub struct MessageComposer {
    alert_label: String,
    map_url_template: String,
    max_chars: usize,
}

impl MessageComposer {
    pub fn new(
        alert_label: impl Into<String>,
        map_url_template: impl Into<String>,
        max_chars: usize,
    ) -> Self {
        Self {
            alert_label: alert_label.into(),
            map_url_template: map_url_template.into(),
            max_chars,
        }
    }

    pub fn from_config(config: &DispatchServiceConfig) -> Self {
        Self::new(
            config.alert_label.clone(),
            config.map_url_template.clone(),
            config.max_message_chars,
        )
    }

    /// Compose the alert body
    ///
    /// Over budget, the closing sentence goes first, then the address and
    /// then the requester name are shortened. Coordinates and the map link
    /// are kept whole even if the result stays over budget.
    pub fn compose(
        &self,
        requester_name: &str,
        timestamp: &str,
        location: Option<&Location>,
    ) -> String {
        let mut name = plain_text(requester_name);
        if name.is_empty() {
            name = DEFAULT_REQUESTER_NAME.to_string();
        }

        let mut address = match location {
            Some(Location::Address(address)) => Some(plain_text(address)),
            _ => None,
        };
        let coordinates = match location {
            Some(Location::Coordinates { lat, lng }) => Some(self.coordinates_clause(*lat, *lng)),
            _ => None,
        };
        let clause = |address: Option<&str>| -> Option<String> {
            coordinates
                .clone()
                .or_else(|| address.map(|address| format!("Address: {}", address)))
        };

        let body = self.render(&name, timestamp, clause(address.as_deref()).as_deref(), true);
        if self.fits(&body) {
            return body;
        }

        let mut body = self.render(&name, timestamp, clause(address.as_deref()).as_deref(), false);
        if self.fits(&body) {
            return body;
        }

        if let Some(full) = address.take() {
            let budget = shrink_to(&full, self.overflow(&body), MIN_ADDRESS_CHARS);
            let shortened = truncate_chars(&full, budget);
            body = self.render(
                &name,
                timestamp,
                clause(Some(shortened.as_str())).as_deref(),
                false,
            );
            if self.fits(&body) {
                return body;
            }
            address = Some(shortened);
        }

        let budget = shrink_to(&name, self.overflow(&body), MIN_NAME_CHARS);
        let name = truncate_chars(&name, budget);
        self.render(&name, timestamp, clause(address.as_deref()).as_deref(), false)
    }

    /// Location clause for a location, without the trailing period
    pub fn location_clause(&self, location: Option<&Location>) -> Option<String> {
        match location? {
            Location::Coordinates { lat, lng } => Some(self.coordinates_clause(*lat, *lng)),
            Location::Address(address) => Some(format!("Address: {}", plain_text(address))),
        }
    }

    /// Map link for a coordinate pair
    pub fn map_link(&self, lat: f64, lng: f64) -> String {
        self.map_url_template
            .replace("{lat}", &lat.to_string())
            .replace("{lng}", &lng.to_string())
    }

    fn coordinates_clause(&self, lat: f64, lng: f64) -> String {
        format!("Location: {}, {} | Map: {}", lat, lng, self.map_link(lat, lng))
    }

    fn render(&self, name: &str, timestamp: &str, clause: Option<&str>, closing: bool) -> String {
        let mut body = format!(
            "{}: {} needs support. Time: {}.",
            self.alert_label, name, timestamp
        );
        if let Some(clause) = clause {
            body.push(' ');
            body.push_str(clause);
            body.push('.');
        }
        if closing {
            body.push_str(CLOSING_SENTENCE);
        }
        body
    }

    fn fits(&self, body: &str) -> bool {
        body.chars().count() <= self.max_chars
    }

    fn overflow(&self, body: &str) -> usize {
        body.chars().count().saturating_sub(self.max_chars)
    }
}

impl Default for MessageComposer {
    fn default() -> Self {
        Self::from_config(&DispatchServiceConfig::default())
    }
}

/// Collapse control characters and whitespace runs into single spaces
fn plain_text(text: &str) -> String {
    text.split(|c: char| c.is_control() || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn shrink_to(text: &str, overflow: usize, floor: usize) -> usize {
    text.chars().count().saturating_sub(overflow).max(floor)
}

/// Cut `text` to at most `max_chars` characters, marking the cut with an ellipsis
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= ELLIPSIS.len() {
        return text.chars().take(max_chars).collect();
    }

    let kept: String = text.chars().take(max_chars - ELLIPSIS.len()).collect();
    format!("{}{}", kept.trim_end(), ELLIPSIS)
}

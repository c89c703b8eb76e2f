//! SOS dispatch service module
//!
//! This module turns one SOS trigger into alerts for every emergency contact:
//! - Contact resolution with an operator-configured fallback list
//! - Alert text composition within a single SMS segment
//! - Phone validation and bounded concurrent delivery with per-send timeouts
//! - Report shaping with one outcome per contact in input order

mod composer;
mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use composer::MessageComposer;
pub use config::DispatchServiceConfig;
pub use service::{DispatchService, INVALID_PHONE_REASON};
pub use traits::{AlertTransport, TransportMode};
pub use types::SosTriggerRequest;

//! SOS route handlers
//!
//! This module contains the emergency alert endpoints:
//! - Triggering an SOS dispatch to emergency contacts

pub mod trigger;

pub use trigger::trigger_sos;

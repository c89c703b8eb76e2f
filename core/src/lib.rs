//! # Kiddoo SOS Core
//!
//! Core dispatch logic and domain layer for the Kiddoo SOS backend.
//! This crate contains the domain entities (contacts, locations, delivery
//! outcomes), the dispatch service that fans an alert out to emergency
//! contacts, the transport interface it delivers through, and error types.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;

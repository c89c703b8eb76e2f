//! Domain entities representing the inputs and results of a dispatch.

pub mod contact;
pub mod location;
pub mod outcome;
pub mod requester;

// Re-export commonly used types
pub use contact::{
    Contact, ContactInput, PhoneValue, DEFAULT_CONTACT_NAME, MOCK_CONTACT_NAME, UNKNOWN_PHONE,
};
pub use location::Location;
pub use outcome::{format_dispatch_timestamp, DeliveryOutcome, DeliveryStatus, TIMESTAMP_FORMAT};
pub use requester::{RequesterInfo, DEFAULT_REQUESTER_NAME, DEFAULT_REQUESTER_UID};

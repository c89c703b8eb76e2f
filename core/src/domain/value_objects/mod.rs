//! Value objects returned to callers of the dispatch service.

pub mod dispatch_report;

// Re-export commonly used types
pub use dispatch_report::{
    DispatchReport, NoActionReport, INITIATED_MESSAGE, NOTHING_DELIVERED_MESSAGE,
    NO_ACTION_MESSAGE, NO_CONTACTS_MESSAGE,
};

//! Business services containing domain logic and use cases.

pub mod dispatch;

// Re-export commonly used types
pub use dispatch::{
    AlertTransport, DispatchService, DispatchServiceConfig, MessageComposer, SosTriggerRequest,
    TransportMode, INVALID_PHONE_REASON,
};

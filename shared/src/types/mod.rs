//! Type definitions shared by the HTTP layer
//!
//! - `response` - Health check responses

pub mod response;

pub use response::{HealthResponse, HealthStatus};

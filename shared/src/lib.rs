//! Shared utilities and common types for the Kiddoo SOS server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error response structures
//! - Utility functions (phone validation, masking)
//! - Response types shared by the HTTP layer

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CorsConfig, DispatchConfig, Environment, LogFormat, LoggingConfig, ServerConfig,
    SmsConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{HealthResponse, HealthStatus};
pub use utils::phone;

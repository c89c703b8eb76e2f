//! Configuration module with concern-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `dispatch` - SOS dispatch behavior (fallback contacts, message, fan-out)
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration
//! - `sms` - SMS provider credentials

pub mod dispatch;
pub mod environment;
pub mod server;
pub mod sms;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// Re-export commonly used types
pub use dispatch::DispatchConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};
pub use sms::SmsConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// SMS provider configuration
    #[serde(default)]
    pub sms: SmsConfig,

    /// Dispatch configuration
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            cors: CorsConfig::for_environment(env),
            logging: LoggingConfig::for_environment(env),
            sms: SmsConfig::default(),
            dispatch: DispatchConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Missing or unparsable values fall back to defaults; loading never fails.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            cors: CorsConfig::from_env(environment),
            logging: LoggingConfig::from_env(environment),
            sms: SmsConfig::from_env(),
            dispatch: DispatchConfig::from_env(),
        }
    }
}

/// Read a non-empty environment variable
pub(crate) fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse an environment variable, falling back to `default` when unset or invalid
pub(crate) fn env_parse_or<T: FromStr>(key: &str, default: T) -> T {
    env_non_empty(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

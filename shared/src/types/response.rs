//! API response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Overall health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,

    /// Named service flags (initialized, configured, ...)
    pub services: BTreeMap<String, bool>,

    /// Active SMS provider name
    pub provider: String,

    /// Server version
    pub version: String,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    /// Create a healthy response with no service flags
    pub fn healthy(provider: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Healthy,
            services: BTreeMap::new(),
            provider: provider.into(),
            version: version.into(),
            timestamp: Utc::now(),
        }
    }

    /// Record a named service flag
    pub fn with_service(mut self, name: impl Into<String>, up: bool) -> Self {
        self.services.insert(name.into(), up);
        self
    }
}

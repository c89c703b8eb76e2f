//! Tests for dispatch service

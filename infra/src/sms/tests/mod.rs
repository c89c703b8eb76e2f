//! Unit tests for SMS module

#[cfg(test)]
pub mod create_service_tests;

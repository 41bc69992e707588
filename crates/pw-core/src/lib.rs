//! Shared error type and run configuration for the phoneword finder.

pub mod config;
pub mod error;

pub use config::PhonewordConfig;
pub use error::{PhonewordError, Result};

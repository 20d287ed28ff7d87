//! Configuration module for the brightday-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Account setting names shared with the CLI environment overlay
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{env_keys, AccountConfig, Config, OptionsConfig, DEFAULT_API_BASE};
pub use validation::{validate_api_base, validate_config};

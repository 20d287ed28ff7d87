//! Parent API module.
//!
//! This module provides:
//! - HTTP client for the daycare parent gateway
//! - Request headers
//! - Retry policy
//! - API response types

pub mod client;
pub mod headers;
pub mod retry;
pub mod types;

pub use client::BrightDayApi;
pub use headers::{build_headers, APP_USER_AGENT};
pub use retry::RetryPolicy;
pub use types::{MediaDetails, MediaSummary};

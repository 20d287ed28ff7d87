//! Brightday Downloader - saves a child's daycare photos and videos locally.
//!
//! The parent app's gateway lists a dependent's media per date range and
//! hands out signed URLs per attachment. This crate walks every calendar
//! month from the child's join date to today, downloads each month's media
//! into `<output>/<YYYY-MM>/`, and skips past months already on disk.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use brightday_downloader::{sync_months, BrightDayApi, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default(Path::new("config.toml"))?;
//!
//!     let api = BrightDayApi::from_config(&config)?;
//!     let today = chrono::Local::now().date_naive();
//!     let stats = sync_months(&api, &config, today).await?;
//!     println!("{} item(s) downloaded", stats.items_downloaded);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use api::{BrightDayApi, MediaDetails, MediaSummary, RetryPolicy};
pub use config::Config;
pub use download::{sync_months, SyncStats};
pub use error::{Error, Result};

//! Download module.
//!
//! This module provides:
//! - Calendar month enumeration
//! - The month-by-month sync loop
//! - Media file downloading
//! - Optional per-month manifests
//! - Run statistics

pub mod manifest;
pub mod media;
pub mod months;
pub mod state;
pub mod sync;

pub use manifest::{MonthManifest, MANIFEST_FILE};
pub use media::download_to_path;
pub use months::{month_end, month_start, months_between, MonthRange};
pub use state::SyncStats;
pub use sync::{plan_month, sync_months, MonthAction};

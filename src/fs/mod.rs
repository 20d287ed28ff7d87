//! Filesystem module.
//!
//! Provides:
//! - Month folder paths and directory creation
//! - Filename normalization and sanitation

pub mod naming;
pub mod paths;

pub use naming::{canonical_extension, normalize_filename, sanitize_filename};
pub use paths::{ensure_dir, month_folder_name, month_folder_path};

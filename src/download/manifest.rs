//! Per-month record of downloaded attachments.
//!
//! Off by default. When enabled, each month folder carries a
//! `.manifest.json` naming the attachments already saved there, so a
//! re-queried month only fetches what is new.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Manifest file name inside a month folder.
pub const MANIFEST_FILE: &str = ".manifest.json";

/// One downloaded attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub attachment_id: String,
    pub filename: String,
}

/// Downloaded attachments for one month folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthManifest {
    pub month: String,
    #[serde(default)]
    pub items: Vec<ManifestEntry>,
}

impl MonthManifest {
    pub fn path(folder: &Path) -> PathBuf {
        folder.join(MANIFEST_FILE)
    }

    /// Load the manifest from `folder`, or start an empty one.
    ///
    /// An unreadable manifest is logged and treated as empty, which only
    /// costs re-downloading the month.
    pub async fn load(folder: &Path, month: &str) -> Result<Self> {
        let path = Self::path(folder);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::empty(month));
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&content) {
            Ok(manifest) => Ok(manifest),
            Err(e) => {
                tracing::warn!("Ignoring corrupt manifest {}: {}", path.display(), e);
                Ok(Self::empty(month))
            }
        }
    }

    fn empty(month: &str) -> Self {
        Self {
            month: month.to_string(),
            items: Vec::new(),
        }
    }

    /// Filename recorded for an attachment, if any.
    pub fn filename_for(&self, attachment_id: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|e| e.attachment_id == attachment_id)
            .map(|e| e.filename.as_str())
    }

    /// Whether an attachment was recorded and its file is still in `folder`.
    pub fn has_file(&self, folder: &Path, attachment_id: &str) -> bool {
        self.filename_for(attachment_id)
            .map(|name| folder.join(name).is_file())
            .unwrap_or(false)
    }

    /// Record an attachment, replacing an earlier entry for the same id.
    pub fn record(&mut self, attachment_id: &str, filename: &str) {
        self.items.retain(|e| e.attachment_id != attachment_id);
        self.items.push(ManifestEntry {
            attachment_id: attachment_id.to_string(),
            filename: filename.to_string(),
        });
    }

    /// Write the manifest into `folder`.
    pub async fn save(&self, folder: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(Self::path(folder), content).await?;
        Ok(())
    }
}

//! Run statistics.

/// Counters for one sync run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncStats {
    pub months_skipped: u64,
    pub months_empty: u64,
    pub months_fetched: u64,
    pub items_downloaded: u64,
    pub items_unchanged: u64,
    pub bytes_downloaded: u64,
}

impl SyncStats {
    pub fn mark_month_skipped(&mut self) {
        self.months_skipped += 1;
    }

    pub fn mark_month_empty(&mut self) {
        self.months_empty += 1;
    }

    pub fn mark_month_fetched(&mut self) {
        self.months_fetched += 1;
    }

    /// Record one completed download.
    pub fn add_download(&mut self, bytes: u64) {
        self.items_downloaded += 1;
        self.bytes_downloaded += bytes;
    }

    /// Record an item the manifest showed as already present.
    pub fn mark_item_unchanged(&mut self) {
        self.items_unchanged += 1;
    }

    /// Months visited, whatever their outcome.
    pub fn months_total(&self) -> u64 {
        self.months_skipped + self.months_empty + self.months_fetched
    }
}

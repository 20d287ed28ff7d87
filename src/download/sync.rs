//! Month-by-month sync of a dependent's media.

use std::path::Path;

use chrono::NaiveDate;

use crate::api::{BrightDayApi, MediaSummary};
use crate::config::Config;
use crate::download::manifest::MonthManifest;
use crate::download::media::download_to_path;
use crate::download::months::{months_between, same_month, MonthRange};
use crate::download::state::SyncStats;
use crate::error::Result;
use crate::fs::{
    ensure_dir, month_folder_name, month_folder_path, normalize_filename, sanitize_filename,
};

/// What to do with one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthAction {
    /// Past month with a folder on disk; no requests are made.
    Skip,
    /// List the month and download whatever it contains.
    Fetch,
}

/// Decide whether `month` needs fetching.
///
/// The current month is always fetched so media added since the last run is
/// picked up. Earlier months are fetched only when their folder is missing.
pub fn plan_month(month: NaiveDate, today: NaiveDate, folder_exists: bool) -> MonthAction {
    if !same_month(month, today) && folder_exists {
        MonthAction::Skip
    } else {
        MonthAction::Fetch
    }
}

/// Download every month from the configured join date through `today`.
///
/// Months and items are processed strictly one after another. The first
/// error aborts the run; months finished before it stay on disk.
pub async fn sync_months(
    api: &BrightDayApi,
    config: &Config,
    today: NaiveDate,
) -> Result<SyncStats> {
    let join_date = config.join_date()?;
    let output_dir = config.output_directory();
    let mut stats = SyncStats::default();

    tracing::info!("Child's join date: {}", join_date);
    tracing::info!("Fetching media up to: {}", today);

    for month in months_between(join_date, today) {
        let folder = month_folder_path(&output_dir, month);
        let label = month_folder_name(month);

        if plan_month(month, today, folder.exists()) == MonthAction::Skip {
            tracing::info!("Skipping existing month: {}", label);
            stats.mark_month_skipped();
            continue;
        }

        let range = MonthRange::containing(month);
        let items = api
            .list_media(&config.account.dependent_id, range.start, range.end)
            .await?;

        if items.is_empty() {
            tracing::info!("No media found for month: {}", label);
            stats.mark_month_empty();
            continue;
        }

        ensure_dir(&folder).await?;
        tracing::info!("Saving {} item(s) to {}", items.len(), folder.display());
        stats.mark_month_fetched();

        sync_month_items(api, config, &folder, &label, &items, &mut stats).await?;
    }

    tracing::info!("Media download complete.");
    Ok(stats)
}

async fn sync_month_items(
    api: &BrightDayApi,
    config: &Config,
    folder: &Path,
    label: &str,
    items: &[MediaSummary],
    stats: &mut SyncStats,
) -> Result<()> {
    let mut manifest = if config.options.write_manifest {
        Some(MonthManifest::load(folder, label).await?)
    } else {
        None
    };

    for item in items {
        if let Some(ref manifest) = manifest {
            if manifest.has_file(folder, &item.attachment_id) {
                tracing::debug!("Attachment {} already downloaded", item.attachment_id);
                stats.mark_item_unchanged();
                continue;
            }
        }

        let details = api.get_media_details(&item.attachment_id).await?;
        let filename =
            sanitize_filename(&normalize_filename(&details.filename, &details.mime_type))?;
        let output_path = folder.join(&filename);

        let url = details.signed_url.as_str();
        let path = output_path.as_path();
        let show_progress = config.options.show_downloads;
        let bytes = api
            .retry_policy()
            .run("download", || download_to_path(api, url, path, show_progress))
            .await?;

        if config.options.show_downloads {
            tracing::info!("Download complete: {}", output_path.display());
        }
        stats.add_download(bytes);

        if let Some(ref mut manifest) = manifest {
            manifest.record(&item.attachment_id, &filename);
            manifest.save(folder).await?;
        }
    }

    Ok(())
}

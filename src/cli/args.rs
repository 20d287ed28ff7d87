//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Daycare media downloader CLI.
///
/// Every flag is optional; credentials normally come from the environment
/// (or a `.env` file) as `JWT`, `COOKIE`, `DEPENDENT_ID` and `JOIN_DATE`.
#[derive(Parser, Debug, Default)]
#[command(
    name = "brightday-downloader",
    version,
    about = "Download a child's daycare photos and videos into per-month folders",
    long_about = "Walks every calendar month from the join date to today, lists the child's \
                  media for that month and downloads it into <output>/<YYYY-MM>/.\n\n\
                  Past months whose folder already exists are skipped; the current month is \
                  always checked again."
)]
pub struct Args {
    /// Bearer token for the parent app gateway.
    #[arg(long, env = "JWT", hide_env_values = true)]
    pub jwt: Option<String>,

    /// Session cookie sent with every gateway request.
    #[arg(long, env = "COOKIE", hide_env_values = true)]
    pub cookie: Option<String>,

    /// Identifier of the child whose media is downloaded.
    #[arg(long = "dependent-id", env = "DEPENDENT_ID")]
    pub dependent_id: Option<String>,

    /// First day at daycare (YYYY-MM-DD).
    #[arg(long = "join-date", env = "JOIN_DATE")]
    pub join_date: Option<String>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Root directory for month folders (default: ./output).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// API gateway base URL.
    #[arg(long = "api-base")]
    pub api_base: Option<String>,

    /// Extra attempts for failed requests (0 disables retrying).
    #[arg(long)]
    pub retries: Option<u32>,

    /// Base delay between retry attempts, in milliseconds.
    #[arg(long = "retry-delay-ms")]
    pub retry_delay_ms: Option<u64>,

    /// Keep a manifest of downloaded attachments in each month folder.
    #[arg(long)]
    pub manifest: bool,

    /// Hide download progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    ///
    /// Blank account values (an exported but empty variable) keep the file value.
    pub fn merge_into_config(self, config: &mut Config) {
        let non_blank = |v: Option<String>| v.filter(|v| !v.trim().is_empty());

        if let Some(jwt) = non_blank(self.jwt) {
            config.account.jwt = jwt;
        }

        if let Some(cookie) = non_blank(self.cookie) {
            config.account.cookie = cookie;
        }

        if let Some(dependent_id) = non_blank(self.dependent_id) {
            config.account.dependent_id = dependent_id;
        }

        if let Some(join_date) = non_blank(self.join_date) {
            config.account.join_date = join_date;
        }

        if let Some(dir) = self.output {
            config.options.output_directory = Some(dir);
        }

        if let Some(api_base) = self.api_base {
            config.options.api_base = api_base;
        }

        if let Some(retries) = self.retries {
            config.options.retries = retries;
        }

        if let Some(delay) = self.retry_delay_ms {
            config.options.retry_delay_ms = delay;
        }

        // Boolean flags (only override if set to non-default)
        if self.manifest {
            config.options.write_manifest = true;
        }

        if self.quiet {
            config.options.show_downloads = false;
        }
    }
}

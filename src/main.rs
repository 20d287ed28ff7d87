//! Brightday Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use brightday_downloader::{
    api::BrightDayApi,
    cli::Args,
    config::{validate_config, Config},
    download::sync_months,
    error::{exit_codes, Result},
    output::{
        print_banner, print_config_summary, print_error, print_info, print_success,
        print_sync_stats, print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Credentials usually live in a .env next to where the tool is run
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    if !dotenv_loaded {
        tracing::debug!("No .env file found, using process environment");
    }

    // Load configuration: file, then environment and flags
    let config_path = args.config.clone();
    let mut config = Config::load_or_default(&config_path)?;
    args.merge_into_config(&mut config);

    validate_config(&config)?;

    if config.options.retries == 0 {
        tracing::debug!("Retries disabled; the first failed request ends the run");
    }

    let today = chrono::Local::now().date_naive();
    let output_dir = config.output_directory();
    print_config_summary(
        &config.account.dependent_id,
        &config.account.join_date,
        &output_dir.display().to_string(),
        &today.to_string(),
    );

    let api = BrightDayApi::from_config(&config)?;

    print_info("Starting media download...");
    let stats = sync_months(&api, &config, today).await?;

    print_sync_stats(&stats);

    if stats.items_downloaded == 0 && stats.months_fetched == 0 {
        print_warning("Nothing new to download");
    } else {
        print_success(&format!("Media saved under {}", output_dir.display()));
    }

    Ok(())
}

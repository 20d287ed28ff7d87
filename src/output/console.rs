//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    println!(
        "{} {}",
        style("brightday-downloader").cyan().bold(),
        style(env!("CARGO_PKG_VERSION")).dim()
    );
}

/// Print configuration summary.
pub fn print_config_summary(dependent_id: &str, join_date: &str, output_dir: &str, today: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Dependent: {}", dependent_id);
    println!("  Range:     {} to {}", join_date, today);
    println!("  Directory: {}", output_dir);
    println!();
}

//! Statistics reporting.

use console::style;

use crate::download::SyncStats;

/// Print the totals for a finished run.
pub fn print_sync_stats(stats: &SyncStats) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Statistics:").bold());
    println!("  Months checked:  {}", stats.months_total());
    println!("  Months skipped:  {} (already on disk)", stats.months_skipped);
    println!("  Months empty:    {}", stats.months_empty);
    println!("  Months fetched:  {}", stats.months_fetched);
    if stats.items_unchanged > 0 {
        println!("  Items unchanged: {}", stats.items_unchanged);
    }
    println!(
        "  Downloaded:      {} item(s), {}",
        style(stats.items_downloaded).green(),
        indicatif::HumanBytes(stats.bytes_downloaded)
    );
    println!("{}", style("═".repeat(50)).dim());
}

//! Comparison statistics printing.

use log::{info, warn};
use strum::IntoEnumIterator;

use crate::models::{Comparison, InputRole};

/// Logs a summary block for a finished comparison.
pub fn print_comparison_statistics(comparison: &Comparison) {
    let stats = &comparison.stats;

    info!("Comparison Summary:");
    info!(
        "   existing: {} URLs, {} distinct domains",
        stats.existing_urls, stats.existing_domains
    );
    info!("   prospect: {} URLs", stats.prospect_urls);
    info!("   unique: {}", comparison.unique.len());
    info!("   duplicate: {}", comparison.duplicates.len());
    if stats.dropped > 0 {
        info!("   dropped (no parseable host): {}", stats.dropped);
    }

    for role in InputRole::iter() {
        let unreadable = match role {
            InputRole::Existing => stats.existing_unreadable,
            InputRole::Prospect => stats.prospect_unreadable,
        };
        if unreadable {
            warn!("   the {role} file could not be read and was treated as empty");
        }
    }
}

/// Prints a one-line summary of the run.
pub fn print_simple_summary(comparison: &Comparison, elapsed_seconds: f64) {
    let total = comparison.stats.prospect_urls;
    info!(
        "Classified {} prospect URL{} ({} unique, {} duplicate) in {:.2}s",
        total,
        if total == 1 { "" } else { "s" },
        comparison.unique.len(),
        comparison.duplicates.len(),
        elapsed_seconds
    );
}

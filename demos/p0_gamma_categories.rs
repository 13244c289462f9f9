//! Gamma Categorization
//! Example: The Three Categories and Their Patterns
//!
//! Run with: cargo run --example p0_gamma_categories

use colored::Colorize;
use gamma_patterns::catalog::Catalog;
use gamma_patterns::logging::init_logging;

fn main() -> gamma_patterns::Result<()> {
    init_logging();

    // Usage: The overview is data; load it once and walk the categories.
    let catalog = Catalog::embedded()?;

    for (idx, entry) in catalog.categories().iter().enumerate() {
        println!(
            "{}",
            format!("=== {}. {} Patterns ===", idx + 1, entry.category).bold()
        );
        println!("{}", entry.summary);
        for point in &entry.points {
            println!("  - {point}");
        }

        println!("\nIllustrated by:");
        for pattern in &entry.patterns {
            println!(
                "  {} ({}): {}",
                pattern.name.green(),
                pattern.module,
                pattern.summary
            );
        }
        println!();
    }

    println!("=== Looking Up a Pattern ===");
    match catalog.find_pattern("strategy") {
        Some((category, pattern)) => println!("{} is a {} pattern", pattern.name, category),
        None => println!("Not in the catalog"),
    }

    Ok(())
}

//! Scan command implementation

use std::path::Path;

use colored::Colorize;

use crate::error::Result;

/// List every package and the targets it was found for.
pub fn run_scan(config_path: &Path) -> Result<()> {
    let (config, index) = super::load(config_path)?;

    println!();
    if index.is_empty() {
        println!(
            "{} in {}",
            "No packages found".yellow(),
            config.plugins_path().display()
        );
        return Ok(());
    }

    for (name, targets) in &index {
        let slugs: Vec<&str> = targets.iter().map(|t| t.slug.as_str()).collect();
        let coverage = format!("{}/{}", targets.len(), config.targets.len());
        let coverage = if targets.len() == config.targets.len() {
            coverage.green()
        } else {
            coverage.yellow()
        };
        println!("  {} [{}] {}", name.cyan(), coverage, slugs.join(", ").dimmed());
    }

    println!();
    println!(
        "{}: {}  {}: {}",
        "Total packages".bold(),
        index.len(),
        "Total builds".bold(),
        index.values().map(Vec::len).sum::<usize>()
    );
    Ok(())
}

//! Validate command implementation

use std::path::Path;

use colored::Colorize;

use crate::error::Result;

/// Validate the selected packages, reporting failures per package.
pub fn run_validate(config_path: &Path, selection: &str) -> Result<()> {
    let (_config, index) = super::load(config_path)?;
    let packages = super::select(index, selection)?;

    let mut valid = 0;
    let mut skipped = 0;
    for mut package in packages {
        println!("Processing: {}", package.name());
        match package.validate() {
            Ok(()) => {
                valid += 1;
                println!("{} {}", "Valid:".green().bold(), package.name());
            }
            Err(e) => {
                skipped += 1;
                super::report_skip(package.name(), &e);
            }
        }
    }

    super::print_summary(valid, skipped, "valid");
    Ok(())
}

//! Prepare command implementation

use std::path::Path;

use colored::Colorize;
use patchbot_publish::{MultiTargetPackage, PreparedPackage, PublishContext, prepare};

use crate::error::Result;

/// Validate the selected packages and write their dist files.
pub fn run_prepare(config_path: &Path, selection: &str) -> Result<()> {
    let (config, index) = super::load(config_path)?;
    let context = config.context()?;
    let dist = config.dist_path();
    let packages = super::select(index, selection)?;

    let mut prepared = 0;
    let mut skipped = 0;
    for mut package in packages {
        println!("Processing: {}", package.name());
        match prepare_one(&mut package, &context, &dist) {
            Ok(output) => {
                prepared += 1;
                println!("{} {}", "Prepared:".green().bold(), output.dir.display());
            }
            Err(e) => {
                skipped += 1;
                super::report_skip(package.name(), &e);
            }
        }
    }

    super::print_summary(prepared, skipped, "prepared");
    Ok(())
}

fn prepare_one(
    package: &mut MultiTargetPackage,
    context: &PublishContext,
    dist: &Path,
) -> patchbot_publish::Result<PreparedPackage> {
    package.validate()?;
    prepare(package, context, dist)
}

//! Command implementations

mod prepare;
mod scan;
mod validate;

pub use prepare::run_prepare;
pub use scan::run_scan;
pub use validate::run_validate;

use std::path::Path;

use colored::Colorize;
use patchbot_publish::{
    MultiTargetPackage, PackageIndex, PublishConfig, discover_packages, into_packages,
};

use crate::error::{CliError, Result};

/// Name that selects every discovered package.
const ALL: &str = "all";

/// Load the config and index the plugins folder.
fn load(config_path: &Path) -> Result<(PublishConfig, PackageIndex)> {
    if !config_path.is_file() {
        return Err(CliError::user(format!(
            "Config file {} not found",
            config_path.display()
        )));
    }
    let config = PublishConfig::load(config_path)?;
    if config.targets.is_empty() {
        return Err(CliError::user(format!(
            "No targets configured in {}",
            config_path.display()
        )));
    }

    let slugs: Vec<&str> = config.targets.iter().map(|t| t.slug.as_str()).collect();
    println!("{}: {}", "Supported targets".dimmed(), slugs.join(", "));

    let index = discover_packages(&config.plugins_path(), &config.targets)?;
    Ok((config, index))
}

/// The packages named by `selection`, `all` for every one.
fn select(index: PackageIndex, selection: &str) -> Result<Vec<MultiTargetPackage>> {
    let index = if selection == ALL {
        index
    } else {
        let (name, targets) = index
            .into_iter()
            .find(|(name, _)| name == selection)
            .ok_or_else(|| patchbot_publish::Error::PackageNotFound(selection.to_string()))?;
        PackageIndex::from([(name, targets)])
    };
    Ok(into_packages(index)?)
}

/// Print a per-package failure and keep going.
fn report_skip(package: &str, error: &patchbot_publish::Error) {
    if error.is_package_failure() {
        println!("{} {}: {}", "Skip:".yellow().bold(), package, error);
    } else {
        println!("{} {}: {}", "Error:".red().bold(), package, error);
    }
}

fn print_summary(done: usize, skipped: usize, verb: &str) {
    println!();
    println!(
        "{} {}, {} skipped",
        done.to_string().green().bold(),
        verb,
        skipped.to_string().yellow()
    );
}

//! Package discovery under `<plugins>/<target-slug>/<package>`

use std::collections::BTreeMap;
use std::path::Path;

use patchbot_fs::io;
use patchbot_meta::PackageBundle;

use crate::package::MultiTargetPackage;
use crate::target::{Target, TargetInfo};
use crate::Result;

/// Package name to its builds, in configured target order.
pub type PackageIndex = BTreeMap<String, Vec<Target>>;

/// Scan every target folder and group package folders by name.
///
/// Missing target folders are skipped with a warning. Package folders that
/// fail the structural checks are logged and left out.
pub fn discover_packages(plugins_dir: &Path, targets: &[TargetInfo]) -> Result<PackageIndex> {
    let mut index = PackageIndex::new();

    for info in targets {
        let target_dir = plugins_dir.join(&info.slug);
        if !target_dir.is_dir() {
            tracing::warn!(target = %info.slug, "No folder found at {}", target_dir.display());
            continue;
        }

        for folder in io::subdirectories(&target_dir)? {
            let bundle = PackageBundle::new(&folder);
            if let Err(e) = bundle.validate_files() {
                tracing::error!(target = %info.slug, "{}", e);
                continue;
            }
            index
                .entry(bundle.name().to_string())
                .or_default()
                .push(Target::new(info, folder));
        }
    }

    tracing::info!(
        packages = index.len(),
        builds = index.values().map(Vec::len).sum::<usize>(),
        "Discovered packages"
    );
    Ok(index)
}

/// One [`MultiTargetPackage`] per indexed package.
pub fn into_packages(index: PackageIndex) -> Result<Vec<MultiTargetPackage>> {
    index
        .into_iter()
        .map(|(name, targets)| MultiTargetPackage::new(name, targets))
        .collect()
}

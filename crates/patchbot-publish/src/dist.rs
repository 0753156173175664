//! Dist folder output for validated packages
//!
//! ```text
//! <dist>/<package>/
//!   debug.json         parsed data per target
//!   artwork.png        copy of the first plugin's screenshot
//!   patchstorage.json  publish payload
//! ```

use std::path::{Path, PathBuf};

use patchbot_fs::{BundleFile, ConfigStore, io};

use crate::package::MultiTargetPackage;
use crate::record::{PublishContext, PublishRecord};
use crate::Result;

/// Files written for one package.
#[derive(Debug, Clone)]
pub struct PreparedPackage {
    pub dir: PathBuf,
    pub debug_json: PathBuf,
    pub artwork: PathBuf,
    pub payload: PathBuf,
    pub record: PublishRecord,
}

/// Write the dist files for a validated package, replacing earlier output.
///
/// The payload is resolved before anything is written, so a package with
/// unmapped licenses or categories leaves the dist folder untouched.
pub fn prepare(
    package: &MultiTargetPackage,
    context: &PublishContext,
    dist_dir: &Path,
) -> Result<PreparedPackage> {
    let mut record = package.publish_record(context)?;
    let artwork_source = package.artwork_source()?;
    let dump = package.debug_dump()?;

    let dir = dist_dir.join(package.name());
    io::reset_dir(&dir)?;

    let store = ConfigStore::new();

    let debug_json = dir.join(BundleFile::DebugDump.as_str());
    store.save(&debug_json, &dump)?;
    tracing::info!("Created: {}", debug_json.display());

    let artwork = dir.join(BundleFile::Artwork.as_str());
    io::copy_file(artwork_source, &artwork)?;
    tracing::info!("Created: {}", artwork.display());

    record.artwork = Some(artwork.display().to_string());
    let payload = dir.join(BundleFile::Payload.as_str());
    store.save(&payload, &record)?;
    tracing::info!("Created: {}", payload.display());

    Ok(PreparedPackage {
        dir,
        debug_json,
        artwork,
        payload,
        record,
    })
}

//! One package folder for one build target
//!
//! A package is valid for publishing when:
//!
//! 1. it is a directory
//! 2. it contains `manifest.ttl`
//! 3. it contains at least one plugin binary
//! 4. its description graph declares at least one plugin, and every plugin
//!    resolves its required fields
//!
//! Checks run in that order and stop at the first failure.

use std::path::{Path, PathBuf};

use patchbot_fs::{BINARY_EXTENSION, BundleFile, io};
use patchbot_graph::vocab::lv2;
use patchbot_graph::{FieldResolver, GraphLoader, TripleStore};
use serde::{Deserialize, Serialize};

use crate::plugin::{PluginData, PluginRecord, SHORT_TITLE_SUFFIX, SHORT_TITLE_THRESHOLD};
use crate::tables::{LookupTable, PackageOverrides};
use crate::version::{PluginVersion, PublishState};
use crate::{ContentError, Error, Result};

/// Tag added when every plugin in the package ships a GUI.
pub const GUI_TAG: &str = "modgui";

/// Parsed content of a package, in plugin discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleData {
    pub package: String,
    pub plugins: Vec<PluginData>,
}

/// A package folder and, once parsed, its plugins.
#[derive(Debug)]
pub struct PackageBundle {
    path: PathBuf,
    name: String,
    store: Option<TripleStore>,
    plugins: Vec<PluginRecord>,
    data: Option<BundleData>,
}

impl PackageBundle {
    /// The package name is the folder name.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            path,
            name,
            store: None,
            plugins: Vec::new(),
            data: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.path.join(BundleFile::Manifest.as_str())
    }

    pub fn is_parsed(&self) -> bool {
        self.data.is_some()
    }

    /// The merged description graph, once parsed.
    pub fn store(&self) -> Option<&TripleStore> {
        self.store.as_ref()
    }

    /// Structural checks that need no parsing.
    pub fn validate_files(&self) -> Result<()> {
        if !self.path.is_dir() {
            return Err(ContentError::NotADirectory {
                package: self.name.clone(),
            }
            .into());
        }
        if !self.manifest_path().is_file() {
            return Err(ContentError::MissingManifest {
                package: self.name.clone(),
                manifest: BundleFile::Manifest.to_string(),
            }
            .into());
        }
        if !io::has_file_with_extension(&self.path, BINARY_EXTENSION).map_err(ContentError::from)? {
            return Err(ContentError::MissingBinary {
                package: self.name.clone(),
                extension: BINARY_EXTENSION.to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Validate, load the description graph and resolve every plugin.
    ///
    /// Later calls return the first result without touching the disk.
    pub fn parse(&mut self) -> Result<&BundleData> {
        if self.data.is_none() {
            let data = self.load()?;
            tracing::info!(
                package = %self.name,
                plugins = data.plugins.len(),
                "Parsed package"
            );
            self.data = Some(data);
        }
        self.data()
    }

    fn load(&mut self) -> Result<BundleData> {
        self.validate_files()?;

        let store = GraphLoader::new()
            .load(&self.manifest_path())
            .map_err(|e| self.graph_error(e))?;

        let fields = FieldResolver::new(&store);
        let mut plugins = Vec::new();
        for subject in store.subjects_of_type(&lv2::PLUGIN) {
            tracing::debug!(package = %self.name, uri = %subject, "Found plugin");
            let mut record = PluginRecord::new(subject.clone(), self.name.as_str());
            record.parse(fields)?;
            plugins.push(record);
        }

        if plugins.is_empty() {
            return Err(ContentError::NoPluginFound {
                package: self.name.clone(),
            }
            .into());
        }

        let data = BundleData {
            package: self.name.clone(),
            plugins: plugins
                .iter()
                .map(|plugin| plugin.data().cloned())
                .collect::<Result<_>>()?,
        };
        self.plugins = plugins;
        self.store = Some(store);
        Ok(data)
    }

    fn graph_error(&self, source: patchbot_graph::Error) -> Error {
        ContentError::Graph {
            package: self.name.clone(),
            source,
        }
        .into()
    }

    fn not_parsed(&self) -> Error {
        Error::NotParsed {
            package: self.name.clone(),
        }
    }

    pub fn data(&self) -> Result<&BundleData> {
        self.data.as_ref().ok_or_else(|| self.not_parsed())
    }

    pub fn plugins(&self) -> Result<&[PluginRecord]> {
        self.data()?;
        Ok(&self.plugins)
    }

    fn plugin_data(&self) -> Result<&[PluginData]> {
        Ok(&self.data()?.plugins)
    }

    pub fn plugin_count(&self) -> Result<usize> {
        Ok(self.plugin_data()?.len())
    }

    pub fn is_multi_plugin(&self) -> Result<bool> {
        Ok(self.plugin_count()? > 1)
    }

    /// Plugin URIs in discovery order.
    pub fn uids(&self) -> Result<Vec<String>> {
        Ok(self
            .plugin_data()?
            .iter()
            .map(|plugin| plugin.uri.clone())
            .collect())
    }

    /// Public title: the plugin title for single-plugin packages, padded when
    /// very short, or `<package> Bundle` otherwise.
    pub fn title(&self) -> Result<String> {
        let plugins = self.plugin_data()?;
        match plugins {
            [plugin] => {
                let title = plugin.title();
                if title.chars().count() < SHORT_TITLE_THRESHOLD {
                    Ok(format!("{title}{SHORT_TITLE_SUFFIX}"))
                } else {
                    Ok(title.to_string())
                }
            }
            _ => Ok(format!("{} Bundle", self.name)),
        }
    }

    /// The license every plugin declares, compared case-insensitively.
    ///
    /// Plugins that declare no license are ignored. When none declares one,
    /// the override applies.
    pub fn license(&self, overrides: Option<&PackageOverrides>) -> Result<String> {
        let mut resolved: Option<&str> = None;
        for license in self
            .plugin_data()?
            .iter()
            .filter_map(|plugin| plugin.license.as_deref())
        {
            match resolved {
                Some(first) if !first.eq_ignore_ascii_case(license) => {
                    return Err(ContentError::LicenseMismatch {
                        package: self.name.clone(),
                        first: first.to_string(),
                        second: license.to_string(),
                    }
                    .into());
                }
                Some(_) => {}
                None => resolved = Some(license),
            }
        }

        resolved
            .map(str::to_string)
            .or_else(|| overrides.and_then(|o| o.license.clone()))
            .ok_or_else(|| {
                ContentError::LicenseMissing {
                    package: self.name.clone(),
                }
                .into()
            })
    }

    /// Numeric ID of [`license`](Self::license) in `table`.
    pub fn license_id(&self, table: &LookupTable, overrides: Option<&PackageOverrides>) -> Result<u32> {
        let license = self.license(overrides)?;
        table.resolve(&license, true)?.ok_or_else(|| {
            ContentError::UnmappedLicense {
                license,
                table: table.name().to_string(),
            }
            .into()
        })
    }

    pub fn state(&self) -> Result<PublishState> {
        Ok(PublishState::from_tiers(
            self.plugin_data()?.iter().map(|plugin| plugin.stability),
        ))
    }

    /// Newest plugin version in the package.
    pub fn revision(&self) -> Result<PluginVersion> {
        self.plugin_data()?
            .iter()
            .map(|plugin| plugin.version)
            .max()
            .ok_or_else(|| self.not_parsed())
    }

    /// Category tags: the override list when given, else the union of the
    /// plugins' categories in discovery order.
    pub fn categories(&self, overrides: Option<&PackageOverrides>) -> Result<Vec<String>> {
        let plugins = self.plugin_data()?;
        let categories = match overrides.and_then(|o| o.categories.as_ref()) {
            Some(categories) => dedup(categories.iter().cloned()),
            None => dedup(plugins.iter().flat_map(|plugin| plugin.category.iter().cloned())),
        };
        if categories.is_empty() {
            return Err(ContentError::NoCategories {
                package: self.name.clone(),
            }
            .into());
        }
        Ok(categories)
    }

    /// Numeric IDs of [`categories`](Self::categories) in `table`.
    pub fn category_ids(
        &self,
        table: &LookupTable,
        overrides: Option<&PackageOverrides>,
    ) -> Result<Vec<u32>> {
        let mut ids = Vec::new();
        for category in self.categories(overrides)? {
            let id = table.resolve(&category, false)?.ok_or_else(|| {
                Error::from(ContentError::UnmappedCategory {
                    category,
                    table: table.name().to_string(),
                })
            })?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Ok(ids)
    }

    /// Lowercase tags: override or slug-cased categories, then the defaults,
    /// then [`GUI_TAG`] when every plugin has a GUI.
    pub fn tags(
        &self,
        default_tags: &[String],
        overrides: Option<&PackageOverrides>,
    ) -> Result<Vec<String>> {
        let plugins = self.plugin_data()?;
        let derived: Vec<String> = match overrides.and_then(|o| o.tags.as_ref()) {
            Some(tags) => tags.clone(),
            None => plugins
                .iter()
                .flat_map(|plugin| plugin.category.iter())
                .map(|category| slug(category))
                .collect(),
        };

        let gui = plugins
            .iter()
            .all(PluginData::has_gui)
            .then(|| GUI_TAG.to_string());

        Ok(dedup(
            derived
                .into_iter()
                .chain(default_tags.iter().cloned())
                .chain(gui)
                .map(|tag| tag.trim().to_lowercase())
                .filter(|tag| !tag.is_empty()),
        ))
    }

    /// Listing text: per plugin a heading (bundles only), the comment and
    /// an author credit.
    pub fn description(&self) -> Result<String> {
        let multi = self.is_multi_plugin()?;
        let blocks: Vec<String> = self
            .plugin_data()?
            .iter()
            .map(|plugin| {
                let mut parts = Vec::new();
                if multi {
                    parts.push(format!("Plugin: {}", plugin.title()));
                }
                parts.push(plugin.comment_or_default().trim().to_string());
                if let Some(author) = &plugin.author {
                    parts.push(format!("Credit: {author}"));
                }
                parts.join("\n\n")
            })
            .collect();
        Ok(blocks.join("\n\n\n").trim().to_string())
    }
}

fn slug(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Remove repeats, keeping first occurrences in order.
fn dedup(values: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_folder_name() {
        let bundle = PackageBundle::new("/plugins/rpi-aarch64/reverb");
        assert_eq!(bundle.name(), "reverb");
        assert_eq!(
            bundle.manifest_path(),
            PathBuf::from("/plugins/rpi-aarch64/reverb/manifest.ttl")
        );
    }

    #[test]
    fn test_derived_values_need_parse() {
        let bundle = PackageBundle::new("/nowhere/reverb");
        assert!(matches!(bundle.title(), Err(Error::NotParsed { .. })));
        assert!(matches!(bundle.uids(), Err(Error::NotParsed { .. })));
        assert!(matches!(bundle.revision(), Err(Error::NotParsed { .. })));
        assert!(!bundle.title().unwrap_err().is_recoverable());
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Pitch Shifter"), "pitch-shifter");
        assert_eq!(slug("Reverb"), "reverb");
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let values = ["b", "a", "b", "c", "a"].map(String::from);
        assert_eq!(dedup(values), ["b", "a", "c"]);
    }
}

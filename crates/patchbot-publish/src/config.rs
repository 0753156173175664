//! `patchbot.toml` and the lookup tables it points to
//!
//! ```toml
//! platform_id = 8046
//! plugins_dir = "plugins"
//! dist_dir = "dist"
//! default_tags = ["lv2-plugin"]
//!
//! [[targets]]
//! slug = "rpi-aarch64"
//! id = 8280
//! ```
//!
//! Relative paths resolve against the directory holding the config file.

use std::path::{Path, PathBuf};

use patchbot_fs::ConfigStore;
use patchbot_meta::{LookupTable, OverrideTable, TableEntries};
use serde::{Deserialize, Serialize};

use crate::record::PublishContext;
use crate::target::TargetInfo;
use crate::Result;

/// Default config file name.
pub const CONFIG_FILE: &str = "patchbot.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Listing platform the packages are published under
    pub platform_id: u32,
    #[serde(default = "default_plugins_dir")]
    pub plugins_dir: PathBuf,
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
    #[serde(default = "default_licenses")]
    pub licenses: PathBuf,
    #[serde(default = "default_categories")]
    pub categories: PathBuf,
    /// Optional per-package overrides; a missing file means none
    #[serde(default = "default_overrides")]
    pub overrides: PathBuf,
    #[serde(default = "default_tags")]
    pub default_tags: Vec<String>,
    #[serde(default)]
    pub targets: Vec<TargetInfo>,
    #[serde(skip)]
    root: PathBuf,
}

fn default_plugins_dir() -> PathBuf {
    PathBuf::from("plugins")
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_licenses() -> PathBuf {
    PathBuf::from("licenses.json")
}

fn default_categories() -> PathBuf {
    PathBuf::from("categories.json")
}

fn default_overrides() -> PathBuf {
    PathBuf::from("plugins.json")
}

fn default_tags() -> Vec<String> {
    vec!["lv2-plugin".to_string()]
}

impl PublishConfig {
    /// Config with defaults, rooted at `root`.
    pub fn new(platform_id: u32, root: impl Into<PathBuf>) -> Self {
        Self {
            platform_id,
            plugins_dir: default_plugins_dir(),
            dist_dir: default_dist_dir(),
            licenses: default_licenses(),
            categories: default_categories(),
            overrides: default_overrides(),
            default_tags: default_tags(),
            targets: Vec::new(),
            root: root.into(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let mut config: Self = ConfigStore::new().load(path)?;
        config.root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        tracing::debug!(path = %path.display(), targets = config.targets.len(), "Loaded config");
        Ok(config)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `path` relative to the config directory, unless absolute.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn plugins_path(&self) -> PathBuf {
        self.resolve(&self.plugins_dir)
    }

    pub fn dist_path(&self) -> PathBuf {
        self.resolve(&self.dist_dir)
    }

    /// Load the lookup tables into a [`PublishContext`].
    pub fn context(&self) -> Result<PublishContext> {
        let store = ConfigStore::new();

        let overrides_path = self.resolve(&self.overrides);
        let overrides: OverrideTable = if overrides_path.exists() {
            store.load(&overrides_path)?
        } else {
            tracing::debug!(path = %overrides_path.display(), "No package overrides");
            OverrideTable::new()
        };

        Ok(PublishContext {
            platform_id: self.platform_id,
            licenses: self.lookup_table(&store, &self.licenses)?,
            categories: self.lookup_table(&store, &self.categories)?,
            overrides,
            default_tags: self.default_tags.clone(),
        })
    }

    fn lookup_table(&self, store: &ConfigStore, path: &Path) -> Result<LookupTable> {
        let path = self.resolve(path);
        let entries: TableEntries = store.load(&path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(LookupTable::new(name, entries))
    }
}

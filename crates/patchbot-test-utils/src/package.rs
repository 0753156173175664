//! [`PackageFixture`] and [`TargetTree`] builders for on-disk packages.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::{PREFIXES, PluginFixture};

/// A package folder: `manifest.ttl`, one description file per plugin, the
/// plugin binary and the screenshots.
#[derive(Debug, Clone)]
pub struct PackageFixture {
    pub name: String,
    pub plugins: Vec<PluginFixture>,
    pub binary: bool,
    pub manifest: Option<String>,
    pub extra_files: Vec<(String, String)>,
}

impl PackageFixture {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            plugins: Vec::new(),
            binary: true,
            manifest: None,
            extra_files: Vec::new(),
        }
    }

    pub fn plugin(mut self, plugin: PluginFixture) -> Self {
        self.plugins.push(plugin);
        self
    }

    pub fn without_binary(mut self) -> Self {
        self.binary = false;
        self
    }

    /// Replace the generated manifest with raw content.
    pub fn manifest(mut self, content: &str) -> Self {
        self.manifest = Some(content.to_string());
        self
    }

    /// Add an arbitrary file at a package-relative path.
    pub fn file(mut self, relative: &str, content: &str) -> Self {
        self.extra_files
            .push((relative.to_string(), content.to_string()));
        self
    }

    pub fn binary_name(&self) -> String {
        format!("{}.so", self.name)
    }

    /// The generated manifest: plugin declarations plus includes.
    pub fn manifest_turtle(&self) -> String {
        let mut manifest = PREFIXES.to_string();
        for plugin in &self.plugins {
            manifest.push_str(&format!(
                "\n<{}>\n    a lv2:Plugin ;\n    lv2:binary <{}> ;\n    rdfs:seeAlso <{}> .\n",
                plugin.uri,
                self.binary_name(),
                plugin.file_name()
            ));
        }
        manifest
    }

    /// Write the package as `parent/<name>` and return its path.
    pub fn write(&self, parent: &Path) -> PathBuf {
        let root = parent.join(&self.name);
        fs::create_dir_all(&root).unwrap();

        let manifest = self
            .manifest
            .clone()
            .unwrap_or_else(|| self.manifest_turtle());
        fs::write(root.join("manifest.ttl"), manifest).unwrap();

        if self.binary {
            fs::write(root.join(self.binary_name()), b"\x7fELF").unwrap();
        }

        for plugin in &self.plugins {
            fs::write(
                root.join(plugin.file_name()),
                format!("{PREFIXES}\n{}", plugin.to_turtle()),
            )
            .unwrap();
            if plugin.screenshot {
                write_file(&root, &plugin.screenshot_path(), "\u{89}PNG");
            }
        }

        for (relative, content) in &self.extra_files {
            write_file(&root, relative, content);
        }

        root
    }
}

fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A temporary `plugins/<target-slug>/<package>` tree.
///
/// # Example
///
/// ```rust
/// use patchbot_test_utils::{PackageFixture, PluginFixture, TargetTree};
///
/// let tree = TargetTree::new();
/// let package = PackageFixture::new("reverb").plugin(PluginFixture::new("reverb"));
/// let path = tree.add("rpi-aarch64", &package);
/// assert!(path.join("manifest.ttl").exists());
/// ```
pub struct TargetTree {
    temp_dir: TempDir,
}

impl Default for TargetTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetTree {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn plugins_dir(&self) -> PathBuf {
        self.root().join("plugins")
    }

    pub fn target_dir(&self, slug: &str) -> PathBuf {
        self.plugins_dir().join(slug)
    }

    /// Write `package` for the target `slug`, returning the package path.
    pub fn add(&self, slug: &str, package: &PackageFixture) -> PathBuf {
        package.write(&self.target_dir(slug))
    }

    /// Write `package` for every target in `slugs`.
    pub fn add_all(&self, slugs: &[&str], package: &PackageFixture) -> Vec<PathBuf> {
        slugs.iter().map(|slug| self.add(slug, package)).collect()
    }
}

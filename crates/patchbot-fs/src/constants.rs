//! Well-known file names inside plugin packages and dist folders.

use std::path::Path;

/// Extension of the compiled plugin binary whose presence makes a package valid.
pub const BINARY_EXTENSION: &str = "so";

/// Fixed file names read from packages or written to dist folders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleFile {
    /// Entry description file of every package
    Manifest,
    /// Raw parsed data of every target
    DebugDump,
    /// Copy of the resolved screenshot
    Artwork,
    /// Upload payload handed to the publishing client
    Payload,
}

impl BundleFile {
    /// Get the file name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manifest => "manifest.ttl",
            Self::DebugDump => "debug.json",
            Self::Artwork => "artwork.png",
            Self::Payload => "patchstorage.json",
        }
    }

    /// Check whether `path` names this file, ignoring its directory.
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name().is_some_and(|name| name == self.as_str())
    }
}

impl std::fmt::Display for BundleFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

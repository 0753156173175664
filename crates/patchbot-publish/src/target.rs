//! Build targets

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A hardware target as configured: folder slug and listing ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetInfo {
    pub slug: String,
    pub id: u32,
}

impl TargetInfo {
    pub fn new(slug: impl Into<String>, id: u32) -> Self {
        Self {
            slug: slug.into(),
            id,
        }
    }
}

/// One build of a package: its target and the package folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub slug: String,
    pub id: u32,
    pub path: PathBuf,
}

impl Target {
    pub fn new(info: &TargetInfo, path: impl Into<PathBuf>) -> Self {
        Self {
            slug: info.slug.clone(),
            id: info.id,
            path: path.into(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.slug, self.path.display())
    }
}

//! Plugin version, stability tier and publish state

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A `minor.micro` plugin version.
///
/// Ordering compares the minor component first, both numerically, so
/// `2.10` is newer than `2.9`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PluginVersion {
    pub minor: u32,
    pub micro: u32,
}

impl PluginVersion {
    pub fn new(minor: u32, micro: u32) -> Self {
        Self { minor, micro }
    }

    pub fn stability(&self) -> Stability {
        Stability::of(*self)
    }
}

impl fmt::Display for PluginVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.minor, self.micro)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid plugin version {0:?}: expected minor.micro")]
pub struct ParseVersionError(String);

impl FromStr for PluginVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseVersionError(s.to_string());
        let (minor, micro) = s.split_once('.').ok_or_else(invalid)?;
        Ok(Self {
            minor: minor.parse().map_err(|_| invalid())?,
            micro: micro.parse().map_err(|_| invalid())?,
        })
    }
}

impl From<PluginVersion> for String {
    fn from(version: PluginVersion) -> Self {
        version.to_string()
    }
}

impl TryFrom<String> for PluginVersion {
    type Error = ParseVersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Release tier derived from a [`PluginVersion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stability {
    Experimental,
    Testing,
    Stable,
}

impl Stability {
    /// Minor 0 is experimental, any odd component is testing, the rest is
    /// stable.
    pub fn of(version: PluginVersion) -> Self {
        if version.minor == 0 {
            Self::Experimental
        } else if version.minor % 2 == 1 || version.micro % 2 == 1 {
            Self::Testing
        } else {
            Self::Stable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Experimental => "experimental",
            Self::Testing => "testing",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listing state of a published package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublishState {
    WorkInProgress,
    Ready,
}

impl PublishState {
    /// Least ready state over a set of plugin tiers.
    pub fn from_tiers(tiers: impl IntoIterator<Item = Stability>) -> Self {
        if tiers.into_iter().any(|tier| tier == Stability::Experimental) {
            Self::WorkInProgress
        } else {
            Self::Ready
        }
    }

    /// Numeric state ID used by the listing service.
    pub fn id(&self) -> u32 {
        match self {
            Self::WorkInProgress => 150,
            Self::Ready => 151,
        }
    }
}

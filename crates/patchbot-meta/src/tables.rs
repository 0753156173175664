//! Caller-supplied lookup and override tables
//!
//! Lookup tables map a numeric ID (stored as a string key) to the aliases
//! that resolve to it:
//!
//! ```json
//! { "3": ["MIT", "http://opensource.org/licenses/MIT"], "5": ["ISC"] }
//! ```
//!
//! Resolution goes the other way, alias to ID. When an alias appears under
//! several keys, the last key in file order wins.

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::ContentError;

/// Raw table content, in the order the keys appear in the file.
pub type TableEntries = IndexMap<String, Vec<String>>;

/// Alias table with a display name used in error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    name: String,
    entries: TableEntries,
}

impl LookupTable {
    /// Entries keep the iteration order of `entries`.
    pub fn new(
        name: impl Into<String>,
        entries: impl IntoIterator<Item = (String, Vec<String>)>,
    ) -> Self {
        Self {
            name: name.into(),
            entries: entries.into_iter().collect(),
        }
    }

    /// Name shown when an alias is missing, usually the table's file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &TableEntries {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve an alias to its numeric ID.
    ///
    /// With `fold_case`, aliases and the value are compared lowercased.
    /// Returns `Ok(None)` when the alias is unknown.
    pub fn resolve(&self, value: &str, fold_case: bool) -> Result<Option<u32>, ContentError> {
        let fold = |s: &str| {
            if fold_case {
                s.to_lowercase()
            } else {
                s.to_string()
            }
        };

        let inverted: HashMap<String, &str> = self
            .entries
            .iter()
            .flat_map(|(key, aliases)| aliases.iter().map(move |alias| (fold(alias), key.as_str())))
            .collect();

        inverted
            .get(&fold(value))
            .map(|key| {
                key.trim().parse().map_err(|_| ContentError::InvalidTableKey {
                    table: self.name.clone(),
                    key: key.to_string(),
                })
            })
            .transpose()
    }
}

/// Per-package corrections applied on top of the parsed metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageOverrides {
    /// Used only when no plugin declares a license
    pub license: Option<String>,
    pub source_code_url: Option<String>,
    pub donate_url: Option<String>,
    /// Replaces the categories derived from plugin types
    pub categories: Option<Vec<String>>,
    /// Replaces the tags derived from categories
    pub tags: Option<Vec<String>>,
}

/// Overrides keyed by package name.
pub type OverrideTable = BTreeMap<String, PackageOverrides>;

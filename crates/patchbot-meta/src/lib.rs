//! Metadata model for LV2 plugin packages.
//!
//! A [`PackageBundle`] is one package folder for one build target. Parsing
//! it loads the description graph, finds every plugin subject and resolves a
//! [`PluginRecord`] for each. Package-level values (title, license, state,
//! revision, categories, tags, description) are derived from those records
//! together with caller-supplied [`LookupTable`]s and [`PackageOverrides`].

pub mod bundle;
pub mod category;
pub mod error;
pub mod plugin;
pub mod tables;
pub mod version;

pub use bundle::{BundleData, PackageBundle};
pub use category::CategoryClassifier;
pub use error::{ContentError, Error, Result};
pub use plugin::{PluginData, PluginRecord};
pub use tables::{LookupTable, OverrideTable, PackageOverrides, TableEntries};
pub use version::{PluginVersion, PublishState, Stability};

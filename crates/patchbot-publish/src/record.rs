//! Upload payload for one package

use patchbot_meta::{LookupTable, OverrideTable, PackageBundle, PackageOverrides};
use serde::{Deserialize, Serialize};

use crate::package::MultiTargetPackage;
use crate::Result;

/// Tables and settings a payload is resolved against.
#[derive(Debug, Clone, Default)]
pub struct PublishContext {
    pub platform_id: u32,
    pub licenses: LookupTable,
    pub categories: LookupTable,
    pub overrides: OverrideTable,
    pub default_tags: Vec<String>,
}

impl PublishContext {
    pub fn overrides_for(&self, package: &str) -> Option<&PackageOverrides> {
        self.overrides.get(package)
    }
}

/// What the upload client sends for one package. Absent URLs are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishRecord {
    pub uids: Vec<String>,
    pub state: u32,
    pub platform: u32,
    pub categories: Vec<u32>,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub revision: String,
    pub license: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_code_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donate_url: Option<String>,
    /// Set once the artwork has been copied next to the payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork: Option<String>,
}

impl PublishRecord {
    /// Resolve a payload from one parsed bundle.
    pub fn from_bundle(bundle: &PackageBundle, context: &PublishContext) -> Result<Self> {
        let overrides = context.overrides_for(bundle.name());
        Ok(Self {
            uids: bundle.uids()?,
            state: bundle.state()?.id(),
            platform: context.platform_id,
            categories: bundle.category_ids(&context.categories, overrides)?,
            title: bundle.title()?,
            content: bundle.description()?,
            tags: bundle.tags(&context.default_tags, overrides)?,
            revision: bundle.revision()?.to_string(),
            license: bundle.license_id(&context.licenses, overrides)?,
            source_code_url: overrides.and_then(|o| o.source_code_url.clone()),
            donate_url: overrides.and_then(|o| o.donate_url.clone()),
            artwork: None,
        })
    }
}

impl MultiTargetPackage {
    /// Payload for a validated package, taken from its first target.
    pub fn publish_record(&self, context: &PublishContext) -> Result<PublishRecord> {
        self.ensure_valid()?;
        PublishRecord::from_bundle(self.primary(), context)
    }
}

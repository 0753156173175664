//! Per-plugin metadata resolved from a description graph

use std::collections::BTreeSet;
use std::path::PathBuf;

use patchbot_fs::local_path;
use patchbot_graph::vocab::{doap, foaf, lv2, moddevices, modgui, rdf, rdfs};
use patchbot_graph::{FieldResolver, Pattern, Term};
use serde::{Deserialize, Serialize};

use crate::category::CategoryClassifier;
use crate::version::{PluginVersion, Stability};
use crate::{ContentError, Error, Result};

/// Placeholder comments left by plugin templates.
const COMMENT_SENTINELS: [&str; 2] = ["…", "..."];

/// Text used when a plugin has no comment.
pub const DEFAULT_DESCRIPTION: &str = "No description available.";

/// Titles shorter than this get [`SHORT_TITLE_SUFFIX`] appended.
pub const SHORT_TITLE_THRESHOLD: usize = 5;
pub const SHORT_TITLE_SUFFIX: &str = " Plugin";

/// Everything resolved for one plugin subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginData {
    pub uri: String,
    pub name: String,
    pub label: Option<String>,
    pub brand: Option<String>,
    pub author: Option<String>,
    pub license: Option<String>,
    pub comment: Option<String>,
    pub version: PluginVersion,
    pub stability: Stability,
    pub category: BTreeSet<String>,
    /// Differs between build targets, since it is an absolute path
    pub screenshot: PathBuf,
}

impl PluginData {
    /// Label when present, name otherwise.
    pub fn title(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    /// Parsing only succeeds with an existing screenshot, so this reads
    /// the parsed path and never the disk.
    pub fn has_gui(&self) -> bool {
        !self.screenshot.as_os_str().is_empty()
    }

    pub fn comment_or_default(&self) -> &str {
        self.comment.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }
}

/// One plugin subject of a package, parsed at most once.
#[derive(Debug, Clone)]
pub struct PluginRecord {
    subject: Term,
    package: String,
    data: Option<PluginData>,
}

impl PluginRecord {
    pub fn new(subject: Term, package: impl Into<String>) -> Self {
        Self {
            subject,
            package: package.into(),
            data: None,
        }
    }

    pub fn uri(&self) -> &str {
        self.subject.value()
    }

    pub fn is_parsed(&self) -> bool {
        self.data.is_some()
    }

    /// Resolve every field. Later calls return the first result.
    pub fn parse(&mut self, fields: FieldResolver<'_>) -> Result<&PluginData> {
        if self.data.is_none() {
            let data = self.extract(fields)?;
            tracing::debug!(
                package = %self.package,
                uri = %data.uri,
                version = %data.version,
                "Resolved plugin"
            );
            self.data = Some(data);
        }
        self.data()
    }

    pub fn data(&self) -> Result<&PluginData> {
        self.data.as_ref().ok_or_else(|| Error::NotParsed {
            package: self.package.clone(),
        })
    }

    fn extract(&self, fields: FieldResolver<'_>) -> Result<PluginData> {
        let subject = Pattern::One(&self.subject);
        let text = |predicate: &Term| non_empty(fields.field(subject, Pattern::One(predicate)));
        let nested = |link: &Term, child: &Term| {
            non_empty(fields.nested_field(Pattern::One(link), Pattern::One(child)))
        };

        let name = text(&doap::NAME).ok_or_else(|| self.missing("name"))?;
        let label = text(&doap::LABEL);

        let developer = nested(&doap::DEVELOPER, &foaf::NAME);
        let maintainer = nested(&doap::MAINTAINER, &foaf::NAME);
        let author = developer.clone().or_else(|| maintainer.clone());
        let brand = text(&moddevices::BRAND)
            .or(developer)
            .or(maintainer)
            .or_else(|| nested(&modgui::GUI, &modgui::BRAND));

        let screenshot = self.screenshot(fields)?;
        let license = self.license(text(&doap::LICENSE))?;
        let comment = text(&rdfs::COMMENT).filter(|c| !COMMENT_SENTINELS.contains(&c.as_str()));

        let version = PluginVersion::new(
            self.version_component("minorVersion", text(&lv2::MINOR_VERSION))?,
            self.version_component("microVersion", text(&lv2::MICRO_VERSION))?,
        );

        let types = fields
            .typed_field(subject, Pattern::One(&rdf::TYPE), Some(lv2::NS))
            .into_iter()
            .chain(fields.typed_field(subject, Pattern::One(&rdf::TYPE), Some(moddevices::NS)))
            .collect::<BTreeSet<_>>();
        let category = CategoryClassifier::classify(types.iter().map(String::as_str));

        Ok(PluginData {
            uri: self.uri().to_string(),
            name,
            label,
            brand,
            author,
            license,
            comment,
            version,
            stability: version.stability(),
            category,
            screenshot,
        })
    }

    fn screenshot(&self, fields: FieldResolver<'_>) -> Result<PathBuf> {
        let reference = fields
            .nested_field(Pattern::One(&modgui::GUI), Pattern::One(&modgui::SCREENSHOT))
            .and_then(|value| local_path(&value));

        match reference {
            Some(path) if path.is_file() => Ok(path),
            Some(path) => {
                tracing::warn!(package = %self.package, "Screenshot not found at {}", path.display());
                Err(self.missing("screenshot"))
            }
            None => Err(self.missing("screenshot")),
        }
    }

    /// A license given as a local file reference resolves to the file's base
    /// name, unless that file exists.
    fn license(&self, value: Option<String>) -> Result<Option<String>> {
        let Some(value) = value else {
            return Ok(None);
        };
        if !value.starts_with("file:") {
            return Ok(Some(value));
        }
        let Some(path) = local_path(&value) else {
            return Ok(Some(value));
        };
        if path.exists() {
            return Err(ContentError::UnsupportedLicenseFile {
                package: self.package.clone(),
                path,
            }
            .into());
        }
        Ok(path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .or(Some(value)))
    }

    fn version_component(&self, field: &'static str, value: Option<String>) -> Result<u32> {
        match value {
            None => Ok(0),
            Some(value) => value.parse().map_err(|_| {
                Error::from(ContentError::InvalidField {
                    field,
                    package: self.package.clone(),
                    value,
                })
            }),
        }
    }

    fn missing(&self, field: &'static str) -> Error {
        ContentError::FieldMissing {
            field,
            package: self.package.clone(),
        }
        .into()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

//! Cross-target validation of one logical package
//!
//! Validation walks a fixed sequence of states:
//!
//! ```text
//! Unvalidated -> FilesChecked -> Parsed -> DataChecked -> Valid
//! ```
//!
//! A failing step moves the package to the terminal `Invalid` state and
//! keeps the reason. Steps called out of sequence are refused without
//! changing state.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;

use patchbot_fs::io;
use patchbot_meta::{BundleData, PackageBundle};
use serde_json::Value;

use crate::target::Target;
use crate::{Error, Result};

/// Field of a plugin record that legitimately differs per target.
const TARGET_ONLY_FIELD: &str = "screenshot";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationState {
    Unvalidated,
    FilesChecked,
    Parsed,
    DataChecked,
    Valid,
    Invalid(String),
}

impl fmt::Display for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unvalidated => write!(f, "unvalidated"),
            Self::FilesChecked => write!(f, "files-checked"),
            Self::Parsed => write!(f, "parsed"),
            Self::DataChecked => write!(f, "data-checked"),
            Self::Valid => write!(f, "valid"),
            Self::Invalid(_) => write!(f, "invalid"),
        }
    }
}

/// One target build and its parsed package.
#[derive(Debug)]
pub struct TargetBundle {
    pub target: Target,
    pub bundle: PackageBundle,
}

/// A package built for several targets.
#[derive(Debug)]
pub struct MultiTargetPackage {
    name: String,
    targets: Vec<TargetBundle>,
    state: ValidationState,
}

impl MultiTargetPackage {
    /// The first target is the reference the others are compared with.
    pub fn new(name: impl Into<String>, targets: Vec<Target>) -> Result<Self> {
        let name = name.into();
        if targets.is_empty() {
            return Err(Error::NoTargets { package: name });
        }
        let targets = targets
            .into_iter()
            .map(|target| TargetBundle {
                bundle: PackageBundle::new(&target.path),
                target,
            })
            .collect();
        Ok(Self {
            name,
            targets,
            state: ValidationState::Unvalidated,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> &ValidationState {
        &self.state
    }

    pub fn is_valid(&self) -> bool {
        self.state == ValidationState::Valid
    }

    pub fn targets(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter().map(|t| &t.target)
    }

    pub fn bundles(&self) -> &[TargetBundle] {
        &self.targets
    }

    /// The bundle every derived value is taken from.
    pub fn primary(&self) -> &PackageBundle {
        &self.targets[0].bundle
    }

    /// Run every step in order.
    pub fn validate(&mut self) -> Result<()> {
        self.check_files()?;
        self.parse_targets()?;
        self.check_data()?;
        self.step(ValidationState::DataChecked, ValidationState::Valid, |_| Ok(()))?;
        tracing::info!(package = %self.name, targets = self.targets.len(), "Package is valid");
        Ok(())
    }

    /// Every target must contain the same relative file names.
    pub fn check_files(&mut self) -> Result<()> {
        self.step(ValidationState::Unvalidated, ValidationState::FilesChecked, |this| {
            let mut base: Option<(&Path, BTreeSet<String>)> = None;
            for entry in &this.targets {
                let files: BTreeSet<String> = io::list_relative_files(&entry.target.path)?
                    .into_iter()
                    .map(|path| path.as_str().to_string())
                    .collect();

                if let Some((base_path, base_files)) = &base {
                    let difference: Vec<String> =
                        base_files.symmetric_difference(&files).cloned().collect();
                    if !difference.is_empty() {
                        return Err(Error::FileSetMismatch {
                            package: this.name.clone(),
                            base: base_path.to_path_buf(),
                            other: entry.target.path.clone(),
                            difference,
                        });
                    }
                } else {
                    base = Some((entry.target.path.as_path(), files));
                }
            }
            Ok(())
        })
    }

    /// Parse every target. One broken target fails the whole package.
    pub fn parse_targets(&mut self) -> Result<()> {
        self.step(ValidationState::FilesChecked, ValidationState::Parsed, |this| {
            for entry in &mut this.targets {
                tracing::debug!(package = %this.name, target = %entry.target.slug, "Parsing target");
                entry.bundle.parse()?;
            }
            Ok(())
        })
    }

    /// Every target must resolve to the same data, ignoring screenshot paths
    /// and plugin order.
    pub fn check_data(&mut self) -> Result<()> {
        self.step(ValidationState::Parsed, ValidationState::DataChecked, |this| {
            let mut base: Option<(&str, Value)> = None;
            for entry in &this.targets {
                let data = canonical(entry.bundle.data()?)?;
                match &base {
                    Some((slug, base_data)) if *base_data != data => {
                        return Err(Error::DataMismatch {
                            package: this.name.clone(),
                            base: slug.to_string(),
                            other: entry.target.slug.clone(),
                        });
                    }
                    Some(_) => {}
                    None => base = Some((entry.target.slug.as_str(), data)),
                }
            }
            Ok(())
        })
    }

    /// Parsed data of every target keyed by target slug.
    pub fn debug_dump(&self) -> Result<BTreeMap<&str, &BundleData>> {
        self.targets
            .iter()
            .map(|entry| Ok::<_, Error>((entry.target.slug.as_str(), entry.bundle.data()?)))
            .collect()
    }

    /// Screenshot of the first plugin of the first target.
    pub fn artwork_source(&self) -> Result<&Path> {
        let data = self.primary().data()?;
        data.plugins
            .first()
            .map(|plugin| plugin.screenshot.as_path())
            .ok_or_else(|| {
                patchbot_meta::ContentError::NoPluginFound {
                    package: self.name.clone(),
                }
                .into()
            })
    }

    /// Fail unless validation has completed.
    pub fn ensure_valid(&self) -> Result<()> {
        match &self.state {
            ValidationState::Valid => Ok(()),
            ValidationState::Invalid(reason) => Err(Error::Invalid {
                package: self.name.clone(),
                reason: reason.clone(),
            }),
            actual => Err(Error::OutOfOrder {
                package: self.name.clone(),
                expected: ValidationState::Valid,
                actual: actual.clone(),
            }),
        }
    }

    fn step<T>(
        &mut self,
        expected: ValidationState,
        next: ValidationState,
        check: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        if let ValidationState::Invalid(reason) = &self.state {
            return Err(Error::Invalid {
                package: self.name.clone(),
                reason: reason.clone(),
            });
        }
        if self.state != expected {
            return Err(Error::OutOfOrder {
                package: self.name.clone(),
                expected,
                actual: self.state.clone(),
            });
        }

        match check(self) {
            Ok(value) => {
                tracing::debug!(package = %self.name, state = %next, "Validation step passed");
                self.state = next;
                Ok(value)
            }
            Err(e) => {
                tracing::warn!(package = %self.name, "Validation failed: {}", e);
                self.state = ValidationState::Invalid(e.to_string());
                Err(e)
            }
        }
    }
}

/// Bundle data as JSON without target-only fields, plugins sorted by URI.
fn canonical(data: &BundleData) -> Result<Value> {
    let mut value = serde_json::to_value(data)?;
    if let Some(Value::Array(plugins)) = value.get_mut("plugins") {
        for plugin in plugins.iter_mut() {
            if let Value::Object(fields) = plugin {
                fields.remove(TARGET_ONLY_FIELD);
            }
        }
        plugins.sort_by(|a, b| {
            let uri = |v: &Value| v.get("uri").and_then(Value::as_str).map(str::to_string);
            uri(a).cmp(&uri(b))
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::TargetInfo;
    use patchbot_meta::{PluginData, PluginVersion, Stability};

    #[test]
    fn test_no_targets() {
        let err = MultiTargetPackage::new("reverb", Vec::new()).unwrap_err();
        assert!(matches!(err, Error::NoTargets { .. }));
    }

    #[test]
    fn test_steps_out_of_order_are_refused() {
        let target = Target::new(&TargetInfo::new("rpi", 1), "/nowhere/reverb");
        let mut package = MultiTargetPackage::new("reverb", vec![target]).unwrap();

        let err = package.check_data().unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfOrder {
                expected: ValidationState::Parsed,
                actual: ValidationState::Unvalidated,
                ..
            }
        ));
        assert_eq!(package.state(), &ValidationState::Unvalidated);
    }

    #[test]
    fn test_state_display() {
        assert_eq!(ValidationState::FilesChecked.to_string(), "files-checked");
        assert_eq!(ValidationState::Invalid("x".into()).to_string(), "invalid");
    }

    fn plugin(uri: &str, screenshot: &str) -> PluginData {
        PluginData {
            uri: uri.into(),
            name: "Plugin".into(),
            label: None,
            brand: None,
            author: None,
            license: Some("MIT".into()),
            comment: None,
            version: PluginVersion::new(2, 0),
            stability: Stability::Stable,
            category: BTreeSet::new(),
            screenshot: screenshot.into(),
        }
    }

    #[test]
    fn test_canonical_ignores_screenshot_and_plugin_order() {
        let rpi = BundleData {
            package: "p".into(),
            plugins: vec![plugin("urn:a", "/rpi/a.png"), plugin("urn:b", "/rpi/b.png")],
        };
        let x86 = BundleData {
            package: "p".into(),
            plugins: vec![plugin("urn:b", "/x86/b.png"), plugin("urn:a", "/x86/a.png")],
        };

        let canonical_rpi = canonical(&rpi).unwrap();
        assert_eq!(canonical_rpi, canonical(&x86).unwrap());
        assert!(canonical_rpi["plugins"][0].get("screenshot").is_none());
        assert_eq!(canonical_rpi["plugins"][0]["uri"], "urn:a");
    }

    #[test]
    fn test_canonical_keeps_other_differences() {
        let mut other = plugin("urn:a", "/x86/a.png");
        other.license = Some("GPL".into());
        let rpi = BundleData {
            package: "p".into(),
            plugins: vec![plugin("urn:a", "/rpi/a.png")],
        };
        let x86 = BundleData {
            package: "p".into(),
            plugins: vec![other],
        };
        assert_ne!(canonical(&rpi).unwrap(), canonical(&x86).unwrap());
    }
}

//! Publishing layer for LV2 plugin packages.
//!
//! The same package is built once per hardware target. Before anything is
//! published, a [`MultiTargetPackage`] proves that every target ships the
//! same files and the same metadata, then produces the [`PublishRecord`]
//! handed to the upload client.
//!
//! - [`discovery`]: find package folders under `<plugins>/<target-slug>/`
//! - [`package`]: the cross-target validation state machine
//! - [`record`]: the upload payload and the tables it is resolved against
//! - [`config`]: `patchbot.toml`
//! - [`dist`]: debug dump, artwork copy and payload file per package

pub mod config;
pub mod discovery;
pub mod dist;
pub mod error;
pub mod package;
pub mod record;
pub mod target;

pub use config::{CONFIG_FILE, PublishConfig};
pub use discovery::{PackageIndex, discover_packages, into_packages};
pub use dist::{PreparedPackage, prepare};
pub use error::{Error, Result};
pub use package::{MultiTargetPackage, TargetBundle, ValidationState};
pub use record::{PublishContext, PublishRecord};
pub use target::{Target, TargetInfo};

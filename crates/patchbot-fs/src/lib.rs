//! Filesystem layer for patchbot
//!
//! Path normalization, description-file reference resolution, recursive
//! listings for cross-target comparison, and format-agnostic config loading.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::{ConfigFormat, ConfigStore};
pub use constants::{BINARY_EXTENSION, BundleFile};
pub use error::{Error, Result};
pub use path::{NormalizedPath, canonicalize, file_iri, local_path};

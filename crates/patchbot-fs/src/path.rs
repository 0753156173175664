//! Normalized path handling and description-file reference resolution

use std::path::{Path, PathBuf};

use url::Url;

use crate::{Error, Result};

/// A relative path inside a package, always with forward slashes.
///
/// Comparison key for file listings, so two targets scanned on different
/// platforms produce identical sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath(String);

impl NormalizedPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self(path.as_ref().to_string_lossy().replace('\\', "/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve a reference found in a description graph to a local path.
///
/// `file:` IRIs are decoded to filesystem paths. Any other scheme
/// (`http`, `https`, `urn`, ...) is not local and yields `None`. Strings that
/// are not IRIs at all are taken as plain paths.
pub fn local_path(reference: &str) -> Option<PathBuf> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }

    match Url::parse(reference) {
        Ok(url) if url.scheme() == "file" => url.to_file_path().ok(),
        // single-letter schemes are Windows drive letters, not IRIs
        Ok(url) if url.scheme().len() > 1 => None,
        _ => Some(PathBuf::from(reference)),
    }
}

/// Build the `file:` IRI of an absolute path, used as the parse base of a
/// description file so relative references resolve next to it.
pub fn file_iri(path: &Path) -> Result<Url> {
    Url::from_file_path(path).map_err(|()| Error::NotAFileIri {
        path: path.to_path_buf(),
    })
}

/// Canonicalize a path without the Windows verbatim prefix.
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    dunce::canonicalize(path).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_path_uses_forward_slashes() {
        let path = NormalizedPath::new("modgui\\screenshot.png");
        assert_eq!(path.as_str(), "modgui/screenshot.png");
        assert_eq!(path.to_string(), "modgui/screenshot.png");
    }

    #[cfg(not(windows))]
    #[test]
    fn test_file_iri_round_trips_through_local_path() {
        let path = Path::new("/tmp/with space/manifest.ttl");
        let iri = file_iri(path).unwrap();
        assert_eq!(iri.as_str(), "file:///tmp/with%20space/manifest.ttl");
        assert_eq!(local_path(iri.as_str()), Some(path.to_path_buf()));
    }

    #[test]
    fn test_relative_path_is_rejected_as_iri() {
        assert!(file_iri(Path::new("relative/manifest.ttl")).is_err());
    }
}

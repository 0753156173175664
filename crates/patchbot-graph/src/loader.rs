//! Loader that merges an entry description file and its includes
//!
//! Every `rdfs:seeAlso` object found in a parsed file names another
//! description file. Includes are followed breadth-first until no new local
//! file is referenced:
//!
//! - non-local references (`http:`, `urn:`, ...) are skipped
//! - a file already parsed is skipped, so diamonds and cycles terminate
//! - a missing or unreadable include is a warning
//! - bad syntax in an include is a warning, unless the include is a
//!   manifest file, which always fails the load
//!
//! The entry file itself must exist and must parse.

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

use oxttl::TurtleParser;
use patchbot_fs::{BundleFile, canonicalize, file_iri, io, local_path};

use crate::term::{Term, Triple};
use crate::vocab::rdfs;
use crate::{Error, Result, TripleStore};

/// Builds one [`TripleStore`] from a description file tree.
#[derive(Debug, Default)]
pub struct GraphLoader {
    store: TripleStore,
    parsed: HashSet<PathBuf>,
}

impl GraphLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `entry` and everything it includes.
    pub fn load(mut self, entry: &Path) -> Result<TripleStore> {
        if !entry.is_file() {
            return Err(Error::ManifestNotFound {
                path: entry.to_path_buf(),
            });
        }
        let entry = canonicalize(entry)?;

        let mut pending: VecDeque<String> = self.parse_file(&entry)?.into();

        while let Some(reference) = pending.pop_front() {
            let Some(path) = local_path(&reference) else {
                tracing::debug!(reference = %reference, "Skipping non-local include");
                continue;
            };

            if !path.exists() {
                tracing::warn!("File not found {}", path.display());
                continue;
            }

            let path = match canonicalize(&path) {
                Ok(path) => path,
                Err(e) => {
                    tracing::warn!("Cannot resolve {}: {}", path.display(), e);
                    continue;
                }
            };

            if self.parsed.contains(&path) {
                continue;
            }

            match self.parse_file(&path) {
                Ok(references) => pending.extend(references),
                Err(e @ Error::BadSyntax { .. }) if BundleFile::Manifest.matches(&path) => {
                    return Err(e);
                }
                Err(Error::BadSyntax { message, .. }) => {
                    tracing::warn!("Bad syntax {} (ignored): {}", path.display(), message);
                }
                Err(e) => {
                    tracing::warn!("Cannot read {} (ignored): {}", path.display(), e);
                }
            }
        }

        tracing::debug!(
            files = self.parsed.len(),
            triples = self.store.len(),
            "Loaded description graph"
        );

        Ok(self.store)
    }

    /// Parse one file into the store and return the includes it declares.
    ///
    /// A file that fails to parse contributes no triples.
    fn parse_file(&mut self, path: &Path) -> Result<Vec<String>> {
        self.parsed.insert(path.to_path_buf());

        let content = io::read_bytes(path)?;
        let base = file_iri(path)?;
        let parser = TurtleParser::new()
            .with_base_iri(base.as_str())
            .map_err(|e| Error::InvalidBaseIri {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let mut scratch = Vec::new();
        for result in parser.for_reader(content.as_slice()) {
            let triple = result.map_err(|e| Error::BadSyntax {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            if let Some(triple) = Triple::from_oxrdf(triple) {
                scratch.push(triple);
            }
        }

        let references = scratch
            .iter()
            .filter(|triple| triple.predicate == rdfs::SEE_ALSO)
            .filter(|triple| matches!(triple.object, Term::Iri(_) | Term::Literal(_)))
            .map(|triple| triple.object.value().to_string())
            .collect();

        let added = self.store.extend(scratch);
        tracing::debug!(path = %path.display(), triples = added, "Parsed description file");

        Ok(references)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const PREFIXES: &str = "@prefix lv2: <http://lv2plug.in/ns/lv2core#> .\n\
                            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n";

    #[test]
    fn test_missing_entry_is_fatal() {
        let temp = TempDir::new().unwrap();
        let err = GraphLoader::new()
            .load(&temp.path().join("manifest.ttl"))
            .unwrap_err();
        assert!(matches!(err, Error::ManifestNotFound { .. }));
    }

    #[test]
    fn test_bad_entry_is_fatal() {
        let temp = TempDir::new().unwrap();
        let entry = temp.path().join("manifest.ttl");
        fs::write(&entry, "this is not turtle").unwrap();

        let err = GraphLoader::new().load(&entry).unwrap_err();
        assert!(matches!(err, Error::BadSyntax { .. }));
    }

    #[test]
    fn test_relative_include_resolves_next_to_file() {
        let temp = TempDir::new().unwrap();
        let entry = temp.path().join("manifest.ttl");
        fs::write(
            &entry,
            format!("{PREFIXES}<urn:p> a lv2:Plugin ; rdfs:seeAlso <p.ttl> .\n"),
        )
        .unwrap();
        fs::write(
            temp.path().join("p.ttl"),
            format!("{PREFIXES}<urn:p> rdfs:comment \"hi\" .\n"),
        )
        .unwrap();

        let store = GraphLoader::new().load(&entry).unwrap();

        assert_eq!(store.len(), 3);
    }
}

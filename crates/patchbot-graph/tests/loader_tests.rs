//! Include resolution behaviour of the graph loader

use std::fs;
use std::path::{Path, PathBuf};

use patchbot_graph::vocab::{doap, rdfs};
use patchbot_graph::{Error, FieldResolver, GraphLoader, Pattern, Term};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

const PREFIXES: &str = "@prefix lv2: <http://lv2plug.in/ns/lv2core#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix doap: <http://usefulinc.com/ns/doap#> .
";

fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, format!("{PREFIXES}{body}")).unwrap();
    path
}

fn name_of(store: &patchbot_graph::TripleStore, subject: &str) -> Option<String> {
    let subject = Term::iri(subject);
    FieldResolver::new(store).field(Pattern::One(&subject), Pattern::One(&doap::NAME))
}

#[test]
fn diamond_includes_are_parsed_once() {
    let temp = TempDir::new().unwrap();
    let entry = write(
        temp.path(),
        "manifest.ttl",
        "<urn:p> a lv2:Plugin ; rdfs:seeAlso <left.ttl>, <right.ttl> .\n",
    );
    write(temp.path(), "left.ttl", "<urn:p> rdfs:seeAlso <shared.ttl> .\n");
    write(temp.path(), "right.ttl", "<urn:p> rdfs:seeAlso <shared.ttl> .\n");
    write(temp.path(), "shared.ttl", "<urn:p> doap:name \"Shared\" .\n");

    let store = GraphLoader::new().load(&entry).unwrap();

    assert_eq!(name_of(&store, "urn:p").as_deref(), Some("Shared"));
    let names = store
        .triples(Pattern::Any, Pattern::One(&doap::NAME), Pattern::Any)
        .count();
    assert_eq!(names, 1);
}

#[test]
fn include_cycles_terminate() {
    let temp = TempDir::new().unwrap();
    let entry = write(
        temp.path(),
        "manifest.ttl",
        "<urn:p> a lv2:Plugin ; rdfs:seeAlso <a.ttl> .\n",
    );
    write(temp.path(), "a.ttl", "<urn:p> rdfs:seeAlso <b.ttl> .\n");
    write(
        temp.path(),
        "b.ttl",
        "<urn:p> rdfs:seeAlso <a.ttl>, <manifest.ttl> ; doap:name \"Cycle\" .\n",
    );

    let store = GraphLoader::new().load(&entry).unwrap();

    assert_eq!(name_of(&store, "urn:p").as_deref(), Some("Cycle"));
}

#[test]
fn missing_include_is_skipped() {
    let temp = TempDir::new().unwrap();
    let entry = write(
        temp.path(),
        "manifest.ttl",
        "<urn:p> a lv2:Plugin ; doap:name \"P\" ; rdfs:seeAlso <gone.ttl> .\n",
    );

    let store = GraphLoader::new().load(&entry).unwrap();

    assert_eq!(name_of(&store, "urn:p").as_deref(), Some("P"));
}

#[test]
fn remote_include_is_skipped() {
    let temp = TempDir::new().unwrap();
    let entry = write(
        temp.path(),
        "manifest.ttl",
        "<urn:p> a lv2:Plugin ; rdfs:seeAlso <http://lv2plug.in/ns/lv2core> .\n",
    );

    let store = GraphLoader::new().load(&entry).unwrap();

    assert_eq!(store.len(), 2);
}

#[test]
fn bad_include_contributes_nothing() {
    let temp = TempDir::new().unwrap();
    let entry = write(
        temp.path(),
        "manifest.ttl",
        "<urn:p> a lv2:Plugin ; rdfs:seeAlso <broken.ttl>, <good.ttl> .\n",
    );
    write(
        temp.path(),
        "broken.ttl",
        "<urn:p> doap:name \"Broken\" .\n<urn:p> doap:license ??? .\n",
    );
    write(temp.path(), "good.ttl", "<urn:p> doap:label \"Good\" .\n");

    let store = GraphLoader::new().load(&entry).unwrap();

    assert_eq!(name_of(&store, "urn:p"), None);
    let labels = store
        .triples(Pattern::Any, Pattern::One(&doap::LABEL), Pattern::Any)
        .count();
    assert_eq!(labels, 1);
}

#[test]
fn bad_included_manifest_is_fatal() {
    let temp = TempDir::new().unwrap();
    let entry = write(
        temp.path(),
        "manifest.ttl",
        "<urn:p> a lv2:Plugin ; rdfs:seeAlso <nested/manifest.ttl> .\n",
    );
    write(temp.path(), "nested/manifest.ttl", "<urn:p> doap:name ??? .\n");

    let err = GraphLoader::new().load(&entry).unwrap_err();

    assert!(matches!(err, Error::BadSyntax { .. }), "got: {err}");
}

#[rstest]
#[case("<manifest.ttl>")]
#[case("<./manifest.ttl>")]
fn entry_referencing_itself_is_not_reparsed(#[case] include: &str) {
    let temp = TempDir::new().unwrap();
    let entry = write(
        temp.path(),
        "manifest.ttl",
        &format!("<urn:p> a lv2:Plugin ; doap:name \"P\" ; rdfs:seeAlso {include} .\n"),
    );

    let store = GraphLoader::new().load(&entry).unwrap();

    assert_eq!(store.len(), 3);
}

#[test]
fn see_also_triples_stay_in_the_store() {
    let temp = TempDir::new().unwrap();
    let entry = write(
        temp.path(),
        "manifest.ttl",
        "<urn:p> a lv2:Plugin ; rdfs:seeAlso <p.ttl> .\n",
    );
    write(temp.path(), "p.ttl", "<urn:p> doap:name \"P\" .\n");

    let store = GraphLoader::new().load(&entry).unwrap();

    let includes = store
        .triples(Pattern::Any, Pattern::One(&rdfs::SEE_ALSO), Pattern::Any)
        .count();
    assert_eq!(includes, 1);
}

#[test]
fn loading_twice_yields_identical_stores() {
    let temp = TempDir::new().unwrap();
    let entry = write(
        temp.path(),
        "manifest.ttl",
        "<urn:p> a lv2:Plugin ; rdfs:seeAlso <p.ttl> .\n",
    );
    write(temp.path(), "p.ttl", "<urn:p> doap:name \"P\" ; doap:label \"Pee\" .\n");

    let first = GraphLoader::new().load(&entry).unwrap();
    let second = GraphLoader::new().load(&entry).unwrap();

    let first: Vec<_> = first.iter().cloned().collect();
    let second: Vec<_> = second.iter().cloned().collect();
    assert_eq!(first, second);
}

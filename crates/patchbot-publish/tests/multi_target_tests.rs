//! Cross-target validation and dist output

use std::collections::BTreeMap;

use patchbot_meta::{LookupTable, OverrideTable, PackageOverrides};
use patchbot_publish::{
    Error, MultiTargetPackage, PublishContext, PublishRecord, TargetInfo, ValidationState,
    discover_packages, into_packages, prepare,
};
use patchbot_test_utils::{PackageFixture, PluginFixture, TargetTree};
use pretty_assertions::assert_eq;
use serde_json::Value;

const TARGETS: [&str; 2] = ["rpi-aarch64", "x86_64"];

fn target_infos() -> Vec<TargetInfo> {
    vec![TargetInfo::new(TARGETS[0], 8280), TargetInfo::new(TARGETS[1], 8281)]
}

fn reverb() -> PackageFixture {
    PackageFixture::new("reverb").plugin(
        PluginFixture::new("reverb")
            .comment("A big room.")
            .plugin_type("lv2:ReverbPlugin")
            .version(2, 4),
    )
}

fn context() -> PublishContext {
    let table = |name: &str, entries: &[(&str, &str)]| {
        LookupTable::new(
            name,
            entries
                .iter()
                .map(|(key, alias)| (key.to_string(), vec![alias.to_string()]))
                .collect::<BTreeMap<_, _>>(),
        )
    };
    PublishContext {
        platform_id: 8046,
        licenses: table("licenses.json", &[("7", "http://opensource.org/licenses/isc")]),
        categories: table("categories.json", &[("1", "Reverb")]),
        overrides: OverrideTable::new(),
        default_tags: vec!["lv2-plugin".to_string()],
    }
}

fn single_package(tree: &TargetTree) -> MultiTargetPackage {
    let index = discover_packages(&tree.plugins_dir(), &target_infos()).unwrap();
    let mut packages = into_packages(index).unwrap();
    assert_eq!(packages.len(), 1);
    packages.remove(0)
}

#[test]
fn identical_targets_validate() {
    let tree = TargetTree::new();
    tree.add_all(&TARGETS, &reverb());
    let mut package = single_package(&tree);

    package.validate().unwrap();

    assert!(package.is_valid());
    assert_eq!(package.targets().count(), 2);
    let record = package.publish_record(&context()).unwrap();
    assert_eq!(
        record,
        PublishRecord {
            uids: vec!["urn:patchbot:test:reverb".into()],
            state: 151,
            platform: 8046,
            categories: vec![1],
            title: "Reverb".into(),
            content: "A big room.\n\nCredit: Jane Doe".into(),
            tags: vec!["reverb".into(), "lv2-plugin".into(), "modgui".into()],
            revision: "2.4".into(),
            license: 7,
            source_code_url: None,
            donate_url: None,
            artwork: None,
        }
    );
}

#[test]
fn extra_file_fails_the_file_check() {
    let tree = TargetTree::new();
    tree.add(TARGETS[0], &reverb());
    tree.add(TARGETS[1], &reverb().file("extra.txt", "surprise"));
    let mut package = single_package(&tree);

    let err = package.validate().unwrap_err();

    match err {
        Error::FileSetMismatch { difference, .. } => assert_eq!(difference, ["extra.txt"]),
        other => panic!("expected file set mismatch, got {other}"),
    }
    assert!(matches!(package.state(), ValidationState::Invalid(_)));
}

#[test]
fn differing_license_fails_the_data_check() {
    let tree = TargetTree::new();
    tree.add(TARGETS[0], &reverb());
    tree.add(
        TARGETS[1],
        &PackageFixture::new("reverb").plugin(
            PluginFixture::new("reverb")
                .comment("A big room.")
                .plugin_type("lv2:ReverbPlugin")
                .version(2, 4)
                .license_text("MIT"),
        ),
    );
    let mut package = single_package(&tree);

    package.check_files().unwrap();
    package.parse_targets().unwrap();
    let err = package.check_data().unwrap_err();

    match err {
        Error::DataMismatch { base, other, .. } => {
            assert_eq!(base, TARGETS[0]);
            assert_eq!(other, TARGETS[1]);
        }
        other => panic!("expected data mismatch, got {other}"),
    }
}

#[test]
fn one_broken_target_fails_the_package() {
    let tree = TargetTree::new();
    tree.add(TARGETS[0], &reverb());
    tree.add(
        TARGETS[1],
        &PackageFixture::new("reverb").plugin(PluginFixture::new("reverb").no_name()),
    );
    let mut package = single_package(&tree);

    let err = package.validate().unwrap_err();
    assert!(matches!(err, Error::Meta(_)), "got {err}");
    assert!(err.is_package_failure());

    let again = package.validate().unwrap_err();
    assert!(matches!(again, Error::Invalid { .. }), "got {again}");
}

#[test]
fn publish_record_requires_validation() {
    let tree = TargetTree::new();
    tree.add_all(&TARGETS, &reverb());
    let package = single_package(&tree);

    let err = package.publish_record(&context()).unwrap_err();

    assert!(matches!(
        err,
        Error::OutOfOrder {
            expected: ValidationState::Valid,
            ..
        }
    ));
}

#[test]
fn overrides_flow_into_the_record() {
    let tree = TargetTree::new();
    tree.add_all(&TARGETS, &reverb());
    let mut package = single_package(&tree);
    package.validate().unwrap();

    let mut context = context();
    context.overrides.insert(
        "reverb".to_string(),
        PackageOverrides {
            donate_url: Some("https://example.com/donate".into()),
            tags: Some(vec!["Space".into()]),
            ..Default::default()
        },
    );
    let record = package.publish_record(&context).unwrap();

    assert_eq!(record.donate_url.as_deref(), Some("https://example.com/donate"));
    assert_eq!(record.source_code_url, None);
    assert_eq!(record.tags, ["space", "lv2-plugin", "modgui"]);
}

#[test]
fn prepare_writes_dist_files() {
    let tree = TargetTree::new();
    tree.add_all(&TARGETS, &reverb());
    let mut package = single_package(&tree);
    package.validate().unwrap();
    let dist = tree.root().join("dist");

    let prepared = prepare(&package, &context(), &dist).unwrap();

    assert_eq!(prepared.dir, dist.join("reverb"));
    assert!(prepared.artwork.is_file());

    let debug: Value =
        serde_json::from_str(&std::fs::read_to_string(&prepared.debug_json).unwrap()).unwrap();
    let slugs: Vec<_> = debug.as_object().unwrap().keys().cloned().collect();
    assert_eq!(slugs, TARGETS);

    let payload: Value =
        serde_json::from_str(&std::fs::read_to_string(&prepared.payload).unwrap()).unwrap();
    assert_eq!(payload["title"], "Reverb");
    assert_eq!(payload["license"], 7);
    assert_eq!(payload["artwork"], prepared.artwork.display().to_string());
    assert!(payload.get("donate_url").is_none());
}

#[test]
fn missing_target_folder_is_skipped() {
    let tree = TargetTree::new();
    tree.add(TARGETS[0], &reverb());

    let index = discover_packages(&tree.plugins_dir(), &target_infos()).unwrap();

    assert_eq!(index["reverb"].len(), 1);
    assert_eq!(index["reverb"][0].slug, TARGETS[0]);
}

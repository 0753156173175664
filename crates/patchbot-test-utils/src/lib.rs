//! Shared test fixtures for the patchbot workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`plugin`]: [`PluginFixture`] renders one plugin description
//! - [`package`]: [`PackageFixture`] writes a package folder and
//!   [`TargetTree`] lays packages out per build target

pub mod package;
pub mod plugin;

pub use package::{PackageFixture, TargetTree};
pub use plugin::PluginFixture;

/// Prefix block shared by every generated description file.
pub const PREFIXES: &str = "\
@prefix doap: <http://usefulinc.com/ns/doap#> .
@prefix foaf: <http://xmlns.com/foaf/0.1/> .
@prefix lv2: <http://lv2plug.in/ns/lv2core#> .
@prefix mod: <http://moddevices.com/ns/mod#> .
@prefix modgui: <http://moddevices.com/ns/modgui#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
";

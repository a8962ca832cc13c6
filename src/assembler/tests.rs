//! Tests for classpath and isolation assembly

#![allow(clippy::expect_used)]

use url::Url;

use super::assemble;
use crate::descriptor::{RuntimeVersion, UnitDescriptor};
use crate::domain::{ExportSurface, ResolvedDependency};
use crate::error::UnitError;
use crate::test_fixtures::{library, location, plugin};

fn classes() -> Url {
    Url::parse("file:///units/app/classes/").expect("url")
}

fn shared(artifact: &str, packages: &[&str]) -> ResolvedDependency {
    let mut dependency = library(artifact);
    dependency.spec.shared = true;
    dependency.with_surface(ExportSurface::new(packages.iter().copied(), Vec::<String>::new()))
}

fn descriptor() -> UnitDescriptor {
    UnitDescriptor::new(RuntimeVersion::new(4, 0, 0))
}

fn artifacts(urls: &[Url]) -> Vec<String> {
    urls.iter()
        .map(|url| {
            url.path_segments()
                .and_then(|segments| segments.rev().find(|s| !s.is_empty()).map(str::to_string))
                .unwrap_or_default()
        })
        .collect()
}

#[test]
fn test_no_dependencies_only_own_classes() {
    let model = assemble(&descriptor(), classes(), &[]).expect("assemble");

    assert_eq!(model.urls(), &[classes()]);
    assert!(model.dependencies().is_empty());
    assert!(model.exported_packages().is_empty());
    assert!(model.exported_resources().is_empty());
}

#[test]
fn test_single_compile_dependency() {
    let model = assemble(&descriptor(), classes(), &[library("commons")]).expect("assemble");

    assert_eq!(model.urls().len(), 2);
    assert_eq!(model.urls()[0], classes());
    assert_eq!(model.urls()[1], location("commons"));
    assert_eq!(model.dependencies().len(), 1);
    assert!(model.exported_packages().is_empty());
    assert!(model.exported_resources().is_empty());
}

#[test]
fn test_single_plugin_dependency_is_isolated() {
    let model = assemble(&descriptor(), classes(), &[plugin("sockets")]).expect("assemble");

    assert_eq!(model.urls(), &[classes()]);
    assert_eq!(model.dependencies().len(), 1);
    let bundle = model.dependencies().first().expect("one bundle");
    assert_eq!(bundle.coordinate.artifact_id, "sockets");
    assert!(!model.contains_url(&bundle.bundle_uri));
    assert!(model.exported_packages().is_empty());
}

#[test]
fn test_two_plugins_sharing_a_library() {
    let http = plugin("http").with_dependency(library("x"));
    let sockets = plugin("sockets").with_dependency(library("x"));

    let model = assemble(&descriptor(), classes(), &[http, sockets]).expect("assemble");

    assert_eq!(model.urls(), &[classes()]);
    assert_eq!(model.dependencies().len(), 2);
    assert!(!model.contains_url(&location("x")));
    assert!(model.exported_packages().is_empty());
    assert!(model.exported_resources().is_empty());
}

#[test]
fn test_shared_library_exports_packages() {
    let model =
        assemble(&descriptor(), classes(), &[shared("shared", &["org.foo"])]).expect("assemble");

    assert_eq!(model.exported_packages().len(), 1);
    assert!(model.exported_packages().contains("org.foo"));
    assert!(model.contains_url(&location("shared")));
}

#[test]
fn test_shared_library_exports_resources() {
    let mut dependency = library("shared");
    dependency.spec.shared = true;
    let dependency = dependency.with_surface(ExportSurface::new(
        ["org.foo"],
        ["META-INF/MANIFEST.MF", "README.txt"],
    ));

    let model = assemble(&descriptor(), classes(), &[dependency]).expect("assemble");
    assert!(model.exported_resources().contains("README.txt"));
    assert!(model.exported_resources().contains("META-INF/MANIFEST.MF"));
}

#[test]
fn test_non_shared_library_exports_nothing() {
    let dependency =
        library("runtime").with_surface(ExportSurface::new(["org.foo"], ["README.txt"]));

    let model = assemble(&descriptor(), classes(), &[dependency]).expect("assemble");
    assert!(model.exported_packages().is_empty());
    assert!(model.exported_resources().is_empty());
    assert_eq!(model.urls().len(), 2);
}

#[test]
fn test_descriptor_exports_always_included() {
    let mut unit = descriptor();
    unit.exported_packages.insert("org.app.api".to_string());
    unit.exported_resources.insert("app.properties".to_string());

    let model = assemble(&unit, classes(), &[plugin("http")]).expect("assemble");
    assert!(model.exported_packages().contains("org.app.api"));
    assert!(model.exported_resources().contains("app.properties"));
}

#[test]
fn test_transitive_closure_depth_first_in_declared_order() {
    let a = library("a")
        .with_dependency(library("a1").with_dependency(library("a11")))
        .with_dependency(library("a2"));
    let b = library("b").with_dependency(library("b1"));

    let model = assemble(&descriptor(), classes(), &[a, b]).expect("assemble");

    assert_eq!(
        artifacts(model.urls()),
        vec![
            "classes",
            "a-1.0.jar",
            "a1-1.0.jar",
            "a11-1.0.jar",
            "a2-1.0.jar",
            "b-1.0.jar",
            "b1-1.0.jar"
        ]
    );
    assert_eq!(model.dependencies().len(), 2);
}

#[test]
fn test_shared_transitive_location_appears_once() {
    let a = library("a").with_dependency(library("common"));
    let b = library("b").with_dependency(library("common"));
    let c = library("common");

    let model = assemble(&descriptor(), classes(), &[a, b, c]).expect("assemble");

    let common = location("common");
    assert_eq!(model.urls().iter().filter(|url| **url == common).count(), 1);
    assert_eq!(
        artifacts(model.urls()),
        vec!["classes", "a-1.0.jar", "common-1.0.jar", "b-1.0.jar"]
    );
    assert_eq!(model.dependencies().len(), 3);
}

#[test]
fn test_transitive_plugin_isolated_from_that_point_down() {
    let lib = library("lib")
        .with_dependency(plugin("nested").with_dependency(library("nested-private")))
        .with_dependency(library("lib-helper"));

    let model = assemble(&descriptor(), classes(), &[lib]).expect("assemble");

    assert_eq!(
        artifacts(model.urls()),
        vec!["classes", "lib-1.0.jar", "lib-helper-1.0.jar"]
    );
}

#[test]
fn test_isolated_wins_over_non_plugin_path() {
    // "x" is reachable through the plugin and directly; isolation wins
    // regardless of declaration order.
    let direct_first = [library("x"), plugin("http").with_dependency(library("x"))];
    let plugin_first = [plugin("http").with_dependency(library("x")), library("x")];

    for forest in [&direct_first[..], &plugin_first[..]] {
        let model = assemble(&descriptor(), classes(), forest).expect("assemble");
        assert!(!model.contains_url(&location("x")));
        assert_eq!(model.urls(), &[classes()]);
        assert_eq!(model.dependencies().len(), 2);
    }
}

#[test]
fn test_shared_dependency_inside_isolated_closure_not_exported() {
    let shared_lib = shared("x", &["org.x"]);
    let http = plugin("http").with_dependency(library("x"));

    let model = assemble(&descriptor(), classes(), &[shared_lib, http]).expect("assemble");
    assert!(model.exported_packages().is_empty());
    assert!(!model.contains_url(&location("x")));
}

#[test]
fn test_bundle_dependencies_only_for_direct_dependencies() {
    let a = library("a").with_dependency(library("a1"));
    let p = plugin("p").with_dependency(library("p1"));

    let model = assemble(&descriptor(), classes(), &[a, p]).expect("assemble");

    let names: Vec<&str> = model
        .dependencies()
        .iter()
        .map(|bundle| bundle.coordinate.artifact_id.as_str())
        .collect();
    assert_eq!(names, vec!["a", "p"]);
}

#[test]
fn test_own_classes_first_even_if_dependency_shares_location() {
    let mut same = library("same");
    same.location = classes();

    let model = assemble(&descriptor(), classes(), &[same]).expect("assemble");
    assert_eq!(model.urls(), &[classes()]);
}

#[test]
fn test_invalid_shape_rejected_before_assembly() {
    let mut bad = plugin("http");
    bad.spec.shared = true;

    let err = assemble(&descriptor(), classes(), &[library("a"), bad]).unwrap_err();
    assert!(matches!(err, UnitError::InvalidDependencyShape { .. }));
}

#[test]
fn test_idempotent() {
    let forest = [
        library("a").with_dependency(library("common")),
        plugin("p").with_dependency(library("hidden")),
        shared("s", &["org.s", "org.s.api"]),
        library("b").with_dependency(library("common")),
    ];

    let first = assemble(&descriptor(), classes(), &forest).expect("assemble");
    let second = assemble(&descriptor(), classes(), &forest).expect("assemble");

    assert_eq!(first, second);
    assert_eq!(first.urls(), second.urls());
}

use std::fs;

use inam_ui::deps::{check_dependencies, DependencyReport, Severity};
use tempfile::TempDir;

#[test]
fn test_no_manifest() {
    let temp_dir = TempDir::new().unwrap();

    match check_dependencies(temp_dir.path()) {
        DependencyReport::NoManifest => {}
        other => panic!("Expected NoManifest, got {:?}", other),
    }
}

#[test]
fn test_all_dependencies_present() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("package.json"),
        r#"{
            "dependencies": { "react": "^19.0.0" },
            "devDependencies": { "tailwindcss": "^4.0.0" }
        }"#,
    )
    .unwrap();

    match check_dependencies(temp_dir.path()) {
        DependencyReport::AllPresent => {}
        other => panic!("Expected AllPresent, got {:?}", other),
    }
}

#[test]
fn test_missing_react_is_required() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("package.json"),
        r#"{ "dependencies": { "tailwindcss": "^4.0.0" } }"#,
    )
    .unwrap();

    match check_dependencies(temp_dir.path()) {
        DependencyReport::Missing(missing) => {
            assert_eq!(missing.len(), 1);
            assert_eq!(missing[0].package, "react");
            assert_eq!(missing[0].severity, Severity::Required);
        }
        other => panic!("Expected Missing, got {:?}", other),
    }
}

#[test]
fn test_peer_dependencies_count() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("package.json"),
        r#"{
            "peerDependencies": { "react": ">=18" },
            "dependencies": { "tailwindcss": "^4.0.0" }
        }"#,
    )
    .unwrap();

    match check_dependencies(temp_dir.path()) {
        DependencyReport::AllPresent => {}
        other => panic!("Expected AllPresent, got {:?}", other),
    }
}

#[test]
fn test_unparsable_manifest_treated_as_missing_manifest() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("package.json"), "not json").unwrap();

    match check_dependencies(temp_dir.path()) {
        DependencyReport::NoManifest => {}
        other => panic!("Expected NoManifest, got {:?}", other),
    }
}

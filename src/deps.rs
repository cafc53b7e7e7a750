//! Project dependency checks.
//! Before generating, the CLI inspects the target project's `package.json`
//! and warns about missing packages the templates rely on. Checks only ever
//! warn; generation always proceeds.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// How much a missing dependency matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Components will not function without it
    Required,
    /// Components degrade without it
    Recommended,
}

/// One dependency the templates rely on.
#[derive(Debug, Clone)]
pub struct RequiredDependency {
    /// Name of the package in package.json
    pub package: &'static str,
    /// Human-readable name for messages
    pub display_name: &'static str,
    /// Command that installs it
    pub install_cmd: &'static str,
    pub severity: Severity,
}

/// Packages the shipped templates rely on.
pub fn required_dependencies() -> Vec<RequiredDependency> {
    vec![
        RequiredDependency {
            package: "react",
            display_name: "React",
            install_cmd: "npm install react react-dom",
            severity: Severity::Required,
        },
        RequiredDependency {
            package: "tailwindcss",
            display_name: "Tailwind CSS",
            install_cmd: "npm install -D tailwindcss@latest",
            severity: Severity::Recommended,
        },
    ]
}

/// The slice of package.json the checks care about.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: HashMap<String, String>,
    #[serde(default)]
    pub dev_dependencies: HashMap<String, String>,
    #[serde(default)]
    pub peer_dependencies: HashMap<String, String>,
}

impl PackageManifest {
    /// True when the package appears in any dependency section.
    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name)
            || self.dev_dependencies.contains_key(name)
            || self.peer_dependencies.contains_key(name)
    }
}

/// Outcome of a dependency check against a project directory.
#[derive(Debug)]
pub enum DependencyReport {
    /// No package.json was found; nothing to check
    NoManifest,
    /// Dependencies the manifest does not declare
    Missing(Vec<RequiredDependency>),
    /// Everything the templates rely on is declared
    AllPresent,
}

/// Reads `dir/package.json`, tolerating absence and invalid JSON.
fn read_manifest(dir: &Path) -> Option<PackageManifest> {
    let path = dir.join("package.json");
    let content = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Checks the project in `dir` for the packages the templates rely on.
pub fn check_dependencies(dir: &Path) -> DependencyReport {
    let Some(manifest) = read_manifest(dir) else {
        return DependencyReport::NoManifest;
    };

    let missing: Vec<RequiredDependency> = required_dependencies()
        .into_iter()
        .filter(|dep| !manifest.has_dependency(dep.package))
        .collect();

    if missing.is_empty() {
        DependencyReport::AllPresent
    } else {
        DependencyReport::Missing(missing)
    }
}

/// Prints warnings for a dependency report. Never aborts generation.
pub fn report_dependencies(report: &DependencyReport) {
    match report {
        DependencyReport::AllPresent => {}
        DependencyReport::NoManifest => {
            log::warn!(
                "No package.json found in the current directory; \
                 components will still be generated, but make sure the \
                 required dependencies are installed"
            );
        }
        DependencyReport::Missing(missing) => {
            for dep in missing {
                let kind = match dep.severity {
                    Severity::Required => "required",
                    Severity::Recommended => "recommended",
                };
                log::warn!(
                    "Missing {} dependency {} (install with: {})",
                    kind,
                    dep.display_name,
                    dep.install_cmd
                );
            }
            log::info!("Generating component anyway");
        }
    }
}

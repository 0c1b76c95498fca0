//! The build manifest (`cppc.toml`).
//!
//! A project directory carries one manifest describing one build target.
//!
//! ```toml
//! [project]
//! name = "app"
//!
//! [target]
//! root = "./src/main.cpp"
//! std = "c++23"
//! diagnostics = ["debug-info", "wall", "wextra", "pedantic"]
//! optimize = "debug"
//! platform = "linux"
//! includes = ["include"]
//! sources = ["./src/util.cpp"]
//! lib_dirs = ["./lib"]
//! libs = ["pthread"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::host::HostEnvironment;
use crate::options::{BuildInputs, Diagnostic, Optimize, Options, Platform, Standard};

/// File name the manifest is loaded from.
pub const MANIFEST_FILE: &str = "cppc.toml";

/// Root manifest document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildManifest {
    /// Project metadata.
    pub project: ProjectConfig,

    /// The single build target this manifest describes.
    pub target: TargetConfig,
}

/// Project metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name; doubles as the output binary name.
    pub name: String,
}

/// Target configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Entry translation unit.
    pub root: PathBuf,

    /// C++ standard (e.g. "c++17", "c++20", "c++23").
    pub std: Standard,

    /// Diagnostic flags, applied in the order written.
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,

    /// Optimization profile.
    pub optimize: Optimize,

    /// Platform to build for; defaults to the host platform.
    #[serde(default)]
    pub platform: Option<Platform>,

    /// Include directories.
    #[serde(default)]
    pub includes: Vec<PathBuf>,

    /// Translation units compiled alongside `root`.
    #[serde(default)]
    pub sources: Vec<PathBuf>,

    /// Library search paths.
    #[serde(default)]
    pub lib_dirs: Vec<PathBuf>,

    /// Libraries to link against.
    #[serde(default)]
    pub libs: Vec<String>,
}

impl BuildManifest {
    /// Load a manifest from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let manifest: BuildManifest = toml::from_str(&content)?;
        Ok(manifest)
    }

    /// The Options value this manifest describes. A manifest that names no
    /// platform builds for the host.
    pub fn options(&self, host: &HostEnvironment) -> Options {
        Options {
            name: self.project.name.clone(),
            root_source_file: self.target.root.clone(),
            standard: self.target.std,
            diagnostics: self.target.diagnostics.clone(),
            optimize: self.target.optimize,
            target: self.target.platform.unwrap_or(host.platform),
        }
    }

    /// The auxiliary path and library lists.
    pub fn inputs(&self) -> BuildInputs {
        BuildInputs {
            include_dirs: self.target.includes.clone(),
            source_files: self.target.sources.clone(),
            lib_dirs: self.target.lib_dirs.clone(),
            libs: self.target.libs.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_manifest() {
        let toml = r#"
[project]
name = "app"

[target]
root = "./src/main.cpp"
std = "c++20"
diagnostics = ["debug-info", "wall", "wextra", "pedantic"]
optimize = "release"
platform = "windows"
includes = ["include"]
sources = ["./src/util.cpp"]
lib_dirs = ["./lib"]
libs = ["pthread"]
        "#;

        let manifest: BuildManifest = toml::from_str(toml).unwrap();

        assert_eq!(manifest.project.name, "app");
        assert_eq!(manifest.target.std, Standard::Cpp20);
        assert_eq!(manifest.target.diagnostics.len(), 4);
        assert_eq!(manifest.target.optimize, Optimize::Release);
        assert_eq!(manifest.target.platform, Some(Platform::Windows));
        assert_eq!(manifest.target.libs, vec!["pthread"]);
    }

    #[test]
    fn test_optional_fields_default() {
        let toml = r#"
[project]
name = "app"

[target]
root = "./src/main.cpp"
std = "c++23"
optimize = "debug"
        "#;

        let manifest: BuildManifest = toml::from_str(toml).unwrap();

        assert!(manifest.target.diagnostics.is_empty());
        assert_eq!(manifest.target.platform, None);
        assert!(manifest.target.includes.is_empty());
        assert!(manifest.target.sources.is_empty());
        assert!(manifest.target.lib_dirs.is_empty());
        assert!(manifest.target.libs.is_empty());

        // Platform falls back to the host's.
        let host = HostEnvironment::new(Platform::MacOS);
        assert_eq!(manifest.options(&host).target, Platform::MacOS);
    }

    #[test]
    fn test_unknown_standard_is_rejected() {
        let toml = r#"
[project]
name = "app"

[target]
root = "./src/main.cpp"
std = "c++98"
optimize = "debug"
        "#;

        assert!(toml::from_str::<BuildManifest>(toml).is_err());
    }

    #[test]
    fn test_missing_optimize_is_rejected() {
        let toml = r#"
[project]
name = "app"

[target]
root = "./src/main.cpp"
std = "c++23"
        "#;

        assert!(toml::from_str::<BuildManifest>(toml).is_err());
    }
}

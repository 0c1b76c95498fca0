//! The declarative description of one build target.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::error::{BuildError, Result};

/// Supported C++ language standards, oldest to newest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Standard {
    #[serde(rename = "c++11")]
    Cpp11,
    #[serde(rename = "c++14")]
    Cpp14,
    #[serde(rename = "c++17")]
    Cpp17,
    #[serde(rename = "c++20")]
    Cpp20,
    #[serde(rename = "c++23")]
    Cpp23,
}

impl Standard {
    /// The `-std=` flag selecting this standard.
    pub fn flag(self) -> &'static str {
        match self {
            Standard::Cpp11 => "-std=c++11",
            Standard::Cpp14 => "-std=c++14",
            Standard::Cpp17 => "-std=c++17",
            Standard::Cpp20 => "-std=c++20",
            Standard::Cpp23 => "-std=c++23",
        }
    }
}

/// Diagnostic flags controlling warning and debug-info verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Diagnostic {
    /// Emit debug information (`-g`).
    DebugInfo,
    /// Enable the common warning set (`-Wall`).
    Wall,
    /// Warnings beyond `-Wall` (`-Wextra`).
    Wextra,
    /// Strict ISO conformance warnings (`-pedantic`).
    Pedantic,
}

impl Diagnostic {
    pub fn flag(self) -> &'static str {
        match self {
            Diagnostic::DebugInfo => "-g",
            Diagnostic::Wall => "-Wall",
            Diagnostic::Wextra => "-Wextra",
            Diagnostic::Pedantic => "-pedantic",
        }
    }
}

/// Optimization profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Optimize {
    /// Optimize for size (`-Os`).
    Embedded,
    /// Optimize for speed (`-O3`).
    Release,
    /// No optimization (`-O0`).
    Debug,
}

impl Optimize {
    pub fn flag(self) -> &'static str {
        match self {
            Optimize::Embedded => "-Os",
            Optimize::Release => "-O3",
            Optimize::Debug => "-O0",
        }
    }
}

/// Operating systems a produced binary can run on. Also describes the
/// host performing the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    Windows,
    MacOS,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Linux => "linux",
            Platform::Windows => "windows",
            Platform::MacOS => "macos",
        };
        f.write_str(name)
    }
}

/// Everything that describes one build target.
#[derive(Debug, Clone)]
pub struct Options {
    /// Output binary name.
    pub name: String,
    /// Entry translation unit, possibly `./`-relative.
    pub root_source_file: PathBuf,
    /// C++ standard to compile against.
    pub standard: Standard,
    /// Applied in insertion order; duplicates are kept as given.
    pub diagnostics: Vec<Diagnostic>,
    /// Optimization profile, exactly one.
    pub optimize: Optimize,
    /// Platform the produced binary should run on.
    pub target: Platform,
}

impl Options {
    /// Reject options that cannot name an output or an entry file.
    ///
    /// Synthesis calls this before producing any artifact.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(BuildError::Validation("target name is empty".to_string()));
        }
        if self.root_source_file.as_os_str().is_empty() {
            return Err(BuildError::Validation(
                "root source file is empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Extra inputs a build session accumulates beyond the root source file.
///
/// Order is preserved; nothing is deduplicated and nothing is checked for
/// existence.
#[derive(Debug, Clone, Default)]
pub struct BuildInputs {
    /// Include directories (`-I`).
    pub include_dirs: Vec<PathBuf>,
    /// Translation units compiled alongside the root file.
    pub source_files: Vec<PathBuf>,
    /// Library search paths (`-L`).
    pub lib_dirs: Vec<PathBuf>,
    /// Libraries to link against (`-l`).
    pub libs: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_tokens() {
        assert_eq!(Standard::Cpp11.flag(), "-std=c++11");
        assert_eq!(Standard::Cpp23.flag(), "-std=c++23");
        assert_eq!(Diagnostic::DebugInfo.flag(), "-g");
        assert_eq!(Diagnostic::Pedantic.flag(), "-pedantic");
        assert_eq!(Optimize::Embedded.flag(), "-Os");
        assert_eq!(Optimize::Release.flag(), "-O3");
        assert_eq!(Optimize::Debug.flag(), "-O0");
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let options = Options {
            name: String::new(),
            root_source_file: PathBuf::from("./src/main.cpp"),
            standard: Standard::Cpp23,
            diagnostics: vec![],
            optimize: Optimize::Debug,
            target: Platform::Linux,
        };

        let err = options.validate().unwrap_err();
        assert!(matches!(err, BuildError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_empty_root() {
        let options = Options {
            name: "app".to_string(),
            root_source_file: PathBuf::new(),
            standard: Standard::Cpp23,
            diagnostics: vec![],
            optimize: Optimize::Debug,
            target: Platform::Linux,
        };

        assert!(options.validate().is_err());
    }
}

//! Host platform description and compiler selection.

use std::path::PathBuf;

use crate::error::{BuildError, Result};
use crate::options::Platform;

/// The environment a build runs on.
///
/// Constructed once at process start and passed into synthesis, so nothing
/// downstream reads ambient global state.
#[derive(Debug, Clone)]
pub struct HostEnvironment {
    /// Platform the tool itself is running on.
    pub platform: Platform,
    /// Native compiler executable for this platform.
    pub compiler: String,
    /// Compiler path as recorded in the compilation database.
    pub compiler_path: PathBuf,
}

impl HostEnvironment {
    /// Environment for a known platform with that platform's default
    /// compiler.
    pub fn new(platform: Platform) -> Self {
        let (compiler, compiler_path) = match platform {
            Platform::Linux => ("g++", "/usr/bin/g++"),
            Platform::MacOS => ("clang++", "/usr/bin/clang++"),
            // No conventional install location; rely on PATH lookup.
            Platform::Windows => ("g++", "g++"),
        };

        Self {
            platform,
            compiler: compiler.to_string(),
            compiler_path: PathBuf::from(compiler_path),
        }
    }

    /// Detect the platform this process was compiled for.
    pub fn detect() -> Self {
        if cfg!(target_os = "windows") {
            Self::new(Platform::Windows)
        } else if cfg!(target_os = "macos") {
            Self::new(Platform::MacOS)
        } else {
            Self::new(Platform::Linux)
        }
    }

    /// Pick the compiler executable for a build targeting `target`.
    ///
    /// Same-platform builds use the host's native compiler. The only
    /// supported cross pair is Linux -> Windows via mingw; every other
    /// pair has no known toolchain and is rejected before anything is
    /// executed.
    pub fn compiler_for_target(&self, target: Platform) -> Result<String> {
        if target == self.platform {
            return Ok(self.compiler.clone());
        }

        match (self.platform, target) {
            (Platform::Linux, Platform::Windows) => Ok("x86_64-w64-mingw32-g++".to_string()),
            (host, target) => Err(BuildError::UnsupportedTarget { host, target }),
        }
    }
}

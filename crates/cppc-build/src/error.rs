//! Error types for cppc-build.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

use crate::options::Platform;

/// Result type for cppc-build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors that can occur while synthesizing a build.
#[derive(Error, Diagnostic, Debug)]
pub enum BuildError {
    /// Failed to read the build manifest.
    #[error("Failed to read manifest: {0}")]
    ReadManifest(#[from] std::io::Error),

    /// Failed to parse the build manifest.
    #[error("Failed to parse manifest: {0}")]
    ParseManifest(#[from] toml::de::Error),

    /// Failed to serialize the compilation database.
    #[error("Failed to serialize compilation database: {0}")]
    SerializeDatabase(#[from] serde_json::Error),

    /// Failed to write the compilation database file.
    #[error("Failed to write {path}: {source}")]
    WriteDatabase {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Options validation error.
    #[error("Invalid build options: {0}")]
    Validation(String),

    /// No compiler exists for this host/target pair.
    #[error("no compiler available for building {target} binaries on a {host} host")]
    #[diagnostic(help("cross-compilation is only supported from a linux host targeting windows"))]
    UnsupportedTarget { host: Platform, target: Platform },
}

impl BuildError {
    /// Process exit code category for this error: 2 for configuration
    /// problems, 3 for I/O, 4 for an unsupported host/target pair.
    pub fn exit_code(&self) -> u8 {
        match self {
            BuildError::ReadManifest(_)
            | BuildError::ParseManifest(_)
            | BuildError::Validation(_) => 2,
            BuildError::SerializeDatabase(_) | BuildError::WriteDatabase { .. } => 3,
            BuildError::UnsupportedTarget { .. } => 4,
        }
    }
}

//! Error types for cppc-driver.

use miette::Diagnostic;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

use cppc_build::BuildError;

/// Errors raised while orchestrating a build session.
#[derive(Error, Diagnostic, Debug)]
pub enum DriverError {
    /// Synthesis or manifest error from the core crate.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Build(#[from] BuildError),

    /// Could not determine the working directory.
    #[error("Failed to determine the current working directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// `$HOME` is missing, so the shared include path cannot be computed.
    #[error("HOME is not set; cannot locate the shared include directory")]
    HomeNotSet,

    /// Project scaffolding I/O failure.
    #[error("Failed to write {path}: {source}")]
    Scaffold {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The shell collaborator could not start the child at all.
    #[error("Failed to execute `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// The compiler ran and exited unsuccessfully.
    #[error("compiler exited with {status}")]
    CompilerFailed { status: ExitStatus },

    /// The built binary ran and exited unsuccessfully.
    #[error("{name} exited with {status}")]
    TargetFailed { name: String, status: ExitStatus },
}

impl DriverError {
    /// Process exit code for this error. Child process failures propagate
    /// the child's own code where one exists.
    pub fn exit_code(&self) -> u8 {
        match self {
            DriverError::Build(e) => e.exit_code(),
            DriverError::CurrentDir(_) | DriverError::HomeNotSet => 2,
            DriverError::Scaffold { .. } | DriverError::Spawn { .. } => 3,
            DriverError::CompilerFailed { status } | DriverError::TargetFailed { status, .. } => {
                status
                    .code()
                    .and_then(|code| u8::try_from(code).ok())
                    .unwrap_or(1)
            }
        }
    }
}

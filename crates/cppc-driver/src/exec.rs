//! The shell-execution boundary.

use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::DriverError;

/// Execute `command` through the platform shell, blocking until it exits.
///
/// The child inherits this process's stdio, so compiler output and the
/// built binary's output land directly on the caller's streams. There is
/// no timeout and no cancellation.
pub fn run_shell(command: &str, cwd: &Path) -> Result<ExitStatus, DriverError> {
    let mut shell = if cfg!(windows) {
        let mut shell = Command::new("cmd");
        shell.arg("/C");
        shell
    } else {
        let mut shell = Command::new("sh");
        shell.arg("-c");
        shell
    };

    shell
        .arg(command)
        .current_dir(cwd)
        .status()
        .map_err(|source| DriverError::Spawn {
            command: command.to_string(),
            source,
        })
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_successful_command() {
        let dir = TempDir::new().unwrap();
        let status = run_shell("exit 0", dir.path()).unwrap();
        assert!(status.success());
    }

    #[test]
    fn test_exit_status_is_surfaced() {
        let dir = TempDir::new().unwrap();
        let status = run_shell("exit 3", dir.path()).unwrap();
        assert_eq!(status.code(), Some(3));
    }

    #[test]
    fn test_command_runs_in_given_directory() {
        let dir = TempDir::new().unwrap();
        run_shell("touch marker", dir.path()).unwrap();
        assert!(dir.path().join("marker").exists());
    }
}

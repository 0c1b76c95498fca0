//! Compilation-database rendering (`compile_commands.json`).
//!
//! One record per translation unit, in the argument-array form understood
//! by clangd and other standard consumers.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{BuildError, Result};
use crate::host::HostEnvironment;
use crate::options::{BuildInputs, Options};

/// File name of the database, written to the session's working directory.
pub const COMPILE_COMMANDS_FILE: &str = "compile_commands.json";

/// A single entry of compile_commands.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileCommand {
    /// Compiler argv for this translation unit.
    pub arguments: Vec<String>,

    /// Working directory the arguments are relative to.
    pub directory: PathBuf,

    /// Absolute path of the translation unit.
    pub file: PathBuf,

    /// Absolute path of the build's output binary.
    pub output: PathBuf,
}

/// Render one record per translation unit: the root source file first,
/// then one per extra source.
///
/// `cwd` and `home_config_include` are injected by the caller; nothing
/// here reads the environment. Only the root record carries the shared
/// `-I<home_config_include>` entry.
pub fn render_compilation_database(
    options: &Options,
    inputs: &BuildInputs,
    host: &HostEnvironment,
    cwd: &Path,
    home_config_include: &Path,
) -> Result<Vec<CompileCommand>> {
    options.validate()?;

    let mut records = Vec::with_capacity(1 + inputs.source_files.len());
    records.push(unit_record(
        options,
        inputs,
        host,
        cwd,
        &options.root_source_file,
        Some(home_config_include),
    ));
    for file in &inputs.source_files {
        records.push(unit_record(options, inputs, host, cwd, file, None));
    }

    Ok(records)
}

/// Serialize `records` to `path` as pretty-printed JSON.
pub fn write_compilation_database(path: &Path, records: &[CompileCommand]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json).map_err(|source| BuildError::WriteDatabase {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn unit_record(
    options: &Options,
    inputs: &BuildInputs,
    host: &HostEnvironment,
    cwd: &Path,
    source: &Path,
    home_config_include: Option<&Path>,
) -> CompileCommand {
    let mut arguments = vec![host.compiler_path.display().to_string(), "-c".to_string()];

    arguments.extend(options.diagnostics.iter().map(|d| d.flag().to_string()));
    arguments.push(options.optimize.flag().to_string());
    arguments.push(options.standard.flag().to_string());

    if let Some(dir) = home_config_include {
        arguments.push(format!("-I{}", dir.display()));
    }
    for dir in &inputs.include_dirs {
        arguments.push(format!("-I{}", dir.display()));
    }
    for dir in &inputs.lib_dirs {
        arguments.push(format!("-L{}", dir.display()));
    }

    arguments.push("-o".to_string());
    arguments.push(options.name.clone());
    arguments.push(source.display().to_string());

    CompileCommand {
        arguments,
        directory: cwd.to_path_buf(),
        file: cwd.join(strip_dot_prefix(source)),
        output: cwd.join(&options.name),
    }
}

/// Drop a leading `./` so the path can be joined onto an absolute base.
/// Paths without the prefix pass through untouched.
fn strip_dot_prefix(source: &Path) -> &Path {
    source.strip_prefix(".").unwrap_or(source)
}

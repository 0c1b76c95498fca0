//! Compiler command-line synthesis.
//!
//! The invocation is assembled as an ordered token list and only joined
//! into a single string at the shell boundary.

use crate::error::Result;
use crate::host::HostEnvironment;
use crate::options::{BuildInputs, Options, Platform};

/// Assemble the compiler invocation for `options` as an argument vector.
///
/// Token order: compiler, diagnostics, optimization, standard, include
/// directories, library search paths, extra sources, root source, `-o`,
/// output name, libraries. The root file is not deduplicated against the
/// extra sources; callers must not list it twice.
pub fn command_tokens(
    options: &Options,
    inputs: &BuildInputs,
    host: &HostEnvironment,
) -> Result<Vec<String>> {
    options.validate()?;

    let mut tokens = vec![host.compiler_for_target(options.target)?];

    tokens.extend(options.diagnostics.iter().map(|d| d.flag().to_string()));
    tokens.push(options.optimize.flag().to_string());
    tokens.push(options.standard.flag().to_string());

    for dir in &inputs.include_dirs {
        tokens.push(format!("-I{}", dir.display()));
    }
    for dir in &inputs.lib_dirs {
        tokens.push(format!("-L{}", dir.display()));
    }
    for file in &inputs.source_files {
        tokens.push(file.display().to_string());
    }

    tokens.push(options.root_source_file.display().to_string());
    tokens.push("-o".to_string());
    tokens.push(options.name.clone());

    for lib in &inputs.libs {
        tokens.push(format!("-l{}", lib));
    }

    // Windows binaries always link the runtime statically, whichever host
    // produced them.
    if options.target == Platform::Windows {
        tokens.push("-static-libgcc".to_string());
        tokens.push("-static-libstdc++".to_string());
    }

    Ok(tokens)
}

/// Render the invocation as a single shell command string.
pub fn render_command_line(
    options: &Options,
    inputs: &BuildInputs,
    host: &HostEnvironment,
) -> Result<String> {
    Ok(command_tokens(options, inputs, host)?.join(" "))
}

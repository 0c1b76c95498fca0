//! Compile-command synthesis for the `cppc` build tool.
//!
//! This crate is the tool's core: it turns a declarative description of a
//! single build target into
//! - a compiler command line for the selected toolchain, and
//! - a `compile_commands.json` document for editors and linters.
//!
//! # Example
//!
//! ```toml
//! # cppc.toml
//! [project]
//! name = "app"
//!
//! [target]
//! root = "./src/main.cpp"
//! std = "c++23"
//! diagnostics = ["debug-info", "wall"]
//! optimize = "debug"
//! ```

mod command;
mod compile_commands;
mod error;
mod host;
mod manifest;
mod options;

pub use command::{command_tokens, render_command_line};
pub use compile_commands::{
    render_compilation_database, write_compilation_database, CompileCommand,
    COMPILE_COMMANDS_FILE,
};
pub use error::{BuildError, Result};
pub use host::HostEnvironment;
pub use manifest::{BuildManifest, ProjectConfig, TargetConfig, MANIFEST_FILE};
pub use options::{BuildInputs, Diagnostic, Optimize, Options, Platform, Standard};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_to_command_line() {
        let toml = r#"
[project]
name = "app"

[target]
root = "./src/main.cpp"
std = "c++23"
diagnostics = ["debug-info", "wall"]
optimize = "debug"
platform = "linux"
        "#;

        let manifest: BuildManifest = toml::from_str(toml).expect("Failed to parse manifest");
        let host = HostEnvironment::new(Platform::Linux);
        let command =
            render_command_line(&manifest.options(&host), &manifest.inputs(), &host).unwrap();

        assert_eq!(command, "g++ -g -Wall -O0 -std=c++23 ./src/main.cpp -o app");
    }
}

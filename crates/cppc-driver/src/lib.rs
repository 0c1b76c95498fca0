//! Build-session orchestration for the `cppc` build tool.
//!
//! A [`Session`] owns the options value and the auxiliary include/source/
//! library lists for one build invocation and drives the synthesis crate:
//! write the compilation database, render the compiler command line, hand
//! it to the shell, optionally run the produced binary.

mod error;
mod exec;
mod scaffold;

pub use error::DriverError;
pub use exec::run_shell;
pub use scaffold::create_project;

use std::path::PathBuf;

use cppc_build::{
    render_command_line, render_compilation_database, write_compilation_database, BuildInputs,
    BuildManifest, CompileCommand, HostEnvironment, Optimize, Options, COMPILE_COMMANDS_FILE,
};

/// Values a session reads from the process environment, captured once and
/// injected everywhere else.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Working directory all relative paths resolve against.
    pub cwd: PathBuf,
    /// Shared include directory injected into every root-file record of
    /// the compilation database.
    pub home_config_include: PathBuf,
}

impl SessionContext {
    /// Capture the current directory and the `$HOME`-derived include path.
    pub fn from_env() -> Result<Self, DriverError> {
        let cwd = std::env::current_dir().map_err(DriverError::CurrentDir)?;
        let home = std::env::var_os("HOME").ok_or(DriverError::HomeNotSet)?;
        let home_config_include = PathBuf::from(home).join(".config").join(".cppc");

        Ok(Self {
            cwd,
            home_config_include,
        })
    }
}

/// One build invocation: an options value, the extra inputs accumulated by
/// the caller, and the host description. Constructed, populated, consumed
/// once, discarded.
#[derive(Debug, Clone)]
pub struct Session {
    options: Options,
    inputs: BuildInputs,
    host: HostEnvironment,
}

impl Session {
    pub fn new(options: Options, host: HostEnvironment) -> Self {
        Self {
            options,
            inputs: BuildInputs::default(),
            host,
        }
    }

    /// Session for the target a manifest describes.
    pub fn from_manifest(manifest: &BuildManifest, host: HostEnvironment) -> Self {
        Self {
            options: manifest.options(&host),
            inputs: manifest.inputs(),
            host,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Force an optimization profile, overriding the manifest's choice.
    pub fn set_optimize(&mut self, profile: Optimize) {
        self.options.optimize = profile;
    }

    pub fn add_include_dir(&mut self, dir: impl Into<PathBuf>) {
        self.inputs.include_dirs.push(dir.into());
    }

    pub fn add_source_file(&mut self, file: impl Into<PathBuf>) {
        self.inputs.source_files.push(file.into());
    }

    pub fn add_lib_dir(&mut self, dir: impl Into<PathBuf>) {
        self.inputs.lib_dirs.push(dir.into());
    }

    pub fn add_library(&mut self, lib: impl Into<String>) {
        self.inputs.libs.push(lib.into());
    }

    /// Render the shell command for this session's compiler invocation.
    pub fn command_line(&self) -> Result<String, DriverError> {
        Ok(render_command_line(&self.options, &self.inputs, &self.host)?)
    }

    /// Render the compilation database records for this session.
    pub fn compile_commands(
        &self,
        ctx: &SessionContext,
    ) -> Result<Vec<CompileCommand>, DriverError> {
        Ok(render_compilation_database(
            &self.options,
            &self.inputs,
            &self.host,
            &ctx.cwd,
            &ctx.home_config_include,
        )?)
    }

    /// Compile the target.
    ///
    /// The compilation database is written first; failing to write it is
    /// reported and the build continues, since the database only serves
    /// external tooling. The compiler itself failing is an error carrying
    /// its exit status.
    pub fn build(&self, ctx: &SessionContext, verbose: bool) -> Result<(), DriverError> {
        let records = self.compile_commands(ctx)?;
        let db_path = ctx.cwd.join(COMPILE_COMMANDS_FILE);
        if let Err(e) = write_compilation_database(&db_path, &records) {
            eprintln!("warning: {}", e);
        }

        let command = self.command_line()?;
        if verbose {
            println!("{}", command);
        }

        let status = run_shell(&command, &ctx.cwd)?;
        if !status.success() {
            return Err(DriverError::CompilerFailed { status });
        }
        Ok(())
    }

    /// Execute the binary produced by [`build`](Session::build).
    pub fn run(&self, ctx: &SessionContext) -> Result<(), DriverError> {
        let command = format!("./{}", self.options.name);
        let status = run_shell(&command, &ctx.cwd)?;
        if !status.success() {
            return Err(DriverError::TargetFailed {
                name: self.options.name.clone(),
                status,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cppc_build::{Diagnostic, Platform, Standard};
    use tempfile::TempDir;

    fn session() -> Session {
        let options = Options {
            name: "app".to_string(),
            root_source_file: "./src/main.cpp".into(),
            standard: Standard::Cpp23,
            diagnostics: vec![Diagnostic::DebugInfo],
            optimize: Optimize::Debug,
            target: Platform::Linux,
        };
        Session::new(options, HostEnvironment::new(Platform::Linux))
    }

    fn context(dir: &TempDir) -> SessionContext {
        SessionContext {
            cwd: dir.path().to_path_buf(),
            home_config_include: dir.path().join(".config/.cppc"),
        }
    }

    #[test]
    fn test_added_inputs_appear_in_order() {
        let mut session = session();
        session.add_include_dir("include");
        session.add_source_file("./src/util.cpp");
        session.add_lib_dir("./lib");
        session.add_library("pthread");

        let command = session.command_line().unwrap();
        assert_eq!(
            command,
            "g++ -g -O0 -std=c++23 -Iinclude -L./lib ./src/util.cpp ./src/main.cpp -o app -lpthread"
        );
    }

    #[test]
    fn test_set_optimize_overrides_profile() {
        let mut session = session();
        session.set_optimize(Optimize::Release);
        assert!(session.command_line().unwrap().contains("-O3"));
    }

    #[test]
    fn test_compile_commands_track_extra_sources() {
        let dir = TempDir::new().unwrap();
        let mut session = session();
        session.add_source_file("./src/util.cpp");

        let records = session.compile_commands(&context(&dir)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].directory, dir.path());
    }

    #[test]
    fn test_from_manifest_maps_all_fields() {
        let toml = r#"
[project]
name = "demo"

[target]
root = "./src/main.cpp"
std = "c++17"
diagnostics = ["wall"]
optimize = "embedded"
includes = ["include"]
libs = ["m"]
        "#;

        let manifest: BuildManifest = toml::from_str(toml).unwrap();
        let session = Session::from_manifest(&manifest, HostEnvironment::new(Platform::Linux));

        let command = session.command_line().unwrap();
        assert_eq!(
            command,
            "g++ -Wall -Os -std=c++17 -Iinclude ./src/main.cpp -o demo -lm"
        );
    }
}

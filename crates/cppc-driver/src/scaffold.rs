//! Project scaffolding for `cppc new`.

use std::fs;
use std::path::{Path, PathBuf};

use cppc_build::{BuildError, MANIFEST_FILE};

use crate::DriverError;

/// Entry-point template written to `<name>/src/main.cpp`.
const MAIN_CPP: &str = "#include<iostream>

int main() {
    std::cout << \"Hello World!\" << std::endl;

    return 0;
}
";

/// Create `<parent>/<name>/src/` with a hello-world entry point and a
/// manifest ready to compile. Returns the project root.
pub fn create_project(parent: &Path, name: &str) -> Result<PathBuf, DriverError> {
    if name.is_empty() {
        return Err(BuildError::Validation("project name is empty".to_string()).into());
    }

    let root = parent.join(name);
    let src = root.join("src");
    fs::create_dir_all(&src).map_err(|source| DriverError::Scaffold {
        path: src.clone(),
        source,
    })?;

    write_file(&src.join("main.cpp"), MAIN_CPP)?;
    write_file(&root.join(MANIFEST_FILE), &manifest_template(name))?;

    Ok(root)
}

/// Manifest template: the option set every fresh project starts from,
/// with the project's own name as the output binary name.
fn manifest_template(name: &str) -> String {
    format!(
        r#"[project]
name = "{name}"

[target]
root = "./src/main.cpp"
std = "c++23"
diagnostics = ["debug-info", "wall", "wextra", "pedantic"]
optimize = "debug"
"#
    )
}

fn write_file(path: &Path, content: &str) -> Result<(), DriverError> {
    fs::write(path, content).map_err(|source| DriverError::Scaffold {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cppc_build::{BuildManifest, HostEnvironment, Platform};
    use tempfile::TempDir;

    #[test]
    fn test_scaffold_creates_project_tree() {
        let dir = TempDir::new().unwrap();
        let root = create_project(dir.path(), "demo").unwrap();

        assert_eq!(root, dir.path().join("demo"));
        assert!(root.join("src/main.cpp").exists());
        assert!(root.join(MANIFEST_FILE).exists());

        let main_cpp = fs::read_to_string(root.join("src/main.cpp")).unwrap();
        assert!(main_cpp.contains("Hello World!"));
    }

    #[test]
    fn test_scaffolded_manifest_builds_a_command_line() {
        let dir = TempDir::new().unwrap();
        let root = create_project(dir.path(), "demo").unwrap();

        let manifest = BuildManifest::from_file(&root.join(MANIFEST_FILE)).unwrap();
        let host = HostEnvironment::new(Platform::Linux);
        let command =
            cppc_build::render_command_line(&manifest.options(&host), &manifest.inputs(), &host)
                .unwrap();

        assert_eq!(
            command,
            "g++ -g -Wall -Wextra -pedantic -O0 -std=c++23 ./src/main.cpp -o demo"
        );
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let dir = TempDir::new().unwrap();
        assert!(create_project(dir.path(), "").is_err());
    }
}

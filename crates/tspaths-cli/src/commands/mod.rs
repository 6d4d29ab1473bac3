pub mod mappings;
pub mod resolve;
pub mod version;

use miette::{IntoDiagnostic, Result, WrapErr};
use std::path::Path;
use tspaths_core::tsconfig::{discover_tsconfig, load_tsconfig, LoadedTsconfig};
use tspaths_core::Config;

/// Load the config named by `--project`, or discover one from the working directory.
///
/// A directory argument is searched for `tsconfig.json`. The returned config
/// path is always absolute.
pub fn load_project(config: &Config, project: Option<&Path>) -> Result<LoadedTsconfig> {
    let Some(project) = project else {
        let cwd = dunce::canonicalize(&config.cwd).into_diagnostic()?;
        return discover_tsconfig(&cwd).into_diagnostic();
    };

    let path = if project.is_absolute() {
        project.to_path_buf()
    } else {
        config.cwd.join(project)
    };
    let path = if path.is_dir() {
        path.join("tsconfig.json")
    } else {
        path
    };
    let path = dunce::canonicalize(&path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Cannot open project {}", path.display()))?;

    load_tsconfig(&path).into_diagnostic()
}

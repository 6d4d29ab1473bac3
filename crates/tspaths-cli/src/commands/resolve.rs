use super::load_project;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::Path;
use tspaths_core::version::OUTPUT_SCHEMA_VERSION;
use tspaths_core::Config;
use tspaths_util::path::{is_absolute, normalize_path, relative};
use tspaths_util::Platform;

/// Resolve output for JSON.
#[derive(Serialize)]
struct ResolveOutput {
    schema_version: u32,
    config: String,
    base_url: Option<String>,
    results: Vec<ResolveEntry>,
}

#[derive(Serialize)]
struct ResolveEntry {
    specifier: String,
    resolved: Option<String>,
}

/// Run the resolve command.
///
/// Every specifier goes through one resolver, so repeated specifiers hit its cache.
pub fn run(
    config: &Config,
    project: Option<&Path>,
    specifiers: &[String],
    relative_to_cwd: bool,
    json: bool,
) -> Result<()> {
    let tsconfig = load_project(config, project)?;
    let mut resolver = tsconfig
        .build_resolver(config.platform)
        .into_diagnostic()?;

    if !resolver.has_resolvers() {
        tracing::warn!(
            config = %tsconfig.path.display(),
            "config sets neither baseUrl nor paths"
        );
    }

    let cwd = normalize_path(&config.cwd.to_string_lossy(), config.platform);
    let results: Vec<ResolveEntry> = specifiers
        .iter()
        .map(|specifier| {
            let resolved = resolver.resolve(specifier).map(|path| {
                if relative_to_cwd {
                    display_relative(&cwd, &path, config.platform)
                } else {
                    path
                }
            });
            ResolveEntry {
                specifier: specifier.clone(),
                resolved,
            }
        })
        .collect();

    tracing::debug!(
        resolved = results.iter().filter(|r| r.resolved.is_some()).count(),
        total = results.len(),
        cached = resolver.cached_len(),
        "resolve finished"
    );

    if json {
        let output = ResolveOutput {
            schema_version: OUTPUT_SCHEMA_VERSION,
            config: tsconfig.path.display().to_string(),
            base_url: resolver.base_url().map(str::to_string),
            results,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).into_diagnostic()?
        );
    } else {
        for entry in &results {
            match &entry.resolved {
                Some(path) => println!("{} -> {}", entry.specifier, path),
                None => println!("{} (no mapping)", entry.specifier),
            }
        }
    }

    Ok(())
}

/// `path` relative to `cwd`, or `path` unchanged when they share no root.
///
/// `cwd` must be absolute and normalized; `main` canonicalizes it.
fn display_relative(cwd: &str, path: &str, platform: Platform) -> String {
    debug_assert!(is_absolute(cwd, platform), "cwd must be absolute: {cwd}");
    let cwd = cwd.trim_start_matches('/');
    let path_body = path.trim_start_matches('/');
    let same_root = match platform {
        Platform::Posix => true,
        Platform::Windows => {
            cwd.split('/').next().map(str::to_ascii_lowercase)
                == path_body.split('/').next().map(str::to_ascii_lowercase)
        }
    };
    if !same_root {
        return path.to_string();
    }

    let rel = relative(cwd, path_body);
    if rel.is_empty() {
        ".".to_string()
    } else {
        rel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_relative_posix() {
        assert_eq!(
            display_relative("/project", "/project/src/a.ts", Platform::Posix),
            "src/a.ts"
        );
        assert_eq!(
            display_relative("/project/app", "/project/lib/a", Platform::Posix),
            "../lib/a"
        );
        assert_eq!(display_relative("/project", "/project", Platform::Posix), ".");
    }

    #[test]
    fn test_display_relative_windows_drives() {
        assert_eq!(
            display_relative("C:/project", "C:/project/src/a", Platform::Windows),
            "src/a"
        );
        assert_eq!(
            display_relative("C:/project", "D:/other/a", Platform::Windows),
            "D:/other/a"
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "cwd must be absolute")]
    fn test_display_relative_rejects_relative_cwd() {
        display_relative("sub", "sub/src/a", Platform::Posix);
    }
}

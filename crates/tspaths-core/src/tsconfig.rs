//! `tsconfig.json` / `jsconfig.json` discovery and loading.
//!
//! Only `compilerOptions.baseUrl` and `compilerOptions.paths` are read; every
//! other option is ignored. The file may contain `//` and `/* */` comments
//! and trailing commas, as tsc accepts.
//!
//! ## Supported config format
//!
//! ```jsonc
//! {
//!   "compilerOptions": {
//!     "baseUrl": "./src", // relative to this file
//!     "paths": { "@/*": ["./*"] },
//!   },
//! }
//! ```
//!
//! `extends` is not followed.

use crate::error::{Error, Result};
use crate::options::CompilerOptions;
use crate::resolver::ResolveIdByPaths;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use tspaths_util::fs::{find_up, read_to_string_lossy};
use tspaths_util::Platform;

/// Config file names in priority order.
pub const CONFIG_FILES: &[&str] = &["tsconfig.json", "jsconfig.json"];

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    #[serde(default)]
    compiler_options: CompilerOptions,
}

/// A config file and the options it declares.
#[derive(Debug, Clone)]
pub struct LoadedTsconfig {
    /// Path of the file the options were read from.
    pub path: PathBuf,
    pub compiler_options: CompilerOptions,
}

impl LoadedTsconfig {
    /// The config path as a string, as the resolver expects it.
    pub fn config_file(&self) -> Result<&str> {
        self.path.to_str().ok_or_else(|| {
            Error::other(format!(
                "Config path is not valid UTF-8: {}",
                self.path.display()
            ))
        })
    }

    /// Build a resolver for this config.
    pub fn build_resolver(&self, platform: Platform) -> Result<ResolveIdByPaths> {
        ResolveIdByPaths::build(&self.compiler_options, self.config_file()?, platform)
    }
}

/// Find the nearest config file, walking up from `start`.
#[must_use]
pub fn find_tsconfig(start: &Path) -> Option<PathBuf> {
    find_up(start, CONFIG_FILES)
}

/// Load the nearest config file above `start`.
pub fn discover_tsconfig(start: &Path) -> Result<LoadedTsconfig> {
    let path = find_tsconfig(start).ok_or_else(|| Error::ConfigNotFound {
        start: start.to_path_buf(),
    })?;
    load_tsconfig(&path)
}

/// Load the config file at `path`.
pub fn load_tsconfig(path: &Path) -> Result<LoadedTsconfig> {
    let source = read_to_string_lossy(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let compiler_options = parse_tsconfig(&source).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        base_url = compiler_options.base_url.as_deref(),
        paths = compiler_options.paths.as_ref().map_or(0, |p| p.len()),
        "loaded tsconfig"
    );

    Ok(LoadedTsconfig {
        path: path.to_path_buf(),
        compiler_options,
    })
}

/// Parse config source into its `compilerOptions`.
pub fn parse_tsconfig(source: &str) -> serde_json::Result<CompilerOptions> {
    let stripped = strip_comments(source);
    let normalized = remove_trailing_commas(&stripped);
    let config: ConfigFile = serde_json::from_str(&normalized)?;
    Ok(config.compiler_options)
}

/// Strip `//` and `/* */` comments outside of strings.
///
/// Newlines inside comments are kept so serde's line numbers still point at
/// the original source.
fn strip_comments(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    let chars: Vec<char> = source.chars().collect();
    let len = chars.len();
    let mut i = 0;
    let mut in_string = false;

    while i < len {
        let ch = chars[i];
        if in_string {
            result.push(ch);
            if ch == '\\' && i + 1 < len {
                result.push(chars[i + 1]);
                i += 2;
                continue;
            }
            if ch == '"' {
                in_string = false;
            }
            i += 1;
        } else if ch == '/' && i + 1 < len && chars[i + 1] == '/' {
            while i < len && chars[i] != '\n' {
                i += 1;
            }
        } else if ch == '/' && i + 1 < len && chars[i + 1] == '*' {
            i += 2;
            while i < len && !(chars[i] == '*' && i + 1 < len && chars[i + 1] == '/') {
                if chars[i] == '\n' {
                    result.push('\n');
                }
                i += 1;
            }
            i += 2; // skip */
        } else {
            if ch == '"' {
                in_string = true;
            }
            result.push(ch);
            i += 1;
        }
    }

    result
}

/// Drop commas that directly precede `}` or `]`, outside of strings.
fn remove_trailing_commas(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    let chars: Vec<char> = source.chars().collect();
    let mut in_string = false;
    let mut escape = false;

    for (i, &ch) in chars.iter().enumerate() {
        if in_string {
            result.push(ch);
            if escape {
                escape = false;
            } else if ch == '\\' {
                escape = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        if ch == ',' {
            let next = chars[i + 1..].iter().find(|c| !c.is_whitespace());
            if matches!(next, Some('}' | ']')) {
                continue;
            }
        }

        if ch == '"' {
            in_string = true;
        }
        result.push(ch);
    }

    result
}

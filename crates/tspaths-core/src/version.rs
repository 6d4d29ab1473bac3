//! Build identity reported by `tspaths version`.

use serde::Serialize;

/// Crate version baked in by Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git revision, when the build environment exports `TSPATHS_BUILD_GIT_HASH`.
pub const GIT_HASH: Option<&str> = option_env!("TSPATHS_BUILD_GIT_HASH");

/// Shape version of every `--json` document the CLI prints.
///
/// Renaming or removing a field requires a bump; adding one does not.
pub const OUTPUT_SCHEMA_VERSION: u32 = 1;

/// Machine-readable build identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub schema_version: u32,
    pub version: &'static str,
    pub git_hash: Option<&'static str>,
}

impl VersionInfo {
    #[must_use]
    pub const fn current() -> Self {
        Self {
            schema_version: OUTPUT_SCHEMA_VERSION,
            version: VERSION,
            git_hash: GIT_HASH,
        }
    }
}

impl std::fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tspaths {}", self.version)?;
        if let Some(hash) = self.git_hash {
            write!(f, " ({hash})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_and_without_hash() {
        let mut info = VersionInfo {
            schema_version: 1,
            version: "1.2.3",
            git_hash: None,
        };
        assert_eq!(info.to_string(), "tspaths 1.2.3");

        info.git_hash = Some("abc1234");
        assert_eq!(info.to_string(), "tspaths 1.2.3 (abc1234)");
    }

    #[test]
    fn test_current_matches_cargo_metadata() {
        let info = VersionInfo::current();
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(info.schema_version, OUTPUT_SCHEMA_VERSION);
        assert!(info.to_string().starts_with("tspaths "));
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(VersionInfo {
            schema_version: 1,
            version: "0.2.0",
            git_hash: None,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "schema_version": 1, "version": "0.2.0", "git_hash": null })
        );
    }
}

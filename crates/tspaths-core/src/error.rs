use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tspaths.
///
/// Only construction can fail: loading a config file or compiling its
/// `paths` table. Lookups against a built resolver never return an error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read config at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No tsconfig.json or jsconfig.json found from {start}")]
    ConfigNotFound { start: PathBuf },

    /// Keys are escaped before compiling, so this only surfaces if the regex
    /// engine itself rejects the escaped pattern.
    #[error("Invalid paths pattern '{key}': {source}")]
    InvalidPattern {
        key: String,
        #[source]
        source: regex_lite::Error,
    },

    #[error("{0}")]
    Other(String),
}

impl Error {
    #[must_use]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// Result alias for fallible construction-time operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_display() {
        let source = regex_lite::Regex::new("(").unwrap_err();
        let err = Error::InvalidPattern {
            key: "@/(*".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Invalid paths pattern '@/(*': "));
    }

    #[test]
    fn test_config_not_found_display() {
        let err = Error::ConfigNotFound {
            start: PathBuf::from("/project/src"),
        };
        assert_eq!(
            err.to_string(),
            "No tsconfig.json or jsconfig.json found from /project/src"
        );
    }
}

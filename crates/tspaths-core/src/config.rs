use std::path::PathBuf;
use tspaths_util::Platform;

/// Runtime configuration for the tspaths CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Current working directory.
    pub cwd: PathBuf,

    /// Whether to emit JSON logs.
    pub json_logs: bool,

    /// Verbosity level (0 = INFO, 1 = DEBUG, 2+ = TRACE).
    pub verbosity: u8,

    /// Path convention used by every resolver built under this config.
    pub platform: Platform,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            json_logs: false,
            verbosity: 0,
            platform: Platform::host(),
        }
    }
}

impl Config {
    /// Create a new config with the given working directory.
    #[must_use]
    pub fn new(cwd: PathBuf) -> Self {
        Self {
            cwd,
            ..Default::default()
        }
    }

    /// Set verbosity level.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set JSON log output.
    #[must_use]
    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.json_logs = json;
        self
    }

    /// Override the path convention.
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_setters() {
        let config = Config::new(PathBuf::from("/project"))
            .with_verbosity(2)
            .with_json_logs(true)
            .with_platform(Platform::Windows);

        assert_eq!(config.cwd, PathBuf::from("/project"));
        assert_eq!(config.verbosity, 2);
        assert!(config.json_logs);
        assert_eq!(config.platform, Platform::Windows);
    }

    #[test]
    fn test_default_platform_is_host() {
        assert_eq!(Config::default().platform, Platform::host());
    }
}

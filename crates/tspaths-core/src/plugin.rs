//! Bundler plugin interface and the tsconfig-paths plugin.
//!
//! Provides a Rollup-compatible `resolve_id` hook so a bundler can consult
//! tsconfig path mapping before its own resolution.
//!
//! ## Example
//!
//! ```ignore
//! use tspaths_core::plugin::{Plugin, TsconfigPathsPlugin};
//! use tspaths_core::tsconfig::discover_tsconfig;
//!
//! let config = discover_tsconfig(&cwd)?;
//! let paths = TsconfigPathsPlugin::from_tsconfig(&config, Platform::host())?;
//!
//! match paths.resolve_id("@/components/Button", Some("/project/src/main.ts"))? {
//!     Some(result) => load(&result.id),
//!     None => default_resolve("@/components/Button"),
//! }
//! ```

use crate::error::Result;
use crate::resolver::{is_relative, ResolveIdByPaths};
use crate::tsconfig::LoadedTsconfig;
use std::sync::Mutex;
use tracing::trace;
use tspaths_util::Platform;

/// Result type for plugin hooks.
pub type HookResult<T> = std::result::Result<T, PluginError>;

/// Error from a plugin.
#[derive(Debug)]
pub struct PluginError {
    /// Plugin name that caused the error.
    pub plugin: String,
    /// Hook that failed.
    pub hook: &'static str,
    /// Error message.
    pub message: String,
}

impl std::fmt::Display for PluginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.plugin, self.hook, self.message)
    }
}

impl std::error::Error for PluginError {}

/// Result of resolve hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveIdResult {
    /// Resolved module ID (usually a file path).
    pub id: String,
}

impl ResolveIdResult {
    /// Create a resolved module result.
    pub fn resolved(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A bundler plugin.
pub trait Plugin: Send + Sync {
    /// Plugin name for debugging and error messages.
    fn name(&self) -> &str;

    /// Resolve a module specifier to an ID.
    ///
    /// Return `Some(result)` to handle this resolution, or `None` to let
    /// the next plugin or default resolver handle it.
    fn resolve_id(
        &self,
        _specifier: &str,
        _importer: Option<&str>,
    ) -> HookResult<Option<ResolveIdResult>> {
        Ok(None)
    }
}

/// Resolves bare specifiers through tsconfig `paths` and `baseUrl`.
///
/// Relative specifiers are left to the bundler. The resolver's cache is not
/// synchronized, so it sits behind a lock here.
pub struct TsconfigPathsPlugin {
    resolver: Mutex<ResolveIdByPaths>,
}

impl TsconfigPathsPlugin {
    /// Wrap a built resolver.
    pub fn new(resolver: ResolveIdByPaths) -> Self {
        Self {
            resolver: Mutex::new(resolver),
        }
    }

    /// Build from a loaded config file.
    pub fn from_tsconfig(config: &LoadedTsconfig, platform: Platform) -> Result<Self> {
        Ok(Self::new(config.build_resolver(platform)?))
    }
}

impl Plugin for TsconfigPathsPlugin {
    fn name(&self) -> &str {
        "tsconfig-paths"
    }

    fn resolve_id(
        &self,
        specifier: &str,
        importer: Option<&str>,
    ) -> HookResult<Option<ResolveIdResult>> {
        if is_relative(specifier) {
            return Ok(None);
        }

        let mut resolver = self.resolver.lock().map_err(|_| PluginError {
            plugin: self.name().to_string(),
            hook: "resolve_id",
            message: "resolver lock poisoned".to_string(),
        })?;

        let resolved = resolver.resolve(specifier);
        trace!(specifier, importer, resolved = resolved.as_deref(), "tsconfig-paths");
        Ok(resolved.map(ResolveIdResult::resolved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CompilerOptions;

    fn plugin(options: &CompilerOptions) -> TsconfigPathsPlugin {
        TsconfigPathsPlugin::new(
            ResolveIdByPaths::build(options, "/project/tsconfig.json", Platform::Posix).unwrap(),
        )
    }

    /// Resolves everything to `/fallback/<specifier>`.
    struct FallbackPlugin;

    impl Plugin for FallbackPlugin {
        fn name(&self) -> &str {
            "fallback"
        }

        fn resolve_id(
            &self,
            specifier: &str,
            _importer: Option<&str>,
        ) -> HookResult<Option<ResolveIdResult>> {
            Ok(Some(ResolveIdResult::resolved(format!("/fallback/{specifier}"))))
        }
    }

    #[test]
    fn test_tsconfig_paths_plugin_resolves_alias() {
        let plugin = plugin(&CompilerOptions::new().with_path("@/*", ["./src/*"]));

        let result = plugin
            .resolve_id("@/components/Button", Some("/project/src/main.ts"))
            .unwrap();
        assert_eq!(result.unwrap().id, "/project/src/components/Button");
    }

    #[test]
    fn test_tsconfig_paths_plugin_skips_relative() {
        let plugin = plugin(&CompilerOptions::new().with_base_url("."));

        for specifier in ["./a", "../b", ".", ".."] {
            assert!(plugin.resolve_id(specifier, None).unwrap().is_none());
        }
        // Non-relative ids still resolve against baseUrl.
        let result = plugin.resolve_id("lib/a.js", None).unwrap();
        assert_eq!(result.unwrap().id, "/project/lib/a.js");
    }

    #[test]
    fn test_tsconfig_paths_plugin_no_opinion() {
        let plugin = plugin(&CompilerOptions::new().with_path("@/*", ["./src/*"]));

        assert!(plugin.resolve_id("react", None).unwrap().is_none());
        assert!(plugin.resolve_id("/abs/file.ts", None).unwrap().is_none());
        assert!(plugin.resolve_id("\0virtual:x", None).unwrap().is_none());
    }

    #[test]
    fn test_unmapped_ids_fall_through_to_next_plugin() {
        let plugins: Vec<Box<dyn Plugin>> = vec![
            Box::new(plugin(&CompilerOptions::new().with_path("@/*", ["./src/*"]))),
            Box::new(FallbackPlugin),
        ];
        let resolve = |specifier: &str| {
            plugins
                .iter()
                .find_map(|p| p.resolve_id(specifier, None).unwrap())
                .map(|r| r.id)
        };

        assert_eq!(resolve("@/util").as_deref(), Some("/project/src/util"));
        assert_eq!(resolve("react").as_deref(), Some("/fallback/react"));
    }

    #[test]
    fn test_plugin_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TsconfigPathsPlugin>();
    }

    #[test]
    fn test_plugin_error_display() {
        let err = PluginError {
            plugin: "tsconfig-paths".to_string(),
            hook: "resolve_id",
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "[tsconfig-paths] resolve_id: boom");
    }
}

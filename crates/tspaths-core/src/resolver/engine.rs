//! Builds the resolver chain for one tsconfig and runs lookups through it.

use super::cache::ResolutionCache;
use super::mappings::{resolve_path_mappings, MappingSummary, PathMapping};
use super::specifier::is_virtual_module;
use super::strategy::{BaseUrlResolver, PathsResolver, PathsWithBaseUrl, ResolveId};
use crate::error::Result;
use crate::options::CompilerOptions;
use std::fmt;
use tracing::{debug, trace};
use tspaths_util::path::{dirname, is_absolute, resolve};
use tspaths_util::Platform;

/// Outcome of one resolver for one specifier.
///
/// `claimed` means this resolver owns the verdict, even when `path` is `None`:
/// later resolvers must not be consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub path: Option<String>,
    pub claimed: bool,
}

impl Resolution {
    /// Ours, with or without a path.
    #[must_use]
    pub fn claimed(path: Option<String>) -> Self {
        Self {
            path,
            claimed: true,
        }
    }
}

/// One strategy plus its virtual-module guard and cache.
pub struct MappingResolver {
    strategy: Box<dyn ResolveId>,
    cache: ResolutionCache,
}

impl fmt::Debug for MappingResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingResolver")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl MappingResolver {
    #[must_use]
    pub fn new(strategy: Box<dyn ResolveId>) -> Self {
        Self {
            strategy,
            cache: ResolutionCache::new(),
        }
    }

    /// Resolve `id`, serving repeats from the cache.
    ///
    /// Virtual modules are claimed without a path and never cached. Every
    /// other id is claimed; misses are recomputed on each call.
    pub fn resolve(&mut self, id: &str) -> Resolution {
        if is_virtual_module(id) {
            trace!(id = %id.escape_debug(), "virtual module, skipping");
            return Resolution::claimed(None);
        }

        if let Some(path) = self.cache.get(id) {
            trace!(id, path, "cache hit");
            return Resolution::claimed(Some(path.to_string()));
        }

        let path = self.strategy.resolve_id(id);
        if let Some(path) = &path {
            self.cache.insert(id, path);
        }
        Resolution::claimed(path)
    }

    /// Number of cached resolutions.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

/// Resolves import specifiers through a tsconfig's `paths` and `baseUrl`.
///
/// ## Example
///
/// ```
/// use tspaths_core::{CompilerOptions, ResolveIdByPaths};
/// use tspaths_util::Platform;
///
/// let options = CompilerOptions::new().with_path("@/*", ["./src/*"]);
/// let mut resolver =
///     ResolveIdByPaths::build(&options, "/project/tsconfig.json", Platform::Posix).unwrap();
///
/// assert_eq!(
///     resolver.resolve("@/components/Button").as_deref(),
///     Some("/project/src/components/Button")
/// );
/// assert_eq!(resolver.resolve("react"), None);
/// ```
#[derive(Debug)]
pub struct ResolveIdByPaths {
    resolvers: Vec<MappingResolver>,
    platform: Platform,
    base_url: Option<String>,
    mappings: Vec<MappingSummary>,
}

impl ResolveIdByPaths {
    /// Build the resolver for the options declared in `config_file`.
    ///
    /// `baseUrl` is anchored to the directory of `config_file`. Templates are
    /// anchored to `baseUrl` when set, otherwise to that same directory. With
    /// neither `baseUrl` nor `paths` the chain is empty and every lookup
    /// returns `None`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidPattern`] if a `paths` key cannot be compiled.
    pub fn build(
        options: &CompilerOptions,
        config_file: &str,
        platform: Platform,
    ) -> Result<Self> {
        let config_dir = dirname(config_file, platform);
        let base_url = options
            .base_url
            .as_deref()
            .filter(|base_url| !base_url.is_empty())
            .map(|base_url| resolve(&config_dir, base_url, platform));

        let mut mappings = Vec::new();
        let strategy: Option<Box<dyn ResolveId>> = match (&options.paths, &base_url) {
            (None, None) => None,
            (None, Some(base_url)) => Some(Box::new(BaseUrlResolver::new(base_url.clone()))),
            (Some(paths), base_url) => {
                let base_dir = base_url.as_deref().unwrap_or(&config_dir);
                let compiled = resolve_path_mappings(paths, base_dir, platform)?;
                mappings = compiled.iter().map(PathMapping::summary).collect();

                let paths = PathsResolver::new(compiled);
                let strategy: Box<dyn ResolveId> = match base_url {
                    Some(base_url) => Box::new(PathsWithBaseUrl::new(
                        paths,
                        BaseUrlResolver::new(base_url.clone()),
                    )),
                    None => Box::new(paths),
                };
                Some(strategy)
            }
        };

        debug!(
            config_file,
            base_url = base_url.as_deref(),
            mappings = mappings.len(),
            enabled = strategy.is_some(),
            "built paths resolver"
        );

        Ok(Self {
            resolvers: strategy.into_iter().map(MappingResolver::new).collect(),
            platform,
            base_url,
            mappings,
        })
    }

    /// Chain pre-built resolvers, consulted in order.
    #[must_use]
    pub fn from_resolvers(resolvers: Vec<MappingResolver>, platform: Platform) -> Self {
        Self {
            resolvers,
            platform,
            base_url: None,
            mappings: Vec::new(),
        }
    }

    /// Resolve `id`, or `None` to fall through to default resolution.
    ///
    /// Absolute ids bypass the chain. The first resolver that returns a path
    /// or claims the id decides the result.
    pub fn resolve(&mut self, id: &str) -> Option<String> {
        if is_absolute(id, self.platform) {
            return None;
        }

        for resolver in &mut self.resolvers {
            let Resolution { path, claimed } = resolver.resolve(id);
            if path.is_some() || claimed {
                return path;
            }
        }
        None
    }

    /// Whether any resolver was built.
    #[must_use]
    pub fn has_resolvers(&self) -> bool {
        !self.resolvers.is_empty()
    }

    /// Anchored `baseUrl`, if one was configured.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Compiled `paths` entries in match order.
    #[must_use]
    pub fn mappings(&self) -> &[MappingSummary] {
        &self.mappings
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Total cached resolutions across the chain.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.resolvers.iter().map(MappingResolver::cached_len).sum()
    }
}

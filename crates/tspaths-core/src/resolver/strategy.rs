//! Single-specifier resolution strategies.
//!
//! A strategy maps one specifier to a path or to nothing. Caching and the
//! virtual-module guard live one layer up in [`super::MappingResolver`].

use super::mappings::PathMapping;
use super::specifier::is_package_name;
use tracing::trace;
use tspaths_util::path::join;

/// Resolve one specifier. `None` means this strategy has no path for it.
pub trait ResolveId: Send + Sync {
    fn resolve_id(&self, id: &str) -> Option<String>;
}

impl<F> ResolveId for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn resolve_id(&self, id: &str) -> Option<String> {
        self(id)
    }
}

/// Joins every specifier onto `baseUrl`.
#[derive(Debug, Clone)]
pub struct BaseUrlResolver {
    base_url: String,
}

impl BaseUrlResolver {
    /// `base_url` must already be normalized.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ResolveId for BaseUrlResolver {
    fn resolve_id(&self, id: &str) -> Option<String> {
        Some(join(&self.base_url, id))
    }
}

/// Tries each compiled `paths` entry in declaration order.
#[derive(Debug, Clone)]
pub struct PathsResolver {
    mappings: Vec<PathMapping>,
}

impl PathsResolver {
    #[must_use]
    pub fn new(mappings: Vec<PathMapping>) -> Self {
        Self { mappings }
    }

    #[must_use]
    pub fn mappings(&self) -> &[PathMapping] {
        &self.mappings
    }
}

impl ResolveId for PathsResolver {
    fn resolve_id(&self, id: &str) -> Option<String> {
        self.mappings.iter().find_map(|mapping| {
            let mapped = mapping.apply(id)?;
            trace!(id, key = mapping.key(), path = %mapped, "paths entry matched");
            Some(mapped)
        })
    }
}

/// `paths` first, then `baseUrl` for specifiers that are not package names.
///
/// Package names must be mapped explicitly; joining `lodash` onto `baseUrl`
/// would shadow the real dependency.
#[derive(Debug, Clone)]
pub struct PathsWithBaseUrl {
    paths: PathsResolver,
    base_url: BaseUrlResolver,
}

impl PathsWithBaseUrl {
    #[must_use]
    pub fn new(paths: PathsResolver, base_url: BaseUrlResolver) -> Self {
        Self { paths, base_url }
    }
}

impl ResolveId for PathsWithBaseUrl {
    fn resolve_id(&self, id: &str) -> Option<String> {
        let resolved = self.paths.resolve_id(id);
        if resolved.is_some() {
            return resolved;
        }

        if is_package_name(id) {
            trace!(id, "package name, skipping baseUrl fallback");
            return None;
        }

        trace!(id, base_url = self.base_url.base_url(), "falling back to baseUrl");
        self.base_url.resolve_id(id)
    }
}

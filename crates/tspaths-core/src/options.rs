//! The subset of `compilerOptions` that drives path mapping.

use indexmap::IndexMap;
use serde::Deserialize;

/// Raw `paths` table: key pattern to replacement templates, in declaration order.
pub type PathsMap = IndexMap<String, Vec<String>>;

/// `baseUrl` and `paths` as declared in a tsconfig/jsconfig file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    /// Absolute, or relative to the directory of the declaring config file.
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub paths: Option<PathsMap>,
}

impl CompilerOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `baseUrl`.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Append a `paths` entry, creating the table if needed.
    #[must_use]
    pub fn with_path<I, S>(mut self, key: impl Into<String>, templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths
            .get_or_insert_with(PathsMap::new)
            .insert(key.into(), templates.into_iter().map(Into::into).collect());
        self
    }

    /// Whether neither `baseUrl` nor `paths` is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.base_url.as_deref().map_or(true, str::is_empty) && self.paths.is_none()
    }
}

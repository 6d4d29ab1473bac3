//! Per-resolver memo of successful resolutions.

use rustc_hash::FxHashMap as HashMap;

/// Specifier to resolved path. Only hits are stored.
///
/// Owned by a single resolver and dropped with it; there is no eviction.
/// Not synchronized: callers sharing a resolver across threads must lock it.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: HashMap<String, String>,
}

impl ResolutionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn insert(&mut self, id: &str, path: &str) {
        self.entries.insert(id.to_string(), path.to_string());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

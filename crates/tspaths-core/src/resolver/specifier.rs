//! Syntactic classification of import specifiers.

/// Marker embedded in ids of synthetic, non-filesystem modules.
pub const VIRTUAL_MODULE_MARKER: char = '\0';

/// Whether `id` names a virtual module (contains `\0`).
#[must_use]
pub fn is_virtual_module(id: &str) -> bool {
    id.contains(VIRTUAL_MODULE_MARKER)
}

/// Whether `id` looks like a package name rather than a local path.
///
/// Scoped ids (`@scope/pkg`) are packages. Otherwise any `.` anywhere in the
/// id makes it a path, so `lodash` and `utils/helper` are packages while
/// `utils/helper.js` and `lodash.merge` are not. No filesystem or registry
/// lookup is involved.
#[must_use]
pub fn is_package_name(id: &str) -> bool {
    id.starts_with('@') || !id.contains('.')
}

/// Whether `id` is relative to its importer (`.`, `..`, `./x`, `../x`).
#[must_use]
pub fn is_relative(id: &str) -> bool {
    id == "." || id == ".." || id.starts_with("./") || id.starts_with("../")
}

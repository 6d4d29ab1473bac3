//! Path-mapping resolver for tsconfig `paths` and `baseUrl`.
//!
//! Compiles the `paths` table once, then answers lookups for bare
//! specifiers: first matching `paths` entry, else `baseUrl` for specifiers
//! that do not look like package names. Results are alias substitutions,
//! never checked against the filesystem.

mod cache;
mod engine;
mod mappings;
mod specifier;
mod strategy;

pub use cache::ResolutionCache;
pub use engine::{MappingResolver, Resolution, ResolveIdByPaths};
pub use mappings::{resolve_path_mappings, MappingSummary, PathMapping, WILDCARD};
pub use specifier::{is_package_name, is_relative, is_virtual_module, VIRTUAL_MODULE_MARKER};
pub use strategy::{BaseUrlResolver, PathsResolver, PathsWithBaseUrl, ResolveId};
